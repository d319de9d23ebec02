//! FILENAME: frontend/src/lib.rs
//! PURPOSE: One entry point for charts, HTML tables and spreadsheets.
//! CONTEXT: Every operation returns `FrontendError` on failure, whose
//! message is safe to show to end users.

pub mod config;

use std::sync::Arc;

use analytics_model::{AnalyticsResult, CatalogTranslator, Cube, FrontendError, Translator};
use chart_engine::{Chart, ChartBuilder, ChartGenerator, ChartType, DefaultChartGenerator};
use formatter::{Formatters, FormattersBuilder};
use html_renderer::{theme_by_name, OutputType, TableRenderer, Theme};
use spreadsheet::{SpreadsheetRenderer, Workbook};

pub use config::{ConfigError, FrontendConfig};

pub struct Frontend {
    formatters: Formatters,
    charts: DefaultChartGenerator,
    tables: TableRenderer,
    spreadsheets: SpreadsheetRenderer,
}

impl Frontend {
    pub fn new(config: FrontendConfig) -> Result<Self, ConfigError> {
        Self::with_formatters(config, |builder| builder)
    }

    /// Lets the caller add converters for its own value types before the
    /// built-in ones.
    pub fn with_formatters<F>(config: FrontendConfig, customize: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(FormattersBuilder) -> FormattersBuilder,
    {
        let translator: Arc<dyn Translator> =
            Arc::new(CatalogTranslator::with_catalogs(config.locale.clone(), config.catalogs));
        let formatters = customize(Formatters::builder(translator)).build();
        let theme: Arc<dyn Theme> = Arc::from(theme_by_name(&config.theme)?);

        log::debug!(
            "frontend ready: locale '{}', theme '{}'",
            config.locale,
            theme.name()
        );

        Ok(Frontend {
            charts: DefaultChartGenerator::with_configuration(formatters.clone(), config.chart),
            tables: TableRenderer::with_theme(formatters.clone(), theme),
            spreadsheets: SpreadsheetRenderer::new(formatters.clone()),
            formatters,
        })
    }

    pub fn formatters(&self) -> &Formatters {
        &self.formatters
    }

    pub fn create_chart(&self, result: &AnalyticsResult, chart_type: ChartType) -> Result<Chart, FrontendError> {
        self.charts
            .create_chart(result, chart_type)
            .map_err(FrontendError::wrap)
    }

    pub fn create_chart_from_cube(
        &self,
        cube: &Cube,
        dimensions: &[String],
        measures: &[String],
        chart_type: ChartType,
    ) -> Result<Chart, FrontendError> {
        self.charts
            .create_chart_from_cube(cube, dimensions, measures, chart_type)
            .map_err(FrontendError::wrap)
    }

    /// HTML table with the measures as columns.
    pub fn render(&self, result: &AnalyticsResult, output_type: OutputType) -> Result<String, FrontendError> {
        self.tables
            .render(result, output_type, &TableRenderer::default_pivoted())
    }

    /// HTML table with `pivoted` dimensions as columns.
    pub fn render_pivoted(
        &self,
        result: &AnalyticsResult,
        output_type: OutputType,
        pivoted: &[String],
    ) -> Result<String, FrontendError> {
        self.tables.render(result, output_type, pivoted)
    }

    /// HTML table, or the theme's error block when rendering fails.
    pub fn render_or_error(&self, result: &AnalyticsResult, output_type: OutputType) -> String {
        self.tables
            .render_or_error(result, output_type, &TableRenderer::default_pivoted())
    }

    /// Flat spreadsheet of the whole cube.
    pub fn render_spreadsheet(
        &self,
        cube: &Cube,
        dimensions: &[String],
        measures: &[String],
    ) -> Result<Workbook, FrontendError> {
        self.spreadsheets.render(&cube.apex(), dimensions, measures)
    }

    pub fn render_pivot_spreadsheet(
        &self,
        result: &AnalyticsResult,
        measures: &[String],
        rows: &[String],
        columns: &[String],
    ) -> Result<Workbook, FrontendError> {
        self.spreadsheets
            .render_pivot_table(result, measures, rows, columns)
    }

    /// The error's message in the configured locale.
    pub fn trans(&self, error: &FrontendError) -> String {
        error.trans(self.formatters.translator().as_ref())
    }
}
