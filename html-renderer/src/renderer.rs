//! FILENAME: html-renderer/src/renderer.rs
//! PURPOSE: Entry point turning analytics results into HTML tables.
//! CONTEXT: Pivot tables need a result ordered by its dimensions. In `Auto`
//! mode a result that is not ordered that way is shown as a flat table.

use std::str::FromStr;
use std::sync::Arc;

use analytics_model::{AnalyticsResult, FrontendError, ModelError, VALUES_DIMENSION};
use formatter::Formatters;
use pivot_engine::{PivotError, PivotTableTransformer, ResultSetToTableTransformer, Table};

use crate::error::RenderError;
use crate::theme::{Bootstrap5Theme, Theme};
use crate::visitor::HtmlRendererVisitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Pivot table when possible, flat table otherwise.
    #[default]
    Auto,
    PivotTable,
    Table,
}

impl FromStr for OutputType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputType::Auto),
            "pivot" | "pivotTable" | "pivot_table" => Ok(OutputType::PivotTable),
            "table" => Ok(OutputType::Table),
            _ => Err(RenderError::UnknownOutputType(s.to_string())),
        }
    }
}

pub struct TableRenderer {
    formatters: Formatters,
    theme: Arc<dyn Theme>,
    transformer: PivotTableTransformer,
}

impl TableRenderer {
    pub fn new(formatters: Formatters) -> Self {
        Self::with_theme(formatters, Arc::new(Bootstrap5Theme))
    }

    pub fn with_theme(formatters: Formatters, theme: Arc<dyn Theme>) -> Self {
        TableRenderer {
            formatters,
            theme,
            transformer: PivotTableTransformer::new(),
        }
    }

    /// Dimensions shown as columns unless the caller says otherwise.
    pub fn default_pivoted() -> Vec<String> {
        vec![VALUES_DIMENSION.to_string()]
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    pub fn render(
        &self,
        result: &AnalyticsResult,
        output_type: OutputType,
        pivoted: &[String],
    ) -> Result<String, FrontendError> {
        let table = match output_type {
            OutputType::Auto => match self.pivot_table(result, pivoted) {
                Err(RenderError::Model(ModelError::HierarchicalOrderingRequired)) => {
                    log::debug!("result is not ordered hierarchically, rendering a flat table");
                    self.flat_table(result)
                }
                other => other,
            },
            OutputType::PivotTable => self.pivot_table(result, pivoted),
            OutputType::Table => self.flat_table(result),
        }
        .map_err(FrontendError::wrap)?;

        Ok(self.to_html(&table, self.theme.as_ref()))
    }

    pub fn render_pivot_table(
        &self,
        result: &AnalyticsResult,
        pivoted: &[String],
        theme: Option<&dyn Theme>,
    ) -> Result<String, FrontendError> {
        let table = self.pivot_table(result, pivoted).map_err(FrontendError::wrap)?;
        Ok(self.to_html(&table, theme.unwrap_or(self.theme.as_ref())))
    }

    pub fn render_table(&self, result: &AnalyticsResult, theme: Option<&dyn Theme>) -> Result<String, FrontendError> {
        let table = self.flat_table(result).map_err(FrontendError::wrap)?;
        Ok(self.to_html(&table, theme.unwrap_or(self.theme.as_ref())))
    }

    /// Like `render`, with failures shown as the theme's error block.
    pub fn render_or_error(&self, result: &AnalyticsResult, output_type: OutputType, pivoted: &[String]) -> String {
        match self.render(result, output_type, pivoted) {
            Ok(html) => html,
            Err(error) => self.render_error(&error),
        }
    }

    pub fn render_error(&self, error: &FrontendError) -> String {
        self.theme.error(&error.trans(self.formatters.translator().as_ref()))
    }

    fn pivot_table(&self, result: &AnalyticsResult, pivoted: &[String]) -> Result<Table, RenderError> {
        let tree = result.tree()?;
        let superfluous = [VALUES_DIMENSION.to_string()];
        Ok(self.transformer.transform_tree_to_table(&tree, pivoted, &superfluous)?)
    }

    fn flat_table(&self, result: &AnalyticsResult) -> Result<Table, RenderError> {
        ResultSetToTableTransformer::transform(result.table()).map_err(|e| match e {
            PivotError::Model(inner) => RenderError::Model(inner),
            other => RenderError::Pivot(other),
        })
    }

    fn to_html(&self, table: &Table, theme: &dyn Theme) -> String {
        let mut visitor = HtmlRendererVisitor::new(theme, self.formatters.htmlifier());
        table.accept(&mut visitor)
    }
}
