//! FILENAME: chart-engine/src/generator.rs
//! PURPOSE: Shapes analytics results into chart documents.
//! CONTEXT: The chart type follows the number of dimensions of the result:
//! - one dimension: bar, line (when the members form a sequence) or pie
//! - two dimensions: grouped bar, stacked bar or multi-line
//!
//! Only measures sharing the first measure's unit are plotted together.

use std::cmp::Ordering;

use analytics_model::{AnalyticsResult, Cube, Dimension, Measure, Measures, ModelError, TreeNode, Tuple, Value};
use formatter::Formatters;
use indexmap::IndexMap;
use serde_json::json;

use crate::chart::{Chart, ChartData, ChartKind, ChartType, Dataset, Paint};
use crate::color::ColorDispenser;
use crate::configuration::ChartConfiguration;
use crate::error::ChartError;

/// Builds a chart from a flat query result.
pub trait ChartBuilder {
    fn create_chart(&self, result: &AnalyticsResult, chart_type: ChartType) -> Result<Chart, ChartError>;
}

/// Builds a chart from a cube by projecting it onto the requested
/// dimensions and measures first.
pub trait ChartGenerator: ChartBuilder {
    fn create_chart_from_cube(
        &self,
        cube: &Cube,
        dimensions: &[String],
        measures: &[String],
        chart_type: ChartType,
    ) -> Result<Chart, ChartError> {
        let result = cube.project(dimensions, measures)?;
        self.create_chart(&result, chart_type)
    }
}

pub struct DefaultChartGenerator {
    formatters: Formatters,
    configuration: ChartConfiguration,
}

impl DefaultChartGenerator {
    pub fn new(formatters: Formatters) -> Self {
        Self::with_configuration(formatters, ChartConfiguration::default())
    }

    pub fn with_configuration(formatters: Formatters, configuration: ChartConfiguration) -> Self {
        DefaultChartGenerator {
            formatters,
            configuration,
        }
    }

    pub fn configuration(&self) -> &ChartConfiguration {
        &self.configuration
    }

    fn locale(&self) -> &str {
        self.formatters.translator().locale()
    }

    fn text(&self, value: &Value) -> String {
        self.formatters.stringifier().to_text(value)
    }

    fn number(&self, value: &Value) -> Result<f64, ChartError> {
        Ok(self.formatters.numberifier().to_number(value)?)
    }

    /// `{display, text, font}` block used for axis and legend titles.
    fn title(&self, text: Option<String>) -> serde_json::Value {
        match text {
            Some(text) => json!({
                "display": true,
                "text": text,
                "font": self.configuration.chart_label_font(),
            }),
            None => json!({ "display": false }),
        }
    }

    fn measure_title(&self, label: &Value, measure: &Measure) -> String {
        match &measure.unit {
            Some(unit) => format!("{} - {}", self.text(label), self.text(&unit.label)),
            None => self.text(label),
        }
    }

    // ========================================================================
    // ONE DIMENSION
    // ========================================================================

    fn create_single_dimension_chart(&self, result: &AnalyticsResult, kind: ChartKind) -> Result<Chart, ChartError> {
        let prototype = result.table().row_prototype()?;
        let selected = select_measures(prototype.measures());
        let first = selected
            .first()
            .copied()
            .ok_or_else(|| ChartError::unsupported("Measures not found"))?;

        let mut dispenser = ColorDispenser::new();
        let mut datasets: IndexMap<String, Dataset> = selected
            .iter()
            .map(|measure| {
                let area = self.configuration.create_chart_element_configuration(&mut dispenser);
                let dataset = Dataset {
                    label: Some(self.text(&measure.label)),
                    ..Dataset::styled(&area)
                };
                (measure.name.clone(), dataset)
            })
            .collect();

        let mut labels = Vec::with_capacity(result.table().len());
        let mut x_title = None;

        for tuple in result.table() {
            let dimension = single_dimension(tuple)?;
            labels.push(self.text(&dimension.display_member));
            x_title.get_or_insert_with(|| self.text(&dimension.label));

            for (name, dataset) in datasets.iter_mut() {
                let value = tuple
                    .measures()
                    .get_by_name(name)
                    .map(|m| m.value.clone())
                    .unwrap_or(Value::Null);
                dataset.data.push(self.number(&value)?);
            }
        }

        let y_title = match (&first.unit, selected.len()) {
            (None, 1) => Some(self.text(&first.label)),
            (None, _) => None,
            (Some(_), 1) => Some(self.measure_title(&first.label, first)),
            (Some(unit), _) => Some(self.text(&unit.label)),
        };

        let legend = if selected.len() > 1 {
            json!({ "display": true, "position": "top" })
        } else {
            json!({ "display": false })
        };

        let options = json!({
            "responsive": true,
            "locale": self.locale(),
            "plugins": {
                "legend": legend,
                "title": { "display": false },
            },
            "scales": {
                "x": { "title": self.title(x_title) },
                "y": { "title": self.title(y_title) },
            },
            "spanGaps": true,
        });

        Ok(Chart {
            kind,
            data: ChartData {
                labels,
                datasets: datasets.into_values().collect(),
            },
            options,
        })
    }

    fn create_pie_chart(&self, result: &AnalyticsResult) -> Result<Chart, ChartError> {
        let prototype = result.table().row_prototype()?;
        let selected = select_measures(prototype.measures());
        let measure = match selected.as_slice() {
            [measure] => *measure,
            _ => return Err(ChartError::unsupported("Only one measure is supported")),
        };

        let mut dispenser = ColorDispenser::new();
        let mut labels = Vec::new();
        let mut data = Vec::new();
        let mut colors = Vec::new();

        for tuple in result.table() {
            let dimension = single_dimension(tuple)?;
            labels.push(self.text(&dimension.display_member));

            let value = tuple
                .measures()
                .get_by_name(&measure.name)
                .map(|m| m.value.clone())
                .unwrap_or(Value::Null);
            data.push(self.number(&value)?);

            let area = self.configuration.create_chart_element_configuration(&mut dispenser);
            colors.push(area.area_color());
        }

        let dataset = Dataset {
            label: Some(self.text(&measure.label)),
            data,
            background_color: Some(Paint::PerItem(colors)),
            hover_offset: Some(4),
            ..Dataset::default()
        };

        Ok(Chart {
            kind: ChartKind::Pie,
            data: ChartData {
                labels,
                datasets: vec![dataset],
            },
            options: json!({
                "responsive": true,
                "locale": self.locale(),
            }),
        })
    }

    // ========================================================================
    // TWO DIMENSIONS
    // ========================================================================

    /// One dataset per member of the second dimension, one label per member
    /// of the first. Only the first measure is plotted.
    fn create_grouped_chart(&self, result: &AnalyticsResult, kind: ChartKind, stacked: bool) -> Result<Chart, ChartError> {
        let prototype = result.table().row_prototype()?;
        if prototype.measures().get_by_index(0).is_none() {
            return Err(ChartError::unsupported("Measures not found"));
        }

        let mut series: Vec<(String, Value)> = Vec::new();
        for tuple in result.table() {
            let dimension = tuple
                .get_by_index(1)
                .ok_or_else(|| ChartError::unsupported("Expected a second dimension"))?;
            let signature = dimension.member.signature();
            if !series.iter().any(|(s, _)| *s == signature) {
                series.push((signature, dimension.member.clone()));
            }
        }

        let tree = result.tree()?;
        let mut dispenser = ColorDispenser::new();
        let mut datasets: IndexMap<String, Dataset> = IndexMap::new();
        let mut labels = Vec::with_capacity(tree.children.len());
        let mut x_title = None;
        let mut y_title = None;
        let mut legend_title = None;

        for node in &tree {
            labels.push(self.text(&node.display_member));
            x_title.get_or_insert_with(|| self.text(&node.label));

            for (signature, member) in &series {
                let dataset = datasets.entry(signature.clone()).or_insert_with(|| {
                    Dataset::styled(&self.configuration.create_chart_element_configuration(&mut dispenser))
                });

                let Some(inner) = node.traverse(member) else {
                    dataset.data.push(0.0);
                    continue;
                };

                if dataset.label.is_none() {
                    dataset.label = Some(self.text(&inner.display_member));
                }
                legend_title.get_or_insert_with(|| self.text(&inner.label));

                let (values_node, measure) = first_measure(inner)?;
                dataset.data.push(self.number(&measure.value)?);
                y_title.get_or_insert_with(|| self.measure_title(&values_node.display_member, measure));
            }
        }

        let mut options = json!({
            "responsive": true,
            "locale": self.locale(),
            "scales": {
                "x": { "title": self.title(x_title) },
                "y": { "title": self.title(y_title) },
            },
            "plugins": {
                "legend": {
                    "title": self.title(legend_title),
                    "labels": { "display": true, "position": "top" },
                },
                "title": { "display": false },
            },
        });

        if stacked {
            options["scales"]["x"]["stacked"] = json!(true);
            options["scales"]["y"]["stacked"] = json!(true);
        }

        Ok(Chart {
            kind,
            data: ChartData {
                labels,
                datasets: datasets.into_values().collect(),
            },
            options,
        })
    }
}

impl ChartBuilder for DefaultChartGenerator {
    fn create_chart(&self, result: &AnalyticsResult, chart_type: ChartType) -> Result<Chart, ChartError> {
        let dimensions = match result.table().row_prototype() {
            Ok(prototype) => prototype.len(),
            Err(ModelError::EmptyResult) => return Err(ChartError::unsupported("Result is empty")),
            Err(e) => return Err(e.into()),
        };

        match (chart_type, dimensions) {
            (ChartType::Auto, 1) => {
                let tree = result.tree()?;
                if is_sequential(&tree) {
                    log::debug!("auto chart: sequential members, using line chart");
                    self.create_single_dimension_chart(result, ChartKind::Line)
                } else {
                    log::debug!("auto chart: using bar chart");
                    self.create_single_dimension_chart(result, ChartKind::Bar)
                }
            }
            (ChartType::Auto, 2) | (ChartType::GroupedBar, _) => {
                log::debug!("grouped bar chart over {} dimensions", dimensions);
                self.create_grouped_chart(result, ChartKind::Bar, false)
            }
            (ChartType::StackedBar, _) => self.create_grouped_chart(result, ChartKind::Bar, true),
            (ChartType::Bar, _) => self.create_single_dimension_chart(result, ChartKind::Bar),
            (ChartType::Line, 1) => self.create_single_dimension_chart(result, ChartKind::Line),
            (ChartType::Line, 2) => self.create_grouped_chart(result, ChartKind::Line, false),
            (ChartType::Pie, _) => self.create_pie_chart(result),
            (chart_type, dimensions) => {
                log::debug!("no {} chart for {} dimensions", chart_type, dimensions);
                Err(ChartError::unsupported("Unsupported chart type"))
            }
        }
    }
}

impl ChartGenerator for DefaultChartGenerator {}

// ============================================================================
// HELPERS
// ============================================================================

/// Measures that can share one axis: the first measure alone when it has no
/// unit, otherwise every measure with the first measure's unit signature.
pub fn select_measures(measures: &Measures) -> Vec<&Measure> {
    let Some(first) = measures.get_by_index(0) else {
        return Vec::new();
    };

    match &first.unit {
        None => vec![first],
        Some(unit) => measures
            .iter()
            .filter(|m| m.unit.as_ref().map(|u| u.is_compatible_with(unit)).unwrap_or(false))
            .collect(),
    }
}

/// Whether the first-level members are sequence members that all step in
/// the same direction.
pub fn is_sequential(tree: &TreeNode) -> bool {
    let mut members = Vec::with_capacity(tree.children.len());
    for node in tree {
        match node.member.as_sequence() {
            Some(member) => members.push(member),
            None => return false,
        }
    }

    let mut direction: Option<Ordering> = None;
    for pair in members.windows(2) {
        match pair[0].compare(pair[1]) {
            None | Some(Ordering::Equal) => return false,
            Some(ordering) => match direction {
                None => direction = Some(ordering),
                Some(d) if d != ordering => return false,
                Some(_) => {}
            },
        }
    }

    !members.is_empty()
}

fn single_dimension(tuple: &Tuple) -> Result<&Dimension, ChartError> {
    match tuple.dimensions() {
        [dimension] => Ok(dimension),
        _ => Err(ChartError::unsupported("Expected only one member")),
    }
}

fn first_measure(node: &TreeNode) -> Result<(&TreeNode, &Measure), ChartError> {
    node.children
        .first()
        .and_then(|child| child.measure.as_ref().map(|measure| (child, measure)))
        .ok_or_else(|| ChartError::unsupported("Measures not found"))
}
