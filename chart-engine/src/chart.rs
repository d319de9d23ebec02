//! FILENAME: chart-engine/src/chart.rs
//! PURPOSE: Chart types and the serialisable chart document.
//! CONTEXT: A chart serialises to `{type, data, options}`, the shape a
//! Chart.js front end consumes as is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::configuration::ChartArea;
use crate::error::ChartError;

/// The chart requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    #[default]
    Auto,
    Bar,
    Line,
    StackedBar,
    GroupedBar,
    Pie,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Auto => "auto",
            ChartType::Bar => "bar",
            ChartType::Line => "line",
            ChartType::StackedBar => "stackedBar",
            ChartType::GroupedBar => "groupedBar",
            ChartType::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    /// Accepts camelCase, snake_case and kebab-case names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "auto" => Ok(ChartType::Auto),
            "bar" => Ok(ChartType::Bar),
            "line" => Ok(ChartType::Line),
            "stackedbar" => Ok(ChartType::StackedBar),
            "groupedbar" => Ok(ChartType::GroupedBar),
            "pie" => Ok(ChartType::Pie),
            _ => Err(ChartError::UnknownChartType(s.to_string())),
        }
    }
}

/// The rendered chart's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// Background colour of a dataset: one for the whole series or one per
/// data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Single(String),
    PerItem(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
}

impl Dataset {
    /// An empty series styled with `area`.
    pub fn styled(area: &ChartArea) -> Self {
        Dataset {
            background_color: Some(Paint::Single(area.area_color())),
            border_color: Some(area.border_color().to_string()),
            border_width: Some(area.border_width()),
            ..Dataset::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: serde_json::Value,
}

impl Chart {
    pub fn to_value(&self) -> Result<serde_json::Value, ChartError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_type_parsing() {
        assert_eq!("stackedBar".parse::<ChartType>().unwrap(), ChartType::StackedBar);
        assert_eq!("grouped_bar".parse::<ChartType>().unwrap(), ChartType::GroupedBar);
        assert_eq!("PIE".parse::<ChartType>().unwrap(), ChartType::Pie);
        assert!(matches!(
            "radar".parse::<ChartType>(),
            Err(ChartError::UnknownChartType(_))
        ));
    }

    #[test]
    fn test_chart_type_serde_names() {
        assert_eq!(serde_json::to_string(&ChartType::GroupedBar).unwrap(), "\"groupedBar\"");
        let parsed: ChartType = serde_json::from_str("\"line\"").unwrap();
        assert_eq!(parsed, ChartType::Line);
    }

    #[test]
    fn test_dataset_serialization_skips_unset_fields() {
        let dataset = Dataset {
            label: Some("Sales".into()),
            data: vec![1.0, 2.5],
            hover_offset: Some(4),
            background_color: Some(Paint::PerItem(vec!["#000000".into()])),
            ..Dataset::default()
        };

        let json = serde_json::to_value(&dataset).unwrap();
        assert_eq!(json["label"], "Sales");
        assert_eq!(json["hoverOffset"], 4);
        assert_eq!(json["backgroundColor"][0], "#000000");
        assert!(json.get("borderColor").is_none());
    }
}
