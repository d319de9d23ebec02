//! FILENAME: chart-engine/src/configuration.rs
//! PURPOSE: Visual settings shared by every generated chart.

use serde::{Deserialize, Serialize};

use crate::color::ColorDispenser;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfiguration {
    /// Appended to the hex colour of an area, e.g. "60" turns "#ff0000"
    /// into "#ff000060".
    pub area_transparency: String,
    /// Border width of chart areas.
    pub area_border_width: u32,
    pub label_font_size: u32,
    pub label_font_weight: String,
}

impl Default for ChartConfiguration {
    fn default() -> Self {
        ChartConfiguration {
            area_transparency: "60".to_string(),
            area_border_width: 1,
            label_font_size: 14,
            label_font_weight: "bold".to_string(),
        }
    }
}

impl ChartConfiguration {
    /// Styles the next chart element with the dispenser's next colour.
    pub fn create_chart_element_configuration(&self, dispenser: &mut ColorDispenser) -> ChartArea {
        ChartArea::new(dispenser.dispense_color(), &self.area_transparency, self.area_border_width)
    }

    pub fn chart_label_font(&self) -> ChartLabelFont {
        ChartLabelFont {
            size: self.label_font_size,
            weight: self.label_font_weight.clone(),
        }
    }
}

/// Colours of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArea {
    base_color: String,
    area_transparency: String,
    border_width: u32,
}

impl ChartArea {
    pub fn new(base_color: impl Into<String>, area_transparency: &str, border_width: u32) -> Self {
        ChartArea {
            base_color: base_color.into(),
            area_transparency: area_transparency.to_string(),
            border_width,
        }
    }

    pub fn area_color(&self) -> String {
        format!("{}{}", self.base_color, self.area_transparency)
    }

    pub fn border_color(&self) -> &str {
        &self.base_color
    }

    pub fn border_width(&self) -> u32 {
        self.border_width
    }
}

/// Font of axis and legend titles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLabelFont {
    pub size: u32,
    pub weight: String,
}
