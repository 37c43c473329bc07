//! Line chart structures in the charting library's JSON shape.

use scoregraph_progress::Series;
use serde::{Deserialize, Serialize};

/// One line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label
    pub label: String,

    /// Points
    pub data: Series,

    /// Point fill colour
    pub point_background_color: String,

    /// Line colour
    pub border_color: String,

    /// Area fill colour
    pub background_color: String,

    /// Hover hit radius
    pub point_hit_radius: u32,

    /// Drawn point radius
    pub point_radius: u32,

    /// Bezier tension, 0 for straight steps
    pub line_tension: f32,
}

/// Labels and datasets of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// X-axis labels, blank since buckets carry no readable time
    pub labels: Vec<String>,

    /// One dataset per team
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// Blank labels for `count` points.
    pub fn blank_labels(count: usize) -> Vec<String> {
        vec![String::new(); count]
    }
}

/// Chart type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Line chart
    Line,
}

/// Grid line visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLines {
    /// Whether grid lines are drawn
    pub display: bool,
}

/// A single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    /// Grid settings
    pub grid_lines: GridLines,
}

/// Axis settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scales {
    /// Value axes
    #[serde(rename = "yAxes")]
    pub y_axes: Vec<Axis>,

    /// Time axes
    #[serde(rename = "xAxes")]
    pub x_axes: Vec<Axis>,
}

/// Chart options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Axis settings
    pub scales: Scales,
}

impl Default for ChartOptions {
    fn default() -> Self {
        let hidden = Axis {
            grid_lines: GridLines { display: false },
        };
        Self {
            scales: Scales {
                y_axes: vec![hidden],
                x_axes: vec![hidden],
            },
        }
    }
}

/// A complete chart definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    /// Always a line chart
    #[serde(rename = "type")]
    pub kind: ChartKind,

    /// Labels and datasets
    pub data: ChartData,

    /// Display options
    pub options: ChartOptions,
}
