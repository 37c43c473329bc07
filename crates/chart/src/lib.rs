//! Chart data for progression graphs.
//!
//! Wraps computed series in the line-chart structures a charting library
//! consumes. Colours and axis settings are passed in explicitly.

#![warn(missing_docs)]

pub mod palette;
pub mod dataset;
pub mod builder;

pub use palette::ChartPalette;
pub use dataset::{Axis, ChartData, ChartKind, ChartOptions, Dataset, GridLines, LineChart, Scales};
pub use builder::{ChartBuilder, ChartError, ChartOutcome, NO_SOLVES_MESSAGE};
