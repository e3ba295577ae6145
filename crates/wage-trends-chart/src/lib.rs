//! # wage-trends-chart
//!
//! Sparkline charts for wage-trends dashboards: a small chart model, an SVG
//! renderer built on `plotters`, and the fixed grid the dashboard lays
//! charts out on.

mod axis;
mod error;
mod grid;
mod render;
mod sparkline;

pub use axis::value_range;
pub use error::{ChartError, ChartResult};
pub use grid::GridLayout;
pub use render::SparklineRenderer;
pub use sparkline::{LineColor, Sparkline};
