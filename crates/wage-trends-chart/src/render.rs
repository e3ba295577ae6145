//! SVG rendering of sparklines

use plotters::prelude::*;

use crate::axis::value_range;
use crate::error::{ChartError, ChartResult};
use crate::sparkline::Sparkline;

const FONT: &str = "sans-serif";

/// Renders sparklines to standalone SVG documents
#[derive(Debug, Clone, Copy)]
pub struct SparklineRenderer {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for SparklineRenderer {
    fn default() -> Self {
        Self {
            width: 220,
            height: 160,
        }
    }
}

impl SparklineRenderer {
    /// Create a renderer for the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render a sparkline to an SVG string
    pub fn render_svg(&self, line: &Sparkline) -> ChartResult<String> {
        let Some((first_year, last_year)) = line.year_span().filter(|_| line.points.len() >= 2)
        else {
            return Err(ChartError::NotEnoughPoints(line.title.clone()));
        };
        // A single-year series still needs a non-empty x range
        let last_year = last_year.max(first_year + 1);

        let (min, max) = value_range(line.points.iter().map(|(_, v)| *v));
        let (r, g, b) = line.color.rgb();
        let color = RGBColor(r, g, b);
        let label_color = RGBColor(90, 90, 90);
        let suffix = line.value_suffix.clone();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(6)
                .caption(
                    truncate_title(&line.title, 34),
                    (FONT, 12.0).into_font().color(&BLACK),
                )
                .x_label_area_size(18)
                .y_label_area_size(40)
                .build_cartesian_2d(first_year..last_year, min..max)
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(3)
                .y_labels(3)
                .label_style((FONT, 9.0).into_font().color(&label_color))
                .x_label_formatter(&|year| year.to_string())
                .y_label_formatter(&|value| format!("{:.0}{}", value, suffix))
                .draw()
                .map_err(render_error)?;

            chart
                .draw_series(LineSeries::new(
                    line.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(render_error)?;
            chart
                .draw_series(
                    line.points
                        .iter()
                        .map(|point| Circle::new(*point, 2, color.filled())),
                )
                .map_err(render_error)?;

            root.present().map_err(render_error)?;
        }

        log::trace!("rendered sparkline '{}' ({} bytes)", line.title, svg.len());
        Ok(svg)
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Shorten long occupation titles so captions fit a small cell
fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let mut short: String = title.chars().take(max_chars.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparkline::LineColor;

    #[test]
    fn test_render_svg() {
        let line = Sparkline::new(
            "Registered Nurses",
            vec![(2019, 0.0), (2020, 10.0), (2022, 30.0)],
            LineColor::Green,
        )
        .with_value_suffix("%");

        let svg = SparklineRenderer::default().render_svg(&line).unwrap();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("Registered Nurses"));
        assert!(svg.to_lowercase().contains("#2e8b3c"));
    }

    #[test]
    fn test_render_needs_two_points() {
        let line = Sparkline::new("Lonely", vec![(2019, 1.0)], LineColor::Red);
        let err = SparklineRenderer::default().render_svg(&line).unwrap_err();
        assert!(matches!(err, ChartError::NotEnoughPoints(_)));
    }

    #[test]
    fn test_truncate_title() {
        assert_eq!(truncate_title("Short", 10), "Short");
        assert_eq!(truncate_title("Abcdefghijkl", 10), "Abcdefg...");
    }
}
