//! HTML dashboard of wage-trend sparklines

use std::fmt::Write;

use crate::loader::LoadFailure;
use wage_trends_chart::{GridLayout, LineColor, Sparkline, SparklineRenderer};
use wage_trends_core::{Direction, TrendSummary};

/// Message shown in a cell whose chart failed to render
pub const RENDER_ERROR_MESSAGE: &str = "Error displaying data";

/// Message shown when no trend was selected
pub const NO_TRENDS_MESSAGE: &str = "No wage trends with enough data to display";

/// Layout and chart size of a dashboard
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardOptions {
    pub grid: GridLayout,
    pub renderer: SparklineRenderer,
}

/// Line color for a trend direction
pub fn direction_color(direction: Direction) -> LineColor {
    match direction {
        Direction::Up => LineColor::Green,
        Direction::Down => LineColor::Red,
    }
}

/// Sparkline of a trend, plotted as percent change from its first point
pub fn trend_sparkline(trend: &TrendSummary) -> Sparkline {
    let base = trend.points.first().map_or(0.0, |p| p.wage);
    let points = trend
        .points
        .iter()
        .map(|p| (p.year, (p.wage - base) / base * 100.0))
        .filter(|(_, change)| change.is_finite())
        .collect();

    Sparkline::new(
        trend.occupation.clone(),
        points,
        direction_color(trend.direction),
    )
    .with_value_suffix("%")
}

/// A rendered view of the selected trends for one region
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub region: String,
    /// Selected trends in display order
    pub trends: Vec<TrendSummary>,
    /// User-visible notes, e.g. years that failed to load
    pub messages: Vec<String>,
    pub inflation_adjusted: bool,
}

impl Dashboard {
    /// Create a dashboard for a region
    pub fn new<S: Into<String>>(region: S, trends: Vec<TrendSummary>) -> Self {
        Self {
            region: region.into(),
            trends,
            messages: Vec::new(),
            inflation_adjusted: false,
        }
    }

    /// Mark wages as inflation adjusted in the title
    pub fn with_inflation_adjusted(mut self, adjusted: bool) -> Self {
        self.inflation_adjusted = adjusted;
        self
    }

    /// Add a user-visible message
    pub fn add_message<S: Into<String>>(&mut self, message: S) {
        self.messages.push(message.into());
    }

    /// Add one message per year that failed to load
    pub fn add_load_failures(&mut self, failures: &[LoadFailure]) {
        for failure in failures {
            self.add_message(format!(
                "Data for {} could not be loaded: {}",
                failure.year, failure.message
            ));
        }
    }

    /// Page title
    pub fn title(&self) -> String {
        let mut title = format!("{} Wage Trends", self.region);
        if self.inflation_adjusted {
            title.push_str(" (Inflation Adjusted)");
        }
        title
    }

    /// Render a self-contained HTML page
    pub fn render_html(&self, options: &DashboardOptions) -> String {
        let mut html = String::new();
        let title = escape_html(&self.title());

        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>\n{css}</style>\n</head>\n<body>\n\
             <h1>{title}</h1>\n",
            title = title,
            css = stylesheet(&options.grid),
        );

        if !self.messages.is_empty() {
            html.push_str("<ul class=\"messages\">\n");
            for message in &self.messages {
                let _ = writeln!(html, "<li>{}</li>", escape_html(message));
            }
            html.push_str("</ul>\n");
        }

        if self.trends.is_empty() {
            let _ = writeln!(html, "<p class=\"empty\">{}</p>", NO_TRENDS_MESSAGE);
        } else {
            html.push_str("<div class=\"grid\">\n");
            for cell in options.grid.place(&self.trends) {
                match cell {
                    Some(trend) => render_cell(&mut html, trend, &options.renderer),
                    None => html.push_str("<div class=\"cell placeholder\"></div>\n"),
                }
            }
            html.push_str("</div>\n");
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn render_cell(html: &mut String, trend: &TrendSummary, renderer: &SparklineRenderer) {
    let _ = writeln!(
        html,
        "<div class=\"cell {}\" title=\"{}\">",
        trend.direction,
        escape_html(&trend.occupation)
    );

    match renderer.render_svg(&trend_sparkline(trend)) {
        Ok(svg) => {
            html.push_str(&svg);
            let _ = writeln!(
                html,
                "\n<p class=\"caption\" style=\"color: {}\">{}</p>",
                direction_color(trend.direction).css(),
                escape_html(&trend.caption())
            );
        }
        Err(e) => {
            log::warn!("Error rendering chart for {}: {}", trend.occupation, e);
            let _ = writeln!(
                html,
                "<p class=\"error\">{}</p>\n<p class=\"caption\">{}</p>",
                RENDER_ERROR_MESSAGE,
                escape_html(&trend.occupation)
            );
        }
    }
    html.push_str("</div>\n");
}

fn stylesheet(grid: &GridLayout) -> String {
    format!(
        "body {{ font-family: sans-serif; margin: 1.5rem; color: #222; }}\n\
         .grid {{ display: grid; grid-template-columns: repeat({}, 1fr); gap: 0.75rem; }}\n\
         .cell {{ border: 1px solid #ddd; border-radius: 4px; padding: 0.25rem; min-height: 8rem; }}\n\
         .cell svg {{ width: 100%; height: auto; }}\n\
         .placeholder {{ background: #fafafa; }}\n\
         .caption {{ margin: 0.25rem 0; text-align: center; font-weight: bold; }}\n\
         .error {{ color: #c62828; text-align: center; }}\n\
         .messages {{ color: #8a6d00; }}\n",
        grid.columns.max(1)
    )
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wage_trends_core::YearPoint;

    fn trend(occupation: &str, wages: &[(i32, f64)]) -> TrendSummary {
        let points: Vec<YearPoint> = wages
            .iter()
            .map(|(year, wage)| YearPoint { year: *year, wage: *wage })
            .collect();
        let first = points[0];
        let last = points[points.len() - 1];
        let change = (last.wage - first.wage) / first.wage * 100.0;
        TrendSummary {
            occupation: occupation.into(),
            direction: Direction::from_change(change).unwrap(),
            percent_change: change,
            point_count: points.len(),
            year_range: (first.year, last.year),
            points,
        }
    }

    #[test]
    fn test_trend_sparkline() {
        let line = trend_sparkline(&trend("Nurses", &[(2019, 100.0), (2020, 110.0), (2022, 130.0)]));
        assert_eq!(line.color, LineColor::Green);
        assert_eq!(line.points.len(), 3);
        assert_eq!(line.points[0], (2019, 0.0));
        assert!((line.points[2].1 - 30.0).abs() < 1e-9);

        let falling = trend_sparkline(&trend("Typists", &[(2019, 100.0), (2020, 90.0), (2021, 80.0)]));
        assert_eq!(falling.color, LineColor::Red);
    }

    #[test]
    fn test_render_grid() {
        let trends = vec![
            trend("Nurses", &[(2019, 100.0), (2020, 110.0), (2022, 130.0)]),
            trend("Typists & Clerks", &[(2019, 100.0), (2020, 90.0), (2021, 80.0)]),
        ];
        let html = Dashboard::new("Wisconsin", trends).render_html(&DashboardOptions::default());

        assert!(html.contains("<title>Wisconsin Wage Trends</title>"));
        assert_eq!(html.matches("<svg").count(), 2);
        assert_eq!(html.matches("cell placeholder").count(), 18);
        assert!(html.contains("+30.0% (2019-2022)"));
        assert!(html.contains("-20.0% (2019-2021)"));
        assert!(html.contains("style=\"color: #2e8b3c\""));
        assert!(html.contains("style=\"color: #c62828\""));
        assert!(html.contains("Typists &amp; Clerks"));
        assert!(html.contains("repeat(5, 1fr)"));
    }

    #[test]
    fn test_render_failure_in_cell() {
        // A single point can't be drawn
        let mut broken = trend("Nurses", &[(2019, 100.0), (2020, 110.0)]);
        broken.points.truncate(1);

        let html = Dashboard::new("Wisconsin", vec![broken]).render_html(&DashboardOptions::default());
        assert!(html.contains(RENDER_ERROR_MESSAGE));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_messages_and_empty() {
        let mut dashboard = Dashboard::new("Wisconsin", Vec::new()).with_inflation_adjusted(true);
        dashboard.add_load_failures(&[LoadFailure {
            year: 2018,
            message: "No data file found for survey year 2018".into(),
        }]);

        let html = dashboard.render_html(&DashboardOptions::default());
        assert!(html.contains("Wisconsin Wage Trends (Inflation Adjusted)"));
        assert!(html.contains("<li>Data for 2018 could not be loaded: No data file found for survey year 2018</li>"));
        assert!(html.contains(NO_TRENDS_MESSAGE));
        assert!(!html.contains("class=\"grid\""));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">R&D's</a>"), "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;");
    }
}
