//! Sparkline chart model

/// Line color of a sparkline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    /// Rising series
    Green,
    /// Falling series
    Red,
}

impl LineColor {
    /// RGB components used when drawing
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            LineColor::Green => (0x2e, 0x8b, 0x3c),
            LineColor::Red => (0xc6, 0x28, 0x28),
        }
    }

    /// CSS hex color, e.g. `#2e8b3c`
    pub fn css(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// A small line chart of one series over years
#[derive(Debug, Clone)]
pub struct Sparkline {
    /// Chart title
    pub title: String,
    /// Points as (year, value), sorted by year
    pub points: Vec<(i32, f64)>,
    /// Line color
    pub color: LineColor,
    /// Suffix for value axis labels (e.g. `%`)
    pub value_suffix: String,
}

impl Sparkline {
    /// Create a new sparkline; points are sorted by year
    pub fn new<S: Into<String>>(title: S, mut points: Vec<(i32, f64)>, color: LineColor) -> Self {
        points.sort_by_key(|(year, _)| *year);
        Self {
            title: title.into(),
            points,
            color,
            value_suffix: String::new(),
        }
    }

    /// Set the suffix used on value axis labels
    pub fn with_value_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.value_suffix = suffix.into();
        self
    }

    /// First and last year of the series
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((self.points.first()?.0, self.points.last()?.0))
    }
}
