//! Chart appearance shared by the breakthrough and depth-profile plots

use plotters::prelude::*;

/// Size, labels and colors of one chart
///
/// Start from [`PlotConfig::breakthrough`] or [`PlotConfig::depth_profile`]
/// and adjust fields as needed.
///
/// ```rust,ignore
/// let mut config = PlotConfig::breakthrough("Gravel layer, D = 25").with_size(1920, 1080);
/// config.show_grid = false;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Pixels (default 1024 × 768)
    pub width: u32,
    pub height: u32,

    pub title: String,
    pub xlabel: String,

    /// Default: "Concentration (mg/L)"
    pub ylabel: String,

    /// One color per line in drawing order; missing entries use the palette
    pub series_colors: Option<Vec<RGBColor>>,

    pub background: RGBColor,
    pub line_width: u32,
    pub show_grid: bool,

    /// Fixed upper end of the x axis
    ///
    /// `None` fits the axis to the data. Set it to the simulated period so a
    /// chart with no selected depth still spans the full horizon.
    pub x_max: Option<f64>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: String::new(),
            xlabel: String::new(),
            ylabel: "Concentration (mg/L)".to_string(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
            x_max: None,
        }
    }
}

/// Title argument of the presets: a `&str`, a `String`, or `None` for the default
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Line colors of the original matplotlib page (the "tab10" cycle)
const DEPTH_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Keep the preset's default title
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Concentration vs time, default title "Contaminant Concentration vs. Time"
    pub fn breakthrough(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Time (days)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Contaminant Concentration vs. Time".to_string());
        config
    }

    /// Concentration vs depth, default title "Contaminant Concentration vs. Depth"
    pub fn depth_profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Depth (cm)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Contaminant Concentration vs. Depth".to_string());
        config
    }

    /// Builder pattern: set line colors
    pub fn with_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.series_colors = Some(colors);
        self
    }

    /// Builder pattern: set image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Builder pattern: pin the x axis to `0..x_max`
    pub fn with_x_max(mut self, x_max: f64) -> Self {
        self.x_max = Some(x_max);
        self
    }

    /// Color of the `index`-th line
    pub(crate) fn series_color(&self, index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && index < colors.len()
        {
            return colors[index];
        }

        DEPTH_COLORS[index % DEPTH_COLORS.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
