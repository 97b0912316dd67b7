//! Configuration types for Daygrid rendering.
//!
//! This module provides configuration structures that control how day
//! views are laid out and styled. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, day-surface
//!   and style settings.
//! - [`LayoutConfig`] - Controls the layout engine's vertical scale and
//!   minimum event duration.
//! - [`DayConfig`] - The options a host can pass to the day surface:
//!   display window, column width, header formatting, navigation arrows.
//! - [`StyleConfig`] - Controls visual styling options such as fill and
//!   gridline colors.
//!
//! # Example
//!
//! ```
//! # use daygrid::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.day().start_hour(), 0);
//! assert_eq!(config.day().end_hour(), 24);
//! ```

use serde::Deserialize;

use daygrid_core::color::Color;

use crate::error::DaygridError;

/// Top-level configuration combining layout, day-surface and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout engine configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Day surface configuration section.
    #[serde(default)]
    day: DayConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, day: DayConfig, style: StyleConfig) -> Self {
        Self { layout, day, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the day surface configuration.
    pub fn day(&self) -> &DayConfig {
        &self.day
    }

    /// Returns a mutable reference to the day surface configuration, for
    /// host overrides such as a command-line width flag.
    pub fn day_mut(&mut self) -> &mut DayConfig {
        &mut self.day
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Vertical scale in pixels per hour.
    #[serde(default = "default_hour_height")]
    hour_height: f32,

    /// Minimum displayable duration in minutes. Events whose end does not
    /// come after their start are clamped to this duration.
    #[serde(default = "default_min_event_minutes")]
    min_event_minutes: i64,
}

fn default_hour_height() -> f32 {
    60.0
}

fn default_min_event_minutes() -> i64 {
    25
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hour_height: default_hour_height(),
            min_event_minutes: default_min_event_minutes(),
        }
    }
}

impl LayoutConfig {
    /// Returns the vertical scale in pixels per hour.
    pub fn hour_height(&self) -> f32 {
        self.hour_height
    }

    /// Returns the minimum displayable event duration in minutes.
    pub fn min_event_minutes(&self) -> i64 {
        self.min_event_minutes
    }
}

/// The recognized day-surface options a host can configure.
#[derive(Debug, Clone, Deserialize)]
pub struct DayConfig {
    /// First hour of the display window (inclusive).
    #[serde(default)]
    start_hour: u32,

    /// Last hour of the display window (exclusive upper bound of drawn
    /// time, inclusive for the closing gridline).
    #[serde(default = "default_end_hour")]
    end_hour: u32,

    /// Pixel width of the whole day column, time gutter included.
    #[serde(default = "default_width")]
    width: f32,

    /// Use 24-hour gridline labels instead of 12-hour AM/PM labels.
    #[serde(default)]
    format_24h: bool,

    /// chrono format string for the page header date.
    #[serde(default = "default_header_format")]
    header_format: String,

    /// Render the header date in upper case.
    #[serde(default)]
    upper_case_header: bool,

    /// Show previous/next navigation arrows in the header.
    #[serde(default = "default_show_header_arrows")]
    show_header_arrows: bool,

    /// Custom glyph for the left navigation arrow.
    #[serde(default)]
    header_icon_left: Option<String>,

    /// Custom glyph for the right navigation arrow.
    #[serde(default)]
    header_icon_right: Option<String>,
}

fn default_end_hour() -> u32 {
    24
}

fn default_width() -> f32 {
    800.0
}

fn default_header_format() -> String {
    String::from("%d %B %Y")
}

fn default_show_header_arrows() -> bool {
    true
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            start_hour: 0,
            end_hour: default_end_hour(),
            width: default_width(),
            format_24h: false,
            header_format: default_header_format(),
            upper_case_header: false,
            show_header_arrows: default_show_header_arrows(),
            header_icon_left: None,
            header_icon_right: None,
        }
    }
}

impl DayConfig {
    /// Returns the first displayed hour.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Returns the hour the display window ends at.
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Sets the display window (builder style). Validated by
    /// [`DayConfig::validate`] when the surface is built.
    pub fn with_window(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    /// Returns the pixel width of the day column.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the pixel width of the day column.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Returns whether gridline labels use the 24-hour clock.
    pub fn format_24h(&self) -> bool {
        self.format_24h
    }

    /// Returns the chrono format string for the page header date.
    pub fn header_format(&self) -> &str {
        &self.header_format
    }

    /// Returns whether the header date is upper-cased.
    pub fn upper_case_header(&self) -> bool {
        self.upper_case_header
    }

    /// Returns whether navigation arrows are rendered in the header.
    pub fn show_header_arrows(&self) -> bool {
        self.show_header_arrows
    }

    /// Returns the left navigation glyph, falling back to the default.
    pub fn header_icon_left(&self) -> &str {
        self.header_icon_left.as_deref().unwrap_or("\u{2039}")
    }

    /// Returns the right navigation glyph, falling back to the default.
    pub fn header_icon_right(&self) -> &str {
        self.header_icon_right.as_deref().unwrap_or("\u{203a}")
    }

    /// Validates the display window.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::InvalidWindow`] unless
    /// `start_hour < end_hour <= 24`.
    pub fn validate(&self) -> Result<(), DaygridError> {
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(DaygridError::InvalidWindow {
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            });
        }
        Ok(())
    }
}

/// Visual styling configuration for rendered day views.
///
/// All fields are CSS color strings. Fields that are not set fall back to
/// renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background color of the day column.
    #[serde(default)]
    background_color: Option<String>,

    /// Fill color of event rectangles.
    #[serde(default)]
    event_fill: Option<String>,

    /// Border (left accent) color of event rectangles.
    #[serde(default)]
    event_border: Option<String>,

    /// Color of hour gridlines.
    #[serde(default)]
    grid_line: Option<String>,

    /// Color of hour labels in the time gutter.
    #[serde(default)]
    time_label: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::Config`] if the configured color string
    /// cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, DaygridError> {
        parse_color(self.background_color.as_deref(), "background color")
    }

    /// Returns the parsed event fill [`Color`], or `None` if not configured.
    pub fn event_fill(&self) -> Result<Option<Color>, DaygridError> {
        parse_color(self.event_fill.as_deref(), "event fill color")
    }

    /// Returns the parsed event border [`Color`], or `None` if not configured.
    pub fn event_border(&self) -> Result<Option<Color>, DaygridError> {
        parse_color(self.event_border.as_deref(), "event border color")
    }

    /// Returns the parsed gridline [`Color`], or `None` if not configured.
    pub fn grid_line(&self) -> Result<Option<Color>, DaygridError> {
        parse_color(self.grid_line.as_deref(), "gridline color")
    }

    /// Returns the parsed hour-label [`Color`], or `None` if not configured.
    pub fn time_label(&self) -> Result<Option<Color>, DaygridError> {
        parse_color(self.time_label.as_deref(), "time label color")
    }
}

fn parse_color(value: Option<&str>, what: &str) -> Result<Option<Color>, DaygridError> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| DaygridError::Config(format!("Invalid {what} in config: {err}")))
}
