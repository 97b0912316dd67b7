//! The day surface: hour grid, time labels, and event rectangles.
//!
//! [`DayView`] consumes the layout engine's positioned records for one
//! day's events and draws them as SVG. It knows nothing about how the
//! positions were computed; it only shifts frames into display space
//! (right of the time gutter, up by the display-window offset), paints
//! rectangles and text, and maps tap points back to source events.
//!
//! Text handling is deliberately simple: the number of lines an event can
//! show is fixed up front from its rectangle height and a constant line
//! height. Titles and summaries are truncated to that budget rather than
//! reflowed.

use log::debug;
use svg::node::Text as SvgText;
use svg::node::element::{Group, Line, Rectangle, TSpan, Text as TextElement};

use daygrid_core::{
    color::Color,
    event::Event,
    geometry::{Point, Rect},
    positioned::PositionedEvent,
};

use crate::{
    config::{DayConfig, StyleConfig},
    error::DaygridError,
    layout::LayoutEngine,
};

/// Width of the time-label gutter left of the event area.
const TIME_GUTTER_WIDTH: f32 = 49.0;
/// Inset of hour labels from the surface's left edge.
const TIME_LABEL_INSET: f32 = 15.0;
/// Fixed line height used to decide how many text lines fit an event
/// rectangle.
const TEXT_LINE_HEIGHT: f32 = 17.0;
/// Left padding of text inside an event rectangle.
const EVENT_PADDING_LEFT: f32 = 4.0;
/// Rectangles narrower than this show only the title, never a summary.
const MIN_SUMMARY_WIDTH: f32 = 20.0;
/// Estimated glyph advance used to budget characters per text line.
const APPROX_GLYPH_WIDTH: f32 = 6.5;
/// Width of the accent stripe on the left edge of an event rectangle.
const EVENT_ACCENT_WIDTH: f32 = 3.0;
const EVENT_FONT_SIZE: f32 = 12.0;
const LABEL_FONT_SIZE: f32 = 10.0;

/// Resolved colors for one render, config values over builtins.
struct Palette {
    background: Color,
    event_fill: Color,
    event_border: Color,
    grid_line: Color,
    time_label: Color,
}

fn builtin(color_str: &str) -> Color {
    Color::new(color_str).expect("builtin palette colors are valid CSS")
}

impl Palette {
    fn resolve(style: &StyleConfig) -> Result<Self, DaygridError> {
        Ok(Self {
            background: style.background_color()?.unwrap_or_else(|| builtin("white")),
            event_fill: style
                .event_fill()?
                .unwrap_or_else(|| builtin("rgb(19, 122, 209)")),
            event_border: style
                .event_border()?
                .unwrap_or_else(|| builtin("rgb(22, 88, 176)")),
            grid_line: style
                .grid_line()?
                .unwrap_or_else(|| builtin("rgb(216, 216, 216)")),
            time_label: style
                .time_label()?
                .unwrap_or_else(|| builtin("rgb(170, 170, 170)")),
        })
    }
}

/// One rendered day column.
///
/// Holds borrowed events and their computed frames; building a `DayView`
/// runs the layout engine once, after which rendering and hit testing are
/// infallible.
pub struct DayView<'a, P> {
    events: Vec<&'a Event<P>>,
    positioned: Vec<PositionedEvent>,
    day: &'a DayConfig,
    palette: Palette,
    hour_height: f32,
}

impl<'a, P> DayView<'a, P> {
    /// Lay out `events` for one day column.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::InvalidWindow`] for a bad display window,
    /// [`DaygridError::InvalidWidth`] when the configured column width
    /// leaves no room right of the time gutter, and
    /// [`DaygridError::Config`] for unparseable style colors.
    pub fn new(
        events: Vec<&'a Event<P>>,
        engine: &LayoutEngine,
        day: &'a DayConfig,
        style: &StyleConfig,
    ) -> Result<Self, DaygridError> {
        day.validate()?;
        if day.width() <= TIME_GUTTER_WIDTH {
            return Err(DaygridError::InvalidWidth { width: day.width() });
        }
        let palette = Palette::resolve(style)?;
        let positioned = engine.arrange(&events, day.width() - TIME_GUTTER_WIDTH)?;
        debug!(
            event_count = events.len(),
            width = day.width();
            "Day surface laid out"
        );
        Ok(Self {
            events,
            positioned,
            day,
            palette,
            hour_height: engine.hour_height(),
        })
    }

    /// Total surface width in pixels, time gutter included
    pub fn width(&self) -> f32 {
        self.day.width()
    }

    /// Total surface height in pixels: the display window at this scale
    pub fn height(&self) -> f32 {
        (self.day.end_hour() - self.day.start_hour()) as f32 * self.hour_height
    }

    /// The computed frames, in day-column coordinates
    pub fn positioned(&self) -> &[PositionedEvent] {
        &self.positioned
    }

    /// A frame shifted into display space: right of the time gutter, up
    /// by the display-window offset.
    fn display_frame(&self, frame: Rect) -> Rect {
        let window_top = self.day.start_hour() as f32 * self.hour_height;
        frame.translate(TIME_GUTTER_WIDTH, -window_top)
    }

    /// Find the event under a point in surface coordinates.
    ///
    /// Returns the index of the topmost hit into this view's event slice,
    /// or `None` when the point is outside every rectangle.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.positioned
            .iter()
            .rev()
            .find(|p| self.display_frame(p.frame()).contains(point))
            .map(|p| p.source_index())
    }

    /// Find the original event under a point in surface coordinates
    pub fn event_at(&self, point: Point) -> Option<&'a Event<P>> {
        self.hit_test(point).map(|index| self.events[index])
    }

    /// Render the surface to an SVG group: background, hour grid, labels,
    /// then one rectangle (plus text) per positioned event.
    pub fn render(&self) -> Group {
        let mut group = Group::new().add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", self.width())
                .set("height", self.height())
                .set("fill", &self.palette.background),
        );

        for hour in self.day.start_hour()..=self.day.end_hour() {
            group = self.render_hour_line(group, hour);
        }
        for positioned in &self.positioned {
            group = group.add(self.render_event(positioned));
        }
        group
    }

    fn render_hour_line(&self, group: Group, hour: u32) -> Group {
        let y = (hour - self.day.start_hour()) as f32 * self.hour_height;
        let line = Line::new()
            .set("x1", TIME_GUTTER_WIDTH)
            .set("y1", y)
            .set("x2", self.width())
            .set("y2", y)
            .set("stroke", &self.palette.grid_line)
            .set("stroke-width", 1.0);
        let label = TextElement::new(hour_label(hour, self.day.format_24h()))
            .set("x", TIME_LABEL_INSET)
            .set("y", y + LABEL_FONT_SIZE / 2.0 - 1.0)
            .set("font-family", "Helvetica, Arial, sans-serif")
            .set("font-size", LABEL_FONT_SIZE)
            .set("fill", &self.palette.time_label);
        group.add(line).add(label)
    }

    fn render_event(&self, positioned: &PositionedEvent) -> Group {
        let frame = self.display_frame(positioned.frame());
        let event = self.events[positioned.source_index()];

        let rect = Rectangle::new()
            .set("x", frame.left())
            .set("y", frame.top())
            .set("width", frame.width())
            .set("height", frame.height())
            .set("rx", 1.0)
            .set("fill", &self.palette.event_fill)
            .set("fill-opacity", 0.8);
        let accent = Line::new()
            .set("x1", frame.left() + EVENT_ACCENT_WIDTH / 2.0)
            .set("y1", frame.top())
            .set("x2", frame.left() + EVENT_ACCENT_WIDTH / 2.0)
            .set("y2", frame.bottom())
            .set("stroke", &self.palette.event_border)
            .set("stroke-width", EVENT_ACCENT_WIDTH);

        let mut group = Group::new().add(rect).add(accent);

        let lines = event_text_lines(event, frame);
        if !lines.is_empty() {
            let x = frame.left() + EVENT_PADDING_LEFT;
            let mut text = TextElement::new("")
                .set("x", x)
                .set("y", frame.top())
                .set("font-family", "Helvetica, Arial, sans-serif")
                .set("font-size", EVENT_FONT_SIZE)
                .set("fill", "white");
            for line in lines {
                text = text.add(
                    TSpan::new("")
                        .set("x", x)
                        .set("dy", TEXT_LINE_HEIGHT)
                        .add(SvgText::new(line)),
                );
            }
            group = group.add(text);
        }
        group
    }
}

/// The label for an hour gridline.
fn hour_label(hour: u32, format_24h: bool) -> String {
    if format_24h {
        return format!("{:02}:00", hour % 24);
    }
    match hour {
        0 | 24 => String::from("12 AM"),
        12 => String::from("Noon"),
        h if h < 12 => format!("{h} AM"),
        h => format!("{} PM", h - 12),
    }
}

/// The text lines that fit an event rectangle: the title first, then as
/// much of the summary as the remaining lines hold.
fn event_text_lines<P>(event: &Event<P>, frame: Rect) -> Vec<String> {
    let budget = (frame.height() / TEXT_LINE_HEIGHT) as usize;
    if budget == 0 {
        return Vec::new();
    }
    let chars_per_line = (((frame.width() - 2.0 * EVENT_PADDING_LEFT) / APPROX_GLYPH_WIDTH)
        .floor() as usize)
        .max(1);

    let mut lines = vec![truncate_line(event.title(), chars_per_line)];
    if frame.width() >= MIN_SUMMARY_WIDTH {
        if let Some(summary) = event.summary() {
            lines.extend(wrap_words(summary, chars_per_line, budget - 1));
        }
    }
    lines
}

/// Truncate a single line to a character budget, marking the cut.
fn truncate_line(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let kept: String = text.chars().take(budget.saturating_sub(1)).collect();
    format!("{kept}\u{2026}")
}

/// Greedy word wrap into at most `max_lines` lines of `budget` characters;
/// the last line is truncated if words remain.
fn wrap_words(text: &str, budget: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if max_lines == 0 {
        return lines;
    }
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len <= budget {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if lines.len() + 1 == max_lines {
            // Out of lines; cram the rest into the last one and cut it
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current = truncate_line(&current, budget);
            lines.push(current);
            return lines;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current = truncate_line(word, budget);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
