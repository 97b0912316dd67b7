//! The horizontally-paginated day-by-day calendar.
//!
//! [`EventCalendar`] owns the full event list and a window of day pages
//! around an initial date. Each page is one [`DayView`](crate::surface::DayView)
//! topped by a header (formatted date, optional navigation arrows).
//! Navigation moves the current page inside the window and notifies the
//! host; taps are resolved against the current page and handed back as the
//! original event.

use chrono::{NaiveDate, TimeDelta};
use log::{debug, info};
use svg::Document;
use svg::node::Text as SvgText;
use svg::node::element::{Group, Rectangle, Text as TextElement};

use daygrid_core::{event::{Event, Timed}, geometry::Point};

use crate::{
    config::AppConfig,
    error::DaygridError,
    layout::LayoutEngine,
    surface::DayView,
};

/// Height of the header band above the day surface.
const HEADER_HEIGHT: f32 = 50.0;
const HEADER_FONT_SIZE: f32 = 16.0;
const ARROW_FONT_SIZE: f32 = 18.0;
const ARROW_INSET: f32 = 18.0;

type TapHandler<P> = Box<dyn Fn(&Event<P>)>;
type DateChangedHandler = Box<dyn Fn(NaiveDate)>;

/// A paginated day-by-day calendar over one event list.
///
/// The page window spans `size` days on either side of the initial date,
/// mirroring a virtualized horizontal pager: page `size` is the initial
/// date, page `0` the earliest day, page `2 * size - 1` the latest.
///
/// # Examples
///
/// ```
/// # use daygrid::{EventCalendar, config::AppConfig};
/// # use daygrid_core::event::Event;
/// # use chrono::NaiveDate;
/// let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
/// let events = vec![Event::new(
///     "Standup",
///     day.and_hms_opt(9, 0, 0).unwrap(),
///     day.and_hms_opt(9, 30, 0).unwrap(),
/// )];
///
/// let calendar = EventCalendar::new(events, day, AppConfig::default());
/// let svg = calendar.render_current().unwrap();
/// assert!(svg.contains("<svg"));
/// ```
pub struct EventCalendar<P = ()> {
    events: Vec<Event<P>>,
    init_date: NaiveDate,
    size: usize,
    current_page: usize,
    config: AppConfig,
    engine: LayoutEngine,
    tap_handler: Option<TapHandler<P>>,
    date_changed: Option<DateChangedHandler>,
}

impl<P> EventCalendar<P> {
    /// Create a calendar over `events`, opened at `init_date`, with the
    /// default 30-day window on either side.
    pub fn new(events: Vec<Event<P>>, init_date: NaiveDate, config: AppConfig) -> Self {
        let engine = LayoutEngine::from_config(config.layout());
        let size = 30;
        Self {
            events,
            init_date,
            size,
            current_page: size,
            config,
            engine,
            tap_handler: None,
            date_changed: None,
        }
    }

    /// Set the number of day pages on either side of the initial date
    /// (builder style). A size of zero collapses to a single page.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size.max(1);
        self.current_page = self.size;
        self
    }

    /// Override the day column width (builder style).
    pub fn with_width(mut self, width: f32) -> Self {
        self.config.day_mut().set_width(width);
        self
    }

    /// Register the tap callback, invoked with the original event when a
    /// tap lands on its rectangle (builder style).
    pub fn with_tap_handler(mut self, handler: impl Fn(&Event<P>) + 'static) -> Self {
        self.tap_handler = Some(Box::new(handler));
        self
    }

    /// Register the date-changed callback, invoked after every successful
    /// navigation (builder style).
    pub fn with_date_changed(mut self, handler: impl Fn(NaiveDate) + 'static) -> Self {
        self.date_changed = Some(Box::new(handler));
        self
    }

    /// Number of pages in the window
    pub fn pages(&self) -> usize {
        self.size * 2
    }

    /// Index of the currently displayed page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Date of the currently displayed page
    pub fn current_date(&self) -> NaiveDate {
        self.date_for_page(self.current_page)
            .expect("current page is always inside the window")
    }

    /// The date shown by a page index.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::PageOutOfRange`] for indices outside the
    /// window.
    pub fn date_for_page(&self, index: usize) -> Result<NaiveDate, DaygridError> {
        if index >= self.pages() {
            return Err(DaygridError::PageOutOfRange {
                index,
                pages: self.pages(),
            });
        }
        let offset = index as i64 - self.size as i64;
        self.init_date
            .checked_add_signed(TimeDelta::days(offset))
            .ok_or(DaygridError::PageOutOfRange {
                index,
                pages: self.pages(),
            })
    }

    /// The page index showing a date, if it falls inside the window
    pub fn page_for_date(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.init_date).num_days() + self.size as i64;
        (0..self.pages() as i64)
            .contains(&offset)
            .then_some(offset as usize)
    }

    /// Borrow the events whose start instant falls on `date`
    pub fn events_for_day(&self, date: NaiveDate) -> Vec<&Event<P>> {
        self.events
            .iter()
            .filter(|event| event.start().date() == date)
            .collect()
    }

    /// Move to the next page. A no-op at the end of the window.
    pub fn next(&mut self) {
        self.go_to_page(self.current_page + 1);
    }

    /// Move to the previous page. A no-op at the start of the window.
    pub fn previous(&mut self) {
        if self.current_page > 0 {
            self.go_to_page(self.current_page - 1);
        }
    }

    /// Jump to the page showing `date`, if it is inside the window.
    pub fn go_to_date(&mut self, date: NaiveDate) {
        if let Some(page) = self.page_for_date(date) {
            self.go_to_page(page);
        }
    }

    fn go_to_page(&mut self, index: usize) {
        if index >= self.pages() || index == self.current_page {
            return;
        }
        self.current_page = index;
        let date = self.current_date();
        debug!(page = index, date = date.to_string(); "Calendar page changed");
        if let Some(handler) = &self.date_changed {
            handler(date);
        }
    }

    /// Resolve a tap on the current page.
    ///
    /// The point is in page coordinates (the header band is part of the
    /// page). When a rectangle is hit, the registered tap handler is
    /// invoked exactly once with the original event, which is also
    /// returned; taps outside every rectangle do nothing.
    pub fn tap(&self, point: Point) -> Result<Option<&Event<P>>, DaygridError> {
        let view = self.day_view(self.current_date())?;
        let hit = view
            .event_at(point.translate(0.0, -HEADER_HEIGHT))
            .map(|event| {
                if let Some(handler) = &self.tap_handler {
                    handler(event);
                }
                event
            });
        Ok(hit)
    }

    /// Render one page to a complete SVG document string.
    ///
    /// # Errors
    ///
    /// Returns [`DaygridError::PageOutOfRange`] for a bad index, plus any
    /// layout or configuration error from the day surface.
    pub fn render_page(&self, index: usize) -> Result<String, DaygridError> {
        let date = self.date_for_page(index)?;
        let view = self.day_view(date)?;

        info!(
            date = date.to_string(),
            events = view.positioned().len();
            "Rendering calendar page"
        );

        let width = view.width();
        let height = HEADER_HEIGHT + view.height();
        let document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
            .add(self.render_header(date, width)?)
            .add(
                view.render()
                    .set("transform", format!("translate(0 {HEADER_HEIGHT})")),
            );
        Ok(document.to_string())
    }

    /// Render the currently displayed page
    pub fn render_current(&self) -> Result<String, DaygridError> {
        self.render_page(self.current_page)
    }

    fn day_view(&self, date: NaiveDate) -> Result<DayView<'_, P>, DaygridError> {
        DayView::new(
            self.events_for_day(date),
            &self.engine,
            self.config.day(),
            self.config.style(),
        )
    }

    fn render_header(&self, date: NaiveDate, width: f32) -> Result<Group, DaygridError> {
        let day = self.config.day();
        let mut header_text = format_date(date, day.header_format())?;
        if day.upper_case_header() {
            header_text = header_text.to_uppercase();
        }

        let mut group = Group::new()
            .add(
                Rectangle::new()
                    .set("x", 0.0)
                    .set("y", 0.0)
                    .set("width", width)
                    .set("height", HEADER_HEIGHT)
                    .set("fill", "white"),
            )
            .add(
                TextElement::new("")
                    .set("x", width / 2.0)
                    .set("y", HEADER_HEIGHT / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", "Helvetica, Arial, sans-serif")
                    .set("font-size", HEADER_FONT_SIZE)
                    .add(SvgText::new(header_text)),
            );

        if day.show_header_arrows() {
            let arrow = |x: f32, glyph: &str| {
                TextElement::new("")
                    .set("x", x)
                    .set("y", HEADER_HEIGHT / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", "Helvetica, Arial, sans-serif")
                    .set("font-size", ARROW_FONT_SIZE)
                    .add(SvgText::new(glyph))
            };
            group = group
                .add(arrow(ARROW_INSET, day.header_icon_left()))
                .add(arrow(width - ARROW_INSET, day.header_icon_right()));
        }
        Ok(group)
    }
}

/// Format a date with a chrono format string, rejecting invalid
/// specifiers up front instead of panicking at display time.
fn format_date(date: NaiveDate, format: &str) -> Result<String, DaygridError> {
    use chrono::format::{Item, StrftimeItems};

    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DaygridError::Config(format!(
            "invalid header format string `{format}`"
        )));
    }
    Ok(date.format_with_items(items.into_iter()).to_string())
}
