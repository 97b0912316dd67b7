//! Daygrid - day-calendar event layout and SVG rendering.
//!
//! A day's events flow one direction through this crate: raw events go
//! into the [`LayoutEngine`], which assigns each one a pixel frame inside
//! the day column; the [`surface::DayView`] draws those frames as an SVG
//! grid with event rectangles and resolves taps back to source events; the
//! [`EventCalendar`] stitches day pages into a horizontally-paginated
//! view with a header and navigation.
//!
//! The engine is the heart of the crate: pure, synchronous, and
//! deterministic. Overlapping events are clustered into collision groups,
//! colored into columns, and widened into unused neighboring columns so
//! the column never shows avoidable dead space.
//!
//! # Examples
//!
//! ```
//! use daygrid::{EventCalendar, config::AppConfig};
//! use daygrid_core::event::Event;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let events = vec![
//!     Event::new(
//!         "Standup",
//!         day.and_hms_opt(9, 0, 0).unwrap(),
//!         day.and_hms_opt(9, 30, 0).unwrap(),
//!     ),
//!     Event::new(
//!         "Design review",
//!         day.and_hms_opt(9, 15, 0).unwrap(),
//!         day.and_hms_opt(10, 0, 0).unwrap(),
//!     )
//!     .with_summary("Bring the mockups"),
//! ];
//!
//! let calendar = EventCalendar::new(events, day, AppConfig::default());
//! let svg = calendar.render_current().expect("Failed to render");
//! assert!(svg.contains("<svg"));
//! ```
//!
//! Hosts that only need geometry can call the engine directly:
//!
//! ```
//! use daygrid::LayoutEngine;
//! use daygrid_core::time::TimeSpan;
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
//! let spans = vec![TimeSpan::new(
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//! )];
//!
//! let positioned = LayoutEngine::new().arrange(&spans, 300.0).unwrap();
//! assert_eq!(positioned[0].frame().width(), 300.0);
//! ```

pub mod calendar;
pub mod config;
pub mod layout;
pub mod surface;

mod error;

pub use daygrid_core::{color, event, geometry, positioned, time};

pub use calendar::EventCalendar;
pub use error::DaygridError;
pub use layout::LayoutEngine;
