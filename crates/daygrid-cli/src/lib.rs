//! CLI logic for the Daygrid day-view renderer.
//!
//! This module contains the core CLI logic for the Daygrid tool.

mod args;
mod config;

pub use args::Args;

use std::fs;

use chrono::{Local, NaiveDate};
use log::info;
use serde_json::Value;

use daygrid::{DaygridError, EventCalendar, event::Event};

/// Run the Daygrid CLI application
///
/// This function reads an events file, lays out the requested day, and
/// writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DaygridError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unparseable event input
/// - Layout or rendering errors
pub fn run(args: &Args) -> Result<(), DaygridError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Rendering day view"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the events file; unknown JSON fields ride along as
    // the opaque payload
    let source = fs::read_to_string(&args.input)?;
    let events: Vec<Event<Value>> = serde_json::from_str(&source)
        .map_err(|err| DaygridError::Events(err.to_string()))?;

    let date = resolve_date(args.date.as_deref())?;
    info!(date = date.to_string(), event_count = events.len(); "Events loaded");

    // Build the calendar opened at the requested day and render it
    let mut calendar = EventCalendar::new(events, date, app_config);
    if let Some(width) = args.width {
        calendar = calendar.with_width(width);
    }
    let svg = calendar.render_current()?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Parse the `--date` argument, defaulting to today.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate, DaygridError> {
    match date {
        Some(raw) => raw
            .parse()
            .map_err(|_| DaygridError::Config(format!("invalid date `{raw}`, expected YYYY-MM-DD"))),
        None => Ok(Local::now().date_naive()),
    }
}
