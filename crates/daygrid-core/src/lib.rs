//! Daygrid Core Types and Definitions
//!
//! This crate provides the foundational types for the Daygrid calendar
//! system. It includes:
//!
//! - **Geometry**: Pixel-space primitives ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Time**: Clock-time spans for single-day events ([`time::TimeSpan`])
//! - **Events**: The event model and the [`event::Timed`] seam the layout
//!   engine is generic over ([`event`] module)
//! - **Positioned events**: The layout engine's output records
//!   ([`positioned::PositionedEvent`])

pub mod color;
pub mod event;
pub mod geometry;
pub mod positioned;
pub mod time;
