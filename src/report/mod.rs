//! Presentation of recommendations
//!
//! Builds the per-player rating table for a selection and renders it, along
//! with the engine's answer, as plain text or JSON.

mod grid;
mod render;

pub use grid::{GridRow, RatingBand, RatingGrid};
pub use render::{render_recommendation, render_roster, render_text, Report};
