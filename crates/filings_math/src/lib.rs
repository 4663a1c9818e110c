//! 2D Mathematics Library
//!
//! This crate provides the small amount of planar math the filings
//! simulation needs.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components (screen convention, y down)
//!
//! ## Angles
//!
//! All angles are in degrees, measured clockwise from "up" (negative y).
//! See [`angle`] for normalization and bearing helpers.

mod vec2;
pub mod angle;

pub use vec2::Vec2;
pub use angle::{bearing_degrees, heading, normalize_180};
