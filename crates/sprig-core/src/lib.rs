//! Core types and utilities for the sprig UI toolkit.
//!
//! This crate provides the foundational types used across all other sprig crates:
//! - Integer geometry (positions, sizes, rectangles) and alignment primitives
//! - 8-bit colors and blending
//! - A generic pixel container
//! - Error types

pub mod color;
pub mod errors;
pub mod geometry;
pub mod image;

pub use color::*;
pub use errors::*;
pub use geometry::*;
pub use image::*;
