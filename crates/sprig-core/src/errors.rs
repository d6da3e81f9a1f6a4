//! Error types for the sprig toolkit.
//!
//! Layout, measuring and drawing never fail. Only setup-time boundaries
//! (loading fonts, wiring the widget tree) report errors.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum SprigError {
    #[error(transparent)]
    Font(#[from] FontError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors while acquiring a font.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Cannot open font file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Font parsing failed: {reason}")]
    Parse { reason: String },

    #[error("Font has degenerate vertical metrics (ascent {ascent}, descent {descent})")]
    DegenerateMetrics { ascent: f32, descent: f32 },
}

/// Errors while wiring widgets together.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unknown widget id {id}")]
    UnknownWidget { id: usize },

    #[error("Widget {id} cannot hold children")]
    NotAContainer { id: usize },

    #[error("Widget {child} already has a parent ({parent})")]
    AlreadyAttached { child: usize, parent: usize },

    #[error("Attaching widget {child} under {parent} would create a cycle")]
    CycleDetected { parent: usize, child: usize },
}
