//! Text for the sprig UI toolkit.
//!
//! Text is rendered once into a coverage bitmap ([`PrerenderedText`]) and
//! blitted with a color at draw time. Glyphs come from a [`GlyphSource`]:
//! a real font file through [`MonoFont`], or the file-less [`BlockFont`].

mod font;
mod monospace;
mod prerendered;

pub use font::{BlockFont, GlyphMetrics, GlyphSource, LineMetrics, MonoFont};
pub use monospace::{measure_small_string_monospace, render_small_string_monospace};
pub use prerendered::PrerenderedText;
