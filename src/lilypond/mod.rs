//! The LilyPond-style text encoding: a reader that builds validated
//! [crate::notation::Column] values from text, and a writer producing the
//! canonical inverse text.

pub mod reader;
pub mod writer;

pub use reader::parse;
pub use writer::write;

use crate::error::Result;

/// Serialization to the canonical LilyPond-style syntax.
///
/// Fallible because some model states have no spelling: a key with a mode
/// other than major or minor, or a tuplet whose ratio cannot be recovered.
pub trait RendersToLilypond {
    fn render_lilypond(&self) -> Result<String>;
}
