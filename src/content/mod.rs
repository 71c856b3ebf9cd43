//! Lesson content processing
//!
//! Pure text logic shared by the viewer screens: the slide segmenter and
//! the inline formatting parser.

pub mod inline;
pub mod segmenter;

pub use inline::{InlineNode, parse_inline};
pub use segmenter::split_into_slides;
