//! `sitegen` core — the source document model
//!
//! Front-matter extraction, the dialogue Markdown dialect, and the diary and
//! review entry types shared by the renderers and the build binary.

pub mod document;
pub mod entry;
pub mod error;
pub mod frontmatter;
pub mod segment;

pub use document::{Block, Channel, Document, Section};
pub use entry::{DiaryEntry, DiaryName, Review};
pub use error::SkipReason;
pub use frontmatter::{Extracted, FrontMatter, extract};
pub use segment::segment;
