//! `sitegen` renderers — HTML pages and narration scripts
//!
//! Turns parsed documents, diary entries and reviews into static HTML, and
//! dialogue documents into the YAML scene script read by the narration tool.

pub mod error;
pub mod html;
pub mod inline;
pub mod plain;
pub mod script;
pub mod table;
