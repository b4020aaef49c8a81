//! `sitegen` - static page and narration script builder
//!
//! Reads Markdown sources for a personal site (a date-named diary, reviews
//! and dialogue transcripts), renders each collection to one HTML page, and
//! exports dialogue documents as YAML scene scripts for a narration tool.

pub mod build;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
