//! Site configuration
//!
//! An optional YAML file selects source directories, output paths, page
//! titles and script export settings. Every field has a default, so an
//! absent file and an empty file both yield the built-in layout.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{DEFAULT_CONFIG_FILE, load, parse};
pub use schema::{PageConfig, PageKind, PageTarget, ScriptConfig, ScriptTarget, SiteConfig};
pub use validation::validate;
