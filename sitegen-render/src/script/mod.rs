//! Narration scripts for the external video tool.
//!
//! One YAML file per dialogue document: an intro scene followed by one scene
//! per section, each line tagged with the channel that speaks it.

pub mod export;
pub mod schema;

pub use export::{build_script, is_generated_script, script_file_name, to_yaml};
pub use schema::{Script, ScriptSettings};
