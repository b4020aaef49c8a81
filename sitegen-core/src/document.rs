//! Dialogue documents: sections of classified blocks.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::frontmatter::{FrontMatter, extract};
use crate::segment::segment;

/// One parsed dialogue source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Metadata from the front-matter block.
    pub front_matter: FrontMatter,
    /// Heading-delimited sections in source order.
    pub sections: Vec<Section>,
}

impl Document {
    /// Extract front-matter and segment the body.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let extracted = extract(text);
        Self {
            front_matter: extracted.front_matter,
            sections: segment(extracted.body),
        }
    }

    /// Document title, or `""`.
    #[must_use]
    pub fn title(&self) -> &str {
        self.front_matter.title()
    }

    /// Subtitle, if declared and non-empty.
    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.front_matter.non_empty("subtitle")
    }

    /// Date string, or `""`.
    #[must_use]
    pub fn date(&self) -> &str {
        self.front_matter.date()
    }
}

/// A heading and the blocks under it.
///
/// Text before the first heading lands in a section with an empty title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Heading text; empty for the leading untitled section.
    pub title: String,
    /// Blocks in source line order.
    pub blocks: Vec<Block>,
}

impl Section {
    /// An empty section with the given heading.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }
}

/// One classified unit of section content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A speaker and what they say. `speaker` is never empty.
    Speech {
        /// Speaker name as written in the marker
        speaker: String,
        /// Marker-line text followed by continuation lines
        paragraphs: Vec<String>,
    },
    /// A standalone image reference.
    Image {
        /// Alt text, possibly empty
        alt: String,
        /// Image path or URL
        reference: String,
    },
    /// Consecutive pipe-delimited rows, unsplit.
    Table {
        /// Raw rows, trimmed
        rows: Vec<String>,
    },
    /// Consecutive `>` lines, marker removed, joined with `\n`.
    Quote {
        /// Quoted text
        text: String,
    },
    /// Consecutive plain lines, joined with `\n`.
    Text {
        /// Paragraph text
        text: String,
    },
}

/// Narration track a line is spoken on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Default track: adult speakers and all narration.
    #[default]
    Main,
    /// Alternate track for the child character.
    Child,
}

impl Channel {
    /// Classify a speaker. Names starting with `child_prefix` go to
    /// [`Channel::Child`]; an empty prefix matches nobody.
    #[must_use]
    pub fn for_speaker(speaker: &str, child_prefix: &str) -> Self {
        if !child_prefix.is_empty() && speaker.starts_with(child_prefix) {
            Self::Child
        } else {
            Self::Main
        }
    }

    /// Lowercase name, as used in CSS classes and scripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Child => "child",
        }
    }
}

/// Write sections back out in the dialogue dialect.
///
/// Blocks are separated by blank lines, so parsing the output with
/// [`segment`] yields the same sections.
#[must_use]
pub fn to_markdown(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        if !section.title.is_empty() {
            write_heading(&mut out, &section.title);
        }
        for block in &section.blocks {
            write_block(&mut out, block);
            out.push('\n');
        }
    }
    out
}

/// A title ending in `#` gets a closing run so the parser keeps its own.
fn write_heading(out: &mut String, title: &str) {
    if title.ends_with('#') {
        let _ = writeln!(out, "## {title} #\n");
    } else {
        let _ = writeln!(out, "## {title}\n");
    }
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Speech {
            speaker,
            paragraphs,
        } => {
            let mut lines = paragraphs.iter();
            match lines.next() {
                Some(first) => {
                    let _ = writeln!(out, "**{speaker}**: {first}");
                }
                None => {
                    let _ = writeln!(out, "**{speaker}**:");
                }
            }
            for line in lines {
                let _ = writeln!(out, "{line}");
            }
        }
        Block::Image { alt, reference } => {
            let _ = writeln!(out, "![{alt}]({reference})");
        }
        Block::Table { rows } => {
            for row in rows {
                let _ = writeln!(out, "{row}");
            }
        }
        Block::Quote { text } => {
            for line in text.split('\n') {
                let _ = writeln!(out, "> {line}");
            }
        }
        Block::Text { text } => {
            let _ = writeln!(out, "{text}");
        }
    }
}
