//! Dialogue segmentation.
//!
//! Each line is classified on its own, by fixed precedence:
//!
//! 1. heading (`## Title`)
//! 2. speaker marker (`**Name**: text`, `**Name:** text`, `:` or `：`)
//! 3. blank
//! 4. image (`![alt](reference)` alone on the line)
//! 5. table row (starts with `|`)
//! 6. quote (starts with `>`)
//! 7. anything else: continues an open speech block, or is plain text
//!
//! The classified lines are folded into a [`SegmentState`] that owns the
//! open block and the section being filled.

use std::mem;
use std::sync::LazyLock;

use regex::Regex;

use crate::document::{Block, Section};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.*\S)").expect("valid regex"));

static CLOSING_HASHES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+#+$").expect("valid regex"));

static SPEAKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^*]+?)\*\*\s*[:：]\s*(.*)$").expect("valid regex")
});

static SPEAKER_INNER_COLON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*([^*]+?)[:：]\*\*\s*(.*)$").expect("valid regex")
});

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)\s]+)\)$").expect("valid regex"));

/// What a single source line is, independent of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Heading(&'a str),
    Speaker { name: &'a str, text: &'a str },
    Blank,
    Image { alt: &'a str, reference: &'a str },
    TableRow(&'a str),
    Quote(&'a str),
    Other(&'a str),
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if let Some(caps) = HEADING_RE.captures(line) {
        let title = caps.get(1).map_or("", |m| m.as_str());
        return Line::Heading(heading_title(title));
    }

    if let Some((name, text)) = speaker(line) {
        return Line::Speaker { name, text };
    }

    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = IMAGE_RE.captures(line) {
        return Line::Image {
            alt: caps.get(1).map_or("", |m| m.as_str()),
            reference: caps.get(2).map_or("", |m| m.as_str()),
        };
    }

    if line.starts_with('|') {
        return Line::TableRow(line);
    }

    if let Some(rest) = line.strip_prefix('>') {
        return Line::Quote(rest.strip_prefix(' ').unwrap_or(rest));
    }

    Line::Other(line)
}

/// Drop an optional closing `#` run. It only counts as closing when
/// whitespace separates it from the title, so `C#` keeps its `#`.
fn heading_title(title: &str) -> &str {
    CLOSING_HASHES_RE
        .find(title)
        .map_or(title, |m| &title[..m.start()])
}

fn speaker(line: &str) -> Option<(&str, &str)> {
    let caps = SPEAKER_RE
        .captures(line)
        .or_else(|| SPEAKER_INNER_COLON_RE.captures(line))?;
    let name = caps.get(1)?.as_str().trim();
    let text = caps.get(2).map_or("", |m| m.as_str().trim());
    (!name.is_empty()).then_some((name, text))
}

/// Parse accumulator: finished sections, the section being filled, and at
/// most one open block that later lines may extend.
#[derive(Debug, Default)]
struct SegmentState {
    sections: Vec<Section>,
    current: Section,
    open: Option<Block>,
}

impl SegmentState {
    fn step(mut self, line: Line<'_>) -> Self {
        match line {
            Line::Heading(title) => {
                self.flush();
                let finished = mem::replace(&mut self.current, Section::new(title));
                self.keep(finished);
            }
            Line::Speaker { name, text } => {
                self.flush();
                let paragraphs = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text.to_string()]
                };
                self.open = Some(Block::Speech {
                    speaker: name.to_string(),
                    paragraphs,
                });
            }
            Line::Blank => self.flush(),
            Line::Image { alt, reference } => {
                self.flush();
                self.current.blocks.push(Block::Image {
                    alt: alt.to_string(),
                    reference: reference.to_string(),
                });
            }
            Line::TableRow(row) => match &mut self.open {
                Some(Block::Table { rows }) => rows.push(row.to_string()),
                _ => {
                    self.flush();
                    self.open = Some(Block::Table {
                        rows: vec![row.to_string()],
                    });
                }
            },
            Line::Quote(text) => match &mut self.open {
                Some(Block::Quote { text: open }) => {
                    open.push('\n');
                    open.push_str(text);
                }
                _ => {
                    self.flush();
                    self.open = Some(Block::Quote {
                        text: text.to_string(),
                    });
                }
            },
            Line::Other(text) => match &mut self.open {
                Some(Block::Speech { paragraphs, .. }) => paragraphs.push(text.to_string()),
                Some(Block::Text { text: open }) => {
                    open.push('\n');
                    open.push_str(text);
                }
                _ => {
                    self.flush();
                    self.open = Some(Block::Text {
                        text: text.to_string(),
                    });
                }
            },
        }
        self
    }

    fn flush(&mut self) {
        if let Some(block) = self.open.take() {
            self.current.blocks.push(block);
        }
    }

    /// Untitled sections only survive if they hold something.
    fn keep(&mut self, section: Section) {
        if !section.title.is_empty() || !section.blocks.is_empty() {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush();
        let last = mem::take(&mut self.current);
        self.keep(last);
        self.sections
    }
}

/// Segment a document body into sections of blocks.
#[must_use]
pub fn segment(body: &str) -> Vec<Section> {
    body.lines()
        .map(classify)
        .fold(SegmentState::default(), SegmentState::step)
        .finish()
}
