//! Diary and review entries.
//!
//! Both are plain Markdown bodies with front-matter. A diary entry takes its
//! date from the filename; a review must declare its title.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::SkipReason;
use crate::frontmatter::{FrontMatter, extract};

static DIARY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})_(.+)\.md$").expect("valid regex"));

/// The parts of a `YYYY-MM-DD_<title>.md` filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryName {
    /// Entry date.
    pub date: NaiveDate,
    /// Title with `_` and `-` turned into spaces.
    pub title: String,
}

impl DiaryName {
    /// Parse a diary filename (no directory part).
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::BadFilename`] if the name does not match the
    /// pattern and [`SkipReason::InvalidDate`] if the date does not exist.
    pub fn parse(file_name: &str) -> Result<Self, SkipReason> {
        let bad = || SkipReason::BadFilename {
            name: file_name.to_string(),
        };
        let caps = DIARY_NAME_RE.captures(file_name).ok_or_else(bad)?;
        let date_str = caps.get(1).ok_or_else(bad)?.as_str();
        let raw_title = caps.get(2).ok_or_else(bad)?.as_str();

        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            SkipReason::InvalidDate {
                name: file_name.to_string(),
                date: date_str.to_string(),
            }
        })?;

        let title = raw_title
            .split(['_', '-'])
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self { date, title })
    }
}

/// One diary page entry, body still in Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    /// Entry date from the filename.
    pub date: NaiveDate,
    /// Front-matter `title`, else the filename title.
    pub title: String,
    /// Markdown body with front-matter removed.
    pub body: String,
}

impl DiaryEntry {
    /// Build an entry from its filename and file contents.
    ///
    /// # Errors
    ///
    /// Returns a [`SkipReason`] if the filename is not a diary filename.
    pub fn from_source(file_name: &str, text: &str) -> Result<Self, SkipReason> {
        let name = DiaryName::parse(file_name)?;
        let extracted = extract(text);
        let title = extracted
            .front_matter
            .non_empty("title")
            .map_or(name.title, ToString::to_string);
        Ok(Self {
            date: name.date,
            title,
            body: extracted.body.to_string(),
        })
    }
}

/// One review, body still in Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Metadata; always has a non-empty `title`.
    pub front_matter: FrontMatter,
    /// Markdown body with front-matter removed.
    pub body: String,
}

impl Review {
    /// Keys rendered in the header rather than the details list.
    const HEADER_KEYS: [&'static str; 2] = ["title", "date"];

    /// Build a review from file contents.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::MissingKey`] if there is no non-empty `title`.
    pub fn from_source(text: &str) -> Result<Self, SkipReason> {
        let extracted = extract(text);
        if extracted.front_matter.non_empty("title").is_none() {
            return Err(SkipReason::MissingKey { key: "title" });
        }
        Ok(Self {
            front_matter: extracted.front_matter,
            body: extracted.body.to_string(),
        })
    }

    /// Review title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.front_matter.title()
    }

    /// Date string, or `""`.
    #[must_use]
    pub fn date(&self) -> &str {
        self.front_matter.date()
    }

    /// Remaining metadata (brand, score, …) in source order, empty values
    /// left out.
    pub fn details(&self) -> impl Iterator<Item = (&str, &str)> {
        self.front_matter
            .iter()
            .filter(|(k, v)| !Self::HEADER_KEYS.iter().any(|h| h == k) && !v.is_empty())
    }
}
