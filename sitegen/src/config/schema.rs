//! Configuration schema.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitegen_render::script::ScriptSettings;

/// Root of the configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory relative paths resolve against (the config file's parent).
    #[serde(skip)]
    pub root: PathBuf,
    /// `lang` attribute of every page.
    pub lang: String,
    /// Stylesheet href used unless a page overrides it.
    pub stylesheet: String,
    /// Diary page.
    pub diary: PageConfig,
    /// Review page.
    pub reviews: PageConfig,
    /// Dialogue transcript page.
    pub dialogue: PageConfig,
    /// Narration script export.
    pub script: ScriptConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            lang: "ja".to_string(),
            stylesheet: "css/style.css".to_string(),
            diary: PageConfig::default(),
            reviews: PageConfig::default(),
            dialogue: PageConfig::default(),
            script: ScriptConfig::default(),
        }
    }
}

/// Per-page overrides; unset fields fall back to [`PageKind`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Source directory.
    pub source: Option<PathBuf>,
    /// Output HTML file.
    pub output: Option<PathBuf>,
    /// Page title.
    pub page_title: Option<String>,
    /// Stylesheet href.
    pub stylesheet: Option<String>,
}

/// Script export section.
///
/// Flattened settings rule out `deny_unknown_fields`, so leftover keys are
/// collected in `unknown` and rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Source directory; defaults to the dialogue source.
    pub source: Option<PathBuf>,
    /// Output directory.
    pub output_dir: Option<PathBuf>,
    /// Exporter settings.
    #[serde(flatten)]
    pub settings: ScriptSettings,
    /// Keys no field claimed.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yaml::Value>,
}

/// The three HTML pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Date-named diary entries.
    Diary,
    /// Reviews with metadata.
    Reviews,
    /// Dialogue transcripts.
    Dialogue,
}

impl PageKind {
    /// All pages in build order.
    pub const ALL: [Self; 3] = [Self::Diary, Self::Reviews, Self::Dialogue];

    /// Short name used in logs and summaries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diary => "diary",
            Self::Reviews => "reviews",
            Self::Dialogue => "dialogue",
        }
    }

    /// Default page title.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Diary => "Diary",
            Self::Reviews => "Reviews",
            Self::Dialogue => "Dialogues",
        }
    }

    /// Default output file name.
    #[must_use]
    pub const fn default_output(self) -> &'static str {
        match self {
            Self::Diary => "diary.html",
            Self::Reviews => "reviews.html",
            Self::Dialogue => "dialogue.html",
        }
    }

    /// `<main>` class of the page.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Diary => "diary",
            Self::Reviews => "reviews",
            Self::Dialogue => "dialogue",
        }
    }
}

/// A fully resolved page build target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    /// Which page.
    pub kind: PageKind,
    /// Source directory.
    pub source: PathBuf,
    /// Output HTML file.
    pub output: PathBuf,
    /// Page title.
    pub title: String,
    /// Stylesheet href.
    pub stylesheet: String,
    /// Document language.
    pub lang: String,
}

/// A fully resolved script export target.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptTarget {
    /// Source directory of dialogue documents.
    pub source: PathBuf,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Exporter settings.
    pub settings: ScriptSettings,
}

impl SiteConfig {
    fn page_config(&self, kind: PageKind) -> &PageConfig {
        match kind {
            PageKind::Diary => &self.diary,
            PageKind::Reviews => &self.reviews,
            PageKind::Dialogue => &self.dialogue,
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Resolve a page target against defaults and the config root.
    #[must_use]
    pub fn page(&self, kind: PageKind) -> PageTarget {
        let page = self.page_config(kind);
        let source = page
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from(kind.name()));
        let output = page
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(kind.default_output()));

        PageTarget {
            kind,
            source: self.resolve(&source),
            output: self.resolve(&output),
            title: page
                .page_title
                .clone()
                .unwrap_or_else(|| kind.default_title().to_string()),
            stylesheet: page
                .stylesheet
                .clone()
                .unwrap_or_else(|| self.stylesheet.clone()),
            lang: self.lang.clone(),
        }
    }

    /// Resolve the script target. The source follows the dialogue page
    /// unless set explicitly.
    #[must_use]
    pub fn script_target(&self) -> ScriptTarget {
        let source = self
            .script
            .source
            .as_deref()
            .map_or_else(|| self.page(PageKind::Dialogue).source, |p| self.resolve(p));
        let output_dir = self
            .script
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("scripts"));

        ScriptTarget {
            source,
            output_dir: self.resolve(&output_dir),
            settings: self.script.settings.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        let config = SiteConfig::default();
        let diary = config.page(PageKind::Diary);
        assert_eq!(diary.source, Path::new("./diary"));
        assert_eq!(diary.output, Path::new("./diary.html"));
        assert_eq!(diary.title, "Diary");
        assert_eq!(diary.stylesheet, "css/style.css");

        let script = config.script_target();
        assert_eq!(script.source, Path::new("./dialogue"));
        assert_eq!(script.output_dir, Path::new("./scripts"));
        assert_eq!(script.settings.child_prefix, "Chibi");
    }

    #[test]
    fn test_overrides_resolve_against_root() {
        let mut config: SiteConfig = serde_yaml::from_str(
            "\
stylesheet: main.css
reviews:
  source: content/reviews
  output: /srv/www/reviews.html
  page_title: Notes
dialogue:
  source: talk
  stylesheet: talk.css
script:
  output_dir: out/scripts
  child_prefix: Kid
  pause_sec: 0.8
",
        )
        .unwrap();
        config.root = PathBuf::from("/site");

        let reviews = config.page(PageKind::Reviews);
        assert_eq!(reviews.source, Path::new("/site/content/reviews"));
        assert_eq!(reviews.output, Path::new("/srv/www/reviews.html"));
        assert_eq!(reviews.title, "Notes");
        assert_eq!(reviews.stylesheet, "main.css");
        assert_eq!(config.page(PageKind::Dialogue).stylesheet, "talk.css");

        let script = config.script_target();
        assert_eq!(script.source, Path::new("/site/talk"));
        assert_eq!(script.output_dir, Path::new("/site/out/scripts"));
        assert_eq!(script.settings.child_prefix, "Kid");
        assert!((script.settings.pause_sec - 0.8).abs() < f64::EPSILON);
        assert_eq!(script.settings.video.fps, 30);
    }

    #[test]
    fn test_unknown_page_key_rejected() {
        let result: Result<SiteConfig, _> = serde_yaml::from_str("diary:\n  sauce: x\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unclaimed_script_keys_collected() {
        let config: SiteConfig =
            serde_yaml::from_str("script:\n  child_prefx: Kid\n  pause_sec: 0.8\n").unwrap();
        assert_eq!(
            config.script.unknown.keys().collect::<Vec<_>>(),
            vec!["child_prefx"]
        );
        assert_eq!(config.script.settings.child_prefix, "Chibi");
        assert!((config.script.settings.pause_sec - 0.8).abs() < f64::EPSILON);
    }
}
