//! Dialogue document to narration script.

use std::sync::LazyLock;

use regex::Regex;
use sitegen_core::{Block, Channel, Document, Section};

use crate::error::RenderError;
use crate::plain::{sanitize_filename, strip_markdown};
use crate::script::schema::{SCRIPT_VERSION, Scene, Script, ScriptLine, ScriptSettings};
use crate::table::parse_table;

static GENERATED_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,}_.*\.yaml$").expect("valid regex"));

/// Build the script for one document.
///
/// The intro scene narrates title, subtitle and date; every section follows
/// as its own scene. Lines that strip down to nothing are dropped, and so
/// are scenes left without lines.
#[must_use]
pub fn build_script(document: &Document, settings: &ScriptSettings) -> Script {
    let mut scenes = Vec::with_capacity(document.sections.len() + 1);

    let intro = [
        Some(document.title()),
        document.subtitle(),
        Some(document.date()),
    ];
    let intro_lines: Vec<_> = intro
        .into_iter()
        .flatten()
        .filter_map(|text| narration(text, settings.intro_pause_sec))
        .collect();
    if !intro_lines.is_empty() {
        scenes.push(Scene {
            id: "intro".to_string(),
            title: strip_markdown(document.title()),
            lines: intro_lines,
        });
    }

    for (index, section) in document.sections.iter().enumerate() {
        let scene = section_scene(index + 1, section, settings);
        if !scene.lines.is_empty() {
            scenes.push(scene);
        }
    }

    Script {
        version: SCRIPT_VERSION,
        video: settings.video.clone(),
        main_avatar: settings.main_avatar.clone(),
        child_avatar: settings.child_avatar.clone(),
        voice: settings.voice.clone(),
        scenes,
    }
}

fn section_scene(number: usize, section: &Section, settings: &ScriptSettings) -> Scene {
    Scene {
        id: format!("scene-{number:02}"),
        title: strip_markdown(&section.title),
        lines: section
            .blocks
            .iter()
            .filter_map(|block| block_line(block, settings))
            .collect(),
    }
}

/// Map one block to one line. Only speech leaves the main channel.
#[must_use]
pub fn block_line(block: &Block, settings: &ScriptSettings) -> Option<ScriptLine> {
    let pause = settings.pause_sec;
    match block {
        Block::Speech {
            speaker,
            paragraphs,
        } => {
            let say = strip_markdown(&paragraphs.join(" "));
            (!say.is_empty()).then(|| ScriptLine {
                say,
                speaker: Channel::for_speaker(speaker, &settings.child_prefix),
                pause_sec: pause,
            })
        }
        Block::Quote { text } => labelled("quote", text, pause),
        Block::Image { alt, reference } => {
            let note = if alt.trim().is_empty() { reference } else { alt };
            labelled("image note", note, pause)
        }
        Block::Table { rows } => {
            let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
            let table = parse_table(&rows)?;
            let flat = std::iter::once(&table.header)
                .chain(&table.body)
                .map(|cells| cells.join(", "))
                .collect::<Vec<_>>()
                .join("; ");
            labelled("table", &flat, pause)
        }
        Block::Text { text } => narration(text, pause),
    }
}

fn narration(text: &str, pause_sec: f64) -> Option<ScriptLine> {
    let say = strip_markdown(text);
    (!say.is_empty()).then_some(ScriptLine {
        say,
        speaker: Channel::Main,
        pause_sec,
    })
}

fn labelled(label: &str, text: &str, pause_sec: f64) -> Option<ScriptLine> {
    let mut line = narration(text, pause_sec)?;
    line.say = format!("{label}: {}", line.say);
    Some(line)
}

/// Serialize a script to YAML.
///
/// # Errors
///
/// Returns [`RenderError::Script`] if serialization fails.
pub fn to_yaml(script: &Script, title: &str) -> Result<String, RenderError> {
    serde_yaml::to_string(script).map_err(|source| RenderError::Script {
        title: title.to_string(),
        source,
    })
}

/// Output filename for the `seq`-th document (1-based).
#[must_use]
pub fn script_file_name(seq: usize, title: &str) -> String {
    format!("{seq:03}_{}.yaml", sanitize_filename(title))
}

/// True for filenames this exporter produces; only these are cleaned.
#[must_use]
pub fn is_generated_script(file_name: &str) -> bool {
    GENERATED_NAME_RE.is_match(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIALOGUE: &str = "\
---
title: Rainy **Station**
subtitle: Episode 3
date: 2024-03-01
---
## Platform

**Aki**: It's [late](https://example.com).
The last train left.

**Chibi Mio**: I'm *hungry*.

> signs   flicker

![](img/platform.jpg)

![a lamp](img/lamp.jpg)

|who|mood|
|--|--|
|Aki|tired|

Rain keeps falling.

## Nothing here

|--|
";

    fn script() -> Script {
        build_script(&Document::parse(DIALOGUE), &ScriptSettings::default())
    }

    #[test]
    fn test_intro_scene() {
        let script = script();
        let intro = &script.scenes[0];
        assert_eq!(intro.id, "intro");
        assert_eq!(intro.title, "Rainy Station");
        let said: Vec<_> = intro.lines.iter().map(|l| l.say.as_str()).collect();
        assert_eq!(said, ["Rainy Station", "Episode 3", "2024-03-01"]);
        assert!(intro.lines.iter().all(|l| l.speaker == Channel::Main));
        assert!(intro.lines.iter().all(|l| (l.pause_sec - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_section_lines() {
        let script = script();
        assert_eq!(script.scenes.len(), 2, "empty section scene is dropped");
        let scene = &script.scenes[1];
        assert_eq!(scene.id, "scene-01");
        assert_eq!(scene.title, "Platform");

        let lines: Vec<_> = scene
            .lines
            .iter()
            .map(|l| (l.say.as_str(), l.speaker))
            .collect();
        assert_eq!(
            lines,
            [
                ("It's late. The last train left.", Channel::Main),
                ("I'm hungry.", Channel::Child),
                ("quote: signs flicker", Channel::Main),
                ("image note: img/platform.jpg", Channel::Main),
                ("image note: a lamp", Channel::Main),
                ("table: who, mood; Aki, tired", Channel::Main),
                ("Rain keeps falling.", Channel::Main),
            ]
        );
    }

    #[test]
    fn test_child_prefix_is_configurable() {
        let settings = ScriptSettings {
            child_prefix: "Aki".to_string(),
            ..ScriptSettings::default()
        };
        let script = build_script(&Document::parse(DIALOGUE), &settings);
        let speakers: Vec<_> = script.scenes[1].lines[..2].iter().map(|l| l.speaker).collect();
        assert_eq!(speakers, [Channel::Child, Channel::Main]);
    }

    #[test]
    fn test_empty_speech_dropped() {
        let block = Block::Speech {
            speaker: "Aki".to_string(),
            paragraphs: vec!["**  **".to_string()],
        };
        assert_eq!(block_line(&block, &ScriptSettings::default()), None);
    }

    #[test]
    fn test_document_without_metadata_has_no_intro() {
        let script = build_script(&Document::parse("## A\nhello\n"), &ScriptSettings::default());
        assert_eq!(script.scenes.len(), 1);
        assert_eq!(script.scenes[0].id, "scene-01");
    }

    #[test]
    fn test_yaml_schema() {
        let yaml = to_yaml(&script(), "Rainy Station").unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        for key in ["version", "video", "mainAvatar", "childAvatar", "voice", "scenes"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["version"].as_u64(), Some(1));
        assert!(value["voice"]["child"].get("pitch").is_some());
        let first_line = &value["scenes"][1]["lines"][0];
        assert!(first_line.get("say").is_some());
        assert!(first_line.get("speaker").is_some());
        assert!(first_line.get("pauseSec").is_some());

        let parsed: Script = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, script());
    }

    #[test]
    fn test_script_file_name() {
        assert_eq!(script_file_name(1, "Rainy Station"), "001_Rainy_Station.yaml");
        assert_eq!(script_file_name(12, ""), "012_untitled.yaml");
        assert_eq!(script_file_name(1234, "x"), "1234_x.yaml");
    }

    #[test]
    fn test_is_generated_script() {
        assert!(is_generated_script("001_Rainy_Station.yaml"));
        assert!(is_generated_script("1234_x.yaml"));
        assert!(!is_generated_script("01_short.yaml"));
        assert!(!is_generated_script("notes.yaml"));
        assert!(!is_generated_script("001_keep.yml"));
    }
}
