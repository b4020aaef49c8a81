//! Script file schema for the narration tool.
//!
//! Field names are camelCase on the wire. The settings types double as the
//! `script:` section of the site configuration, so they can be written
//! partially. A partial avatar or voice keeps its own channel's defaults.

use serde::{Deserialize, Deserializer, Serialize};
use sitegen_core::Channel;

/// Current script format version.
pub const SCRIPT_VERSION: u32 = 1;

/// A complete script file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    /// Format version, always [`SCRIPT_VERSION`].
    pub version: u32,
    /// Output video settings.
    pub video: VideoSettings,
    /// Avatar for the main channel.
    pub main_avatar: Avatar,
    /// Avatar for the child channel.
    pub child_avatar: Avatar,
    /// Per-channel voices.
    pub voice: VoiceSettings,
    /// Scenes in playback order.
    pub scenes: Vec<Scene>,
}

/// One scene: the intro or one document section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Stable identifier (`intro`, `scene-01`, …).
    pub id: String,
    /// Section heading; empty for an untitled section.
    pub title: String,
    /// Lines in order.
    pub lines: Vec<ScriptLine>,
}

/// A single spoken line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptLine {
    /// Plain text to speak.
    pub say: String,
    /// Channel that speaks it.
    pub speaker: Channel,
    /// Pause after the line, in seconds.
    pub pause_sec: f64,
}

/// Video dimensions and background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct VideoSettings {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Frames per second.
    pub fps: u32,
    /// Background colour or image path.
    pub background: String,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 30,
            background: "#f4efe6".to_string(),
        }
    }
}

/// An on-screen avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    /// Display name.
    pub name: String,
    /// Image path.
    pub image: String,
    /// Screen side (`left` or `right`).
    pub position: String,
}

impl Avatar {
    fn main() -> Self {
        Self {
            name: "narrator".to_string(),
            image: "avatars/main.png".to_string(),
            position: "right".to_string(),
        }
    }

    fn child() -> Self {
        Self {
            name: "child".to_string(),
            image: "avatars/child.png".to_string(),
            position: "left".to_string(),
        }
    }
}

/// Avatar as written in config. Unset fields keep the channel's defaults.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct AvatarPatch {
    name: Option<String>,
    image: Option<String>,
    position: Option<String>,
}

impl AvatarPatch {
    fn apply(self, base: Avatar) -> Avatar {
        Avatar {
            name: self.name.unwrap_or(base.name),
            image: self.image.unwrap_or(base.image),
            position: self.position.unwrap_or(base.position),
        }
    }
}

fn main_avatar<'de, D: Deserializer<'de>>(de: D) -> Result<Avatar, D::Error> {
    AvatarPatch::deserialize(de).map(|patch| patch.apply(Avatar::main()))
}

fn child_avatar<'de, D: Deserializer<'de>>(de: D) -> Result<Avatar, D::Error> {
    AvatarPatch::deserialize(de).map(|patch| patch.apply(Avatar::child()))
}

/// Voice settings for both channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceSettings {
    /// Main channel voice.
    #[serde(deserialize_with = "main_voice")]
    pub main: Voice,
    /// Child channel voice.
    #[serde(deserialize_with = "child_voice")]
    pub child: Voice,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            main: Voice::main(),
            child: Voice::child(),
        }
    }
}

/// One narrator voice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Narrator identifier understood by the tool.
    pub narrator: String,
    /// Speaking rate multiplier.
    pub speed: f64,
    /// Pitch shift.
    pub pitch: f64,
}

impl Voice {
    fn main() -> Self {
        Self {
            narrator: "default".to_string(),
            speed: 1.0,
            pitch: 0.0,
        }
    }

    fn child() -> Self {
        Self {
            narrator: "child".to_string(),
            speed: 1.1,
            pitch: 0.15,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VoicePatch {
    narrator: Option<String>,
    speed: Option<f64>,
    pitch: Option<f64>,
}

impl VoicePatch {
    fn apply(self, base: Voice) -> Voice {
        Voice {
            narrator: self.narrator.unwrap_or(base.narrator),
            speed: self.speed.unwrap_or(base.speed),
            pitch: self.pitch.unwrap_or(base.pitch),
        }
    }
}

fn main_voice<'de, D: Deserializer<'de>>(de: D) -> Result<Voice, D::Error> {
    VoicePatch::deserialize(de).map(|patch| patch.apply(Voice::main()))
}

fn child_voice<'de, D: Deserializer<'de>>(de: D) -> Result<Voice, D::Error> {
    VoicePatch::deserialize(de).map(|patch| patch.apply(Voice::child()))
}

/// Everything the exporter needs besides the documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSettings {
    /// Speakers whose names start with this go to the child channel.
    pub child_prefix: String,
    /// Pause after each line.
    pub pause_sec: f64,
    /// Pause after each intro line.
    pub intro_pause_sec: f64,
    /// Video settings copied into every script.
    pub video: VideoSettings,
    /// Main channel avatar.
    #[serde(deserialize_with = "main_avatar")]
    pub main_avatar: Avatar,
    /// Child channel avatar.
    #[serde(deserialize_with = "child_avatar")]
    pub child_avatar: Avatar,
    /// Per-channel voices.
    pub voice: VoiceSettings,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            child_prefix: "Chibi".to_string(),
            pause_sec: 0.5,
            intro_pause_sec: 1.0,
            video: VideoSettings::default(),
            main_avatar: Avatar::main(),
            child_avatar: Avatar::child(),
            voice: VoiceSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: ScriptSettings =
            serde_yaml::from_str("child_prefix: Kid\nvideo:\n  fps: 60\n").unwrap();
        assert_eq!(settings.child_prefix, "Kid");
        assert_eq!(settings.video.fps, 60);
        assert_eq!(settings.video.width, 1920);
        assert_eq!(settings.child_avatar.position, "left");
        assert_eq!(settings.voice.child.narrator, "child");
    }

    #[test]
    fn test_partial_avatar_keeps_channel_defaults() {
        let settings: ScriptSettings =
            serde_yaml::from_str("child_avatar:\n  name: Mio\nmain_avatar:\n  image: me.png\n")
                .unwrap();
        assert_eq!(
            settings.child_avatar,
            Avatar {
                name: "Mio".to_string(),
                image: "avatars/child.png".to_string(),
                position: "left".to_string(),
            }
        );
        assert_eq!(settings.main_avatar.name, "narrator");
        assert_eq!(settings.main_avatar.image, "me.png");
        assert_eq!(settings.main_avatar.position, "right");
    }

    #[test]
    fn test_partial_voice_keeps_channel_defaults() {
        let settings: ScriptSettings =
            serde_yaml::from_str("voice:\n  child:\n    speed: 1.3\n").unwrap();
        assert_eq!(settings.voice.child.narrator, "child");
        assert!((settings.voice.child.speed - 1.3).abs() < f64::EPSILON);
        assert!((settings.voice.child.pitch - 0.15).abs() < f64::EPSILON);
        assert_eq!(settings.voice.main.narrator, "default");
    }

    #[test]
    fn test_nested_typo_rejected() {
        assert!(serde_yaml::from_str::<ScriptSettings>("video:\n  fsp: 60\n").is_err());
        assert!(serde_yaml::from_str::<ScriptSettings>("child_avatar:\n  nmae: Mio\n").is_err());
    }

    #[test]
    fn test_line_serializes_camel_case() {
        let line = ScriptLine {
            say: "hi".to_string(),
            speaker: Channel::Child,
            pause_sec: 0.5,
        };
        let yaml = serde_yaml::to_string(&line).unwrap();
        assert_eq!(yaml, "say: hi\nspeaker: child\npauseSec: 0.5\n");
    }
}
