//! Media settings for video recording
//!
//! The settings object is created once when a capture session is configured
//! and read many times by the session afterwards. Optional fields left absent
//! mean "use the platform default".

use crate::errors::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable media settings for a recording session.
///
/// Fields are private; once constructed there is no mutation path. Use
/// [`MediaSettings::new`] or [`MediaSettings::builder`] to create an instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediaSettings {
    /// Target frame rate of video being recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    frames_per_second: Option<f64>,
    /// Target bitrate of video being recorded, in bits per second
    #[serde(skip_serializing_if = "Option::is_none")]
    video_bitrate: Option<u32>,
    /// Target bitrate of audio being recorded, in bits per second
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_bitrate: Option<u32>,
    /// Whether audio is captured and encoded
    enable_audio: bool,
}

impl MediaSettings {
    /// Create media settings with explicit values for all four fields.
    ///
    /// Construction is pure assignment and never fails; use [`validate`] to
    /// check the numeric fields before handing the settings to a session.
    ///
    /// [`validate`]: MediaSettings::validate
    pub fn new(
        frames_per_second: Option<f64>,
        video_bitrate: Option<u32>,
        audio_bitrate: Option<u32>,
        enable_audio: bool,
    ) -> Self {
        Self {
            frames_per_second,
            video_bitrate,
            audio_bitrate,
            enable_audio,
        }
    }

    /// Start building media settings. The audio flag has no default and must
    /// be supplied up front.
    pub fn builder(enable_audio: bool) -> MediaSettingsBuilder {
        MediaSettingsBuilder::new(enable_audio)
    }

    /// Target recording frame rate, or `None` for the platform default.
    pub fn frames_per_second(&self) -> Option<f64> {
        self.frames_per_second
    }

    /// Target video bitrate in bits per second, or `None` for the platform default.
    pub fn video_bitrate(&self) -> Option<u32> {
        self.video_bitrate
    }

    /// Target audio bitrate in bits per second, or `None` for the platform default.
    pub fn audio_bitrate(&self) -> Option<u32> {
        self.audio_bitrate
    }

    /// Whether the recording pipeline captures and encodes audio.
    pub fn enable_audio(&self) -> bool {
        self.enable_audio
    }

    /// Validate the numeric fields.
    ///
    /// Present values must be strictly positive; the frame rate must also be
    /// finite. Absent fields always pass.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(fps) = self.frames_per_second {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(SettingsError::InvalidFrameRate(fps));
            }
        }
        if let Some(bitrate) = self.video_bitrate {
            if bitrate == 0 {
                return Err(SettingsError::InvalidVideoBitrate(bitrate));
            }
        }
        if let Some(bitrate) = self.audio_bitrate {
            if bitrate == 0 {
                return Err(SettingsError::InvalidAudioBitrate(bitrate));
            }
        }
        Ok(())
    }

    /// Load media settings from a TOML file.
    ///
    /// A missing file is not an error: the defaults are returned so a session
    /// can be configured without any settings file present.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Settings file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| SettingsError::ReadError(format!("{}: {}", path.display(), e)))?;

        let settings: MediaSettings =
            toml::from_str(&contents).map_err(|e| SettingsError::ParseError(e.to_string()))?;

        log::info!("Loaded media settings from {:?}", path);
        Ok(settings)
    }

    /// Save media settings to a TOML file, creating parent directories if needed.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::WriteError(format!("{}: {}", parent.display(), e)))?;
        }

        let toml_string =
            toml::to_string_pretty(self).map_err(|e| SettingsError::SerializeError(e.to_string()))?;

        fs::write(path, toml_string)
            .map_err(|e| SettingsError::WriteError(format!("{}: {}", path.display(), e)))?;

        log::info!("Saved media settings to {:?}", path);
        Ok(())
    }
}

impl Default for MediaSettings {
    /// Platform defaults for every numeric field, audio enabled.
    fn default() -> Self {
        Self::new(None, None, None, true)
    }
}

/// Builder producing an immutable [`MediaSettings`].
#[derive(Debug, Clone)]
pub struct MediaSettingsBuilder {
    frames_per_second: Option<f64>,
    video_bitrate: Option<u32>,
    audio_bitrate: Option<u32>,
    enable_audio: bool,
}

impl MediaSettingsBuilder {
    /// Start a builder with all numeric fields absent.
    pub fn new(enable_audio: bool) -> Self {
        Self {
            frames_per_second: None,
            video_bitrate: None,
            audio_bitrate: None,
            enable_audio,
        }
    }

    /// Set the target recording frame rate.
    pub fn with_frames_per_second(mut self, fps: f64) -> Self {
        self.frames_per_second = Some(fps);
        self
    }

    /// Set the target video bitrate in bits per second.
    pub fn with_video_bitrate(mut self, bitrate: u32) -> Self {
        self.video_bitrate = Some(bitrate);
        self
    }

    /// Set the target audio bitrate in bits per second.
    pub fn with_audio_bitrate(mut self, bitrate: u32) -> Self {
        self.audio_bitrate = Some(bitrate);
        self
    }

    /// Finish building. Never fails; see [`MediaSettings::validate`].
    pub fn build(self) -> MediaSettings {
        MediaSettings::new(
            self.frames_per_second,
            self.video_bitrate,
            self.audio_bitrate,
            self.enable_audio,
        )
    }
}
