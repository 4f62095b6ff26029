//! Immutable media settings for camera video recording
//!
//! This crate provides the configuration value object a camera plugin hands to
//! its capture session: target frame rate, video bitrate, audio bitrate, and
//! whether audio is recorded. The three numeric fields are optional; leaving
//! one absent tells the session to use the platform default.
//!
//! The settings are immutable after construction, so sharing them across
//! threads needs no locking.
//!
//! # Usage
//! ```rust
//! use media_settings::MediaSettings;
//!
//! let settings = MediaSettings::builder(true)
//!     .with_frames_per_second(30.0)
//!     .with_video_bitrate(2_000_000)
//!     .with_audio_bitrate(128_000)
//!     .build();
//!
//! assert_eq!(settings.frames_per_second(), Some(30.0));
//! settings.validate().expect("positive values validate");
//! ```
pub mod errors;
pub mod settings;

// Re-exports for convenience
pub use errors::SettingsError;
pub use settings::{MediaSettings, MediaSettingsBuilder};

/// Initialize logging for the settings layer
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "media_settings=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
