use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid frames per second: {0} (must be positive and finite)")]
    InvalidFrameRate(f64),
    #[error("invalid video bitrate: {0} (must be greater than zero)")]
    InvalidVideoBitrate(u32),
    #[error("invalid audio bitrate: {0} (must be greater than zero)")]
    InvalidAudioBitrate(u32),
    #[error("failed to read settings file: {0}")]
    ReadError(String),
    #[error("failed to write settings file: {0}")]
    WriteError(String),
    #[error("failed to parse settings file: {0}")]
    ParseError(String),
    #[error("failed to serialize settings: {0}")]
    SerializeError(String),
}
