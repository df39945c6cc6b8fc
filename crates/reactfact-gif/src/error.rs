use thiserror::Error;

#[derive(Debug, Error)]
pub enum GifError {
    #[error("GIF request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GIF provider answered {0}")]
    Status(reqwest::StatusCode),
}
