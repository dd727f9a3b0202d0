use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostTuiError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Anyhow error: {0}")]
    Anyhow(String),
}

impl From<serde_json::Error> for PostTuiError {
    fn from(err: serde_json::Error) -> Self {
        PostTuiError::Json(err.to_string())
    }
}

impl From<io::Error> for PostTuiError {
    fn from(err: io::Error) -> Self {
        PostTuiError::Io(err.to_string())
    }
}

impl From<anyhow::Error> for PostTuiError {
    fn from(err: anyhow::Error) -> Self {
        // keep the whole context chain, not just the outermost message
        PostTuiError::Anyhow(format!("{:#}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn anyhow_conversion_keeps_context_chain() {
        let err: anyhow::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
            .context("Failed to open post document");
        let converted = PostTuiError::from(err.unwrap_err());
        assert_eq!(
            converted.to_string(),
            "Anyhow error: Failed to open post document: no such file"
        );
    }

    #[test]
    fn json_errors_are_wrapped() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(PostTuiError::from(err), PostTuiError::Json(_)));
    }
}
