use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Drawing surface error: {0}")]
    Surface(String),
    #[error("Extension '{name}' failed: {message}")]
    Extension { name: String, message: String },
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl RenderError {
    pub fn extension(name: impl Into<String>, message: impl Into<String>) -> Self {
        RenderError::Extension {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
