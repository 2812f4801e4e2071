use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse request envelope: {0}")]
    Envelope(String),

    #[error("Failed to enqueue progressive response directive: {0}")]
    Directive(String),

    #[error("Failed to fetch astronaut count: {0}")]
    Fetch(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to compose spoken response: {0}")]
    Composition(String),
}

impl From<reqwest::Error> for SkillError {
    fn from(error: reqwest::Error) -> Self {
        SkillError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SkillError {
    fn from(error: serde_json::Error) -> Self {
        SkillError::Envelope(error.to_string())
    }
}

impl From<url::ParseError> for SkillError {
    fn from(error: url::ParseError) -> Self {
        SkillError::Directive(format!("invalid API endpoint: {error}"))
    }
}

impl From<anyhow::Error> for SkillError {
    fn from(error: anyhow::Error) -> Self {
        SkillError::Composition(error.to_string())
    }
}
