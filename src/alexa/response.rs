//! Spoken replies and their outbound platform envelope.
//!
//! This module provides the fixed utterances of the skill and the single
//! place where a reply is rendered to the JSON the platform expects.

use serde_json::{Map, Value, json};

use crate::errors::SkillError;

/// Longest plain-text output speech the platform accepts.
pub const MAX_SPEECH_CHARS: usize = 8000;

pub const HELP_SPEECH: &str = "Ask progressive space control how many astronauts are in space.";
pub const GOODBYE_SPEECH: &str = "Okay, talk to you later!";
pub const MISUNDERSTOOD_SPEECH: &str =
    "Sorry, I can not understand the command.  Please say again.";
pub const GENERIC_ERROR_SPEECH: &str =
    "Sorry, I could not reach space control right now. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenResponse {
    pub speech_text: String,
    pub should_end_session: bool,
    pub reprompt_text: Option<String>,
}

impl SpokenResponse {
    /// Speech that ends the session unless a reprompt is added.
    ///
    /// # Errors
    ///
    /// Returns `SkillError::Composition` if the text is blank or longer
    /// than [`MAX_SPEECH_CHARS`].
    pub fn speak(text: impl Into<String>) -> Result<Self, SkillError> {
        let speech_text = text.into();
        validate_speech(&speech_text)?;
        Ok(Self {
            speech_text,
            should_end_session: true,
            reprompt_text: None,
        })
    }

    /// Keeps the session open and asks again with `text`.
    ///
    /// # Errors
    ///
    /// Same rules as [`SpokenResponse::speak`].
    pub fn with_reprompt(mut self, text: impl Into<String>) -> Result<Self, SkillError> {
        let reprompt = text.into();
        validate_speech(&reprompt)?;
        self.reprompt_text = Some(reprompt);
        self.should_end_session = false;
        Ok(self)
    }

    /// Acknowledges a request without saying anything.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            speech_text: String::new(),
            should_end_session: true,
            reprompt_text: None,
        }
    }

    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.speech_text.is_empty() && self.reprompt_text.is_none()
    }

    #[must_use]
    pub fn help() -> Self {
        Self::fixed(HELP_SPEECH, Some(HELP_SPEECH), false)
    }

    #[must_use]
    pub fn goodbye() -> Self {
        Self::fixed(GOODBYE_SPEECH, None, true)
    }

    #[must_use]
    pub fn misunderstood() -> Self {
        Self::fixed(MISUNDERSTOOD_SPEECH, Some(MISUNDERSTOOD_SPEECH), false)
    }

    #[must_use]
    pub fn generic_error() -> Self {
        Self::fixed(GENERIC_ERROR_SPEECH, None, true)
    }

    // Static utterances are known-good, so they skip validation.
    fn fixed(speech: &str, reprompt: Option<&str>, should_end_session: bool) -> Self {
        Self {
            speech_text: speech.to_string(),
            should_end_session,
            reprompt_text: reprompt.map(ToString::to_string),
        }
    }

    /// Render the reply as the outbound response envelope.
    ///
    /// # Examples
    ///
    /// ```
    /// use space_control::alexa::response::SpokenResponse;
    ///
    /// let envelope = SpokenResponse::goodbye().to_envelope();
    /// assert_eq!(envelope["response"]["shouldEndSession"], true);
    /// ```
    #[must_use]
    pub fn to_envelope(&self) -> Value {
        let mut response = Map::new();

        if !self.is_silent() {
            response.insert("outputSpeech".into(), plain_text(&self.speech_text));
            if let Some(reprompt) = &self.reprompt_text {
                response.insert(
                    "reprompt".into(),
                    json!({ "outputSpeech": plain_text(reprompt) }),
                );
            }
            response.insert(
                "shouldEndSession".into(),
                Value::Bool(self.should_end_session),
            );
        }

        json!({
            "version": "1.0",
            "response": Value::Object(response)
        })
    }
}

fn plain_text(text: &str) -> Value {
    json!({ "type": "PlainText", "text": text })
}

fn validate_speech(text: &str) -> Result<(), SkillError> {
    if text.trim().is_empty() {
        return Err(SkillError::Composition("speech text is empty".to_string()));
    }
    let chars = text.chars().count();
    if chars > MAX_SPEECH_CHARS {
        return Err(SkillError::Composition(format!(
            "speech text is {chars} characters, limit is {MAX_SPEECH_CHARS}"
        )));
    }
    Ok(())
}
