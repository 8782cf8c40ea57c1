use serde::Deserialize;

use crate::{
    api::{GenerationRequest, StoryLength},
    config::FormDefaults,
    error::ClientError,
};

/// Raw values of the story form controls, exactly as the user left them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub prompt: String,
    pub genre: String,
    /// Comma-separated character names.
    pub characters: String,
    pub setting: String,
    pub length: String,
    pub temperature: String,
    pub top_p: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self::with_defaults(&FormDefaults::default())
    }
}

impl FormFields {
    pub fn with_defaults(defaults: &FormDefaults) -> Self {
        Self {
            prompt: String::new(),
            genre: String::new(),
            characters: String::new(),
            setting: String::new(),
            length: defaults.length.clone(),
            temperature: defaults.temperature.clone(),
            top_p: defaults.top_p.clone(),
        }
    }

    /// Serializes the form into a request. Empty optional inputs are left out;
    /// the prompt is sent as typed and validated by the backend.
    pub fn to_request(&self) -> Result<GenerationRequest, ClientError> {
        Ok(GenerationRequest {
            prompt: self.prompt.clone(),
            genre: non_empty(&self.genre),
            characters: if self.characters.is_empty() {
                None
            } else {
                Some(split_characters(&self.characters))
            },
            setting: non_empty(&self.setting),
            length: StoryLength::from(self.length.as_str()),
            temperature: parse_float("temperature", &self.temperature)?,
            top_p: parse_float("top_p", &self.top_p)?,
        })
    }
}

/// Splits on commas and trims each name, keeping the original order.
pub fn split_characters(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_float(field: &str, raw: &str) -> Result<f64, ClientError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            ClientError::InvalidInput(format!("Некорректное значение {field}: {raw:?}"))
        })
}
