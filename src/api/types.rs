use serde::{Deserialize, Serialize};

pub const HEALTHY_STATUS: &str = "healthy";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setting: Option<String>,
    pub length: StoryLength,
    pub temperature: f64,
    pub top_p: f64,
}

/// Target story length. Values outside the known three are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoryLength {
    Short,
    Medium,
    Long,
    Other(String),
}

impl StoryLength {
    pub fn as_str(&self) -> &str {
        match self {
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
            StoryLength::Other(raw) => raw,
        }
    }
}

impl From<String> for StoryLength {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "short" => StoryLength::Short,
            "medium" => StoryLength::Medium,
            "long" => StoryLength::Long,
            _ => StoryLength::Other(raw),
        }
    }
}

impl From<&str> for StoryLength {
    fn from(raw: &str) -> Self {
        StoryLength::from(raw.to_string())
    }
}

impl From<StoryLength> for String {
    fn from(length: StoryLength) -> Self {
        match length {
            StoryLength::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub story: String,
    pub metadata: GenerationMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub length: StoryLength,
    pub word_count: u64,
    /// Seconds, as reported by the server.
    pub generation_time: f64,
    pub temperature: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

/// Health body. Only `status` decides the verdict; the other fields are kept
/// for diagnostics and never fail decoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.as_str() == Some(HEALTHY_STATUS)
    }

    /// Services reported as explicitly down (`false`).
    pub fn failing_services(&self) -> Vec<&str> {
        self.services
            .as_ref()
            .and_then(|services| services.as_object())
            .map(|services| {
                services
                    .iter()
                    .filter(|(_, up)| up.as_bool() == Some(false))
                    .map(|(name, _)| name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Any JSON value is a readable health body; non-objects read as degraded.
impl From<serde_json::Value> for HealthStatus {
    fn from(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub total_chunks: u64,
    pub embedding_model: String,
    pub llm_model: String,
    pub chunk_size: u64,
    pub chunk_overlap: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Categories {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Body of a non-2xx response. `detail` is either a message or a list of
/// validation entries carrying a `msg` each.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
            serde_json::Value::Array(entries) => {
                let messages: Vec<&str> = entries
                    .iter()
                    .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
