mod client;
mod types;

pub use client::{HttpStoryApi, StoryApi};
pub use types::{
    Categories, ErrorBody, GenerationMetadata, GenerationRequest, GenerationResponse,
    HEALTHY_STATUS, HealthStatus, StatisticsSnapshot, StoryLength,
};
