pub mod api;
pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod form;
pub mod presenter;
pub mod summary;

pub use api::{GenerationRequest, GenerationResponse, HttpStoryApi, StoryApi};
pub use config::{ClientConfig, FormDefaults};
pub use console::ConsolePresenter;
pub use controller::{ClientController, SubmitOutcome};
pub use error::ClientError;
pub use form::FormFields;
pub use presenter::{Clipboard, HealthState, MemoryClipboard, Presenter};
