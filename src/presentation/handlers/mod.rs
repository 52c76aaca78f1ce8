mod ask;
mod health;

pub use ask::{AskResponse, ErrorResponse, SourceResponse, ask_handler};
pub use health::health_handler;
