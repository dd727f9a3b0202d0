pub mod models;
pub mod views;
pub mod controllers;
pub mod cli;
pub mod error;
pub mod logging;

// Re-exports for convenience
pub use models::{Author, BlockKind, CommentList, Config, ContentBlock, Locale, PostProps, PostView};
pub use controllers::start_app;
