pub mod app_controller;
pub mod post_controller;

// Re-export key functions
pub use app_controller::start_app;
pub use post_controller::{apply, map_key, Action, Flow};
