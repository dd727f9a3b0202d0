pub mod post;
pub mod comments;
pub mod post_view;
pub mod config;
pub mod locale;

// Re-export important structs for convenience
pub use post::{Author, BlockKind, ContentBlock, PostProps};
pub use comments::CommentList;
pub use post_view::{PostView, SubmitOutcome};
pub use config::Config;
pub use locale::Locale;
