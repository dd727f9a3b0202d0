use anyhow::Result;
use chrono::Utc;
use tracing::info;

use posttui::cli::Flags;
use posttui::models::{Config, PostProps, PostView};
use posttui::views::html;

#[tokio::main]
async fn main() -> Result<()> {
    // Get Flags
    let flags = Flags::from_args();

    let log_path = posttui::logging::init()?;

    let mut config = Config::load()?;
    flags.apply_to(&mut config);
    info!(log = ?log_path, ?config, "starting");

    let props = match &config.post {
        Some(path) => PostProps::load(path)?,
        None => PostProps::sample(),
    };
    let view = PostView::new(props, config.locale);

    if flags.html() {
        println!("{}", html::render_post(&view, Utc::now()).into_string());
        return Ok(());
    }

    posttui::start_app(view, config).await?;
    Ok(())
}
