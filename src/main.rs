use anyhow::Result;
use swipelist::config::Config;
use swipelist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
