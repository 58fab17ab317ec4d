use anyhow::Result;
use transcription_configuration::{load_config, setup_logging};
use transcription_setup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    setup_logging(&config);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "transcription service starting");
    let server_config = config.server.clone();
    let app = Application::new(config).await?;
    app.run(server_config).await?;
    Ok(())
}
