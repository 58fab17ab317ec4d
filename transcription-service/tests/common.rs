use std::time::Duration;

use reqwest::Client;
use tokio::net::TcpListener;

use transcription_configuration::{AppConfig, ServerConfig};
use transcription_setup::build_and_run;

/// Starts the full service on a free local port with Workers AI pointed at
/// `provider_url`, and waits until `/health` answers.
pub async fn setup_test_server(
    provider_url: String,
) -> Result<(String, Client), Box<dyn std::error::Error>> {
    let port = TcpListener::bind("127.0.0.1:0").await?.local_addr()?.port();
    let server_config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port,
    };

    let mut config = AppConfig::default();
    config.server = server_config.clone();
    config.service.provider.base_url = provider_url;
    config.service.provider.account_id = "acct".to_string();
    config.service.provider.api_token = "token".to_string();
    config.service.provider.request_timeout_ms = 5_000;

    tokio::spawn(async move {
        if let Err(err) = build_and_run(config, server_config).await {
            eprintln!("test server exited: {err}");
        }
    });

    let base_url = format!("http://127.0.0.1:{port}");
    let client = Client::new();
    for _ in 0..50 {
        if client.get(format!("{base_url}/health")).send().await.is_ok() {
            return Ok((base_url, client));
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    Err("test server did not become ready".into())
}
