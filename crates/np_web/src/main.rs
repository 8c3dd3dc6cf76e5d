use clap::Parser;
use np_core::Result;
use np_news::GoogleNewsClient;
use np_web::{create_app, AppState};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Company news sentiment analysis API")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let state = AppState::new(Arc::new(GoogleNewsClient::new()));
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&cli.addr).await?;
    info!("🚀 Listening on {}", cli.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
