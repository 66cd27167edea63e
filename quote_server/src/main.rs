//! Quotes HTTP server binary.
//!
//! Builds the `QuoteStore` once, hands it to the router as shared state, and serves
//! until Ctrl+C. Failing to bind the listen address is the only fatal error.
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quote_common::Result;
use quote_server::args::Args;
use quote_server::{QuoteStore, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let store = if args.empty {
        QuoteStore::default()
    } else {
        QuoteStore::seeded()
    };
    info!("Store ready with {} quotes", store.len()?);

    let app = build_router(Arc::new(store));
    let listener = TcpListener::bind(args.bind_address()).await?;
    info!("Server is running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
