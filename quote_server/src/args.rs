//! Command-line arguments for the Quote Server.
use clap::Parser;
use quote_common::net::{BIND_HOST, SERVER_PORT, addr};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interface to listen on.
    #[clap(long, default_value = BIND_HOST)]
    pub host: String,

    /// TCP port to listen on.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// Start with an empty collection instead of the built-in quotes.
    #[clap(long)]
    pub empty: bool,
}

impl Args {
    /// Listen address as "host:port".
    pub fn bind_address(&self) -> String {
        addr(&self.host, self.port)
    }
}
