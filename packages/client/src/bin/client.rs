//! Hall booking form helper.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hallbook-client -- quote --start 2024-01-01T10:00 --end 2024-01-01T12:30 --rate 100
//! cargo run --bin hallbook-client -- check --hall-id 3 --start 2024-01-01T10:00 --end 2024-01-01T12:00 --cookie "csrftoken=..."
//! ```

use clap::Parser;
use hallbook_client::Cli;
use hallbook_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    if let Err(e) = hallbook_client::run_client(cli).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
