use clap::Parser;
use product_catalog::cli::{self, Cli};
use product_catalog::lifecycle::tracing::setup_cli_tracing;

#[tokio::main]
async fn main() {
    setup_cli_tracing();
    let code = cli::run(Cli::parse()).await;
    std::process::exit(code);
}
