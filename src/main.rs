// Author: Dustin Pilgrim
// License: MIT

use clap::Parser;

use egress::{app, cli, log};

type AnyError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), AnyError> {
    let args = cli::PromptArgs::parse();
    log::init(args.verbose);

    if let Err(e) = app::prompt::run().await {
        eprintln!("egress: {e}");
        std::process::exit(1);
    }

    Ok(())
}
