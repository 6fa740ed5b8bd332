// Author: Dustin Pilgrim
// License: MIT

use clap::error::ErrorKind;
use clap::Parser;

use egress::{app, cli, log};

#[tokio::main]
async fn main() {
    let args = match cli::CommandArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version are not failures; anything else exits 1
            // before any dispatch can happen.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    log::init(args.verbose);

    if let Err(e) = app::command::run(args).await {
        eprintln!("egress-command: {e}");
        std::process::exit(1);
    }
}
