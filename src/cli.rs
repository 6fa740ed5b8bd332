// Author: Dustin Pilgrim
// License: MIT

use clap::Parser;

/// Flags for the scripted entry path.
///
/// The five action flags are mutually exclusive, but the exclusivity is
/// enforced by the orchestrator rather than clap so the diagnostic and
/// exit code stay ours. `-h` belongs to hibernate, so auto-help is
/// rebound to `--help` only.
#[derive(Parser, Debug)]
#[command(
    name = "egress-command",
    version = env!("CARGO_PKG_VERSION"),
    about = "Scripted session termination, no prompt",
    disable_help_flag = true
)]
pub struct CommandArgs {
    #[arg(short = 'l', long, action)]
    pub logout: bool,

    #[arg(short = 'p', long, action)]
    pub poweroff: bool,

    #[arg(short = 'r', long, action)]
    pub reboot: bool,

    #[arg(short = 'h', long, action)]
    pub hibernate: bool,

    #[arg(short = 's', long, action)]
    pub suspend: bool,

    /// Milliseconds to wait before dispatching; zero or less dispatches
    /// immediately.
    #[arg(
        short = 'd',
        long,
        value_name = "MILLISECONDS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub delay: i64,

    #[arg(short = 'v', long, action)]
    pub verbose: bool,

    #[arg(long, action = clap::ArgAction::Help, help = "Print help")]
    pub help: Option<bool>,
}

/// Flags for the interactive prompt binary.
#[derive(Parser, Debug)]
#[command(
    name = "egress",
    version = env!("CARGO_PKG_VERSION"),
    about = "Session termination prompt"
)]
pub struct PromptArgs {
    #[arg(short, long, action)]
    pub verbose: bool,
}
