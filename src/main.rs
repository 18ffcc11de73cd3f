mod cli;

use clap::{Parser, Subcommand};

use cli::check::{cmd_check, CheckArgs};
use cli::process::{cmd_process, ProcessArgs};
use cli::shared::{cmd_shared, SharedArgs};

#[derive(Parser)]
#[command(
    name = "glslx",
    version,
    about = "Cross-API GLSL preprocessor: one shader source for every GPU backend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite shader sources into their cross-API form
    Process(ProcessArgs),
    /// Report constructs that are not cross-API compatible, without writing output
    Check(CheckArgs),
    /// Show the group-shared variables and the macro suffix they produce
    Shared(SharedArgs),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Process(args) => cmd_process(args),
        Command::Check(args) => cmd_check(args),
        Command::Shared(args) => cmd_shared(args),
    }
}
