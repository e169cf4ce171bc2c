use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{context, finalize, name};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "groundwork")]
#[command(version = VERSION)]
#[command(about = "Post-generation finishing for template-scaffolded repositories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full post-generation pipeline in a generated project
    Finalize(finalize::FinalizeArgs),
    /// Derive repository and package identifiers from a project name
    Name(name::NameArgs),
    /// Show the resolved generation context
    Context(context::ContextArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command);
    output::print_json_result(json_result);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
