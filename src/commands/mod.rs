pub mod context;
pub mod finalize;
pub mod name;

use crate::Commands;

/// Command handlers return their output plus the process exit code.
pub type CmdResult<T> = groundwork::Result<(T, i32)>;

pub fn run_json(command: Commands) -> (groundwork::Result<serde_json::Value>, i32) {
    match command {
        Commands::Finalize(args) => crate::output::map_cmd_result_to_json(finalize::run(&args)),
        Commands::Name(args) => crate::output::map_cmd_result_to_json(name::run(&args)),
        Commands::Context(args) => crate::output::map_cmd_result_to_json(context::run(&args)),
    }
}
