pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `groundwork::pipeline` instead of `groundwork::core::pipeline`
pub use core::*;
pub use utils::*;
