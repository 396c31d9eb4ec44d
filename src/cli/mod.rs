//! CLI argument parsing and processing

pub mod abbrev;
pub mod gate;
pub mod help;
pub mod keywords;
pub mod process;
pub mod program;

// Re-exports
pub use gate::LongOptionPolicy;
pub use process::{Dispatcher, Flags, Invocation, Launch};
pub use program::{ProgramFiles, ProgramSource};
