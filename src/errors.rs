//! Error types for rawk
//!
//! Every variant is a fatal startup diagnostic: the message is written to
//! stderr prefixed with the program name and the process exits with 2.

use thiserror::Error;

/// Main error type for rawk startup
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("option {0} lacks argument")]
    MissingArgument(String),

    #[error("not an option: {0}")]
    NotAnOption(String),

    /// Long spellings other awks accept; still fatal, with a softer message
    #[error("not an option: {0} (recognized but unsupported)")]
    UnsupportedOption(String),

    #[error("improper assignment: -v {0}")]
    ImproperAssignment(String),

    #[error("cannot command line assign to {0}\n\ttype clash or keyword")]
    AssignmentClash(String),

    #[error("-W exec is incompatible with -f")]
    ExecWithProgramFile,

    #[error("missing value for -W {0}")]
    MissingValue(&'static str),

    #[error("bad field separator {pattern:?}: {source}")]
    FieldSeparator {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("couldn't open file {name}: {source}")]
    ProgramFile {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StartupError>;
