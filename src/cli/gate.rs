//! Long-option gate
//!
//! Options spelled with a leading `--` (other than the bare terminator) are
//! not part of the awk command line. What happens to them is a policy chosen
//! once at startup, normally from `MAWK_LONG_OPTIONS`.

use std::fmt;

/// How `--name` style options are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LongOptionPolicy {
    /// Fatal "not an option" diagnostic
    #[default]
    Reject,
    /// Non-fatal "ignored option" diagnostic, then skip the token
    Warn,
    /// Skip the token silently
    Ignore,
    /// Dispatch the token like any other option
    Allow,
}

/// What the dispatcher should do with one long token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Reject,
    Warn,
    Skip,
    Dispatch,
}

impl LongOptionPolicy {
    /// Only the first character is significant and it is case-sensitive;
    /// anything unrecognized means reject.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.and_then(|v| v.chars().next()) {
            Some('w') => LongOptionPolicy::Warn,
            Some('i') => LongOptionPolicy::Ignore,
            Some('a') => LongOptionPolicy::Allow,
            _ => LongOptionPolicy::Reject,
        }
    }

    pub fn decide(self) -> GateDecision {
        match self {
            LongOptionPolicy::Reject => GateDecision::Reject,
            LongOptionPolicy::Warn => GateDecision::Warn,
            LongOptionPolicy::Ignore => GateDecision::Skip,
            LongOptionPolicy::Allow => GateDecision::Dispatch,
        }
    }
}

impl fmt::Display for LongOptionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LongOptionPolicy::Reject => "error",
            LongOptionPolicy::Warn => "warn",
            LongOptionPolicy::Ignore => "ignore",
            LongOptionPolicy::Allow => "allow",
        };
        f.write_str(name)
    }
}

/// True for tokens the gate applies to: `--` followed by at least one byte
pub fn is_long_option(arg: &str) -> bool {
    arg.len() > 2 && arg.starts_with("--")
}
