//! Environment struct (program name and process environment)

use std::ffi::OsString;

/// Execution environment captured once at startup
#[derive(Debug, Clone)]
pub struct Environment {
    /// argv[0] with any leading directories removed
    pub program_name: String,
    /// Raw `NAME=VALUE` entries of the process environment, in order
    pub entries: Vec<String>,
}

impl Environment {
    /// Snapshot the process environment
    pub fn init() -> Self {
        let entries = std::env::vars_os()
            .map(|(name, value)| join_entry(name, value))
            .collect();
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Build an environment from explicit entries (used by tests and embedders)
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Look up a variable by name; the first matching entry wins
    pub fn var(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| {
            let (key, value) = entry.split_once('=')?;
            (key == name).then_some(value)
        })
    }

    /// Set the display name from argv[0], stripping any path prefix
    pub fn set_program_name(&mut self, argv0: &str) {
        self.program_name = basename(argv0).to_string();
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            program_name: env!("CARGO_PKG_NAME").to_string(),
            entries: Vec::new(),
        }
    }
}

/// Everything after the last `/`
pub fn basename(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

fn join_entry(name: OsString, value: OsString) -> String {
    format!("{}={}", name.to_string_lossy(), value.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(basename("/usr/local/bin/rawk"), "rawk");
        assert_eq!(basename("rawk"), "rawk");
        assert_eq!(basename("bin/"), "");
    }

    #[test]
    fn test_var_lookup() {
        let env = Environment::from_entries(["A=1", "NOEQUALS", "B=x=y", "A=2"]);
        assert_eq!(env.var("A"), Some("1"));
        assert_eq!(env.var("B"), Some("x=y"));
        assert_eq!(env.var("NOEQUALS"), None);
        assert_eq!(env.var("C"), None);
    }

    #[test]
    fn test_set_program_name() {
        let mut env = Environment::default();
        env.set_program_name("./tools/awk");
        assert_eq!(env.program_name, "awk");
    }
}
