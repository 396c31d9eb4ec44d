//! `-W` implementation option keywords

/// A canonical option name and the code it resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword<C> {
    pub code: C,
    pub name: &'static str,
}

/// Implementation options accepted after `-W`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WOption {
    #[cfg(feature = "binmode")]
    Binmode,
    Version,
    Dump,
    Help,
    Interactive,
    Exec,
    Random,
    Sprintf,
    PosixSpace,
    Usage,
}

/// Table order decides which name wins an ambiguous abbreviation.
pub const W_OPTIONS: &[Keyword<WOption>] = &[
    Keyword { code: WOption::Version, name: "VERSION" },
    #[cfg(feature = "binmode")]
    Keyword { code: WOption::Binmode, name: "BINMODE" },
    Keyword { code: WOption::Dump, name: "DUMP" },
    Keyword { code: WOption::Help, name: "HELP" },
    Keyword { code: WOption::Interactive, name: "INTERACTIVE" },
    Keyword { code: WOption::Exec, name: "EXEC" },
    Keyword { code: WOption::Random, name: "RANDOM" },
    Keyword { code: WOption::Sprintf, name: "SPRINTF" },
    Keyword { code: WOption::PosixSpace, name: "POSIX_SPACE" },
    Keyword { code: WOption::Usage, name: "USAGE" },
];

impl WOption {
    /// Lower-case spelling used in diagnostics (`missing value for -W random`)
    pub fn spelling(self) -> &'static str {
        match self {
            #[cfg(feature = "binmode")]
            WOption::Binmode => "binmode",
            WOption::Version => "version",
            WOption::Dump => "dump",
            WOption::Help => "help",
            WOption::Interactive => "interactive",
            WOption::Exec => "exec",
            WOption::Random => "random",
            WOption::Sprintf => "sprintf",
            WOption::PosixSpace => "posix_space",
            WOption::Usage => "usage",
        }
    }
}
