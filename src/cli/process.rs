//! Command-line option dispatch
//!
//! Walks the argument vector the way awk does: options come first, then
//! either program files (`-f`) or the program text itself, then the
//! arguments that end up in `ARGV`. Each option is applied as soon as it is
//! seen, so `-v` assignments and `-W random` take effect before the program
//! is scanned.

use tracing::{debug, trace};

use crate::cli::abbrev::{atoi, have_value, parse_option, skip_value, Token};
use crate::cli::gate::{is_long_option, GateDecision, LongOptionPolicy};
use crate::cli::keywords::{WOption, W_OPTIONS};
use crate::cli::program::{ProgramFiles, ProgramSource};
use crate::diagnostics::Diagnostics;
use crate::errors::{Result, StartupError};
use crate::runtime::field::{rm_escape, FieldSeparator};
use crate::runtime::symtab::{Namespace, Symbol};
use crate::runtime::{Cell, Collaborators};

/// Long spellings other awks understand. They are still rejected, but with
/// a message saying so.
const SOFT_REJECTED: &[&str] = &["--lint", "--lint-old", "--posix", "--re-interval", "--traditional"];

/// Options that need a value
const VALUE_OPTIONS: &[u8] = b"WFvf";

/// Switches set by `-W` that the scanner and executor consult later
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub dump_code: bool,
    pub interactive: bool,
    pub posix_space: bool,
}

/// Everything needed to continue startup once options are done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: ProgramSource,
    /// Index of the first argument that becomes `ARGV[1]`
    pub args_start: usize,
    pub flags: Flags,
}

impl Invocation {
    /// The arguments after the program, in order
    pub fn arguments<'a>(&self, args: &'a [String]) -> &'a [String] {
        &args[self.args_start.min(args.len())..]
    }
}

/// How option processing ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    /// Continue with scanning and namespace seeding
    Run(Invocation),
    /// Nothing to run; exit successfully
    NoProgram,
    /// Usage was requested (or no arguments at all); print it and exit 0
    Usage,
}

/// Where a `-W` group left the scan
enum Group {
    Continue,
    /// `-W exec`: options end, `ARGV` starts at this index
    Stop(usize),
    Exit(Launch),
}

/// Option dispatcher for one command line
pub struct Dispatcher<'a, C: Collaborators + ?Sized> {
    args: &'a [String],
    policy: LongOptionPolicy,
    namespace: &'a mut Namespace,
    diagnostics: &'a mut Diagnostics,
    collaborators: &'a mut C,
    files: ProgramFiles,
    flags: Flags,
    long_option_warned: bool,
}

impl<'a, C: Collaborators + ?Sized> Dispatcher<'a, C> {
    pub fn new(
        args: &'a [String],
        policy: LongOptionPolicy,
        namespace: &'a mut Namespace,
        diagnostics: &'a mut Diagnostics,
        collaborators: &'a mut C,
    ) -> Self {
        Self {
            args,
            policy,
            namespace,
            diagnostics,
            collaborators,
            files: ProgramFiles::new(),
            flags: Flags::default(),
            long_option_warned: false,
        }
    }

    /// Process every option. `args[0]` is the invocation name.
    pub fn run(mut self) -> Result<Launch> {
        let args = self.args;
        let argc = args.len();
        if argc <= 1 {
            return Ok(Launch::Usage);
        }

        let mut i = 1;
        while i < argc && args[i].starts_with('-') {
            let arg = args[i].as_str();
            trace!(index = i, arg, "option");

            if arg.len() == 1 {
                if self.files.is_empty() {
                    return Ok(Launch::NoProgram);
                }
                break;
            }

            if is_long_option(arg) {
                match self.policy.decide() {
                    GateDecision::Reject => return Err(bad_option(arg)),
                    GateDecision::Warn => {
                        // Only the first long option is reported
                        if !self.long_option_warned {
                            self.diagnostics.warn(format_args!("ignored option: {}", arg));
                            self.long_option_warned = true;
                        }
                        i += 1;
                        continue;
                    }
                    GateDecision::Skip => {
                        i += 1;
                        continue;
                    }
                    GateDecision::Dispatch => {}
                }
            }

            let letter = arg.as_bytes()[1];
            if !letter.is_ascii() {
                return Err(bad_option(arg));
            }

            let (value, next) = if arg.len() == 2 {
                if i == argc - 1 && letter != b'-' {
                    if VALUE_OPTIONS.contains(&letter) {
                        return Err(StartupError::MissingArgument(arg.to_string()));
                    }
                    return Err(bad_option(arg));
                }
                (args.get(i + 1).map_or("", String::as_str), i + 2)
            } else {
                (&arg[2..], i + 1)
            };

            match letter {
                b'W' => match self.implementation_options(value, next)? {
                    Group::Continue => {}
                    Group::Stop(start) => return Ok(self.finish(start)),
                    Group::Exit(launch) => return Ok(launch),
                },
                b'v' => self.assign(value)?,
                b'F' => self.field_separator(value)?,
                b'f' => {
                    debug!(file = value, "program file");
                    self.files.push(value);
                }
                b'-' => {
                    if arg.len() > 2 {
                        return Err(bad_option(arg));
                    }
                    i += 1;
                    break;
                }
                _ => return Err(bad_option(arg)),
            }
            i = next;
        }

        if !self.files.is_empty() {
            return Ok(self.finish(i));
        }
        // Program text on the command line
        match args.get(i) {
            None => Ok(Launch::NoProgram),
            Some(text) => Ok(Launch::Run(Invocation {
                program: ProgramSource::Inline(text.clone()),
                args_start: i + 1,
                flags: self.flags,
            })),
        }
    }

    fn finish(self, args_start: usize) -> Launch {
        Launch::Run(Invocation {
            program: ProgramSource::Files(self.files),
            args_start,
            flags: self.flags,
        })
    }

    /// Apply a comma-joined `-W` group. `next_arg` is the index of the
    /// argument after this option.
    fn implementation_options(&mut self, group: &str, next_arg: usize) -> Result<Group> {
        let mut at = 0;
        while let Some(parsed) = parse_option(W_OPTIONS, group, at) {
            let rest = &group[parsed.span.start..];
            let mut cursor = parsed.next;

            if let Token::Ambiguous { first, second, .. } = parsed.token {
                self.diagnostics
                    .warn(format_args!("? ambiguous -W value: {} vs {}", first, second));
            }

            match parsed.token.code() {
                None => self.diagnostics.warn(format_args!("vacuous option: -W {}", rest)),
                Some(WOption::Version) => self.collaborators.print_version(),
                #[cfg(feature = "binmode")]
                Some(WOption::Binmode) => {
                    let mode = numeric_value(group, &mut cursor, WOption::Binmode)?;
                    self.collaborators.set_binmode(mode as i32);
                }
                Some(WOption::Dump) => self.flags.dump_code = true,
                Some(WOption::Exec) => return self.exec(group, cursor, next_arg),
                Some(WOption::Interactive) => {
                    self.flags.interactive = true;
                    self.collaborators.set_interactive();
                }
                Some(WOption::PosixSpace) => self.flags.posix_space = true,
                Some(WOption::Random) => {
                    let seed = numeric_value(group, &mut cursor, WOption::Random)?;
                    self.collaborators.seed_random(seed as f64);
                }
                Some(WOption::Sprintf) => {
                    let size = numeric_value(group, &mut cursor, WOption::Sprintf)?;
                    if let Ok(size) = usize::try_from(size) {
                        self.collaborators.resize_format_buffer(size);
                    }
                }
                Some(WOption::Help | WOption::Usage) => return Ok(Group::Exit(Launch::Usage)),
            }

            while group.as_bytes().get(cursor) == Some(&b'=') {
                self.diagnostics
                    .warn(format_args!("unexpected option value {}", rest));
                cursor = skip_value(group, cursor);
            }
            at = cursor;
        }
        Ok(Group::Continue)
    }

    /// `-W exec`: the program file is the glued value or the next argument,
    /// and nothing after it is an option
    fn exec(&mut self, group: &str, cursor: usize, next_arg: usize) -> Result<Group> {
        if !self.files.is_empty() {
            return Err(StartupError::ExecWithProgramFile);
        }
        // Nothing after the option: no program, even with a glued value
        let Some(file) = self.args.get(next_arg) else {
            return Ok(Group::Exit(Launch::NoProgram));
        };
        if have_value(group, cursor) {
            self.files.push(&group[cursor + 1..]);
            return Ok(Group::Stop(next_arg));
        }
        self.files.push(file.as_str());
        Ok(Group::Stop(next_arg + 1))
    }

    /// `-v name=value`
    fn assign(&mut self, text: &str) -> Result<()> {
        let Some((name, raw)) = split_assignment(text) else {
            return Err(StartupError::ImproperAssignment(text.to_string()));
        };
        match self.namespace.find(name) {
            None | Some(Symbol::Var(_)) => {}
            Some(_) => return Err(StartupError::AssignmentClash(name.to_string())),
        }

        let value = rm_escape(raw);
        if name == "FS" {
            self.collaborators
                .set_field_separator(FieldSeparator::new(&value)?);
        }
        debug!(name, value = %value, "command line assignment");
        self.namespace.set_scalar(name, Cell::maybe_numeric(value));
        Ok(())
    }

    /// `-F sep`
    fn field_separator(&mut self, text: &str) -> Result<()> {
        let decoded = rm_escape(text);
        let separator = FieldSeparator::new(&decoded)?;
        debug!(fs = %decoded.escape_debug(), "field separator");
        self.namespace.set_scalar("FS", Cell::string(decoded));
        self.collaborators.set_field_separator(separator);
        Ok(())
    }
}

/// The number after `=` in `name=N`; moves `cursor` past it
fn numeric_value(group: &str, cursor: &mut usize, option: WOption) -> Result<i64> {
    if !have_value(group, *cursor) {
        return Err(StartupError::MissingValue(option.spelling()));
    }
    let value = atoi(&group[*cursor + 1..]);
    *cursor = skip_value(group, *cursor);
    Ok(value)
}

/// Split `name=value` where `name` is an identifier
fn split_assignment(text: &str) -> Option<(&str, &str)> {
    let (name, value) = text.split_once('=')?;
    let mut bytes = name.bytes();
    let first = bytes.next()?;
    let is_ident = (first.is_ascii_alphabetic() || first == b'_')
        && bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_');
    is_ident.then_some((name, value))
}

fn bad_option(arg: &str) -> StartupError {
    if SOFT_REJECTED.contains(&arg) {
        StartupError::UnsupportedOption(arg.to_string())
    } else {
        StartupError::NotAnOption(arg.to_string())
    }
}
