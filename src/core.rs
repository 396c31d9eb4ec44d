//! Main execution logic
//!
//! `run` is what the binary calls: it loads configuration, processes the
//! command line, seeds `ARGV`, `ARGC` and `ENVIRON` and hands the program
//! to the scanner. [`startup`] does the same work against any
//! [`Collaborators`] implementation and returns the populated namespace.

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::cli::help::write_usage;
use crate::cli::process::{Dispatcher, Invocation, Launch};
use crate::config::Config;
use crate::context::Environment;
use crate::diagnostics::Diagnostics;
use crate::errors::Result;
use crate::runtime::array::Key;
use crate::runtime::seed::{load_environ, set_argv, ARGC, ARGV};
use crate::runtime::{Cell, Collaborators, Namespace, ProgramText, Runtime};
use crate::status::ExitStatus;

/// A command line that produced a program to run
#[derive(Debug)]
pub struct Session {
    pub namespace: Namespace,
    pub invocation: Invocation,
}

/// How startup ended
#[derive(Debug)]
pub enum Outcome {
    Ready(Session),
    NoProgram,
    Usage,
}

/// Main entry point - returns exit status
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(argv0) = args.first() {
        env.set_program_name(argv0);
    }

    let config = match Config::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: warning: {}", env.program_name, e);
            Config::from_env(&env)
        }
    };

    let mut runtime = Runtime::new(env.program_name.as_str());
    let mut diagnostics = Diagnostics::new(env.program_name.as_str());

    let session = match startup(&args, &env, &config, &mut runtime, &mut diagnostics) {
        Ok(Outcome::Ready(session)) => session,
        Ok(Outcome::NoProgram) => return ExitStatus::Success,
        Ok(Outcome::Usage) => {
            if let Err(e) = write_usage(&mut io::stderr()) {
                debug!(error = %e, "failed to write usage");
            }
            return ExitStatus::Success;
        }
        Err(e) => {
            diagnostics.fatal(&e);
            return ExitStatus::Error;
        }
    };

    debug!(
        interactive = runtime.is_interactive(),
        seed = ?runtime.seed(),
        format_buffer = runtime.format_buffer_len(),
        "runtime ready"
    );

    #[cfg_attr(not(feature = "no-leaks"), allow(unused_mut))]
    let mut namespace = session.namespace;

    if session.invocation.flags.dump_code {
        let mut stdout = io::stdout().lock();
        if let Err(e) = write_dump(&mut stdout, runtime.program(), &namespace) {
            diagnostics.fatal(&e);
            return ExitStatus::Error;
        }
    }

    #[cfg(feature = "no-leaks")]
    namespace.release_arrays();

    ExitStatus::Success
}

/// Process the command line and seed the namespace.
///
/// Program text is handed to `collaborators` only after `ARGV`, `ARGC` and
/// `ENVIRON` exist.
pub fn startup<C: Collaborators + ?Sized>(
    args: &[String],
    env: &Environment,
    config: &Config,
    collaborators: &mut C,
    diagnostics: &mut Diagnostics,
) -> Result<Outcome> {
    let mut namespace = Namespace::new();

    #[cfg(feature = "binmode")]
    if let Some(mode) = config.binmode {
        collaborators.set_binmode(mode);
    }

    debug!(policy = %config.long_options, argc = args.len(), "processing command line");
    let launch = Dispatcher::new(
        args,
        config.long_options,
        &mut namespace,
        diagnostics,
        collaborators,
    )
    .run()?;

    let invocation = match launch {
        Launch::Run(invocation) => invocation,
        Launch::NoProgram => {
            info!("no program given");
            return Ok(Outcome::NoProgram);
        }
        Launch::Usage => return Ok(Outcome::Usage),
    };

    let arguments = invocation.arguments(args);
    set_argv(&mut namespace, &env.program_name, arguments);
    load_environ(&mut namespace, env.entries.as_slice());
    if !diagnostics.is_empty() {
        warn!(count = diagnostics.messages().len(), "startup finished with diagnostics");
    }

    collaborators.begin_scanning(&invocation.program)?;

    Ok(Outcome::Ready(Session {
        namespace,
        invocation,
    }))
}

/// `-W dump`: the loaded program text with line numbers, then the seeded
/// command-line arguments. Arguments that read as numbers are marked
/// `(strnum)`.
pub fn write_dump(out: &mut dyn Write, program: &[ProgramText], namespace: &Namespace) -> io::Result<()> {
    for segment in program {
        writeln!(out, "# program: {}", segment.origin.as_deref().unwrap_or("command line"))?;
        for (number, line) in segment.text.lines().enumerate() {
            writeln!(out, "{:6}\t{}", number + 1, line)?;
        }
    }

    if let Some(argc) = namespace.scalar(ARGC) {
        writeln!(out, "# ARGC = {}", argc)?;
    }
    if let Some(argv) = namespace.array(ARGV) {
        for (index, cell) in argv.borrow().indexed() {
            match cell.clone().check_strnum() {
                Cell::StrNum(text, _) => {
                    writeln!(out, "# ARGV[{}] = {} (strnum)", Key::Int(index), text)?
                }
                _ => writeln!(out, "# ARGV[{}] = {}", Key::Int(index), cell)?,
            }
        }
    }
    Ok(())
}
