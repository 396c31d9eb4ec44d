//! Interpreter-side state touched during startup
//!
//! The option dispatcher never reaches into the scanner, the random number
//! generator or the output streams directly. It goes through
//! [`Collaborators`], which [`Runtime`] implements for the real binary.

pub mod array;
pub mod cell;
pub mod field;
#[cfg(feature = "no-leaks")]
pub mod leaks;
pub mod seed;
pub mod symtab;

use std::fs;
use std::io::{self, Read, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::cli::help::version_text;
use crate::cli::program::ProgramSource;
use crate::errors::{Result, StartupError};

pub use array::{Array, ArrayRef, Key};
pub use cell::Cell;
pub use field::{rm_escape, FieldSeparator};
pub use symtab::{Namespace, Symbol};

/// Size of the default sprintf buffer; requests below this are ignored
pub const SPRINTF_LIMIT: usize = 8192;

/// Services the option dispatcher hands work to
pub trait Collaborators {
    /// `-W version`
    fn print_version(&mut self);

    /// `-W random=N`
    fn seed_random(&mut self, seed: f64);

    /// `-W sprintf=N`; the buffer only ever grows
    fn resize_format_buffer(&mut self, bytes: usize);

    /// `-W interactive`: unbuffered output, line-buffered input
    fn set_interactive(&mut self);

    /// `-W binmode=N` or `MAWKBINMODE`
    #[cfg(feature = "binmode")]
    fn set_binmode(&mut self, mode: i32);

    /// A new `FS` value, already cast for splitting
    fn set_field_separator(&mut self, separator: FieldSeparator);

    /// Hand the program source to the scanner
    fn begin_scanning(&mut self, source: &ProgramSource) -> Result<()>;
}

/// One piece of loaded program text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramText {
    /// File name, or `None` for command-line text
    pub origin: Option<String>,
    pub text: String,
}

/// Production collaborator used by the binary
pub struct Runtime {
    program_name: String,
    rng: StdRng,
    seed: Option<f64>,
    format_buffer: Vec<u8>,
    interactive: bool,
    #[cfg(feature = "binmode")]
    binmode: i32,
    field_separator: FieldSeparator,
    program: Vec<ProgramText>,
    out: Box<dyn Write>,
}

impl Runtime {
    /// Runtime writing version output to stdout
    pub fn new(program_name: impl Into<String>) -> Self {
        Self::with_output(program_name, Box::new(io::stdout()))
    }

    pub fn with_output(program_name: impl Into<String>, out: Box<dyn Write>) -> Self {
        Self {
            program_name: program_name.into(),
            rng: StdRng::from_os_rng(),
            seed: None,
            format_buffer: vec![0; SPRINTF_LIMIT],
            interactive: false,
            #[cfg(feature = "binmode")]
            binmode: 0,
            field_separator: FieldSeparator::default(),
            program: Vec::new(),
            out,
        }
    }

    /// The seed given with `-W random`, if any
    pub fn seed(&self) -> Option<f64> {
        self.seed
    }

    /// Next pseudo-random number in `[0, 1)`
    pub fn random(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    pub fn format_buffer_len(&self) -> usize {
        self.format_buffer.len()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[cfg(feature = "binmode")]
    pub fn binmode(&self) -> i32 {
        self.binmode
    }

    pub fn field_separator(&self) -> &FieldSeparator {
        &self.field_separator
    }

    /// Program text loaded by [`Collaborators::begin_scanning`]
    pub fn program(&self) -> &[ProgramText] {
        &self.program
    }

    fn load_file(name: &str) -> Result<String> {
        let to_error = |source| StartupError::ProgramFile {
            name: name.to_string(),
            source,
        };
        if name == "-" || name == "/dev/stdin" {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(to_error)?;
            Ok(text)
        } else {
            fs::read_to_string(name).map_err(to_error)
        }
    }
}

impl Collaborators for Runtime {
    fn print_version(&mut self) {
        let text = version_text(&self.program_name, self.format_buffer.len());
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            debug!(error = %e, "failed to write version text");
        }
    }

    fn seed_random(&mut self, seed: f64) {
        debug!(seed, "seeding random number generator");
        self.rng = StdRng::seed_from_u64(seed.to_bits());
        self.seed = Some(seed);
    }

    fn resize_format_buffer(&mut self, bytes: usize) {
        if bytes > self.format_buffer.len() {
            debug!(bytes, "growing sprintf buffer");
            self.format_buffer.resize(bytes, 0);
        }
    }

    fn set_interactive(&mut self) {
        self.interactive = true;
    }

    #[cfg(feature = "binmode")]
    fn set_binmode(&mut self, mode: i32) {
        self.binmode = mode;
    }

    fn set_field_separator(&mut self, separator: FieldSeparator) {
        self.field_separator = separator;
    }

    fn begin_scanning(&mut self, source: &ProgramSource) -> Result<()> {
        self.program = match source {
            ProgramSource::Inline(text) => vec![ProgramText {
                origin: None,
                text: text.clone(),
            }],
            ProgramSource::Files(files) => files
                .iter()
                .map(|name| {
                    Ok(ProgramText {
                        origin: Some(name.to_string()),
                        text: Self::load_file(name)?,
                    })
                })
                .collect::<Result<_>>()?,
        };
        info!(segments = self.program.len(), "program source loaded");
        Ok(())
    }
}
