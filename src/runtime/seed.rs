//! Seeding ARGV, ARGC and ENVIRON into the global namespace

use tracing::debug;

use crate::runtime::array::{Array, ArrayRef};
use crate::runtime::cell::Cell;
use crate::runtime::symtab::Namespace;

pub const ARGV: &str = "ARGV";
pub const ARGC: &str = "ARGC";
pub const ENVIRON: &str = "ENVIRON";

/// `ARGV[0]` is the program name as a fixed string; the remaining
/// arguments may later be read as numbers. `ARGC` counts every entry,
/// including index 0.
pub fn set_argv<S: AsRef<str>>(namespace: &mut Namespace, program_name: &str, rest: &[S]) -> ArrayRef {
    let argv = Array::new_ref();
    let count = {
        let mut array = argv.borrow_mut();
        array.insert(0usize, Cell::string(program_name));
        for (index, arg) in rest.iter().enumerate() {
            array.insert(index + 1, Cell::maybe_numeric(arg.as_ref()));
        }
        rest.len() + 1
    };
    debug!(argc = count, "seeded ARGV");

    register(namespace, &argv);
    namespace.insert_array(ARGV, ArrayRef::clone(&argv));
    namespace.set_scalar(ARGC, Cell::Double(count as f64));
    argv
}

/// Mirror `NAME=VALUE` entries into `ENVIRON`, splitting at the first `=`.
/// Entries without `=` are skipped.
pub fn load_environ<S: AsRef<str>>(namespace: &mut Namespace, entries: &[S]) -> ArrayRef {
    let environ = Array::new_ref();
    {
        let mut array = environ.borrow_mut();
        for entry in entries {
            if let Some((name, value)) = entry.as_ref().split_once('=') {
                array.insert(name, Cell::maybe_numeric(value));
            }
        }
    }
    debug!(count = environ.borrow().len(), "seeded ENVIRON");

    register(namespace, &environ);
    namespace.insert_array(ENVIRON, ArrayRef::clone(&environ));
    environ
}

#[cfg(feature = "no-leaks")]
fn register(namespace: &mut Namespace, array: &ArrayRef) {
    namespace.registry().register(array);
}

#[cfg(not(feature = "no-leaks"))]
fn register(_namespace: &mut Namespace, _array: &ArrayRef) {}
