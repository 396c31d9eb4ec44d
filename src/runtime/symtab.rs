//! Global variable namespace

use std::collections::HashMap;

use tracing::trace;

#[cfg(feature = "no-leaks")]
use crate::runtime::leaks::ArrayRegistry;
use crate::runtime::array::ArrayRef;
use crate::runtime::cell::Cell;

/// What a global name is bound to
#[derive(Debug, Clone)]
pub enum Symbol {
    Keyword,
    Builtin,
    Var(Cell),
    Array(ArrayRef),
}

const KEYWORDS: &[&str] = &[
    "BEGIN", "END", "function", "getline", "if", "else", "while", "for", "do", "break",
    "continue", "next", "nextfile", "exit", "return", "delete", "in", "print", "printf",
];

const BUILTIN_FUNCTIONS: &[&str] = &[
    "length", "substr", "index", "split", "sub", "gsub", "match", "sprintf", "sin", "cos",
    "atan2", "exp", "log", "int", "sqrt", "rand", "srand", "tolower", "toupper", "system",
    "close", "fflush",
];

/// Builtin variables and their initial values
fn builtin_vars() -> [(&'static str, Cell); 13] {
    [
        ("NR", Cell::Double(0.0)),
        ("FNR", Cell::Double(0.0)),
        ("NF", Cell::Double(0.0)),
        ("ARGC", Cell::Double(0.0)),
        ("RSTART", Cell::Double(0.0)),
        ("RLENGTH", Cell::Double(-1.0)),
        ("FS", Cell::string(" ")),
        ("OFS", Cell::string(" ")),
        ("RS", Cell::string("\n")),
        ("ORS", Cell::string("\n")),
        ("SUBSEP", Cell::string("\x1c")),
        ("CONVFMT", Cell::string("%.6g")),
        ("OFMT", Cell::string("%.6g")),
    ]
}

/// Symbol table holding every global name
#[derive(Debug)]
pub struct Namespace {
    symbols: HashMap<String, Symbol>,
    #[cfg(feature = "no-leaks")]
    registry: ArrayRegistry,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// A namespace preloaded with keywords, builtin functions and builtin
    /// variables
    pub fn new() -> Self {
        let mut symbols = HashMap::new();
        for name in KEYWORDS {
            symbols.insert(name.to_string(), Symbol::Keyword);
        }
        for name in BUILTIN_FUNCTIONS {
            symbols.insert(name.to_string(), Symbol::Builtin);
        }
        for (name, cell) in builtin_vars() {
            symbols.insert(name.to_string(), Symbol::Var(cell));
        }
        Self {
            symbols,
            #[cfg(feature = "no-leaks")]
            registry: ArrayRegistry::new(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Value of a scalar variable
    pub fn scalar(&self, name: &str) -> Option<&Cell> {
        match self.symbols.get(name) {
            Some(Symbol::Var(cell)) => Some(cell),
            _ => None,
        }
    }

    /// Handle to an array variable
    pub fn array(&self, name: &str) -> Option<ArrayRef> {
        match self.symbols.get(name) {
            Some(Symbol::Array(array)) => Some(ArrayRef::clone(array)),
            _ => None,
        }
    }

    /// Bind `name` to a scalar, replacing whatever was there
    pub fn set_scalar(&mut self, name: &str, cell: Cell) {
        trace!(name, ?cell, "set scalar");
        self.symbols.insert(name.to_string(), Symbol::Var(cell));
    }

    /// Bind `name` to an array, replacing whatever was there
    pub fn insert_array(&mut self, name: &str, array: ArrayRef) {
        trace!(name, len = array.borrow().len(), "insert array");
        self.symbols.insert(name.to_string(), Symbol::Array(array));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    #[cfg(feature = "no-leaks")]
    pub fn registry(&mut self) -> &mut ArrayRegistry {
        &mut self.registry
    }

    /// Clear every registered array; intended to run once at exit
    #[cfg(feature = "no-leaks")]
    pub fn release_arrays(&mut self) {
        self.registry.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::array::Array;

    #[test]
    fn test_new_has_builtins() {
        let ns = Namespace::new();
        assert!(matches!(ns.find("BEGIN"), Some(Symbol::Keyword)));
        assert!(matches!(ns.find("length"), Some(Symbol::Builtin)));
        assert_eq!(ns.scalar("FS"), Some(&Cell::string(" ")));
        assert_eq!(ns.scalar("ARGC"), Some(&Cell::Double(0.0)));
        assert!(ns.find("ARGV").is_none());
        assert!(ns.find("ENVIRON").is_none());
    }

    #[test]
    fn test_array_replaces_scalar() {
        let mut ns = Namespace::new();
        ns.set_scalar("ARGV", Cell::maybe_numeric("1"));
        let array = Array::new_ref();
        array.borrow_mut().insert(0usize, Cell::string("rawk"));
        ns.insert_array("ARGV", array);
        assert!(ns.scalar("ARGV").is_none());
        assert_eq!(ns.array("ARGV").map(|a| a.borrow().len()), Some(1));
    }
}
