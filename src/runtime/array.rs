//! Associative arrays
//!
//! Keys are either integers or strings. A string that spells a canonical
//! integer ("12", "-3", not "012" or "+3") is stored as an integer key, so
//! `ARGV[1]` and `ARGV["1"]` name the same element.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::runtime::cell::Cell;

/// Shared handle to an array owned by the namespace
pub type ArrayRef = Rc<RefCell<Array>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as i64)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_int(s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_int(&s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{}", n),
            Key::Str(s) => f.write_str(s),
        }
    }
}

fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
        && s != "-0";
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Array {
    table: HashMap<Key, Cell>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh array in a shared handle
    pub fn new_ref() -> ArrayRef {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn get(&self, key: &Key) -> Option<&Cell> {
        self.table.get(key)
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: Cell) -> Option<Cell> {
        self.table.insert(key.into(), value)
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.table.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.table.shrink_to_fit();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Cell)> {
        self.table.iter()
    }

    /// Integer-keyed elements in ascending key order
    pub fn indexed(&self) -> Vec<(i64, &Cell)> {
        let mut items: Vec<_> = self
            .table
            .iter()
            .filter_map(|(key, cell)| match key {
                Key::Int(n) => Some((*n, cell)),
                Key::Str(_) => None,
            })
            .collect();
        items.sort_by_key(|(n, _)| *n);
        items
    }
}
