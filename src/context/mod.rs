//! Process context captured at startup

mod environment;

pub use environment::{basename, Environment};
