//! Domain types for semester selection

mod term;

pub use term::{Season, TermCode, TermOption};
