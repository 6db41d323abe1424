//! Input module - initial ages from text.
//!
//! The accepted format is one or more lines of comma-separated integers, for
//! example `3,4,3,1,2`. Values are returned as signed integers; range checks
//! belong to the bucket counter, which owns the bucket count.

pub mod parse;

pub use parse::{parse_line, read_ages, ParseAgesError};
