//! Quality dimension tables, one sub-module per category.
//!
//! Categories are listed in declaration order; see [`crate::Registry::full`]
//! for the assembly sequence.

pub mod coordinate;
pub mod date;
pub mod scientific_name;
pub mod datum;
