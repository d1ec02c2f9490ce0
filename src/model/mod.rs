//! Core data structures of the atomic weight tables.
//!
//! - [`element`] – Validated elements and their isotopic replacements.
//! - [`constants`] – Fixed physical constants exposed next to the tables.

pub mod constants;
pub mod element;
