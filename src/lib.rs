//! Validated atomic weight tables for chemistry tooling.
//!
//! The crate loads a small periodic-table dataset (element names, symbols,
//! atomic numbers, default masses and optional isotopic replacements) from a
//! comma-separated text file, validates every record, and exposes the result
//! as read-only lookup tables next to a handful of physical constants.
//!
//! # Quick Start
//!
//! ```
//! use atomic_weights::{AtomicWeights, io};
//!
//! let table = io::read_str(
//!     "# name,Z,symbol,mass[,isotope,mass]*\n\
//!      hydrogen,1,H,1.00783,2H,2.0141,3H,3.0160\n\
//!      helium,2,He,4.00260 # noble gas\n",
//! )?;
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.default_mass(2), Some(4.00260));
//! assert_eq!(table.replacement_mass("2H"), Some(2.0141));
//! assert_eq!(table.replacement_atomic_number("3H"), Some(1));
//!
//! // The dataset shipped with the crate.
//! let bundled = AtomicWeights::bundled();
//! assert_eq!(bundled.element_by_number(6).unwrap().symbol(), "C");
//! # Ok::<(), io::Error>(())
//! ```
//!
//! # Failure Model
//!
//! Loading is all-or-nothing. The first malformed line or invalid field stops
//! the load with an [`io::Error`] naming the line and the offending value;
//! a partially built table is never returned.
//!
//! # Module Organization
//!
//! - [`io`] — Record parsing and dataset readers
//! - [`constants`] — Physical constants
//! - [`AtomicWeights`] — The aggregated lookup tables
//! - [`Element`] — One validated element with its isotopic replacements

mod model;
mod table;

pub mod io;

pub use model::constants;
pub use model::element::{
    Element, ElementError, FieldError, MAX_ATOMIC_NUMBER, MAX_MASS, MIN_ATOMIC_NUMBER, MIN_MASS,
    Replacement, ReplacementError,
};
pub use table::{AtomicWeights, MassSource};
