//! Reading atomic weight datasets.
//!
//! A dataset is plain text with one element per line:
//!
//! ```text
//! # comment
//! full_name,atomic_number,symbol,default_mass[,isotope_symbol,mass]*
//! ```
//!
//! [`record`] splits lines into fields, [`reader`] validates each record into
//! an [`Element`](crate::Element) and aggregates the result.

pub mod error;
pub mod reader;
pub mod record;

pub use error::Error;
pub use reader::{read, read_file, read_str};
pub use record::{Record, Records, records};
