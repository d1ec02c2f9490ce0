mod banner;
mod error;
mod tables;

use std::io::{self, IsTerminal};

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use tables::{print_constants, print_table_summary};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}
