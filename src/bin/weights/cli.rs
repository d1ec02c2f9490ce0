use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "weights",
    about = "Inspect and validate atomic weight tables",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Atomic weight data file (bundled dataset if omitted)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Suppress the banner and informational logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every element with its isotopic replacements
    #[command(visible_alias = "ls")]
    List,

    /// Look up an element or isotopic replacement
    ///
    /// QUERY may be an atomic number (26), an element symbol (Fe),
    /// a full name (iron) or an isotopic replacement symbol (57Fe).
    #[command(visible_alias = "s")]
    Show {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Validate an atomic weight data file
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the physical constants table
    Constants,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["weights", "show", "Fe", "--data", "w.dat", "-q"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.data, Some(PathBuf::from("w.dat")));
        assert!(matches!(cli.command, Command::Show { ref query } if query == "Fe"));
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Cli::try_parse_from(["weights", "check"]).is_err());
    }
}
