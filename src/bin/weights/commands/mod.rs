mod check;
mod constants;
mod list;
mod show;

use std::path::Path;

use anyhow::{Context, Result};

use atomic_weights::AtomicWeights;

use crate::cli::{Cli, Command};
use crate::display::Context as DisplayContext;

pub fn dispatch(cli: Cli, ctx: DisplayContext) -> Result<()> {
    match cli.command {
        Command::List => list::run_list(&load_table(cli.data.as_deref())?, ctx),
        Command::Show { query } => show::run_show(&load_table(cli.data.as_deref())?, &query),
        Command::Check { file } => check::run_check(&file, ctx),
        Command::Constants => constants::run_constants(),
    }
}

fn load_table(path: Option<&Path>) -> Result<AtomicWeights> {
    match path {
        Some(p) => AtomicWeights::load_from_path(p)
            .with_context(|| format!("Failed to load atomic weight data: {}", p.display())),
        None => AtomicWeights::load().context("Failed to load the bundled atomic weight data"),
    }
}
