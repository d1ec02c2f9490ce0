use anyhow::Result;

use crate::display::print_constants;

pub fn run_constants() -> Result<()> {
    print_constants();
    Ok(())
}
