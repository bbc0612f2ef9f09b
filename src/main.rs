use anyhow::Result;
use laddersnake::cli;

fn main() -> Result<()> {
    cli::run_cli()?;
    Ok(())
}
