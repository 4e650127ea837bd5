use anyhow::Result;
use clap::{Parser, error::ErrorKind};

pub mod incrementer;

pub use incrementer::{BuildNumberIncrementer, report};

#[derive(Parser, Debug)]
#[command(
    name = "buildbump",
    author,
    version,
    about = "Increment the BUILD counter in src/version.h before each firmware build",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {}

/// Parse `args` and bump the BUILD counter of `src/version.h` in the current directory.
///
/// `--help` and `--version` print and return normally instead of exiting the process,
/// so a host build can call this in-process.
///
/// # Errors
/// Returns error on invalid arguments, any filesystem failure, or an unrepresentable counter.
pub async fn main(args: &[String]) -> Result<()> {
    match Cli::try_parse_from(args) {
        Ok(_) => {}
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }
    BuildNumberIncrementer::default().run().await?;
    Ok(())
}
