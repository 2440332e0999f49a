//! CLI entry point for the jigsaw photo wall previewer

use clap::Parser;
use jigsaw_wall::io::cli::{Cli, WallRunner};
use jigsaw_wall::io::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> jigsaw_wall::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.log_dir.as_deref(), cli.quiet)?;
    let mut runner = WallRunner::new(cli);
    runner.run().await?;
    Ok(())
}
