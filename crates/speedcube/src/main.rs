//! Command-line 3x3x3 twisty puzzle simulator.

mod cli;
mod net;

use clap::Parser;
use speedcube_prefs::Preferences;

fn main() -> eyre::Result<()> {
    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    let args = cli::Args::parse();
    let prefs = Preferences::load(args.prefs.as_deref());
    let style = net::NetStyle::new(args.color);
    cli::exec(args.subcommand, &prefs, style)
}
