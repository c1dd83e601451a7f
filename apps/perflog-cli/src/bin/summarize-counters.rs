//! Trimmed means of a hardware-counter benchmark log (7 metrics per block).

use clap::Parser;
use perflog::Recipe;
use perflog_cli::FileArgs;

#[derive(Parser, Debug)]
#[command(name = "summarize-counters")]
#[command(
    version,
    about = "Print trimmed means of context switches, page faults, instructions, branches, L1D misses, LLC misses and elapsed seconds"
)]
struct Cli {
    #[command(flatten)]
    args: FileArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    perflog_cli::init_tracing();

    perflog_cli::run(&cli.args, &Recipe::counters())
}
