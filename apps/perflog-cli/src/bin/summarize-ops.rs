//! Trimmed means of an operations benchmark log (2 metrics per block).

use clap::Parser;
use perflog::Recipe;
use perflog_cli::FileArgs;

#[derive(Parser, Debug)]
#[command(name = "summarize-ops")]
#[command(version, about = "Print trimmed means of operation count and instructions")]
struct Cli {
    #[command(flatten)]
    args: FileArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    perflog_cli::init_tracing();

    perflog_cli::run(&cli.args, &Recipe::operations())
}
