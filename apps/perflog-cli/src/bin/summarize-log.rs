//! Trimmed means of a benchmark log laid out by a recipe.

use clap::Parser;
use perflog_cli::RecipeArgs;

#[derive(Parser, Debug)]
#[command(name = "summarize-log")]
#[command(
    version,
    about = "Print trimmed means of a benchmark log using a built-in or TOML recipe"
)]
struct Cli {
    #[command(flatten)]
    args: RecipeArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    perflog_cli::init_tracing();

    let recipe = perflog_cli::resolve_recipe(&cli.args.recipe)?;
    tracing::info!("Loaded recipe '{}' ({} metrics)", recipe.name, recipe.metrics.len());

    perflog_cli::run(&cli.args.file, &recipe)
}
