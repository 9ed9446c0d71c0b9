//! residencia-smoke - Browser smoke tests for the Sistema de Residencias app
//!
//! Main entry point for the CLI application.

use clap::Parser;
use residencia_smoke::{Config, Scenario, ScenarioRunner};

/// Browser smoke tests for the Sistema de Residencias web app
#[derive(Parser, Debug)]
#[command(name = "residencia-smoke")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run a single scenario by name (default: run all)
    scenario: Option<String>,

    /// List known scenarios and exit
    #[arg(long, short = 'l')]
    list: bool,

    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,

    /// Target application base URL (overrides config)
    #[arg(long, short = 'b')]
    base_url: Option<String>,

    /// Print the run summary as JSON after the report
    #[arg(long)]
    json: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(ref base_url) = args.base_url {
        config.target.base_url = base_url.clone();
    }

    if args.headed {
        config.browser.headed = true;
    }

    if args.init_config {
        let path = config.save_and_get_path()?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    if args.list {
        for scenario in Scenario::all() {
            println!("{:<22} {}", scenario.name, scenario.description);
        }
        return Ok(());
    }

    let runner = ScenarioRunner::new(config);
    let summary = runner.run(args.scenario.as_deref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if !summary.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
