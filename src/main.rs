use clap::Parser;

use claimsgen::config::Config;
use claimsgen::reporter::{print_claims, print_summary};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if config.search {
        let hits = claimsgen::search(&config)?;
        print_claims(&hits);
        return Ok(());
    }

    if config.report_only {
        let summary = claimsgen::summarize(&config)?;
        print_summary(&summary);
        return Ok(());
    }

    let summary = claimsgen::run(&config)?;
    println!(
        "Wrote {} claims to {}",
        summary.total_claims,
        config.output_path.display()
    );
    if config.summary {
        print_summary(&summary);
    }
    Ok(())
}
