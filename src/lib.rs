pub mod catalog;
pub mod config;
pub mod constants;
pub mod generator;
pub mod logging;
pub mod reader;
pub mod reporter;
pub mod sampling;
pub mod schema;
pub mod search;
pub mod writer;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::constants::PROGRESS_EVERY;
use crate::generator::ClaimRecordGenerator;
use crate::logging::{log_claim_event, log_event};
use crate::reporter::Summary;
use crate::schema::ClaimRecord;
use crate::writer::ClaimWriter;

/// Generate `config.total_claims` records into `config.output_path`.
///
/// Rows are streamed to disk as they are sampled; only the running summary
/// is kept in memory.
pub fn run(config: &Config) -> anyhow::Result<Summary> {
    let anchor_date = config.resolved_anchor_date();
    let verbose = config.verbose;
    if verbose {
        log_event(
            "generator",
            "start",
            &format!(
                "Writing {} claims to {} (seed {}, anchor {})",
                config.total_claims,
                config.output_path.display(),
                config.seed,
                anchor_date
            ),
        );
    }

    let rng = StdRng::seed_from_u64(config.seed);
    let mut generator = ClaimRecordGenerator::new(rng, anchor_date)?;
    let mut writer = ClaimWriter::create(&config.output_path)?;
    let mut summary = Summary::new();

    generator.generate(config.total_claims, &mut writer, |record| {
        summary.record(record);
        if verbose && summary.total_claims % PROGRESS_EVERY == 0 {
            log_claim_event(
                "generator",
                &record.claim_id,
                "progress",
                &format!("{} rows written", summary.total_claims),
            );
        }
    })?;

    let (_, rows) = writer.finish()?;
    if verbose {
        log_event(
            "generator",
            "done",
            &format!("Wrote {} rows to {}", rows, config.output_path.display()),
        );
    }
    Ok(summary)
}

/// Build a summary from an already generated file at `config.output_path`.
pub fn summarize(config: &Config) -> anyhow::Result<Summary> {
    let mut summary = Summary::new();
    let rows = reader::stream_claims(&config.output_path, |record| summary.record(&record))?;
    if config.verbose {
        log_event(
            "reader",
            "done",
            &format!("Read {} rows from {}", rows, config.output_path.display()),
        );
    }
    Ok(summary)
}

/// Claims in the file at `config.output_path` matching the configured filter.
pub fn search(config: &Config) -> anyhow::Result<Vec<ClaimRecord>> {
    let filter = config.filter();
    let hits = search::search_claims(&config.output_path, &filter)?;
    if config.verbose {
        log_event(
            "search",
            "done",
            &format!("{} claims matched {:?}", hits.len(), filter),
        );
    }
    Ok(hits)
}
