use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::constants::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SEARCH_LIMIT, DEFAULT_SEED, DEFAULT_TOTAL_CLAIMS,
};
use crate::schema::{AppealEligible, PayerType};
use crate::search::ClaimFilter;

/// Application configuration for synthetic claims generation
#[derive(Debug, Clone, Parser)]
#[command(name = "claimsgen")]
#[command(about = "Generate a reproducible CSV of synthetic healthcare insurance claims")]
pub struct Config {
    /// Output CSV path. Its directory must already exist.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: PathBuf,

    /// Number of claim rows to generate.
    #[arg(long, default_value_t = DEFAULT_TOTAL_CLAIMS)]
    pub total_claims: usize,

    /// Seed for the random stream; same seed and anchor date give identical output.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Latest possible service date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub anchor_date: Option<NaiveDate>,

    /// Print a missing-money report after generating.
    #[arg(long, default_value_t = false)]
    pub summary: bool,

    /// Skip generation and report on the existing file at output_path.
    #[arg(long, default_value_t = false)]
    pub report_only: bool,

    /// Skip generation and list matching claims from the file at output_path.
    #[arg(long, default_value_t = false)]
    pub search: bool,

    /// Search: exact claim id, e.g. C0000042.
    #[arg(long)]
    pub claim_id: Option<String>,

    /// Search: Medicare, Medicaid or Other.
    #[arg(long)]
    pub payer_type: Option<PayerType>,

    /// Search: CPT/HCPCS code.
    #[arg(long)]
    pub cpt: Option<String>,

    /// Search: Yes or No.
    #[arg(long)]
    pub appeal_eligible: Option<AppealEligible>,

    /// Search: maximum number of claims listed.
    #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,

    /// Enable detailed logging.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    pub fn resolved_anchor_date(&self) -> NaiveDate {
        self.anchor_date.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn filter(&self) -> ClaimFilter {
        ClaimFilter {
            claim_id: self.claim_id.clone(),
            payer_type: self.payer_type,
            cpt: self.cpt.clone(),
            appeal_eligible: self.appeal_eligible,
            limit: self.limit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            total_claims: DEFAULT_TOTAL_CLAIMS,
            seed: DEFAULT_SEED,
            anchor_date: None,
            summary: false,
            report_only: false,
            search: false,
            claim_id: None,
            payer_type: None,
            cpt: None,
            appeal_eligible: None,
            limit: DEFAULT_SEARCH_LIMIT,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::parse_from(["claimsgen"]);
        assert_eq!(config.output_path, PathBuf::from("data/claims_100k.csv"));
        assert_eq!(config.total_claims, 100_000);
        assert_eq!(config.seed, 42);
        assert!(config.anchor_date.is_none());
        assert!(!config.verbose);
        assert!(!config.summary);
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "claimsgen",
            "--output-path",
            "/tmp/out.csv",
            "--total-claims",
            "10",
            "--seed",
            "7",
            "--anchor-date",
            "2025-01-31",
            "-v",
        ]);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
        assert_eq!(config.total_claims, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(
            config.resolved_anchor_date(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(config.verbose);
    }

    #[test]
    fn test_search_flags() {
        let config = Config::parse_from([
            "claimsgen",
            "--search",
            "--payer-type",
            "medicare",
            "--cpt",
            "E0601",
            "--appeal-eligible",
            "Yes",
            "--limit",
            "5",
        ]);
        assert!(config.search);
        assert_eq!(
            config.filter(),
            ClaimFilter {
                claim_id: None,
                payer_type: Some(PayerType::Medicare),
                cpt: Some("E0601".to_string()),
                appeal_eligible: Some(AppealEligible::Yes),
                limit: 5,
            }
        );

        let defaults = Config::parse_from(["claimsgen", "--claim-id", "C0000007"]);
        assert_eq!(defaults.filter().claim_id.as_deref(), Some("C0000007"));
        assert_eq!(defaults.filter().limit, 50);
        assert_eq!(Config::default().filter(), ClaimFilter::default());
    }

    #[test]
    fn test_bad_search_values_rejected() {
        assert!(Config::try_parse_from(["claimsgen", "--payer-type", "Aetna"]).is_err());
        assert!(Config::try_parse_from(["claimsgen", "--appeal-eligible", "maybe"]).is_err());
    }

    #[test]
    fn test_bad_anchor_date_rejected() {
        let result = Config::try_parse_from(["claimsgen", "--anchor-date", "31/01/2025"]);
        assert!(result.is_err());
    }
}
