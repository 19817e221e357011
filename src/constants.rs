/// Number of claims written when no override is given.
pub const DEFAULT_TOTAL_CLAIMS: usize = 100_000;

pub const DEFAULT_SEED: u64 = 42;

pub const DEFAULT_OUTPUT_PATH: &str = "data/claims_100k.csv";

/// Size of the synthetic patient pool; ids are drawn with replacement.
pub const PATIENT_POOL_SIZE: u32 = 30_000;

pub const NPI_MIN: u64 = 1_000_000_000;
pub const NPI_MAX: u64 = 1_999_999_999;

/// Service dates fall within this many days before the anchor date.
pub const SERVICE_LOOKBACK_DAYS: i64 = 730;

pub const RECEIVED_LAG_DAYS: (i64, i64) = (1, 7);
pub const PROCESSED_LAG_DAYS: (i64, i64) = (14, 60);

pub const DENIED_THRESHOLD: f64 = 0.15;
pub const PARTIAL_THRESHOLD: f64 = 0.30;
pub const UNDERPAY_PROBABILITY: f64 = 0.20;

pub const PARTIAL_PAY_RATIO: (f64, f64) = (0.50, 0.80);
pub const UNDERPAY_RATIO: (f64, f64) = (0.85, 0.90);

/// Rows between progress log lines in verbose mode.
pub const PROGRESS_EVERY: usize = 10_000;

/// Maximum number of claims a search returns unless overridden.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
