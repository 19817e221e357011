//! Static lookup tables the generator samples from.
//!
//! Weighted tables are ordered; the sampler scans them cumulatively, so the
//! order matters for reproducibility.

use crate::schema::PayerType;

/// A billable procedure with its fixed price and the diagnoses that may
/// accompany it.
#[derive(Debug)]
pub struct Procedure {
    pub code: &'static str,
    pub billed: f64,
    pub diagnoses: &'static [&'static str],
}

pub const PAYER_WEIGHTS: [(PayerType, f64); 3] = [
    (PayerType::Medicare, 0.55),
    (PayerType::Medicaid, 0.30),
    (PayerType::Other, 0.15),
];

const MEDICARE_PLANS: [(&str, f64); 2] = [("Medicare FFS", 0.70), ("Medicare Advantage", 0.30)];

const MEDICAID_PLANS: [(&str, f64); 2] = [("Medicaid Managed Care", 0.65), ("Medicaid FFS", 0.35)];

const OTHER_PLANS: [(&str, f64); 4] = [
    ("Commercial PPO", 0.50),
    ("Commercial HMO", 0.30),
    ("Workers Compensation", 0.10),
    ("Auto No-Fault", 0.10),
];

pub static PROCEDURES: [Procedure; 15] = [
    Procedure {
        code: "99213",
        billed: 125.00,
        diagnoses: &["I10", "E11.9", "Z00.00", "Z79.899", "R06.02", "J44.9", "J45.909"],
    },
    Procedure {
        code: "99214",
        billed: 185.00,
        diagnoses: &["I10", "E11.9", "R06.02", "J44.9", "J45.909"],
    },
    Procedure {
        code: "93000",
        billed: 95.00,
        diagnoses: &["R07.9", "I10", "R06.02"],
    },
    Procedure {
        code: "71046",
        billed: 145.00,
        diagnoses: &["R06.02", "R07.9", "J44.9", "J45.909"],
    },
    Procedure {
        code: "94640",
        billed: 80.00,
        diagnoses: &["J45.909", "J44.9", "R06.02"],
    },
    Procedure {
        code: "94010",
        billed: 110.00,
        diagnoses: &["J44.9", "J45.909", "R06.02"],
    },
    Procedure {
        code: "94760",
        billed: 35.00,
        diagnoses: &["R09.02", "R06.02", "J44.9", "J45.909", "Z99.81"],
    },
    Procedure {
        code: "36415",
        billed: 25.00,
        diagnoses: &["E11.9", "I10", "Z79.899", "Z00.00"],
    },
    Procedure {
        code: "80053",
        billed: 120.00,
        diagnoses: &["E11.9", "I10", "Z79.899"],
    },
    Procedure {
        code: "85025",
        billed: 85.00,
        diagnoses: &["E11.9", "I10", "Z79.899"],
    },
    Procedure {
        code: "A7030",
        billed: 210.00,
        diagnoses: &["G47.33"],
    },
    Procedure {
        code: "A7037",
        billed: 55.00,
        diagnoses: &["G47.33"],
    },
    Procedure {
        code: "E0601",
        billed: 880.00,
        diagnoses: &["G47.33"],
    },
    Procedure {
        code: "E0470",
        billed: 1650.00,
        diagnoses: &["J96.10", "J44.9"],
    },
    Procedure {
        code: "E1390",
        billed: 1050.00,
        diagnoses: &["Z99.81", "R09.02", "J96.10", "J44.9"],
    },
];

/// Procedures that payers tend to pay short even when the claim is "Paid".
pub const UNDERPAY_PRONE: [&str; 4] = ["99214", "E0601", "E1390", "A7030"];

pub const DENIAL_REASONS: [&str; 4] = [
    "Medical Necessity",
    "Prior Authorization Required",
    "Timely Filing",
    "Documentation Incomplete",
];

/// Denials for this reason cannot be appealed.
pub const UNAPPEALABLE_DENIAL: &str = "Timely Filing";

pub const DENIAL_ADJUSTMENTS: [&str; 2] = ["CO-50", "CO-97"];

pub const UNDERPAYMENT_REASON: &str = "Underpayment";
pub const CONTRACTUAL_ADJUSTMENT: &str = "CO-45";
pub const NONE: &str = "None";

pub fn plans_for(payer: PayerType) -> &'static [(&'static str, f64)] {
    match payer {
        PayerType::Medicare => &MEDICARE_PLANS,
        PayerType::Medicaid => &MEDICAID_PLANS,
        PayerType::Other => &OTHER_PLANS,
    }
}

/// Range of the allowed/billed ratio for a payer.
pub fn allowed_ratio(payer: PayerType) -> (f64, f64) {
    match payer {
        PayerType::Medicare => (0.70, 0.78),
        PayerType::Medicaid => (0.50, 0.65),
        PayerType::Other => (0.75, 0.95),
    }
}

pub fn procedure(code: &str) -> Option<&'static Procedure> {
    PROCEDURES.iter().find(|p| p.code == code)
}

pub fn is_underpay_prone(code: &str) -> bool {
    UNDERPAY_PRONE.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total<T>(weights: &[(T, f64)]) -> f64 {
        weights.iter().map(|(_, w)| w).sum()
    }

    #[test]
    fn test_weights_sum_to_one() {
        assert!((total(&PAYER_WEIGHTS) - 1.0).abs() < 1e-9);
        for payer in PayerType::ALL {
            assert!(
                (total(plans_for(payer)) - 1.0).abs() < 1e-9,
                "plan weights for {} do not sum to 1",
                payer
            );
        }
    }

    #[test]
    fn test_procedure_table() {
        assert_eq!(PROCEDURES.len(), 15);
        for p in &PROCEDURES {
            assert!(!p.diagnoses.is_empty(), "{} has no diagnoses", p.code);
            assert!(p.billed > 0.0);
        }
        assert_eq!(procedure("E0470").map(|p| p.billed), Some(1650.00));
        assert!(procedure("00000").is_none());
    }

    #[test]
    fn test_underpay_prone_codes_exist() {
        for code in UNDERPAY_PRONE {
            assert!(procedure(code).is_some(), "{} missing from table", code);
        }
        assert!(is_underpay_prone("E0601"));
        assert!(!is_underpay_prone("99213"));
    }

    #[test]
    fn test_allowed_ratio_below_one() {
        for payer in PayerType::ALL {
            let (lo, hi) = allowed_ratio(payer);
            assert!(0.0 < lo && lo < hi && hi < 1.0);
        }
    }
}
