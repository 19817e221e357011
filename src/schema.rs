use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column order of the output file.
pub const CSV_HEADER: [&str; 17] = [
    "claim_id",
    "patient_id",
    "payer_type",
    "payer_plan",
    "provider_npi",
    "service_date",
    "claim_received_date",
    "claim_processed_date",
    "cpt_hcpcs_code",
    "icd10_code",
    "billed_amount",
    "allowed_amount",
    "paid_amount",
    "claim_status",
    "denial_reason",
    "adjustment_code",
    "appeal_eligible",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PayerType {
    Medicare,
    Medicaid,
    Other,
}

impl PayerType {
    pub const ALL: [PayerType; 3] = [PayerType::Medicare, PayerType::Medicaid, PayerType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            PayerType::Medicare => "Medicare",
            PayerType::Medicaid => "Medicaid",
            PayerType::Other => "Other",
        }
    }
}

impl fmt::Display for PayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayerType {
    type Err = String;

    /// Case-insensitive match on the CSV label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PayerType::ALL
            .into_iter()
            .find(|payer| payer.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown payer type '{}' (expected Medicare, Medicaid or Other)", s)
            })
    }
}

/// Outcome of adjudication as written to the `claim_status` column.
///
/// An underpaid claim keeps the `Paid` status; only its adjustment code and
/// appeal flag reveal the short payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    Paid,
    Denied,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Paid => "Paid",
            ClaimStatus::Denied => "Denied",
            ClaimStatus::PartiallyPaid => "Partially Paid",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AppealEligible {
    Yes,
    No,
}

impl AppealEligible {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppealEligible::Yes => "Yes",
            AppealEligible::No => "No",
        }
    }
}

impl fmt::Display for AppealEligible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppealEligible {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(AppealEligible::Yes),
            "no" => Ok(AppealEligible::No),
            _ => Err(format!("expected Yes or No, got '{}'", s)),
        }
    }
}

/// One row of the generated dataset.
///
/// Field order matches [`CSV_HEADER`]. Monetary fields are already rounded
/// to cents and serialize with exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    pub claim_id: String,
    pub patient_id: String,
    pub payer_type: PayerType,
    pub payer_plan: String,
    pub provider_npi: String,
    pub service_date: NaiveDate,
    pub claim_received_date: NaiveDate,
    pub claim_processed_date: NaiveDate,
    pub cpt_hcpcs_code: String,
    pub icd10_code: String,
    #[serde(serialize_with = "money::serialize")]
    pub billed_amount: f64,
    #[serde(serialize_with = "money::serialize")]
    pub allowed_amount: f64,
    #[serde(serialize_with = "money::serialize")]
    pub paid_amount: f64,
    pub claim_status: ClaimStatus,
    pub denial_reason: String,
    pub adjustment_code: String,
    pub appeal_eligible: AppealEligible,
}

impl ClaimRecord {
    /// Allowed amount the payer did not pay. Zero for claims paid in full.
    pub fn missing_amount(&self) -> f64 {
        round_cents(self.allowed_amount - self.paid_amount)
    }

    pub fn is_short_paid(&self) -> bool {
        self.paid_amount < self.allowed_amount
    }
}

/// Round half away from zero to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

pub(crate) mod money {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", amount))
    }
}

/// Mock record for testing
#[cfg(test)]
pub fn mock_record() -> ClaimRecord {
    ClaimRecord {
        claim_id: "C0000001".to_string(),
        patient_id: "P012345".to_string(),
        payer_type: PayerType::Medicare,
        payer_plan: "Medicare FFS".to_string(),
        provider_npi: "1234567890".to_string(),
        service_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        claim_received_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        claim_processed_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        cpt_hcpcs_code: "99214".to_string(),
        icd10_code: "I10".to_string(),
        billed_amount: 185.0,
        allowed_amount: 138.75,
        paid_amount: 120.0,
        claim_status: ClaimStatus::Paid,
        denial_reason: "None".to_string(),
        adjustment_code: "CO-45".to_string(),
        appeal_eligible: AppealEligible::Yes,
    }
}
