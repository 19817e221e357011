use std::io;

use anyhow::Context;
use chrono::{Days, Duration, NaiveDate};
use rand::Rng;

use crate::catalog::{self, PAYER_WEIGHTS, PROCEDURES};
use crate::constants::{
    DENIED_THRESHOLD, NPI_MAX, NPI_MIN, PARTIAL_PAY_RATIO, PARTIAL_THRESHOLD, PATIENT_POOL_SIZE,
    PROCESSED_LAG_DAYS, RECEIVED_LAG_DAYS, SERVICE_LOOKBACK_DAYS, UNDERPAY_PROBABILITY,
    UNDERPAY_RATIO,
};
use crate::sampling::{days_between, pick, uniform, weighted_choice};
use crate::schema::{AppealEligible, ClaimRecord, ClaimStatus, round_cents};
use crate::writer::ClaimWriter;

/// Samples claim records one at a time from a single random stream.
///
/// All draws come from `rng` in a fixed order, so two generators built from
/// the same seed and anchor date yield identical records.
pub struct ClaimRecordGenerator<R: Rng> {
    rng: R,
    anchor_date: NaiveDate,
    issued: usize,
}

/// Payment side of a claim, decided by the outcome roll.
struct Outcome {
    paid: f64,
    status: ClaimStatus,
    denial_reason: &'static str,
    adjustment_code: &'static str,
    appeal: AppealEligible,
}

impl<R: Rng> ClaimRecordGenerator<R> {
    /// `anchor_date` is the latest possible service date.
    ///
    /// Fails if the look-back window before the anchor, or the received and
    /// processed lags after it, fall outside the representable date range.
    pub fn new(rng: R, anchor_date: NaiveDate) -> anyhow::Result<Self> {
        let lookback = Days::new(SERVICE_LOOKBACK_DAYS as u64);
        let max_lag = Days::new((RECEIVED_LAG_DAYS.1 + PROCESSED_LAG_DAYS.1) as u64);
        anchor_date
            .checked_sub_days(lookback)
            .and_then(|_| anchor_date.checked_add_days(max_lag))
            .with_context(|| format!("Anchor date {} is out of range", anchor_date))?;
        Ok(Self {
            rng,
            anchor_date,
            issued: 0,
        })
    }

    pub fn next_record(&mut self) -> ClaimRecord {
        self.issued += 1;

        let payer_type = *weighted_choice(&mut self.rng, &PAYER_WEIGHTS);
        let payer_plan = *weighted_choice(&mut self.rng, catalog::plans_for(payer_type));

        let procedure = pick(&mut self.rng, &PROCEDURES);
        let icd10_code = *pick(&mut self.rng, procedure.diagnoses);
        let billed = procedure.billed;
        let allowed = billed * uniform(&mut self.rng, catalog::allowed_ratio(payer_type));

        let outcome = self.roll_outcome(procedure.code, allowed);

        // In range: the window was checked in `new`.
        let lookback = days_between(&mut self.rng, (0, SERVICE_LOOKBACK_DAYS));
        let service_date = self.anchor_date - Duration::days(lookback);
        let claim_received_date =
            service_date + Duration::days(days_between(&mut self.rng, RECEIVED_LAG_DAYS));
        let claim_processed_date =
            claim_received_date + Duration::days(days_between(&mut self.rng, PROCESSED_LAG_DAYS));

        let patient = self.rng.random_range(1..=PATIENT_POOL_SIZE);
        let npi = self.rng.random_range(NPI_MIN..=NPI_MAX);

        ClaimRecord {
            claim_id: format!("C{:07}", self.issued),
            patient_id: format!("P{:06}", patient),
            payer_type,
            payer_plan: payer_plan.to_string(),
            provider_npi: npi.to_string(),
            service_date,
            claim_received_date,
            claim_processed_date,
            cpt_hcpcs_code: procedure.code.to_string(),
            icd10_code: icd10_code.to_string(),
            billed_amount: round_cents(billed),
            allowed_amount: round_cents(allowed),
            paid_amount: round_cents(outcome.paid),
            claim_status: outcome.status,
            denial_reason: outcome.denial_reason.to_string(),
            adjustment_code: outcome.adjustment_code.to_string(),
            appeal_eligible: outcome.appeal,
        }
    }

    fn roll_outcome(&mut self, cpt: &str, allowed: f64) -> Outcome {
        let roll: f64 = self.rng.random();

        if roll < DENIED_THRESHOLD {
            let reason = *pick(&mut self.rng, &catalog::DENIAL_REASONS);
            let adjustment = *pick(&mut self.rng, &catalog::DENIAL_ADJUSTMENTS);
            let appeal = if reason == catalog::UNAPPEALABLE_DENIAL {
                AppealEligible::No
            } else {
                AppealEligible::Yes
            };
            return Outcome {
                paid: 0.0,
                status: ClaimStatus::Denied,
                denial_reason: reason,
                adjustment_code: adjustment,
                appeal,
            };
        }

        if roll < PARTIAL_THRESHOLD {
            return Outcome {
                paid: allowed * uniform(&mut self.rng, PARTIAL_PAY_RATIO),
                status: ClaimStatus::PartiallyPaid,
                denial_reason: catalog::UNDERPAYMENT_REASON,
                adjustment_code: catalog::CONTRACTUAL_ADJUSTMENT,
                appeal: AppealEligible::Yes,
            };
        }

        // The secondary roll is only drawn for underpay-prone codes.
        if catalog::is_underpay_prone(cpt) && self.rng.random::<f64>() < UNDERPAY_PROBABILITY {
            return Outcome {
                paid: allowed * uniform(&mut self.rng, UNDERPAY_RATIO),
                status: ClaimStatus::Paid,
                denial_reason: catalog::NONE,
                adjustment_code: catalog::CONTRACTUAL_ADJUSTMENT,
                appeal: AppealEligible::Yes,
            };
        }

        Outcome {
            paid: allowed,
            status: ClaimStatus::Paid,
            denial_reason: catalog::NONE,
            adjustment_code: catalog::NONE,
            appeal: AppealEligible::No,
        }
    }

    /// Stream `total` records into `writer`, calling `on_record` after each
    /// row is written. Returns the number of rows written.
    pub fn generate<W: io::Write>(
        &mut self,
        total: usize,
        writer: &mut ClaimWriter<W>,
        mut on_record: impl FnMut(&ClaimRecord),
    ) -> anyhow::Result<usize> {
        for _ in 0..total {
            let record = self.next_record();
            writer.write(&record)?;
            on_record(&record);
        }
        Ok(total)
    }
}

impl<R: Rng> Iterator for ClaimRecordGenerator<R> {
    type Item = ClaimRecord;

    fn next(&mut self) -> Option<ClaimRecord> {
        Some(self.next_record())
    }
}
