use std::collections::BTreeMap;

use colored::Colorize;
use prettytable::{Table, cell, row};

use crate::schema::{AppealEligible, ClaimRecord, ClaimStatus, PayerType, round_cents};

/// Claim count and unpaid allowed amount for one group.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Shortfall {
    pub claims: usize,
    pub missing: f64,
}

/// Running aggregate over a claims dataset.
///
/// "Missing money" is `allowed - paid` summed over claims where the payer
/// paid less than allowed; fully paid claims never contribute.
#[derive(Debug, Default, Clone)]
pub struct Summary {
    pub total_claims: usize,
    pub by_payer: BTreeMap<PayerType, usize>,
    pub by_status: BTreeMap<ClaimStatus, usize>,
    pub short_allowed: f64,
    pub short_paid: f64,
    pub by_appeal: BTreeMap<AppealEligible, f64>,
    pub by_plan: BTreeMap<(PayerType, String), Shortfall>,
    pub by_procedure: BTreeMap<String, Shortfall>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, claim: &ClaimRecord) {
        self.total_claims += 1;
        *self.by_payer.entry(claim.payer_type).or_default() += 1;
        *self.by_status.entry(claim.claim_status).or_default() += 1;

        if !claim.is_short_paid() {
            return;
        }
        let missing = claim.missing_amount();
        self.short_allowed += claim.allowed_amount;
        self.short_paid += claim.paid_amount;
        *self.by_appeal.entry(claim.appeal_eligible).or_default() += missing;

        let plan = self
            .by_plan
            .entry((claim.payer_type, claim.payer_plan.clone()))
            .or_default();
        plan.claims += 1;
        plan.missing += missing;

        let procedure = self
            .by_procedure
            .entry(claim.cpt_hcpcs_code.clone())
            .or_default();
        procedure.claims += 1;
        procedure.missing += missing;
    }

    pub fn total_missing(&self) -> f64 {
        round_cents(self.short_allowed - self.short_paid)
    }

    /// Missing money that can still be appealed.
    pub fn recoverable(&self) -> f64 {
        round_cents(self.by_appeal.get(&AppealEligible::Yes).copied().unwrap_or(0.0))
    }

    pub fn non_recoverable(&self) -> f64 {
        round_cents(self.by_appeal.get(&AppealEligible::No).copied().unwrap_or(0.0))
    }

    /// Share of claims for `payer`, in `[0, 1]`.
    pub fn payer_share(&self, payer: PayerType) -> f64 {
        if self.total_claims == 0 {
            return 0.0;
        }
        self.by_payer.get(&payer).copied().unwrap_or(0) as f64 / self.total_claims as f64
    }

    /// Plan breakdown ordered by missing amount, largest first.
    pub fn plans_by_missing(&self) -> Vec<(&(PayerType, String), &Shortfall)> {
        sorted_by_missing(&self.by_plan)
    }

    /// Procedure breakdown ordered by missing amount, largest first.
    pub fn procedures_by_missing(&self) -> Vec<(&String, &Shortfall)> {
        sorted_by_missing(&self.by_procedure)
    }
}

fn sorted_by_missing<K>(groups: &BTreeMap<K, Shortfall>) -> Vec<(&K, &Shortfall)> {
    let mut rows: Vec<_> = groups.iter().collect();
    rows.sort_by(|a, b| b.1.missing.total_cmp(&a.1.missing));
    rows
}

fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 * 100.0 / total as f64)
}

/// Print the dataset report: mix, missing money, and the two breakdowns.
pub fn print_summary(summary: &Summary) {
    println!("\n{}", "--- 🧾 Claims Mix ---".bold());
    let mut mix = Table::new();
    mix.set_titles(row!["Payer", "Claims", "Share"]);
    for (payer, count) in &summary.by_payer {
        mix.add_row(row![payer, count, percent(*count, summary.total_claims)]);
    }
    mix.add_row(row!["".normal(), "".normal(), "".normal()]);
    for (status, count) in &summary.by_status {
        mix.add_row(row![status, count, percent(*count, summary.total_claims)]);
    }
    mix.printstd();

    println!("\n{}", "--- 💸 Missing Money ---".bold());
    let mut missing = Table::new();
    missing.add_row(row!["Allowed (short-paid claims)", format!("${:.2}", summary.short_allowed)]);
    missing.add_row(row!["Paid (short-paid claims)", format!("${:.2}", summary.short_paid)]);
    missing.add_row(row![
        "Missing".red().to_string(),
        format!("${:.2}", summary.total_missing())
    ]);
    missing.add_row(row![
        "Recoverable (appeal eligible)".green().to_string(),
        format!("${:.2}", summary.recoverable())
    ]);
    missing.add_row(row!["Non-recoverable", format!("${:.2}", summary.non_recoverable())]);
    missing.printstd();

    println!("\n{}", "--- 🏥 Missing Money by Payer Plan ---".bold());
    let mut plans = Table::new();
    plans.set_titles(row!["Payer", "Plan", "Claims", "Missing"]);
    for ((payer, plan), shortfall) in summary.plans_by_missing() {
        plans.add_row(row![
            payer,
            plan,
            shortfall.claims,
            format!("${:.2}", shortfall.missing)
        ]);
    }
    plans.printstd();

    println!("\n{}", "--- 🩺 Missing Money by CPT/HCPCS ---".bold());
    let mut procedures = Table::new();
    procedures.set_titles(row!["Code", "Claims", "Missing"]);
    for (code, shortfall) in summary.procedures_by_missing() {
        procedures.add_row(row![code, shortfall.claims, format!("${:.2}", shortfall.missing)]);
    }
    procedures.printstd();
    println!();
}

/// Print search results, one row per claim.
pub fn print_claims(claims: &[ClaimRecord]) {
    println!("\n{}", format!("--- 🔎 Claims ({}) ---", claims.len()).bold());
    let mut table = Table::new();
    table.set_titles(row![
        "Claim", "Service", "Payer", "Plan", "CPT", "ICD-10", "Allowed", "Paid", "Status",
        "Reason", "Adj", "Appeal"
    ]);
    for claim in claims {
        table.add_row(row![
            claim.claim_id,
            claim.service_date,
            claim.payer_type,
            claim.payer_plan,
            claim.cpt_hcpcs_code,
            claim.icd10_code,
            format!("${:.2}", claim.allowed_amount),
            format!("${:.2}", claim.paid_amount),
            claim.claim_status,
            claim.denial_reason,
            claim.adjustment_code,
            claim.appeal_eligible
        ]);
    }
    table.printstd();
    println!();
}
