use std::path::Path;

use crate::constants::DEFAULT_SEARCH_LIMIT;
use crate::reader::stream_claims;
use crate::schema::{AppealEligible, ClaimRecord, PayerType};

/// Criteria for looking up claims in a generated file. Unset fields match
/// everything.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimFilter {
    pub claim_id: Option<String>,
    pub payer_type: Option<PayerType>,
    pub cpt: Option<String>,
    pub appeal_eligible: Option<AppealEligible>,
    pub limit: usize,
}

impl Default for ClaimFilter {
    fn default() -> Self {
        Self {
            claim_id: None,
            payer_type: None,
            cpt: None,
            appeal_eligible: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl ClaimFilter {
    pub fn matches(&self, claim: &ClaimRecord) -> bool {
        self.claim_id.as_ref().is_none_or(|id| *id == claim.claim_id)
            && self.payer_type.is_none_or(|payer| payer == claim.payer_type)
            && self.cpt.as_ref().is_none_or(|cpt| *cpt == claim.cpt_hcpcs_code)
            && self
                .appeal_eligible
                .is_none_or(|appeal| appeal == claim.appeal_eligible)
    }
}

/// Claims in `path` matching `filter`, most recent service date first, at
/// most `filter.limit` of them. Ties keep claim id order.
pub fn search_claims(path: &Path, filter: &ClaimFilter) -> anyhow::Result<Vec<ClaimRecord>> {
    let mut hits = Vec::new();
    stream_claims(path, |claim| {
        if filter.matches(&claim) {
            hits.push(claim);
        }
    })?;
    hits.sort_by(|a, b| {
        b.service_date
            .cmp(&a.service_date)
            .then_with(|| a.claim_id.cmp(&b.claim_id))
    });
    hits.truncate(filter.limit);
    Ok(hits)
}
