use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProofStatus;

/// A payment receipt uploaded by the customer for manual review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProof {
    pub id: String,
    pub order_id: String,
    pub url: String,
    pub status: ProofStatus,
    #[serde(default)]
    pub note: Option<String>,
}

/// Admin decision on a payment proof.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProofReview {
    pub status: ProofStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
