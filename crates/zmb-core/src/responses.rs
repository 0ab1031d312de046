//! CLI response types returned as JSON by `zmb` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Category, PaymentProof};
use crate::enums::{Language, TextDirection};

/// Response from `zmb categories list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryListResponse {
    pub parent: Option<String>,
    pub categories: Vec<Category>,
}

/// Rendered in place of an entity when the backend reports it missing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NotFoundResponse {
    pub found: bool,
    pub entity_type: String,
    pub id: String,
}

impl NotFoundResponse {
    #[must_use]
    pub fn new(entity_type: &str, id: &str) -> Self {
        Self {
            found: false,
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

/// Response from `zmb proof upload`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProofUploadResponse {
    pub order_id: String,
    pub asset_url: String,
    pub proof: PaymentProof,
}

/// Response from `zmb translate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TranslationResponse {
    pub key: String,
    pub language: Language,
    pub direction: TextDirection,
    pub text: String,
    /// Which language actually supplied `text`; `None` when the key itself was echoed.
    pub resolved_from: Option<Language>,
}

/// Response from `zmb validate phone`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PhoneValidationResponse {
    pub input: String,
    pub valid: bool,
    pub normalized: Option<String>,
    pub error: Option<String>,
}
