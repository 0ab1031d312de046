//! Entity structs for the Zumbara storefront domain.
//!
//! Field names follow the backend's camelCase JSON. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod category;
mod order;
mod page;
mod product;
mod proof;

pub use category::{Category, NewCategory};
pub use order::{Order, OrderItem};
pub use page::Page;
pub use product::Product;
pub use proof::{PaymentProof, ProofReview};
