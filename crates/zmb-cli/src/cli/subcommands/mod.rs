mod admin;
mod categories;
mod orders;
mod products;
mod proof;
mod validate;

pub use admin::AdminCommands;
pub use categories::CategoriesCommands;
pub use orders::OrdersCommands;
pub use products::ProductsCommands;
pub use proof::ProofCommands;
pub use validate::ValidateCommands;
