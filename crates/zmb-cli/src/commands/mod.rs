pub mod admin;
pub mod categories;
pub mod dispatch;
pub mod home;
pub mod orders;
pub mod products;
pub mod proof;
pub mod shared;
pub mod translate;
pub mod validate;
