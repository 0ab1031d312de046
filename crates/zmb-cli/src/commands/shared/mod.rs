pub mod found;
