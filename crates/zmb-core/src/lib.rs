//! # zmb-core
//!
//! Core types, validation, and error types for the Zumbara storefront client.
//!
//! This crate provides the foundational types shared across all Zumbara crates:
//! - Entity structs for the storefront domain (categories, products, orders, payment proofs)
//! - Status enums, including the order and proof review statuses reported by the backend
//! - The validated category forest used by offline catalogs and tests
//! - Form input validation (phone numbers, required fields)
//! - Cross-cutting error types
//! - CLI response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod validate;
