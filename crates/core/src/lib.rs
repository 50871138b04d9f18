//! Shared domain types for the SIAP school records platform.
//!
//! Kept free of web- and database-framework dependencies so both the
//! repository layer and the API layer can build on it.

pub mod error;
pub mod roles;
pub mod transfer;
pub mod types;
