//! Service layer providing the menu CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Owns the wire representation and its explicit mapping to storage rows.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod menu;
pub mod seed;
#[cfg(test)]
pub mod test_support;
