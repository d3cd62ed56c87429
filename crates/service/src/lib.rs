//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through per-entity repository traits.
//! - Reuses entity definitions and row queries from the `models` crate.
//! - Reports a missing record as [`errors::ServiceError::NotFound`].

pub mod errors;
pub mod domain;
pub mod pagination;
pub mod company;
pub mod employee;
pub mod repo;
#[cfg(test)]
pub mod test_support;
