//! SeaORM entities for the company registry plus the row-level queries the
//! service layer builds on.

pub mod errors;
pub mod db;
pub mod company;
pub mod employee;

#[cfg(test)]
mod tests;
