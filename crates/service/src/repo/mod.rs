//! Repository implementations: SeaORM for the relational store, and an
//! in-memory store for tests and demos.

pub mod memory;
pub mod seaorm;
