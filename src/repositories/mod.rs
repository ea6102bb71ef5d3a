//! Repository layer for database operations.
//!
//! Repositories encapsulate the actual SeaORM queries so entities stay pure
//! data models. Every method is generic over [`sea_orm::ConnectionTrait`],
//! so the same operations run against a plain connection or a transaction.

pub mod employee;

pub use employee::EmployeeRepository;
