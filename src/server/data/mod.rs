//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for accounts,
//! guilds and matches. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. Set-like associations are
//! stored in join tables with composite primary keys, so adding a reference is an insert
//! that ignores conflicts.

pub mod game;
pub mod guild;
pub mod user;

#[cfg(test)]
mod test;
