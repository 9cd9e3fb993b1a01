//! HTTP request handlers.
//!
//! - `webhook` - Demo service callbacks
//! - `query` - Read-only match, account and guild lookups
//! - `health` - Liveness probe

pub mod health;
pub mod query;
pub mod webhook;

#[cfg(test)]
mod test;
