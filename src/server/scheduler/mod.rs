//! Background jobs.
//!
//! - `match_poller` - Periodic Steam match history polling

pub mod match_poller;
