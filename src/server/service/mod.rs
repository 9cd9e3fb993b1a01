//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller, bot and scheduler layers and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Registration rules and the match state machine
//! - **Orchestration**: Coordinating repositories, the demo service and chat delivery
//! - **Deduplication**: Keeping outbound demo requests at most once per share code
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod dedup;
pub mod game;
pub mod guild;
pub mod notification;
pub mod pipeline;
pub mod provider;
pub mod user;

#[cfg(test)]
pub(crate) mod test;
