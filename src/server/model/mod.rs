//! Domain models and operation parameters.
//!
//! Entity models from the `entity` crate are converted into these types at the repository
//! boundary. Controllers convert them into DTOs via `into_dto()`.

pub mod event;
pub mod game;
pub mod guild;
pub mod notification;
pub mod user;
