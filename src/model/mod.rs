//! Data transfer objects shared by the HTTP API.

pub mod api;
pub mod game;
pub mod guild;
pub mod user;
pub mod webhook;
