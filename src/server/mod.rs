//! Server-side backend: webhook and query API, match tracking and Discord integration.
//!
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! Serenity for the Discord bot.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers for demo service callbacks and lookups
//! - **Service Layer** (`service/`) - Business logic, the match pipeline and outbound clients
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, events and operation-specific parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, match pipeline)
//! - **Startup** (`startup`) - Database connection, migrations and the HTTP client
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Scheduler** (`scheduler/`) - The repeating match poll
//! - **Bot** (`bot/`) - Discord event handlers, slash commands and notification delivery
//! - **Shutdown** (`shutdown`) - Signal handling for graceful shutdown
//!
//! # Match Flow
//!
//! 1. **Scheduler** polls Steam for each account's next share code
//! 2. **Service** records the match and asks the demo service to download it
//! 3. **Controller** receives the demo ready callback, the service requests parsing
//! 4. **Controller** receives the demo parsed callback
//! 5. **Service** fans the summary out to every guild with a participating member
//! 6. **Bot** posts the summary in each guild's channel

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod shutdown;
pub mod startup;
pub mod state;
pub mod util;
