//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Association rows
//! (guild membership, match players) are created through the helpers.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let guild = factory::create_guild(&db).await?;
//! factory::helpers::add_member(&db, guild.id, user.id).await?;
//!
//! let game = factory::game::GameFactory::new(&db)
//!     .status(DemoStatus::Ready)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `guild` - Create guild entities
//! - `game` - Create game entities
//! - `helpers` - Unique ids and association rows

pub mod game;
pub mod guild;
pub mod helpers;
pub mod user;

pub use game::create_game;
pub use guild::create_guild;
pub use user::create_user;
