pub use super::game::Entity as Game;
pub use super::game_player::Entity as GamePlayer;
pub use super::guild::Entity as Guild;
pub use super::guild_game::Entity as GuildGame;
pub use super::guild_user::Entity as GuildUser;
pub use super::user::Entity as User;
pub use super::user_game::Entity as UserGame;
