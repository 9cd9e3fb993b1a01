pub mod prelude;

pub mod game;
pub mod game_player;
pub mod guild;
pub mod guild_game;
pub mod guild_user;
pub mod user;
pub mod user_game;
