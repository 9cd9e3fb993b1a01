mod game;
mod guild;
mod user;
