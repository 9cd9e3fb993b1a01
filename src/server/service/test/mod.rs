
mod fanout;
mod game;
