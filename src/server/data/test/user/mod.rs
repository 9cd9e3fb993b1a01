use crate::server::{data::user::UserRepository, model::user::RegisterUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_game;
mod delete_by_steam_id;
mod get_pollable;
mod update_last_share_codes;
mod upsert;
