use crate::server::{data::game::GameRepository, model::game::DemoStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_players;
mod advance_status;
mod get_for_guild;
mod insert_if_absent;
