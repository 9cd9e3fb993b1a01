use crate::server::data::guild::GuildRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_user;
mod create_if_missing;
mod find_memberships_for_users;
mod remove_game;
mod update_channel;
