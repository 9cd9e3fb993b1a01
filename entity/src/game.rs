use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub share_code: String,
    pub demo_name: String,
    pub status: DemoStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_player::Entity")]
    GamePlayer,
    #[sea_orm(has_many = "super::guild_game::Entity")]
    GuildGame,
    #[sea_orm(has_many = "super::user_game::Entity")]
    UserGame,
}

impl Related<super::game_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GamePlayer.def()
    }
}

impl Related<super::guild_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildGame.def()
    }
}

impl Related<super::user_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Lifecycle of a match's demo asset. Stored as its lowercase name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum DemoStatus {
    #[sea_orm(string_value = "requested")]
    Requested,
    #[sea_orm(string_value = "ready")]
    Ready,
    #[sea_orm(string_value = "parsed")]
    Parsed,
}

impl DemoStatus {
    /// States a match may move out of when advancing to `self`.
    pub fn predecessors(self) -> &'static [DemoStatus] {
        match self {
            DemoStatus::Requested => &[],
            DemoStatus::Ready => &[DemoStatus::Requested],
            DemoStatus::Parsed => &[DemoStatus::Requested, DemoStatus::Ready],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DemoStatus::Requested => "requested",
            DemoStatus::Ready => "ready",
            DemoStatus::Parsed => "parsed",
        }
    }
}
