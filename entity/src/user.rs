use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub steam_id: String,
    pub auth_code: String,
    pub last_share_code: String,
    pub discord_user_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guild_user::Entity")]
    GuildUser,
    #[sea_orm(has_many = "super::user_game::Entity")]
    UserGame,
}

impl Related<super::guild_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildUser.def()
    }
}

impl Related<super::user_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
