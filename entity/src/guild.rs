use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub channel_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::guild_user::Entity")]
    GuildUser,
    #[sea_orm(has_many = "super::guild_game::Entity")]
    GuildGame,
}

impl Related<super::guild_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildUser.def()
    }
}

impl Related<super::guild_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildGame.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
