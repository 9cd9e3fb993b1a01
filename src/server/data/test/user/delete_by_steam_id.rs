use super::*;
use crate::server::data::guild::GuildRepository;

/// Tests removing an account that belongs to several guilds.
///
/// Verifies that the account disappears from every guild's member set and its match
/// links are removed, while other members are untouched.
///
/// Expected: Ok(true) and no guild references the account
#[tokio::test]
async fn removes_user_from_every_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let first = factory::create_guild(db).await?;
    let second = factory::create_guild(db).await?;
    let game = factory::create_game(db).await?;
    factory::helpers::add_member(db, first.id, user.id).await?;
    factory::helpers::add_member(db, second.id, user.id).await?;
    factory::helpers::add_member(db, first.id, other.id).await?;

    let repo = UserRepository::new(db);
    repo.add_game(user.id, game.id).await?;

    assert!(repo.delete_by_steam_id(&user.steam_id).await?);

    let guild_repo = GuildRepository::new(db);
    let members = guild_repo.get_members(first.id, None).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, other.id);
    assert_eq!(guild_repo.count_users(second.id).await?, 0);
    assert_eq!(repo.count_games(user.id).await?, 0);
    assert!(repo.find_by_steam_id(&user.steam_id).await?.is_none());

    Ok(())
}

/// Tests removing an unknown account.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete_by_steam_id("76561198999999999").await?);

    Ok(())
}
