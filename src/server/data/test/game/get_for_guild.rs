use super::*;
use crate::server::data::guild::GuildRepository;

/// Tests listing a guild's matches.
///
/// Verifies that only matches linked to the guild are returned and the limit applies.
///
/// Expected: Ok(vec) with the newest linked match only
#[tokio::test]
async fn returns_linked_games_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let older = factory::create_game(db).await?;
    let newer = factory::create_game(db).await?;
    let unlinked = factory::create_game(db).await?;

    let guild_repo = GuildRepository::new(db);
    guild_repo.add_game(guild.id, older.id).await?;
    guild_repo.add_game(guild.id, newer.id).await?;

    let repo = GameRepository::new(db);
    let all = repo.get_for_guild(guild.id, 10).await?;
    let limited = repo.get_for_guild(guild.id, 1).await?;

    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|game| game.id != unlinked.id));
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, newer.id);

    Ok(())
}
