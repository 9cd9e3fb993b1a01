use super::*;

/// Tests adding the same account to a guild twice.
///
/// Expected: Ok(true) then Ok(false), with one member
#[tokio::test]
async fn membership_is_a_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let user = factory::create_user(db).await?;

    let repo = GuildRepository::new(db);

    assert!(repo.add_user(guild.id, user.id).await?);
    assert!(!repo.add_user(guild.id, user.id).await?);
    assert_eq!(repo.count_users(guild.id).await?, 1);

    Ok(())
}

/// Tests adding the same match to a guild twice.
///
/// Expected: Ok(true) then Ok(false), with one linked match
#[tokio::test]
async fn game_links_are_a_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let game = factory::create_game(db).await?;

    let repo = GuildRepository::new(db);

    assert!(repo.add_game(guild.id, game.id).await?);
    assert!(!repo.add_game(guild.id, game.id).await?);
    assert_eq!(repo.count_games(guild.id).await?, 1);

    Ok(())
}
