use super::*;

/// Tests removing a linked match and removing it again.
///
/// Expected: Ok(true) then Ok(false), with no linked matches left
#[tokio::test]
async fn removes_game_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let game = factory::create_game(db).await?;

    let repo = GuildRepository::new(db);
    repo.add_game(guild.id, game.id).await?;

    assert!(repo.remove_game(guild.id, game.id).await?);
    assert!(!repo.remove_game(guild.id, game.id).await?);
    assert_eq!(repo.count_games(guild.id).await?, 0);

    Ok(())
}
