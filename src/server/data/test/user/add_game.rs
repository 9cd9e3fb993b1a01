use super::*;

/// Tests linking a match to an account twice.
///
/// Verifies that the second link is ignored instead of failing.
///
/// Expected: Ok(true) then Ok(false), with a single stored link
#[tokio::test]
async fn ignores_duplicate_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.add_game(user.id, game.id).await?);
    assert!(!repo.add_game(user.id, game.id).await?);
    assert_eq!(repo.count_games(user.id).await?, 1);

    Ok(())
}
