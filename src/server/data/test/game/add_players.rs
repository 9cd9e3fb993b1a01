use super::*;

/// Tests recording participants twice.
///
/// Expected: Ok(2) then Ok(1), with three sorted participants stored
#[tokio::test]
async fn ignores_known_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .with_table(entity::prelude::GamePlayer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;

    let repo = GameRepository::new(db);
    let first = repo
        .add_players(game.id, &["300".to_string(), "100".to_string()])
        .await?;
    let second = repo
        .add_players(game.id, &["100".to_string(), "200".to_string()])
        .await?;

    assert_eq!(first, 2);
    assert_eq!(second, 1);
    assert_eq!(repo.get_players(game.id).await?, vec!["100", "200", "300"]);
    assert_eq!(repo.count_players(game.id).await?, 3);

    Ok(())
}
