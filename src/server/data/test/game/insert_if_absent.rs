use super::*;

/// Tests creating a match that does not exist yet.
///
/// Expected: Ok(true) and the match is stored in the requested state
#[tokio::test]
async fn inserts_new_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);

    assert!(repo.insert_if_absent("CSGO-1", DemoStatus::Requested, "").await?);
    let game = repo.find_by_share_code("CSGO-1").await?.unwrap();
    assert_eq!(game.status, DemoStatus::Requested);

    Ok(())
}

/// Tests inserting a share code that already exists.
///
/// Verifies that the stored state is never overwritten by a later insert.
///
/// Expected: Ok(false) and the match stays parsed
#[tokio::test]
async fn leaves_existing_game_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .share_code("CSGO-1")
        .demo_name("/demos/1.dem")
        .status(DemoStatus::Parsed)
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert!(!repo.insert_if_absent("CSGO-1", DemoStatus::Requested, "").await?);
    let game = repo.find_by_share_code("CSGO-1").await?.unwrap();
    assert_eq!(game.status, DemoStatus::Parsed);
    assert_eq!(game.demo_name, "/demos/1.dem");

    Ok(())
}
