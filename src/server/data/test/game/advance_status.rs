use super::*;

/// Tests moving a requested match to ready.
///
/// Expected: Ok(true) with the asset reference stored
#[tokio::test]
async fn advances_requested_to_ready() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .share_code("CSGO-1")
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert!(
        repo.advance_status("CSGO-1", DemoStatus::Ready, Some("/demos/1.dem"))
            .await?
    );
    let game = repo.find_by_share_code("CSGO-1").await?.unwrap();
    assert_eq!(game.status, DemoStatus::Ready);
    assert_eq!(game.demo_name, "/demos/1.dem");

    Ok(())
}

/// Tests a late ready event for a match that is already parsed.
///
/// Verifies that the state never moves backwards and the asset reference is kept.
///
/// Expected: Ok(false) and the match stays parsed
#[tokio::test]
async fn never_moves_backwards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .share_code("CSGO-1")
        .demo_name("/parsed/1.dem")
        .status(DemoStatus::Parsed)
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert!(
        !repo
            .advance_status("CSGO-1", DemoStatus::Ready, Some("/late/1.dem"))
            .await?
    );
    let game = repo.find_by_share_code("CSGO-1").await?.unwrap();
    assert_eq!(game.status, DemoStatus::Parsed);
    assert_eq!(game.demo_name, "/parsed/1.dem");

    Ok(())
}

/// Tests skipping the ready state.
///
/// Expected: Ok(true) moving requested straight to parsed, keeping an empty reference
/// when none is supplied
#[tokio::test]
async fn skips_ready_when_parsed_arrives_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::GameFactory::new(db)
        .share_code("CSGO-1")
        .build()
        .await?;

    let repo = GameRepository::new(db);

    assert!(repo.advance_status("CSGO-1", DemoStatus::Parsed, None).await?);
    let game = repo.find_by_share_code("CSGO-1").await?.unwrap();
    assert_eq!(game.status, DemoStatus::Parsed);
    assert!(game.demo_name.is_empty());

    Ok(())
}
