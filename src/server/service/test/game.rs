use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{AssetTransition, DemoStatus, TransitionOutcome},
    service::game::GameService,
};

fn transition(share_code: &str, target: DemoStatus, players: &[&str]) -> AssetTransition {
    AssetTransition {
        share_code: share_code.to_string(),
        target,
        demo_name: None,
        players: players.iter().map(|p| p.to_string()).collect(),
    }
}

/// Tests the outcomes of successive transitions.
///
/// Expected: Created, then Advanced, then Unchanged for a backwards transition
#[tokio::test]
async fn reports_transition_outcomes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);

    let (_, created) = service
        .advance(transition("CSGO-1", DemoStatus::Requested, &[]))
        .await?;
    let (_, advanced) = service
        .advance(transition("CSGO-1", DemoStatus::Parsed, &[]))
        .await?;
    let (game, unchanged) = service
        .advance(transition("CSGO-1", DemoStatus::Ready, &[]))
        .await?;

    assert_eq!(created, TransitionOutcome::Created);
    assert_eq!(advanced, TransitionOutcome::Advanced);
    assert_eq!(unchanged, TransitionOutcome::Unchanged);
    assert_eq!(game.status, DemoStatus::Parsed);

    Ok(())
}

/// Tests participant recording once a match is parsed.
///
/// Expected: participants reported after parsing are ignored
#[tokio::test]
async fn parsed_match_participants_are_frozen() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    service
        .advance(transition("CSGO-1", DemoStatus::Parsed, &["100"]))
        .await?;
    let (game, _) = service
        .advance(transition("CSGO-1", DemoStatus::Requested, &["200"]))
        .await?;

    assert_eq!(GameRepository::new(db).get_players(game.id).await?, vec!["100"]);

    Ok(())
}

/// Tests reading a match with its participants.
///
/// Expected: Ok(GameDetail) for a stored match and NotFound otherwise
#[tokio::test]
async fn get_detail_includes_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await?;
    factory::helpers::add_player(db, game.id, "100").await?;

    let service = GameService::new(db);
    let detail = service.get_detail(&game.share_code).await?;
    let missing = service.get_detail("CSGO-MISSING").await;

    assert_eq!(detail.players, vec!["100"]);
    assert_eq!(detail.into_dto().status, "requested");
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
