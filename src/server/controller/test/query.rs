use super::*;
use test_utils::{builder::TestBuilder, factory};

/// Tests looking up an unknown match.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn unknown_match_is_not_found() {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db, Default::default(), Default::default())
        .oneshot(get("/api/v1/match/CSGO-MISSING"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests looking up a stored match.
///
/// Expected: 200 OK with the state and participants
#[tokio::test]
async fn returns_match_with_players() {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_game(db).await.unwrap();
    factory::helpers::add_player(db, game.id, "100").await.unwrap();

    let response = app(db, Default::default(), Default::default())
        .oneshot(get(&format!("/api/v1/match/{}", game.share_code)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["share_code"], game.share_code);
    assert_eq!(body["status"], "requested");
    assert_eq!(body["steam_ids"], serde_json::json!(["100"]));
}

/// Tests looking up a registered account.
///
/// Expected: 200 OK without the auth code
#[tokio::test]
async fn returns_user_without_auth_code() {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();

    let response = app(db, Default::default(), Default::default())
        .oneshot(get(&format!("/api/v1/user/{}", user.steam_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["steam_id"], user.steam_id);
    assert_eq!(body["game_count"], 0);
    assert!(body.get("auth_code").is_none());
}

/// Tests looking up a guild.
///
/// Expected: 200 OK with member count, 404 for an unknown guild
#[tokio::test]
async fn returns_guild_summary() {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await.unwrap();
    let guild = factory::create_guild(db).await.unwrap();
    factory::helpers::add_member(db, guild.id, user.id).await.unwrap();

    let found = app(db, Default::default(), Default::default())
        .oneshot(get(&format!("/api/v1/guild/{}", guild.guild_id)))
        .await
        .unwrap();
    let missing = app(db, Default::default(), Default::default())
        .oneshot(get("/api/v1/guild/404"))
        .await
        .unwrap();

    assert_eq!(found.status(), StatusCode::OK);
    assert_eq!(json_body(found).await["user_count"], 1);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
