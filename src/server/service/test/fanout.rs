use std::sync::Arc;

use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{guild::GuildRepository, user::UserRepository},
    error::AppError,
    model::game::DemoStatus,
    service::{notification::fanout::MatchFanout, test::fakes::RecordingNotifier},
};

async fn parsed_game(
    db: &sea_orm::DatabaseConnection,
    share_code: &str,
    players: &[&str],
) -> Result<entity::game::Model, AppError> {
    let game = factory::game::GameFactory::new(db)
        .share_code(share_code)
        .demo_name("/demos/match.dem")
        .status(DemoStatus::Parsed)
        .build()
        .await?;
    for steam_id in players {
        factory::helpers::add_player(db, game.id, *steam_id).await?;
    }
    Ok(game)
}

/// Tests per-guild scoping of a match summary.
///
/// A and B are members of guild X, C is a member of guild Y. Verifies that each guild
/// receives exactly one summary listing only its own members.
///
/// Expected: X lists {A, B}, Y lists {C}
#[tokio::test]
async fn each_guild_sees_only_its_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    let x = factory::create_guild(db).await?;
    let y = factory::create_guild(db).await?;
    factory::helpers::add_member(db, x.id, a.id).await?;
    factory::helpers::add_member(db, x.id, b.id).await?;
    factory::helpers::add_member(db, y.id, c.id).await?;
    parsed_game(
        db,
        "CSGO-SCOPE",
        &[a.steam_id.as_str(), b.steam_id.as_str(), c.steam_id.as_str()],
    )
    .await?;

    let notifier = RecordingNotifier::default();
    let report = MatchFanout::new(db, &notifier)
        .deliver("CSGO-SCOPE", None)
        .await?;

    assert_eq!(report.delivered.len(), 2);
    assert!(report.failed.is_empty());

    let to_x = notifier.sent_to(&x.channel_id);
    let to_y = notifier.sent_to(&y.channel_id);
    assert_eq!(to_x.len(), 1);
    assert_eq!(to_y.len(), 1);

    let x_members: Vec<&str> = to_x[0].members.iter().map(|m| m.steam_id.as_str()).collect();
    let y_members: Vec<&str> = to_y[0].members.iter().map(|m| m.steam_id.as_str()).collect();
    assert_eq!(x_members, vec![a.steam_id.as_str(), b.steam_id.as_str()]);
    assert_eq!(y_members, vec![c.steam_id.as_str()]);
    assert_eq!(to_x[0].player_count, 3);
    assert_eq!(to_x[0].members[0].label(), format!("player-{}", a.steam_id));

    Ok(())
}

/// Tests a participant without a registered account.
///
/// Expected: the member is listed, the unknown account is listed as unregistered and
/// triggers no notification of its own
#[tokio::test]
async fn lists_unregistered_participants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let s1 = factory::create_user(db).await?;
    let guild = factory::create_guild(db).await?;
    factory::helpers::add_member(db, guild.id, s1.id).await?;
    parsed_game(
        db,
        "CSGO-UNREG",
        &[s1.steam_id.as_str(), "76561198999999999"],
    )
    .await?;

    let notifier = RecordingNotifier::default();
    let report = MatchFanout::new(db, &notifier)
        .deliver("CSGO-UNREG", Some(serde_json::json!({ "kills": 20 })))
        .await?;

    assert_eq!(report.unregistered, vec!["76561198999999999"]);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let summary = &sent[0].1;
    assert_eq!(summary.members.len(), 1);
    assert_eq!(summary.members[0].steam_id, s1.steam_id);
    assert_eq!(summary.unregistered, vec!["76561198999999999"]);
    assert!(summary.stats.is_some());

    Ok(())
}

/// Tests a delivery failure for one guild.
///
/// Expected: the other guild is still notified, the failure is reported and the failed
/// guild is left unlinked so a later fan-out retries it
#[tokio::test]
async fn failed_delivery_does_not_stop_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let broken = factory::guild::GuildFactory::new(db)
        .channel_id("broken")
        .build()
        .await?;
    let healthy = factory::create_guild(db).await?;
    factory::helpers::add_member(db, broken.id, user.id).await?;
    factory::helpers::add_member(db, healthy.id, user.id).await?;
    parsed_game(db, "CSGO-PARTIAL", &[user.steam_id.as_str()]).await?;

    let notifier = RecordingNotifier::failing_for("broken");
    let report = MatchFanout::new(db, &notifier)
        .deliver("CSGO-PARTIAL", None)
        .await?;

    assert_eq!(report.failed, vec![broken.guild_id.clone()]);
    assert_eq!(report.delivered, vec![healthy.guild_id.clone()]);
    assert_eq!(notifier.sent_to(&healthy.channel_id).len(), 1);

    let guild_repo = GuildRepository::new(db);
    assert_eq!(guild_repo.count_games(broken.id).await?, 0);
    assert_eq!(guild_repo.count_games(healthy.id).await?, 1);

    Ok(())
}

/// Tests the associations recorded while fanning out.
///
/// Expected: the match is linked to the notified guild and to the registered participant
#[tokio::test]
async fn links_match_to_guilds_and_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let guild = factory::create_guild(db).await?;
    let bystander = factory::create_guild(db).await?;
    factory::helpers::add_member(db, guild.id, user.id).await?;
    parsed_game(db, "CSGO-LINK", &[user.steam_id.as_str()]).await?;

    let notifier = RecordingNotifier::default();
    MatchFanout::new(db, &notifier)
        .deliver("CSGO-LINK", None)
        .await?;

    let guild_repo = GuildRepository::new(db);
    assert_eq!(guild_repo.count_games(guild.id).await?, 1);
    assert_eq!(guild_repo.count_games(bystander.id).await?, 0);
    assert_eq!(UserRepository::new(db).count_games(user.id).await?, 1);

    Ok(())
}

/// Tests fanning out the same match twice.
///
/// Expected: the second fan-out skips the guild notified by the first
#[tokio::test]
async fn repeated_fanout_skips_notified_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let guild = factory::create_guild(db).await?;
    factory::helpers::add_member(db, guild.id, user.id).await?;
    parsed_game(db, "CSGO-AGAIN", &[user.steam_id.as_str()]).await?;

    let notifier = RecordingNotifier::default();
    let fanout = MatchFanout::new(db, &notifier);
    let first = fanout.deliver("CSGO-AGAIN", None).await?;
    let second = fanout.deliver("CSGO-AGAIN", None).await?;

    assert_eq!(first.delivered, vec![guild.guild_id.clone()]);
    assert!(second.delivered.is_empty());
    assert_eq!(second.already_notified, vec![guild.guild_id.clone()]);
    assert_eq!(notifier.sent().len(), 1);

    Ok(())
}
