use super::*;

/// Tests advancing the last share code for every reporter of a match.
///
/// Verifies that only the listed accounts are updated.
///
/// Expected: Ok(2) and the third account keeps its code
#[tokio::test]
async fn updates_only_listed_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_last_share_codes(&[a.id, b.id], "CSGO-NEXT")
        .await?;

    assert_eq!(updated, 2);
    for steam_id in [&a.steam_id, &b.steam_id] {
        let user = repo.find_by_steam_id(steam_id).await?.unwrap();
        assert_eq!(user.last_share_code, "CSGO-NEXT");
    }
    let untouched = repo.find_by_steam_id(&c.steam_id).await?.unwrap();
    assert_eq!(untouched.last_share_code, c.last_share_code);

    Ok(())
}

/// Tests updating with no accounts.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_slice_updates_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.update_last_share_codes(&[], "CSGO-NEXT").await?, 0);

    Ok(())
}
