use super::*;

fn param(steam_id: &str, share_code: &str, discord_user_id: Option<&str>) -> RegisterUserParam {
    RegisterUserParam {
        steam_id: steam_id.to_string(),
        auth_code: format!("AUTH-{}", share_code),
        last_share_code: share_code.to_string(),
        discord_user_id: discord_user_id.map(str::to_string),
    }
}

/// Tests creating a new account.
///
/// Verifies that upserting an unknown Steam ID inserts a row with the provided
/// credentials.
///
/// Expected: Ok(User) with matching fields
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(param("76561198000000001", "CSGO-1", Some("42")))
        .await?;

    assert_eq!(user.steam_id, "76561198000000001");
    assert_eq!(user.last_share_code, "CSGO-1");
    assert_eq!(user.auth_code, "AUTH-CSGO-1");
    assert_eq!(user.discord_user_id.as_deref(), Some("42"));

    Ok(())
}

/// Tests re-registering an existing Steam ID.
///
/// Verifies that the auth code and last share code rotate while the row id is kept,
/// and that a missing Discord user does not clear the stored one.
///
/// Expected: Ok(User) with the same id and rotated credentials
#[tokio::test]
async fn rotates_credentials_of_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo
        .upsert(param("76561198000000001", "CSGO-1", Some("42")))
        .await?;
    let second = repo
        .upsert(param("76561198000000001", "CSGO-2", None))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.last_share_code, "CSGO-2");
    assert_eq!(second.auth_code, "AUTH-CSGO-2");
    assert_eq!(second.discord_user_id.as_deref(), Some("42"));
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
