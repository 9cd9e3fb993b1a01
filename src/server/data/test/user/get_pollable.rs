use super::*;

/// Tests selecting accounts for polling.
///
/// Verifies that accounts without a last share code are skipped.
///
/// Expected: Ok(Vec<User>) containing only the account with a share code
#[tokio::test]
async fn skips_users_without_share_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pollable = factory::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .last_share_code("")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let users = repo.get_pollable().await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, pollable.id);
    assert!(users[0].is_pollable());

    Ok(())
}
