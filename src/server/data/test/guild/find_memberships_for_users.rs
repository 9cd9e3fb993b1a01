use super::*;

/// Tests resolving guilds for a group of participants.
///
/// Guild X contains A and B, guild Y contains C, guild Z contains nobody from the
/// group. Verifies that each guild is listed once with only its own members.
///
/// Expected: Ok(vec) with X -> [A, B] and Y -> [C]
#[tokio::test]
async fn groups_members_per_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let c = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let x = factory::create_guild(db).await?;
    let y = factory::create_guild(db).await?;
    let z = factory::create_guild(db).await?;
    factory::helpers::add_member(db, x.id, a.id).await?;
    factory::helpers::add_member(db, x.id, b.id).await?;
    factory::helpers::add_member(db, y.id, c.id).await?;
    factory::helpers::add_member(db, z.id, outsider.id).await?;

    let repo = GuildRepository::new(db);
    let memberships = repo
        .find_memberships_for_users(&[a.id, b.id, c.id])
        .await?;

    assert_eq!(memberships.len(), 2);
    assert_eq!(memberships[0].guild.id, x.id);
    assert_eq!(memberships[0].user_ids, vec![a.id, b.id]);
    assert_eq!(memberships[1].guild.id, y.id);
    assert_eq!(memberships[1].user_ids, vec![c.id]);

    Ok(())
}

/// Tests resolving guilds for nobody.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn empty_input_returns_no_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert!(repo.find_memberships_for_users(&[]).await?.is_empty());

    Ok(())
}
