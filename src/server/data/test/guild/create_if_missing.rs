use super::*;

/// Tests creating a guild on first contact.
///
/// Expected: Ok((Guild, true)) with the provided channel
#[tokio::test]
async fn creates_missing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let (guild, created) = repo.create_if_missing("111", "222").await?;

    assert!(created);
    assert_eq!(guild.guild_id, "111");
    assert_eq!(guild.channel_id, "222");
    assert!(!guild.has_placeholder_channel());

    Ok(())
}

/// Tests repeated contact with a known guild.
///
/// Verifies that the stored channel is not replaced.
///
/// Expected: Ok((Guild, false)) with the original channel
#[tokio::test]
async fn keeps_existing_guild_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let (first, _) = repo.create_if_missing("111", "222").await?;
    let (second, created) = repo.create_if_missing("111", "333").await?;

    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(second.channel_id, "222");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
