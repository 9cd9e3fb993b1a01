use super::*;

/// Tests replacing a guild's notification channel.
///
/// Expected: Ok(true) and the new channel is stored
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = GuildRepository::new(db);

    assert!(repo.update_channel(&guild.guild_id, "999").await?);
    let stored = repo.find_by_guild_id(&guild.guild_id).await?.unwrap();
    assert_eq!(stored.channel_id, "999");

    Ok(())
}

/// Tests updating a guild the bot never saw.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);

    assert!(!repo.update_channel("404", "999").await?);

    Ok(())
}
