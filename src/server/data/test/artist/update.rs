use super::*;

/// Tests overwriting every column of an artist.
///
/// Expected: one row affected and the stored row matches the new fields
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let rows = repo
        .update(UpdateArtistParams {
            id: artist.id,
            fields: fields("Steve Ditko", false),
        })
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(artist.id).await?.unwrap();
    assert_eq!(stored.id, artist.id);
    assert_eq!(stored.name, "Steve Ditko");
    assert_eq!(stored.biography, "Biography of Steve Ditko");
    assert!(!stored.is_currently_employed);

    Ok(())
}

/// Tests updating an id with no row.
///
/// Expected: zero rows affected
#[tokio::test]
async fn affects_nothing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let rows = repo
        .update(UpdateArtistParams {
            id: 42,
            fields: fields("Nobody", true),
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
