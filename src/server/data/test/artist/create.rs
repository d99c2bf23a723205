use super::*;

/// Tests inserting an artist row.
///
/// Verifies that the repository assigns an id and stores every field as given.
///
/// Expected: Ok with the persisted row
#[tokio::test]
async fn creates_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let artist = repo
        .create(CreateArtistParams {
            fields: fields("Jack Kirby", true),
        })
        .await?;

    assert!(artist.id > 0);
    assert_eq!(artist.name, "Jack Kirby");
    assert_eq!(artist.date_of_birth, "1917-08-28");
    assert_eq!(artist.biography, "Biography of Jack Kirby");
    assert!(artist.is_currently_employed);

    let stored = entity::prelude::Artist::find_by_id(artist.id).one(db).await?;
    assert_eq!(stored, Some(artist));

    Ok(())
}

/// Tests that consecutive inserts receive increasing ids.
///
/// Expected: second id greater than the first
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);
    let first = repo
        .create(CreateArtistParams {
            fields: fields("First", true),
        })
        .await?;
    let second = repo
        .create(CreateArtistParams {
            fields: fields("Second", false),
        })
        .await?;

    assert!(second.id > first.id);
    assert!(!second.is_currently_employed);

    Ok(())
}
