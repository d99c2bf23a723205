use super::*;

/// Tests clearing the employment flag.
///
/// Only the flag changes; the other columns keep their values.
///
/// Expected: one row affected, flag false, other fields untouched
#[tokio::test]
async fn clears_employment_flag_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let rows = repo.set_employment(artist.id, false).await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(artist.id).await?.unwrap();
    assert!(!stored.is_currently_employed);
    assert_eq!(stored.name, artist.name);
    assert_eq!(stored.date_of_birth, artist.date_of_birth);
    assert_eq!(stored.biography, artist.biography);

    Ok(())
}

/// Tests clearing an already cleared flag.
///
/// Expected: row still matched and flag stays false
#[tokio::test]
async fn is_idempotent_for_retired_artist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::artist::ArtistFactory::new(db)
        .employed(false)
        .build()
        .await?;

    let repo = ArtistRepository::new(db);
    let rows = repo.set_employment(artist.id, false).await?;

    assert_eq!(rows, 1);
    assert!(!repo.get_by_id(artist.id).await?.unwrap().is_currently_employed);

    Ok(())
}

/// Tests the flag change on an unknown id.
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

    assert_eq!(repo.set_employment(7, false).await?, 0);

    Ok(())
}
