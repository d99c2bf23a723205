use super::*;

/// Tests existence checks for present and absent artists.
///
/// Retired artists still exist.
///
/// Expected: true for stored rows, false otherwise
#[tokio::test]
async fn reports_existing_artists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let employed = factory::create_artist(db).await?;
    let retired = factory::artist::ArtistFactory::new(db)
        .employed(false)
        .build()
        .await?;

    let repo = ArtistRepository::new(db);

    assert!(repo.exists(employed.id).await?);
    assert!(repo.exists(retired.id).await?);
    assert!(!repo.exists(retired.id + 100).await?);

    Ok(())
}

/// Tests that lookups by id return retired artists too.
///
/// Expected: Some for the retired artist, None for an unknown id
#[tokio::test]
async fn gets_artist_regardless_of_employment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let retired = factory::artist::ArtistFactory::new(db)
        .employed(false)
        .build()
        .await?;

    let repo = ArtistRepository::new(db);

    assert_eq!(repo.get_by_id(retired.id).await?, Some(retired.clone()));
    assert_eq!(repo.get_by_id(retired.id + 1).await?, None);

    Ok(())
}
