use super::*;

/// Tests that only employed artists are listed.
///
/// Expected: retired artists are left out, order follows insertion
#[tokio::test]
async fn lists_only_employed_artists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_artist(db).await?;
    factory::artist::ArtistFactory::new(db)
        .employed(false)
        .build()
        .await?;
    let third = factory::create_artist(db).await?;

    let repo = ArtistRepository::new(db);
    let employed = repo.get_employed().await?;

    let ids: Vec<i32> = employed.iter().map(|artist| artist.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    Ok(())
}

/// Tests listing with an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_artists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ArtistRepository::new(db);

    assert!(repo.get_employed().await?.is_empty());

    Ok(())
}
