use super::*;

/// Tests listing every series in insertion order.
///
/// Expected: all rows, ordered by id
#[tokio::test]
async fn lists_all_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_series(db).await?;
    let second = factory::create_series(db).await?;

    let repo = SeriesRepository::new(db);
    let series = repo.get_all().await?;

    assert_eq!(series, vec![first, second]);

    Ok(())
}

/// Tests listing with an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
