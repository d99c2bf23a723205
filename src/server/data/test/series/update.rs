use super::*;

/// Tests overwriting name and description.
///
/// Expected: one row affected and the stored row carries the new values
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;

    let repo = SeriesRepository::new(db);
    let rows = repo
        .update(UpdateSeriesParams {
            id: series.id,
            fields: fields("Silver Surfer"),
        })
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(series.id).await?.unwrap();
    assert_eq!(stored.name, "Silver Surfer");
    assert_eq!(stored.description, "Description of Silver Surfer");

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

    let repo = SeriesRepository::new(db);
    let rows = repo
        .update(UpdateSeriesParams {
            id: 99,
            fields: fields("Nothing"),
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
