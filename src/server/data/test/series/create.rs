use super::*;

/// Tests inserting a series row.
///
/// Expected: Ok with generated id and the given fields
#[tokio::test]
async fn creates_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);
    let series = repo
        .create(CreateSeriesParams {
            fields: fields("Fantastic Four"),
        })
        .await?;

    assert!(series.id > 0);
    assert_eq!(series.name, "Fantastic Four");
    assert_eq!(series.description, "Description of Fantastic Four");
    assert_eq!(repo.get_by_id(series.id).await?, Some(series));

    Ok(())
}
