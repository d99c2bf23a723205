use super::*;

/// Tests that only issues of the requested series are returned.
///
/// Expected: issues of the series in insertion order, nothing from other series
#[tokio::test]
async fn lists_issues_of_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;
    let series = factory::create_series(db).await?;
    let other = factory::create_series(db).await?;

    let first = factory::create_issue(db, artist.id, series.id).await?;
    factory::create_issue(db, artist.id, other.id).await?;
    let second = factory::create_issue(db, artist.id, series.id).await?;

    let repo = IssueRepository::new(db);

    assert_eq!(repo.get_by_series_id(series.id).await?, vec![first, second]);
    assert_eq!(repo.count_by_series_id(series.id).await?, 2);
    assert_eq!(repo.count_by_series_id(other.id).await?, 1);

    Ok(())
}

/// Tests listing a series with no issues.
///
/// Expected: Ok with empty list and zero count
#[tokio::test]
async fn returns_empty_list_for_series_without_issues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;

    let repo = IssueRepository::new(db);

    assert!(repo.get_by_series_id(series.id).await?.is_empty());
    assert_eq!(repo.count_by_series_id(series.id).await?, 0);

    Ok(())
}
