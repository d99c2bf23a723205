use super::*;

/// Tests deleting a series without issues.
///
/// Expected: one row deleted and the series is gone
#[tokio::test]
async fn deletes_series_without_issues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::create_series(db).await?;

    let repo = SeriesRepository::new(db);
    let rows = repo.delete_if_unreferenced(series.id).await?;

    assert_eq!(rows, 1);
    assert!(repo.get_by_id(series.id).await?.is_none());

    Ok(())
}

/// Tests that a series referenced by an issue is kept.
///
/// Expected: zero rows deleted, series and issue both still stored
#[tokio::test]
async fn keeps_series_with_issues() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, series, _) = factory::helpers::create_issue_with_dependencies(db).await?;

    let repo = SeriesRepository::new(db);
    let rows = repo.delete_if_unreferenced(series.id).await?;

    assert_eq!(rows, 0);
    assert!(repo.get_by_id(series.id).await?.is_some());
    assert_eq!(entity::prelude::Issue::find().count(db).await?, 1);

    Ok(())
}

/// Tests that issues in another series do not block the delete.
///
/// Expected: the unreferenced series is deleted, the other one stays
#[tokio::test]
async fn ignores_issues_of_other_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, busy, _) = factory::helpers::create_issue_with_dependencies(db).await?;
    let empty = factory::create_series(db).await?;

    let repo = SeriesRepository::new(db);

    assert_eq!(repo.delete_if_unreferenced(empty.id).await?, 1);
    assert_eq!(repo.get_all().await?, vec![busy]);

    Ok(())
}

/// Tests deleting an id with no row.
///
/// Expected: zero rows deleted
#[tokio::test]
async fn affects_nothing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeriesRepository::new(db);

    assert_eq!(repo.delete_if_unreferenced(5).await?, 0);

    Ok(())
}
