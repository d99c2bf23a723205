use super::*;

/// Tests deleting an issue.
///
/// Expected: one row deleted, artist and series untouched
#[tokio::test]
async fn deletes_issue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, series, issue) = factory::helpers::create_issue_with_dependencies(db).await?;

    let repo = IssueRepository::new(db);

    assert_eq!(repo.delete(issue.id).await?, 1);
    assert!(repo.get_by_id(issue.id).await?.is_none());
    assert_eq!(repo.count_by_series_id(series.id).await?, 0);

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

    let repo = IssueRepository::new(db);

    assert_eq!(repo.delete(3).await?, 0);

    Ok(())
}
