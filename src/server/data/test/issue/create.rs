use super::*;

/// Tests inserting an issue row.
///
/// Expected: Ok with generated id and the given references
#[tokio::test]
async fn creates_issue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;
    let series = factory::create_series(db).await?;

    let repo = IssueRepository::new(db);
    let issue = repo
        .create(CreateIssueParams {
            fields: fields(artist.id, series.id, 1),
        })
        .await?;

    assert!(issue.id > 0);
    assert_eq!(issue.name, "Issue #1");
    assert_eq!(issue.issue_number, 1);
    assert_eq!(issue.publication_date, "1961-11-01");
    assert_eq!(issue.artist_id, artist.id);
    assert_eq!(issue.series_id, series.id);
    assert_eq!(repo.get_by_id(issue.id).await?, Some(issue));

    Ok(())
}

/// Tests that the store rejects an issue pointing at a missing series.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let artist = factory::create_artist(db).await?;

    let repo = IssueRepository::new(db);
    let result = repo
        .create(CreateIssueParams {
            fields: fields(artist.id, 404, 1),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
