use super::*;

/// Tests overwriting every column, including the owning series.
///
/// Expected: one row affected and the issue moved to the other series
#[tokio::test]
async fn overwrites_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalogue_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, issue) = factory::helpers::create_issue_with_dependencies(db).await?;
    let artist = factory::create_artist(db).await?;
    let series = factory::create_series(db).await?;

    let repo = IssueRepository::new(db);
    let rows = repo
        .update(UpdateIssueParams {
            id: issue.id,
            fields: fields(artist.id, series.id, 7),
        })
        .await?;

    assert_eq!(rows, 1);

    let stored = repo.get_by_id(issue.id).await?.unwrap();
    assert_eq!(stored.name, "Issue #7");
    assert_eq!(stored.issue_number, 7);
    assert_eq!(stored.artist_id, artist.id);
    assert_eq!(stored.series_id, series.id);

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

    let artist = factory::create_artist(db).await?;
    let series = factory::create_series(db).await?;

    let repo = IssueRepository::new(db);
    let rows = repo
        .update(UpdateIssueParams {
            id: 31,
            fields: fields(artist.id, series.id, 1),
        })
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
