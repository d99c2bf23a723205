use crate::server::{
    data::issue::IssueRepository,
    model::issue::{CreateIssueParams, IssueFields, UpdateIssueParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_series_id;
mod update;

fn fields(artist_id: i32, series_id: i32, issue_number: i64) -> IssueFields {
    IssueFields {
        name: format!("Issue #{}", issue_number),
        issue_number,
        publication_date: "1961-11-01".to_string(),
        artist_id,
        series_id,
    }
}
