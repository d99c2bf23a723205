//! Required-field checks for incoming entity payloads.
//!
//! Every function here is pure: it inspects a request payload and returns whether it may be
//! written. Handlers run these before touching the store and answer 400 on a `false`
//! verdict.
//!
//! A string field is present when it is supplied, not null and not empty. A numeric field is
//! present when it is supplied and non-zero.

use crate::model::{
    artist::{ArtistInputDto, EmploymentFlag},
    issue::IssueInputDto,
    series::SeriesInputDto,
};


/// Artist payloads need a name, a date of birth and a biography.
pub fn artist_is_valid(artist: &ArtistInputDto) -> bool {
    is_present(&artist.name) && is_present(&artist.date_of_birth) && is_present(&artist.biography)
}

/// Series payloads need a name and a description.
pub fn series_is_valid(series: &SeriesInputDto) -> bool {
    is_present(&series.name) && is_present(&series.description)
}

/// Issue payloads need a name, an issue number, a publication date and an artist id.
///
/// Only presence is checked here; whether the artist exists is a store lookup done by the
/// issue service.
pub fn issue_is_valid(issue: &IssueInputDto) -> bool {
    is_present(&issue.name)
        && issue.issue_number.is_some_and(|n| n != 0)
        && is_present(&issue.publication_date)
        && issue.artist_id.is_some_and(|id| id != 0)
}

/// Resolves the employment flag of an artist payload.
///
/// Absent or null means employed. An explicit `false` or `0` is kept.
pub fn employment_or_default(flag: Option<EmploymentFlag>) -> bool {
    flag.map_or(true, EmploymentFlag::is_employed)
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
