use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted artist row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistDto {
    pub id: i32,
    pub name: String,
    pub date_of_birth: String,
    pub biography: String,
    pub is_currently_employed: bool,
}

/// Employment flag as sent by clients, either a JSON boolean or a 0/1 integer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EmploymentFlag {
    Flag(bool),
    Number(i64),
}

impl EmploymentFlag {
    pub fn is_employed(self) -> bool {
        match self {
            Self::Flag(flag) => flag,
            Self::Number(value) => value != 0,
        }
    }
}

/// Artist fields accepted on create and update.
///
/// Every field is optional at the parsing stage so missing values surface as validation
/// failures instead of JSON rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInputDto {
    pub name: Option<String>,
    #[serde(alias = "date_of_birth")]
    pub date_of_birth: Option<String>,
    pub biography: Option<String>,
    #[serde(alias = "is_currently_employed")]
    pub is_currently_employed: Option<EmploymentFlag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ArtistRequestDto {
    #[serde(default)]
    pub artist: ArtistInputDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistResponseDto {
    pub artist: ArtistDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArtistListDto {
    pub artists: Vec<ArtistDto>,
}
