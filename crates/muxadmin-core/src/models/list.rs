use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_LIMIT;
use crate::error::AdminError;

/// Field a search criterion matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    ByTitle,
    ByAssetId,
}

impl SearchField {
    /// CMS attribute the filter applies to.
    pub fn attribute(&self) -> &'static str {
        match self {
            SearchField::ByTitle => "title",
            SearchField::ByAssetId => "asset_id",
        }
    }
}

impl FromStr for SearchField {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "by_title" | "title" => Ok(SearchField::ByTitle),
            "by_asset_id" | "asset_id" => Ok(SearchField::ByAssetId),
            other => Err(AdminError::Validation {
                field: Some("search"),
                message: format!("Unknown search field: {}", other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriterion {
    pub field: SearchField,
    pub value: String,
}

impl SearchCriterion {
    pub fn by_title(value: impl Into<String>) -> Self {
        Self {
            field: SearchField::ByTitle,
            value: value.into(),
        }
    }

    pub fn by_asset_id(value: impl Into<String>) -> Self {
        Self {
            field: SearchField::ByAssetId,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub field: String,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Pagination bounds plus optional search and sort for the asset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub offset: u32,
    pub limit: u32,
    pub search: Option<SearchCriterion>,
    pub sort: Option<SortCriterion>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
            search: None,
            sort: None,
        }
    }
}
