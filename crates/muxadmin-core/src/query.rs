//! List query construction.
//!
//! Turns optional search/sort criteria and pagination bounds into the query
//! string the asset listing endpoint understands. Construction is pure:
//! identical inputs always produce an identical string.
//!
//! Parameters are emitted in a fixed order: `start`, `limit`, the filter,
//! then `sort` and `order`. Filter values are percent-encoded; the bracketed
//! filter keys are left verbatim for the CMS query parser.

use crate::models::{ListQuery, SearchCriterion, SortCriterion};

/// Case-insensitive "contains" operator of the CMS filter syntax.
const CONTAINS_INSENSITIVE: &str = "$containsi";

/// Build the query string (without the leading `?`) for an asset listing.
pub fn build_list_query(
    search: Option<&SearchCriterion>,
    sort: Option<&SortCriterion>,
    offset: u32,
    limit: u32,
) -> String {
    let mut params = vec![format!("start={}", offset), format!("limit={}", limit)];

    if let Some(search) = search {
        params.push(format!(
            "filters[{}][{}]={}",
            search.field.attribute(),
            CONTAINS_INSENSITIVE,
            urlencoding::encode(&search.value)
        ));
    }

    if let Some(sort) = sort {
        params.push(format!("sort={}", urlencoding::encode(&sort.field)));
        params.push(format!("order={}", sort.direction));
    }

    params.join("&")
}

impl ListQuery {
    pub fn to_query_string(&self) -> String {
        build_list_query(
            self.search.as_ref(),
            self.sort.as_ref(),
            self.offset,
            self.limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchField;

    #[test]
    fn pagination_only() {
        assert_eq!(build_list_query(None, None, 0, 10), "start=0&limit=10");
        assert_eq!(build_list_query(None, None, 20, 5), "start=20&limit=5");
    }

    #[test]
    fn default_list_query_uses_default_bounds() {
        assert_eq!(ListQuery::default().to_query_string(), "start=0&limit=10");
    }

    #[test]
    fn title_search_with_descending_sort() {
        let search = SearchCriterion::by_title("intro");
        let sort = SortCriterion::desc("title");
        let query = build_list_query(Some(&search), Some(&sort), 0, 10);

        assert_eq!(
            query,
            "start=0&limit=10&filters[title][$containsi]=intro&sort=title&order=desc"
        );

        let filter_pos = query.find("filters[title][$containsi]=intro").unwrap();
        let sort_pos = query.find("sort=title&order=desc").unwrap();
        assert!(filter_pos < sort_pos, "filter must precede sort");
    }

    #[test]
    fn asset_id_search_targets_remote_id() {
        let search = SearchCriterion::by_asset_id("abc");
        assert_eq!(
            build_list_query(Some(&search), None, 0, 10),
            "start=0&limit=10&filters[asset_id][$containsi]=abc"
        );
    }

    #[test]
    fn ascending_sort_without_search() {
        let sort = SortCriterion::asc("createdAt");
        assert_eq!(
            build_list_query(None, Some(&sort), 10, 10),
            "start=10&limit=10&sort=createdAt&order=asc"
        );
    }

    #[test]
    fn search_value_is_percent_encoded() {
        let search = SearchCriterion {
            field: SearchField::ByTitle,
            value: "a&b c".to_string(),
        };
        assert_eq!(
            build_list_query(Some(&search), None, 0, 10),
            "start=0&limit=10&filters[title][$containsi]=a%26b%20c"
        );
    }

    #[test]
    fn identical_inputs_yield_identical_strings() {
        let query = ListQuery {
            offset: 30,
            limit: 15,
            search: Some(SearchCriterion::by_title("trailer")),
            sort: Some(SortCriterion::desc("updatedAt")),
        };
        let first = query.to_query_string();
        for _ in 0..5 {
            assert_eq!(query.clone().to_query_string(), first);
        }
    }
}
