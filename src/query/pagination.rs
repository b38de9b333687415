//! Size/number pagination parsing and link generation

use serde::Serialize;

use crate::core::error::QueryStringError;
use crate::core::request::RequestQuery;

const PAGE_SIZE: &str = "page[size]";
const PAGE_NUMBER: &str = "page[number]";

/// A parsed pagination request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Requested page size
    pub size: i64,
    /// Requested page number (1-based)
    pub number: i64,
}

/// JSON:API pagination hyperlinks
///
/// `previous` and `next` are `None` at the edges; serde serializes them as
/// `null`, matching the JSON:API links object shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    /// Link to the current page
    #[serde(rename = "self")]
    pub self_link: String,
    /// Link to the first page
    pub first: String,
    /// Link to the previous page, absent on the first page
    pub previous: Option<String>,
    /// Link to the next page, absent on the last page
    pub next: Option<String>,
    /// Link to the last page
    pub last: String,
}

/// Parser for the JSON:API `page[size]`/`page[number]` convention
///
/// The two parameters are all-or-nothing: a request may omit pagination
/// entirely, but supplying only one of the pair is an error, as is supplying
/// either as a non-integer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeNumberPagination;

impl SizeNumberPagination {
    /// Parse pagination parameters from the request's query string
    ///
    /// Returns `Ok(None)` when neither parameter is present.
    pub fn parse(&self, query: &RequestQuery) -> Result<Option<PageParams>, QueryStringError> {
        match (query.get(PAGE_SIZE), query.get(PAGE_NUMBER)) {
            (None, None) => Ok(None),
            (Some(size), Some(number)) => {
                let size = size.parse::<i64>().map_err(|_| {
                    QueryStringError::invalid_page("Page parameters must be integers.")
                })?;
                let number = number.parse::<i64>().map_err(|_| {
                    QueryStringError::invalid_page("Page parameters must be integers.")
                })?;
                Ok(Some(PageParams { size, number }))
            }
            _ => Err(QueryStringError::invalid_page(
                "One of page parameters wrongly or not specified.",
            )),
        }
    }

    /// Build pagination links for the current request
    ///
    /// Each link re-serializes the original query string with `page[number]`
    /// replaced per target page. The remaining parameters are kept in their
    /// unescaped form.
    pub fn links(
        &self,
        query: &RequestQuery,
        page_size: i64,
        current_page: i64,
        total_count: i64,
    ) -> PageLinks {
        let last_page = (total_count + page_size - 1) / page_size;
        let previous_page = (current_page > 1).then(|| current_page - 1);
        let next_page = (current_page < last_page).then(|| current_page + 1);

        let base_link = format!(
            "{}?{}",
            query.base_url(),
            query.unescaped_query_without(PAGE_NUMBER)
        );
        let page_link = |page: i64| format!("{}&{}={}", base_link, PAGE_NUMBER, page);

        PageLinks {
            self_link: page_link(current_page),
            first: page_link(1),
            previous: previous_page.map(page_link),
            next: next_page.map(page_link),
            last: page_link(last_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_with(pairs: &[(&str, &str)]) -> RequestQuery {
        RequestQuery::new(
            "http://example.com/examples",
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_parse_neither_parameter() {
        let pagination = SizeNumberPagination;
        let result = pagination.parse(&query_with(&[])).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_parse_both_parameters() {
        let pagination = SizeNumberPagination;
        let result = pagination
            .parse(&query_with(&[("page[size]", "10"), ("page[number]", "2")]))
            .unwrap();
        assert_eq!(result, Some(PageParams { size: 10, number: 2 }));
    }

    #[test]
    fn test_parse_only_size_fails() {
        let pagination = SizeNumberPagination;
        let err = pagination
            .parse(&query_with(&[("page[size]", "10")]))
            .unwrap_err();
        assert_eq!(
            err,
            QueryStringError::invalid_page("One of page parameters wrongly or not specified.")
        );
    }

    #[test]
    fn test_parse_only_number_fails() {
        let pagination = SizeNumberPagination;
        let err = pagination
            .parse(&query_with(&[("page[number]", "2")]))
            .unwrap_err();
        assert_eq!(
            err,
            QueryStringError::invalid_page("One of page parameters wrongly or not specified.")
        );
    }

    #[test]
    fn test_parse_non_integer_fails() {
        let pagination = SizeNumberPagination;
        let err = pagination
            .parse(&query_with(&[("page[size]", "ten"), ("page[number]", "2")]))
            .unwrap_err();
        assert_eq!(
            err,
            QueryStringError::invalid_page("Page parameters must be integers.")
        );
    }

    #[test]
    fn test_links_first_page() {
        let pagination = SizeNumberPagination;
        let query = query_with(&[("page[size]", "10"), ("page[number]", "1")]);
        let links = pagination.links(&query, 10, 1, 95);

        assert_eq!(
            links.self_link,
            "http://example.com/examples?page[size]=10&page[number]=1"
        );
        assert_eq!(links.previous, None);
        assert_eq!(
            links.next,
            Some("http://example.com/examples?page[size]=10&page[number]=2".to_string())
        );
        assert_eq!(
            links.last,
            "http://example.com/examples?page[size]=10&page[number]=10"
        );
    }

    #[test]
    fn test_links_last_page() {
        let pagination = SizeNumberPagination;
        let query = query_with(&[("page[size]", "10"), ("page[number]", "10")]);
        let links = pagination.links(&query, 10, 10, 95);

        assert_eq!(links.next, None);
        assert_eq!(
            links.previous,
            Some("http://example.com/examples?page[size]=10&page[number]=9".to_string())
        );
        assert_eq!(
            links.last,
            "http://example.com/examples?page[size]=10&page[number]=10"
        );
    }

    #[test]
    fn test_links_preserve_other_parameters() {
        let pagination = SizeNumberPagination;
        let query = query_with(&[
            ("include", "addresses"),
            ("page[size]", "5"),
            ("page[number]", "2"),
        ]);
        let links = pagination.links(&query, 5, 2, 12);

        assert_eq!(
            links.first,
            "http://example.com/examples?include=addresses&page[size]=5&page[number]=1"
        );
        assert_eq!(
            links.previous,
            Some(
                "http://example.com/examples?include=addresses&page[size]=5&page[number]=1"
                    .to_string()
            )
        );
        assert_eq!(
            links.next,
            Some(
                "http://example.com/examples?include=addresses&page[size]=5&page[number]=3"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_links_serialize_with_jsonapi_member_names() {
        let pagination = SizeNumberPagination;
        let query = query_with(&[("page[size]", "10"), ("page[number]", "1")]);
        let links = pagination.links(&query, 10, 1, 5);

        let value = serde_json::to_value(&links).unwrap();
        assert!(value.get("self").is_some());
        assert_eq!(value["previous"], serde_json::Value::Null);
        assert_eq!(value["next"], serde_json::Value::Null);
    }
}
