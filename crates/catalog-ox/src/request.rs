use bon::Builder;
use serde::{Deserialize, Serialize};

/// Default page bound for a catalog scan.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Comparison operator understood by the catalog search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    Eq,
    Contains,
}

/// One clause of a catalog search filter.
///
/// Constructed fresh per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub field: String,
    pub values: Vec<String>,
    pub operator: FilterOperator,
}

impl FilterClause {
    /// Exact-match clause on a single value.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: vec![value.into()],
            operator: FilterOperator::Eq,
        }
    }

    /// Substring-match clause on a single value.
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: vec![value.into()],
            operator: FilterOperator::Contains,
        }
    }
}

/// Wire request for one page of the catalog search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSearchRequest {
    pub filters: Vec<FilterClause>,
    /// Opaque cursor from the previous page; absent on the first request.
    #[serde(
        rename = "continuationToken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub continuation_token: Option<String>,
}

impl ModelSearchRequest {
    pub fn new(filters: Vec<FilterClause>) -> Self {
        Self {
            filters,
            continuation_token: None,
        }
    }
}

impl From<&ModelListQuery> for ModelSearchRequest {
    fn from(query: &ModelListQuery) -> Self {
        Self::new(query.filters())
    }
}

/// User-facing filters for a paginated catalog scan.
#[derive(Debug, Clone, Builder)]
pub struct ModelListQuery {
    /// Restrict to models usable in the free playground. Adds a filter
    /// clause only when set; `false` searches everything.
    #[builder(default)]
    pub free_playground: bool,
    /// Substring match on the publisher name.
    #[builder(into)]
    pub publisher_name: Option<String>,
    /// Substring match on the license name.
    #[builder(into)]
    pub license_name: Option<String>,
    /// Exact match on the model name.
    #[builder(into)]
    pub model_name: Option<String>,
    /// Upper bound on upstream page fetches.
    #[builder(default = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,
}

impl Default for ModelListQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ModelListQuery {
    /// Produce the wire filter clauses for this query.
    ///
    /// The fixed `labels eq latest` clause always comes first; each
    /// optional filter contributes one clause, and empty strings
    /// contribute nothing.
    #[must_use]
    pub fn filters(&self) -> Vec<FilterClause> {
        let mut filters = vec![FilterClause::eq("labels", "latest")];

        if self.free_playground {
            filters.push(FilterClause::eq("freePlayground", "true"));
        }
        if let Some(publisher) = non_empty(self.publisher_name.as_deref()) {
            filters.push(FilterClause::contains("publisher", publisher));
        }
        if let Some(license) = non_empty(self.license_name.as_deref()) {
            filters.push(FilterClause::contains("license", license));
        }
        if let Some(name) = non_empty(self.model_name.as_deref()) {
            filters.push(FilterClause::eq("name", name));
        }

        filters
    }
}

/// Treat empty strings the same as absent filters.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_label_clause_is_always_first() {
        let query = ModelListQuery::default();
        let filters = query.filters();

        assert_eq!(filters, vec![FilterClause::eq("labels", "latest")]);
    }

    #[test]
    fn free_playground_clause_only_when_true() {
        let on = ModelListQuery::builder().free_playground(true).build();
        let off = ModelListQuery::builder().free_playground(false).build();

        assert!(
            on.filters()
                .contains(&FilterClause::eq("freePlayground", "true"))
        );
        assert!(!off.filters().iter().any(|f| f.field == "freePlayground"));
    }

    #[test]
    fn optional_filters_map_to_expected_operators() {
        let query = ModelListQuery::builder()
            .publisher_name("Mistral AI")
            .license_name("apache")
            .model_name("mistral-large")
            .build();

        let filters = query.filters();
        assert_eq!(filters.len(), 4);
        assert_eq!(filters[1], FilterClause::contains("publisher", "Mistral AI"));
        assert_eq!(filters[2], FilterClause::contains("license", "apache"));
        assert_eq!(filters[3], FilterClause::eq("name", "mistral-large"));
    }

    #[test]
    fn empty_strings_add_no_clause() {
        let query = ModelListQuery::builder()
            .publisher_name("")
            .license_name("")
            .model_name("")
            .build();

        assert_eq!(query.filters().len(), 1);
    }

    #[test]
    fn max_pages_defaults_to_ten() {
        assert_eq!(ModelListQuery::default().max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(DEFAULT_MAX_PAGES, 10);
    }

    #[test]
    fn request_serializes_without_absent_token() {
        let request = ModelSearchRequest::new(vec![FilterClause::eq("labels", "latest")]);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "filters": [
                    {"field": "labels", "values": ["latest"], "operator": "eq"}
                ]
            })
        );
    }

    #[test]
    fn request_serializes_continuation_token() {
        let mut request = ModelSearchRequest::new(vec![]);
        request.continuation_token = Some("abc".to_string());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["continuationToken"], "abc");
    }
}
