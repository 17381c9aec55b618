//! Filter predicates and their two interpretations: PostgREST query
//! parameters and in-memory evaluation against raw JSON records.

use serde_json::Value;

/// A scalar value a predicate compares against.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Number(f64),
    Bool(bool),
}

impl FilterValue {
    /// Render as a PostgREST operand (e.g. the `true` in `eq.true`).
    pub fn as_param(&self) -> String {
        match self {
            FilterValue::String(s) => s.clone(),
            FilterValue::Number(n) => format!("{}", n),
            FilterValue::Bool(b) => b.to_string(),
        }
    }

    /// Compare against a raw JSON field value.
    fn matches_json(&self, value: &Value) -> bool {
        match (self, value) {
            (FilterValue::String(s), Value::String(v)) => s == v,
            (FilterValue::Number(n), Value::Number(v)) => {
                v.as_f64().is_some_and(|f| f == *n)
            }
            (FilterValue::Bool(b), Value::Bool(v)) => b == v,
            _ => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

/// A single predicate in a query. Predicates at the top level of a
/// [`crate::query::Query`] combine with logical AND.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Field equals value.
    Eq(String, FilterValue),
    /// Field does not equal value.
    Ne(String, FilterValue),
    /// Case-insensitive substring match on a text field.
    ILike(String, String),
    /// Any of the nested predicates matches.
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter::Ne(field.into(), value.into())
    }

    pub fn ilike(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Filter::ILike(field.into(), needle.into())
    }

    /// Evaluate this predicate against a raw record. A missing field never
    /// matches, `Ne` included: PostgREST comparisons against a NULL column
    /// select nothing, and the in-memory interpretation mirrors that.
    pub fn matches(&self, record: &Value) -> bool {
        match self {
            Filter::Eq(field, value) => record
                .get(field)
                .is_some_and(|v| value.matches_json(v)),
            Filter::Ne(field, value) => record
                .get(field)
                .is_some_and(|v| !value.matches_json(v)),
            Filter::ILike(field, needle) => record
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|text| {
                    text.to_lowercase().contains(&needle.to_lowercase())
                }),
            Filter::Or(children) => children.iter().any(|child| child.matches(record)),
        }
    }

    /// Render as a PostgREST query parameter pair.
    ///
    /// Top-level predicates become `field=op.value`; an `Or` becomes
    /// `or=(a.op.x,b.op.y)` with its children inlined.
    pub fn to_query_pair(&self) -> (String, String) {
        match self {
            Filter::Eq(field, value) => (field.clone(), format!("eq.{}", value.as_param())),
            Filter::Ne(field, value) => (field.clone(), format!("neq.{}", value.as_param())),
            Filter::ILike(field, needle) => {
                (field.clone(), format!("ilike.*{}*", clean_needle(needle)))
            }
            Filter::Or(children) => ("or".to_string(), format!("({})", inline_list(children))),
        }
    }
}

/// Strip characters that are reserved in the PostgREST filter grammar.
/// Left in place they would corrupt the parameter, most visibly inside an
/// `or=(...)` group where `,` and `)` delimit the tree and `*` is the
/// wildcard.
fn clean_needle(needle: &str) -> String {
    needle
        .chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '*' | '"'))
        .collect()
}

/// Inline form used inside `or=(...)` groups: `field.op.value`.
fn inline(filter: &Filter) -> String {
    match filter {
        Filter::Eq(field, value) => format!("{}.eq.{}", field, value.as_param()),
        Filter::Ne(field, value) => format!("{}.neq.{}", field, value.as_param()),
        Filter::ILike(field, needle) => format!("{}.ilike.*{}*", field, clean_needle(needle)),
        Filter::Or(children) => format!("or({})", inline_list(children)),
    }
}

fn inline_list(filters: &[Filter]) -> String {
    filters.iter().map(inline).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eq_matches() {
        let record = json!({"category": "tutoring", "is_active": true, "price": 50});

        assert!(Filter::eq("category", "tutoring").matches(&record));
        assert!(Filter::eq("is_active", true).matches(&record));
        assert!(Filter::eq("price", 50i64).matches(&record));
        assert!(!Filter::eq("category", "tech").matches(&record));
        assert!(!Filter::eq("missing", "x").matches(&record));
    }

    #[test]
    fn test_ne_requires_the_field_to_be_present() {
        let record = json!({"id": "svc-1"});
        assert!(Filter::ne("id", "svc-2").matches(&record));
        assert!(!Filter::ne("id", "svc-1").matches(&record));
        // NULL comparisons select nothing on the backend
        assert!(!Filter::ne("other", "x").matches(&record));
    }

    #[test]
    fn test_ilike_is_case_insensitive_substring() {
        let record = json!({"title": "Math Tutoring"});

        assert!(Filter::ilike("title", "tutor").matches(&record));
        assert!(Filter::ilike("title", "MATH").matches(&record));
        assert!(!Filter::ilike("title", "design").matches(&record));
        assert!(!Filter::ilike("missing", "tutor").matches(&record));
    }

    #[test]
    fn test_or_matches_any_child() {
        let filter = Filter::Or(vec![
            Filter::ilike("title", "web"),
            Filter::ilike("description", "web"),
        ]);

        assert!(filter.matches(&json!({"title": "Web design", "description": "x"})));
        assert!(filter.matches(&json!({"title": "x", "description": "web pages"})));
        assert!(!filter.matches(&json!({"title": "x", "description": "y"})));
    }

    #[test]
    fn test_query_pair_encoding() {
        assert_eq!(
            Filter::eq("university", "UCT").to_query_pair(),
            ("university".to_string(), "eq.UCT".to_string())
        );
        assert_eq!(
            Filter::eq("is_active", true).to_query_pair(),
            ("is_active".to_string(), "eq.true".to_string())
        );
        assert_eq!(
            Filter::ne("id", "svc-1").to_query_pair(),
            ("id".to_string(), "neq.svc-1".to_string())
        );
        assert_eq!(
            Filter::ilike("title", "math").to_query_pair(),
            ("title".to_string(), "ilike.*math*".to_string())
        );
    }

    #[test]
    fn test_or_group_encoding() {
        let filter = Filter::Or(vec![
            Filter::ilike("title", "math"),
            Filter::ilike("description", "math"),
        ]);

        assert_eq!(
            filter.to_query_pair(),
            (
                "or".to_string(),
                "(title.ilike.*math*,description.ilike.*math*)".to_string()
            )
        );
    }

    #[test]
    fn test_reserved_characters_are_stripped_from_needle() {
        assert_eq!(
            Filter::ilike("title", "math, (advanced)*").to_query_pair(),
            ("title".to_string(), "ilike.*math advanced*".to_string())
        );

        let filter = Filter::Or(vec![
            Filter::ilike("title", "a,b"),
            Filter::ilike("description", "c)d"),
        ]);
        assert_eq!(
            filter.to_query_pair(),
            (
                "or".to_string(),
                "(title.ilike.*ab*,description.ilike.*cd*)".to_string()
            )
        );
    }

    #[test]
    fn test_number_param_has_no_trailing_zeroes() {
        assert_eq!(FilterValue::from(30i64).as_param(), "30");
        assert_eq!(FilterValue::from(49.5).as_param(), "49.5");
    }
}
