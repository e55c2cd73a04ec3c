//! Query-parameter codec.
//!
//! The TomTom services take a flat, string-keyed query format: booleans as
//! lowercase literals, lists joined with commas (some endpoints want the
//! joined list wrapped in square brackets), enums as their wire value, and
//! unset fields omitted entirely. [`Query`] accumulates pairs in field
//! declaration order and [`QueryParams`] is implemented by every typed
//! parameter struct.

/// Conversion of a single value into its wire representation.
pub trait ToWire {
    fn to_wire(&self) -> String;
}

impl ToWire for bool {
    fn to_wire(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

impl ToWire for &str {
    fn to_wire(&self) -> String {
        (*self).to_string()
    }
}

impl ToWire for String {
    fn to_wire(&self) -> String {
        self.clone()
    }
}

macro_rules! to_wire_display {
    ($($ty:ty),*) => {
        $(impl ToWire for $ty {
            fn to_wire(&self) -> String {
                self.to_string()
            }
        })*
    };
}

to_wire_display!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Ordered accumulator for encoded query pairs.
///
/// Keys are appended in call order, so a `QueryParams` impl that follows its
/// struct's field order produces a deterministic query string.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required field.
    pub fn set<V: ToWire>(&mut self, key: &'static str, value: &V) {
        self.pairs.push((key, value.to_wire()));
    }

    /// Append an optional field; `None` produces no key.
    pub fn set_opt<V: ToWire>(&mut self, key: &'static str, value: &Option<V>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// Append a list field as a comma-joined string; `None` and empty lists
    /// produce no key.
    pub fn set_list<V: ToWire>(&mut self, key: &'static str, values: &Option<Vec<V>>) {
        if let Some(joined) = values.as_deref().and_then(join) {
            self.pairs.push((key, joined));
        }
    }

    /// Like [`set_list`](Self::set_list), but wraps the joined list in
    /// square brackets, as some vector-tile filters expect.
    pub fn set_list_brackets<V: ToWire>(&mut self, key: &'static str, values: &Option<Vec<V>>) {
        if let Some(joined) = values.as_deref().and_then(join) {
            self.pairs.push((key, format!("[{joined}]")));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

fn join<V: ToWire>(values: &[V]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .map(ToWire::to_wire)
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Typed query parameters for one endpoint call.
pub trait QueryParams {
    /// Encode the set fields, in field declaration order.
    fn to_query(&self) -> Query;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct DemoParams {
        limit: Option<u32>,
        fuzzy: Option<bool>,
        categories: Option<Vec<u32>>,
        country: Option<String>,
    }

    impl QueryParams for DemoParams {
        fn to_query(&self) -> Query {
            let mut query = Query::new();
            query.set_opt("limit", &self.limit);
            query.set_opt("fuzzy", &self.fuzzy);
            query.set_list("categories", &self.categories);
            query.set_opt("country", &self.country);
            query
        }
    }

    #[test]
    fn all_unset_yields_empty_query() {
        let query = DemoParams::default().to_query();
        assert!(query.is_empty());
        assert!(query.into_pairs().is_empty());
    }

    #[test]
    fn unset_fields_are_omitted() {
        let params = DemoParams {
            limit: Some(10),
            country: Some("NL".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().into_pairs(),
            vec![("limit", "10".to_string()), ("country", "NL".to_string())]
        );
    }

    #[test]
    fn booleans_encode_lowercase() {
        assert_eq!(true.to_wire(), "true");
        assert_eq!(false.to_wire(), "false");

        let params = DemoParams {
            fuzzy: Some(true),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().into_pairs(),
            vec![("fuzzy", "true".to_string())]
        );
    }

    #[test]
    fn lists_join_with_commas() {
        let params = DemoParams {
            categories: Some(vec![1, 2, 3]),
            ..Default::default()
        };
        assert_eq!(
            params.to_query().into_pairs(),
            vec![("categories", "1,2,3".to_string())]
        );
    }

    #[test]
    fn empty_list_behaves_as_absent() {
        let params = DemoParams {
            categories: Some(Vec::new()),
            ..Default::default()
        };
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn bracketed_lists() {
        let mut query = Query::new();
        query.set_list_brackets("include", &Some(vec!["road", "rail"]));
        query.set_list_brackets::<u32>("empty", &Some(Vec::new()));
        assert_eq!(
            query.into_pairs(),
            vec![("include", "[road,rail]".to_string())]
        );
    }

    #[test]
    fn declaration_order_is_preserved() {
        let params = DemoParams {
            limit: Some(5),
            fuzzy: Some(false),
            categories: Some(vec![7]),
            country: Some("DE".to_string()),
        };
        let keys: Vec<_> = params
            .to_query()
            .into_pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["limit", "fuzzy", "categories", "country"]);
    }
}
