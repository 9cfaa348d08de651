//! Search request body construction.

use serde_json::{json, Value};

/// Maximum number of hits returned by a search.
pub const MAX_HITS: usize = 10;

/// Build the `_search` body for a user query.
///
/// Any of three clauses may match:
/// - fuzzy match on the company name (typo tolerant)
/// - prefix match on the uppercased symbol
/// - phrase-prefix match on the company name (type-ahead)
pub fn build_search_body(query: &str) -> Value {
    json!({
        "size": MAX_HITS,
        "query": {
            "bool": {
                "should": [
                    { "match": { "name": { "query": query, "fuzziness": "AUTO" } } },
                    { "prefix": { "symbol": query.to_uppercase() } },
                    { "match_phrase_prefix": { "name": { "query": query } } }
                ]
            }
        }
    })
}
