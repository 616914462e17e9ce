use crate::shared::filter::{Clause, QueryDescriptor};

/// Characters that must be quoted inside a PostgREST logic tree
const RESERVED: &[char] = &[',', '(', ')', ':', '"', '\\', '.'];

/// Encodes a descriptor as ordered PostgREST query parameters:
/// `select`, `order`, then one parameter per clause.
pub fn to_query_params(query: &QueryDescriptor) -> Vec<(String, String)> {
    let mut params = vec![
        ("select".to_string(), "*".to_string()),
        ("order".to_string(), order_value(query)),
    ];

    for clause in &query.clauses {
        match clause {
            Clause::Or(inner) => {
                let parts: Vec<String> = inner.iter().map(nested_clause).collect();
                params.push(("or".to_string(), format!("({})", parts.join(","))));
            }
            Clause::ILike { column, .. }
            | Clause::Eq { column, .. }
            | Clause::Gte { column, .. }
            | Clause::Lte { column, .. } => {
                params.push((column.name().to_string(), operator_value(clause, false)));
            }
        }
    }

    params
}

/// Renders parameters as a percent-encoded query string (no leading `?`)
pub fn to_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn order_value(query: &QueryDescriptor) -> String {
    query
        .sort
        .iter()
        .map(|s| format!("{}.{}", s.column.name(), s.direction.name()))
        .collect::<Vec<_>>()
        .join(",")
}

/// `op.value` part of a clause; values inside an OR group get quoted when needed
fn operator_value(clause: &Clause, nested: bool) -> String {
    let value = |raw: String| if nested { quote(&raw) } else { raw };
    match clause {
        Clause::ILike { pattern, .. } => format!("ilike.{}", value(format!("*{}*", pattern))),
        Clause::Eq { value: v, .. } => format!("eq.{}", value(v.clone())),
        Clause::Gte { value: v, .. } => format!("gte.{}", v),
        Clause::Lte { value: v, .. } => format!("lte.{}", v),
        Clause::Or(inner) => {
            let parts: Vec<String> = inner.iter().map(nested_clause).collect();
            format!("or({})", parts.join(","))
        }
    }
}

fn nested_clause(clause: &Clause) -> String {
    match clause {
        Clause::Or(_) => operator_value(clause, true),
        Clause::ILike { column, .. }
        | Clause::Eq { column, .. }
        | Clause::Gte { column, .. }
        | Clause::Lte { column, .. } => {
            format!("{}.{}", column.name(), operator_value(clause, true))
        }
    }
}

fn quote(raw: &str) -> String {
    if !raw.contains(RESERVED) {
        return raw.to_string();
    }
    let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{to_query_descriptor, FilterPatch, FilterState};

    fn params_for(patch: FilterPatch) -> Vec<(String, String)> {
        let mut state = FilterState::default();
        state.merge(patch);
        to_query_params(&to_query_descriptor(&state))
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_defaults_select_and_order_only() {
        assert_eq!(
            params_for(FilterPatch::default()),
            vec![pair("select", "*"), pair("order", "posted_date.desc,id.asc")]
        );
    }

    #[test]
    fn test_every_clause_encoding() {
        let params = params_for(
            FilterPatch::default()
                .with_location("Bangalore")
                .with_work_mode("Remote")
                .with_job_type("Full-time")
                .with_salary(10, 20)
                .with_search_query("engineer"),
        );
        assert_eq!(
            params[2..],
            [
                pair("location", "ilike.*Bangalore*"),
                pair("work_mode", "eq.Remote"),
                pair("job_type", "eq.Full-time"),
                pair("salary_max_lpa", "gte.10"),
                pair("salary_min_lpa", "lte.20"),
                pair("or", "(title.ilike.*engineer*,company_name.ilike.*engineer*)"),
            ]
        );
    }

    #[test]
    fn test_reserved_characters_are_quoted_in_or_group() {
        let params = params_for(FilterPatch::default().with_search_query("C++, Rust"));
        assert_eq!(
            params[2],
            pair(
                "or",
                "(title.ilike.\"*C++, Rust*\",company_name.ilike.\"*C++, Rust*\")"
            )
        );
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let qs = to_query_string(&params_for(FilterPatch::default().with_location("New Delhi")));
        assert_eq!(
            qs,
            "select=%2A&order=posted_date.desc%2Cid.asc&location=ilike.%2ANew%20Delhi%2A"
        );
    }
}
