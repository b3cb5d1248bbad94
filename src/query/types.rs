use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::core::error::{Error, ErrorKind, Result};

/// Match semantics requested for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Exact,
    Prefix,
    Fuzzy,
}

impl FromStr for QueryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(QueryKind::Exact),
            "prefix" => Ok(QueryKind::Prefix),
            "fuzzy" => Ok(QueryKind::Fuzzy),
            other => Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("unknown query kind '{}'", other),
            )),
        }
    }
}

/// Normalized search request, shared read-only by every engine in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub raw: String,
    pub kind: QueryKind,
}

impl Query {
    /// Trim and lowercase the raw string. A blank query is rejected up front
    /// so no engine ever runs with one.
    pub fn parse(raw: &str, kind: QueryKind) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::new(
                ErrorKind::EmptyQuery,
                "query is empty or whitespace-only".to_string(),
            ));
        }
        Ok(Query { raw: normalized, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let query = Query::parse("  Funny BOOK ", QueryKind::Exact).unwrap();
        assert_eq!(query.raw, "funny book");
        assert_eq!(query.kind, QueryKind::Exact);
    }

    #[test]
    fn blank_query_is_rejected() {
        for raw in ["", "   ", "\t\n"] {
            let err = Query::parse(raw, QueryKind::Exact).unwrap_err();
            assert_eq!(err.kind, ErrorKind::EmptyQuery);
        }
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("exact".parse::<QueryKind>().unwrap(), QueryKind::Exact);
        assert_eq!(" Prefix ".parse::<QueryKind>().unwrap(), QueryKind::Prefix);
        assert_eq!("fuzzy".parse::<QueryKind>().unwrap(), QueryKind::Fuzzy);
        assert!("regex".parse::<QueryKind>().is_err());
    }
}
