//! Table selection
//!
//! A [`Filter`] pairs a table-name pattern with an optional prefix. Filters
//! are tried in configured order and the first match wins; its prefix is
//! stripped from the table name when the struct name is generated.

use regex::Regex;

use crate::error::{Error, Result};

/// Table selection rule
#[derive(Debug, Clone)]
pub struct Filter {
    prefix: String,
    pattern: String,
    regex: Regex,
}

impl Filter {
    /// Build a filter from a prefix and a table-name pattern
    ///
    /// Both parts are trimmed. The pattern is a regular expression matched
    /// against the whole table name. A blank pattern produces no filter
    /// (`Ok(None)`); callers must not register anything in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dbstruct::Filter;
    /// let filter = Filter::new("t_", "t_.*").unwrap().unwrap();
    /// assert!(filter.matches("t_order"));
    /// assert!(!filter.matches("order"));
    ///
    /// assert!(Filter::new("t_", "  ").unwrap().is_none());
    /// ```
    pub fn new(prefix: &str, pattern: &str) -> Result<Option<Self>> {
        let prefix = prefix.trim();
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Ok(None);
        }

        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            Error::InvalidFilterPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Some(Self {
            prefix: prefix.to_string(),
            pattern: pattern.to_string(),
            regex,
        }))
    }

    /// Prefix stripped from matching table names
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Pattern as configured
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern matches the whole table name
    #[must_use]
    pub fn matches(&self, table_name: &str) -> bool {
        self.regex.is_match(table_name)
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.pattern == other.pattern
    }
}

impl Eq for Filter {}

/// Outcome of [`select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Table takes part in generation
    Selected {
        /// Prefix of the matching filter, empty when no filter applied
        prefix: String,
    },
    /// Table is left out
    Skipped,
}

impl Selection {
    /// Whether the table was selected
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

/// Decide whether a table takes part in generation
///
/// Exclusion always wins. With no filters configured every other table is
/// selected with an empty prefix; otherwise the first matching filter selects
/// the table and a table matching none is skipped.
#[must_use]
pub fn select(table_name: &str, filters: &[Filter], exclude: &[String]) -> Selection {
    if exclude.iter().any(|name| name == table_name) {
        return Selection::Skipped;
    }

    if filters.is_empty() {
        return Selection::Selected {
            prefix: String::new(),
        };
    }

    filters
        .iter()
        .find(|filter| filter.matches(table_name))
        .map_or(Selection::Skipped, |filter| Selection::Selected {
            prefix: filter.prefix.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(prefix: &str, pattern: &str) -> Filter {
        Filter::new(prefix, pattern).unwrap().unwrap()
    }

    fn excluded(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_new_trims() {
        let f = filter(" t_ ", " t_.* ");
        assert_eq!(f.prefix(), "t_");
        assert_eq!(f.pattern(), "t_.*");
    }

    #[test]
    fn test_new_empty_pattern() {
        assert!(Filter::new("t_", "").unwrap().is_none());
        assert!(Filter::new("", " \t").unwrap().is_none());
    }

    #[test]
    fn test_new_invalid_pattern() {
        let err = Filter::new("t_", "t_(").unwrap_err();
        assert!(matches!(err, Error::InvalidFilterPattern { pattern, .. } if pattern == "t_("));
    }

    #[test]
    fn test_pattern_is_anchored() {
        let f = filter("", "order");
        assert!(f.matches("order"));
        assert!(!f.matches("t_order"));
        assert!(!f.matches("orders"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let f = filter("", "user|order");
        assert!(f.matches("user"));
        assert!(f.matches("order"));
        assert!(!f.matches("user_order"));
    }

    #[test]
    fn test_exclusion_wins() {
        let filters = vec![filter("t_", "t_.*"), filter("", ".*")];
        assert_eq!(
            select("logs", &filters, &excluded(&["logs"])),
            Selection::Skipped
        );
        assert_eq!(
            select("t_logs", &filters, &excluded(&["t_logs"])),
            Selection::Skipped
        );
    }

    #[test]
    fn test_prefixed_match() {
        let filters = vec![filter("t_", "t_.*")];
        assert_eq!(
            select("t_order", &filters, &excluded(&["logs"])),
            Selection::Selected {
                prefix: "t_".to_string()
            }
        );
    }

    #[test]
    fn test_first_match_wins() {
        let filters = vec![filter("t_", "t_.*"), filter("t_order_", "t_order_.*")];
        assert_eq!(
            select("t_order_item", &filters, &[]),
            Selection::Selected {
                prefix: "t_".to_string()
            }
        );
    }

    #[test]
    fn test_no_filters_selects_everything() {
        assert_eq!(
            select("anything", &[], &[]),
            Selection::Selected {
                prefix: String::new()
            }
        );
        assert!(!select("logs", &[], &excluded(&["logs"])).is_selected());
    }

    #[test]
    fn test_filters_without_match_select_nothing() {
        let filters = vec![filter("t_", "t_.*")];
        assert_eq!(select("order", &filters, &[]), Selection::Skipped);
    }

    #[test]
    fn test_pattern_only_filter_has_empty_prefix() {
        let filters = vec![filter("", "sys_.*")];
        assert_eq!(
            select("sys_user", &filters, &[]),
            Selection::Selected {
                prefix: String::new()
            }
        );
    }
}
