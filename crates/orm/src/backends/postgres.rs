//! PostgreSQL SQL Provider
//!
//! PostgreSQL folds unquoted identifiers to lowercase and hands out
//! serial/sequence ids through `nextval`, which `currval` reads back within
//! the same session.

use crate::sql::replace_case;
use super::provider::SqlProvider;
use super::SqlDialect;

/// PostgreSQL implementation of [`SqlProvider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresSqlProvider;

impl PostgresSqlProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SqlProvider for PostgresSqlProvider {
    fn dialect(&self) -> SqlDialect {
        SqlDialect::PostgreSQL
    }

    fn render_to_upper(&self, expr: &str) -> String {
        format!("UPPER({})", expr)
    }

    fn render_to_lower(&self, expr: &str) -> String {
        format!("LOWER({})", expr)
    }

    /// In PostgreSQL an insensitive name is lowercase
    fn is_name_case_safe(&self, name: &str) -> bool {
        name == name.to_lowercase()
    }

    fn render_insert_id_retrieval(
        &self,
        output_parameters: &[&str],
        output_expressions: &[&str],
    ) -> String {
        // no parameters? no need to get them back
        if output_parameters.is_empty() {
            return String::new();
        }

        if output_parameters.len() != output_expressions.len() {
            tracing::warn!(
                "Insert declares {} output parameter(s) but {} output expression(s)",
                output_parameters.len(),
                output_expressions.len()
            );
        }

        let reads: Vec<String> = output_expressions
            .iter()
            .map(|expr| replace_case(expr, "nextval(", "currval("))
            .collect();

        format!("SELECT {}", reads.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding_functions() {
        let provider = PostgresSqlProvider::new();
        assert_eq!(provider.render_to_upper("name"), "UPPER(name)");
        assert_eq!(provider.render_to_lower("'Abc'"), "LOWER('Abc')");
    }

    #[test]
    fn test_name_case_safety() {
        let provider = PostgresSqlProvider::new();
        assert!(provider.is_name_case_safe("orders"));
        assert!(provider.is_name_case_safe("order_details_2"));
        assert!(!provider.is_name_case_safe("Orders"));
        assert!(!provider.is_name_case_safe("ORDERS"));
    }

    #[test]
    fn test_render_safe_name_quotes_mixed_case() {
        let provider = PostgresSqlProvider::new();
        assert_eq!(provider.render_safe_name("orders"), "orders");
        assert_eq!(provider.render_safe_name("Orders"), "\"Orders\"");
    }

    #[test]
    fn test_no_output_parameters_needs_no_statement() {
        let provider = PostgresSqlProvider::new();
        assert_eq!(provider.render_insert_id_retrieval(&[], &[]), "");
        assert_eq!(provider.render_insert_id_retrieval(&[], &["nextval('seq')"]), "");
    }

    #[test]
    fn test_single_sequence_id() {
        let provider = PostgresSqlProvider::new();
        assert_eq!(
            provider.render_insert_id_retrieval(&["id"], &["nextval('seq')"]),
            "SELECT currval('seq')"
        );
    }

    #[test]
    fn test_mixed_case_sequence_ids() {
        let provider = PostgresSqlProvider::new();
        assert_eq!(
            provider.render_insert_id_retrieval(&["id1", "id2"], &["NEXTVAL('s1')", "nextval('s2')"]),
            "SELECT currval('s1'), currval('s2')"
        );
    }

    #[test]
    fn test_only_nextval_token_is_rewritten() {
        let provider = PostgresSqlProvider::new();
        assert_eq!(
            provider.render_insert_id_retrieval(&["id"], &["coalesce(nextval_seq, NextVal('\"Orders_seq\"'))"]),
            "SELECT coalesce(nextval_seq, currval('\"Orders_seq\"'))"
        );
    }
}
