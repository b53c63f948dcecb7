//! SQL provider trait - the seam for vendor-specific SQL fragments

use super::SqlDialect;

/// Renders SQL fragments whose syntax differs between database vendors.
///
/// Consumed by the statement-assembly layer. Providers are stateless and
/// shared across threads.
pub trait SqlProvider: Send + Sync + std::fmt::Debug {
    /// The dialect this provider renders
    fn dialect(&self) -> SqlDialect;

    /// Wrap a scalar expression in the dialect's upper-casing function
    fn render_to_upper(&self, expr: &str) -> String;

    /// Wrap a scalar expression in the dialect's lower-casing function
    fn render_to_lower(&self, expr: &str) -> String;

    /// Whether an unquoted identifier keeps its case in this dialect
    fn is_name_case_safe(&self, name: &str) -> bool;

    /// Build the statement that reads back values generated by an insert.
    ///
    /// `output_parameters` are the parameters the insert must populate and
    /// `output_expressions` the SQL expressions that produced them, in the
    /// same order. An empty string means no follow-up statement is needed.
    fn render_insert_id_retrieval(
        &self,
        output_parameters: &[&str],
        output_expressions: &[&str],
    ) -> String;

    /// The identifier as it must appear in SQL: unchanged when case-safe,
    /// quoted otherwise
    fn render_safe_name(&self, name: &str) -> String {
        if self.is_name_case_safe(name) {
            name.to_string()
        } else {
            crate::sql::escape_identifier(name, &self.dialect())
        }
    }
}
