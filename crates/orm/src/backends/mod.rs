//! Database Backend Abstractions
//!
//! SQL dialects and the providers that render their vendor-specific
//! fragments. Only PostgreSQL ships a provider.

pub mod provider;
pub mod postgres;

pub use provider::SqlProvider;
pub use postgres::PostgresSqlProvider;

use std::sync::Arc;

use crate::config::ConfigError;

/// SQL dialect enumeration for generating database-specific SQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlDialect {
    PostgreSQL,
}

impl SqlDialect {
    /// Get the quote character for identifiers in this dialect
    pub fn identifier_quote(&self) -> char {
        match self {
            SqlDialect::PostgreSQL => '"',
        }
    }

    /// The provider that renders fragments for this dialect
    pub fn provider(&self) -> Arc<dyn SqlProvider> {
        match self {
            SqlDialect::PostgreSQL => Arc::new(PostgresSqlProvider::new()),
        }
    }
}

impl std::fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SqlDialect::PostgreSQL => write!(f, "postgresql"),
        }
    }
}

impl std::str::FromStr for SqlDialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(SqlDialect::PostgreSQL),
            _ => Err(ConfigError::InvalidValue {
                field: "dialect".to_string(),
                value: s.to_string(),
                expected: "postgresql".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!(SqlDialect::from_str("PostgreSQL").unwrap(), SqlDialect::PostgreSQL);
        assert_eq!(SqlDialect::from_str("postgres").unwrap(), SqlDialect::PostgreSQL);
        assert!(SqlDialect::from_str("mssql").is_err());
    }

    #[test]
    fn test_dialect_display_round_trips() {
        let dialect = SqlDialect::PostgreSQL;
        assert_eq!(SqlDialect::from_str(&dialect.to_string()).unwrap(), dialect);
    }

    #[test]
    fn test_dialect_provider() {
        let provider = SqlDialect::PostgreSQL.provider();
        assert_eq!(provider.dialect(), SqlDialect::PostgreSQL);
        assert_eq!(provider.render_to_upper("x"), "UPPER(x)");
    }
}
