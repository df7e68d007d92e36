pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::QueryError;

pub use memory::MemoryTableClient;
pub use postgres::PgTableClient;

/// A loosely-typed record as returned by the table API.
pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq(String, Value),
    Gte(String, Value),
    Lte(String, Value),
    In(String, Vec<Value>),
}

impl Filter {
    pub fn column(&self) -> &str {
        match self {
            Filter::Eq(column, _)
            | Filter::Gte(column, _)
            | Filter::Lte(column, _)
            | Filter::In(column, _) => column,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Select request in the minimal vocabulary every backing store understands.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub table: String,
    /// Empty means every column.
    pub columns: Vec<String>,
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Query {
    pub fn table(name: &str) -> Self {
        Query {
            table: name.to_string(),
            columns: Vec::new(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn select(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq(column.to_string(), value.into()));
        self
    }

    pub fn gte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Gte(column.to_string(), value.into()));
        self
    }

    pub fn lte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Lte(column.to_string(), value.into()));
        self
    }

    pub fn in_list<V: Into<Value>>(mut self, column: &str, values: impl IntoIterator<Item = V>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.filters.push(Filter::In(column.to_string(), values));
        self
    }

    pub fn order_by(mut self, column: &str, descending: bool) -> Self {
        self.order.push(Order {
            column: column.to_string(),
            descending,
        });
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[async_trait]
pub trait TableClient: Send + Sync {
    async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError>;

    async fn insert(&self, table: &str, row: Row) -> Result<(), QueryError>;

    /// Applies `changes` to every row matching all `filters`; returns the number of rows touched.
    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> Result<u64, QueryError>;
}

/// Reads `query` page by page until the store hands back an empty page.
pub async fn select_all_pages(
    client: &dyn TableClient,
    query: &Query,
    page_size: i64,
) -> Result<Vec<Row>, QueryError> {
    if page_size <= 0 {
        return Err(QueryError::Rejected(format!("page size must be positive, got {}", page_size)));
    }

    let mut rows = Vec::new();
    let mut offset = 0;
    loop {
        let page = client
            .select(&query.clone().limit(page_size).offset(offset))
            .await?;
        if page.is_empty() {
            break;
        }
        log::debug!("Fetched {} rows from {} at offset {}", page.len(), query.table, offset);
        offset += page.len() as i64;
        rows.extend(page);
    }
    Ok(rows)
}

pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>, QueryError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(QueryError::from))
        .collect()
}

pub fn encode_row<T: Serialize>(record: &T) -> Result<Row, QueryError> {
    match serde_json::to_value(record)? {
        Value::Object(row) => Ok(row),
        other => Err(QueryError::Rejected(format!("expected a record, got {}", other))),
    }
}

/// Table and column names are interpolated into SQL, so only plain identifiers pass.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

pub async fn create_pool(database_url: &str) -> Result<PgPool, QueryError> {
    Ok(PgPool::connect(database_url).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identifiers_reject_quotes_and_spaces() {
        assert!(is_valid_identifier("EA_ActivityDate"));
        assert!(is_valid_identifier("_private"));
        assert!(!is_valid_identifier("Users\"; DROP TABLE x"));
        assert!(!is_valid_identifier("two words"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier(""));
    }

    #[test]
    fn builder_collects_filters_in_order() {
        let query = Query::table("EmployeeActivity")
            .select(&["EA_Adm_num"])
            .eq("EA_Adm_num", 100)
            .gte("EA_ActivityDate", "2024-01-01")
            .in_list("EA_Activity", vec![1, 2]);
        assert_eq!(query.filters.len(), 3);
        assert_eq!(query.filters[2], Filter::In("EA_Activity".into(), vec![json!(1), json!(2)]));
    }

    #[test]
    fn encode_row_rejects_scalars() {
        assert!(encode_row(&5).is_err());
        let row = encode_row(&json!({"username": "admin"})).unwrap();
        assert_eq!(row["username"], json!("admin"));
    }
}
