use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::db::{is_valid_identifier, Filter, Query, Row, TableClient};
use crate::errors::QueryError;

/// In-process table store. Serves as the dev backend when no database is configured.
#[derive(Default)]
pub struct MemoryTableClient {
    tables: Mutex<HashMap<String, Vec<Row>>>,
    // Remaining inserts a table accepts before rejecting writes.
    insert_budget: Mutex<HashMap<String, usize>>,
    selects: AtomicUsize,
}

impl MemoryTableClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, table: &str, row: Row) {
        if let Ok(mut tables) = self.tables.lock() {
            tables.entry(table.to_string()).or_default().push(row);
        }
    }

    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables
            .lock()
            .map(|tables| tables.get(table).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Lets `count` more inserts into `table` succeed, then rejects the rest.
    pub fn fail_inserts_after(&self, table: &str, count: usize) {
        if let Ok(mut budget) = self.insert_budget.lock() {
            budget.insert(table.to_string(), count);
        }
    }

    pub fn select_count(&self) -> usize {
        self.selects.load(AtomicOrdering::SeqCst)
    }
}

fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        // The HTTP table API coerces "100" against integer columns.
        (Value::Number(x), Value::String(y)) => x.as_f64()?.partial_cmp(&y.trim().parse::<f64>().ok()?),
        (Value::String(x), Value::Number(y)) => x.trim().parse::<f64>().ok()?.partial_cmp(&y.as_f64()?),
        _ => None,
    }
}

fn field<'a>(row: &'a Row, column: &str) -> &'a Value {
    row.get(column).unwrap_or(&Value::Null)
}

fn matches(row: &Row, filter: &Filter) -> bool {
    let value = field(row, filter.column());
    match filter {
        Filter::Eq(_, expected) => compare(value, expected) == Some(Ordering::Equal),
        Filter::Gte(_, bound) => matches!(compare(value, bound), Some(Ordering::Greater | Ordering::Equal)),
        Filter::Lte(_, bound) => matches!(compare(value, bound), Some(Ordering::Less | Ordering::Equal)),
        Filter::In(_, options) => options
            .iter()
            .any(|option| compare(value, option) == Some(Ordering::Equal)),
    }
}

fn check_identifiers<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), QueryError> {
    for name in names {
        if !is_valid_identifier(name) {
            return Err(QueryError::InvalidIdentifier(name.to_string()));
        }
    }
    Ok(())
}

fn poisoned<T>(_: T) -> QueryError {
    QueryError::Rejected("table store lock poisoned".to_string())
}

#[async_trait]
impl TableClient for MemoryTableClient {
    async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError> {
        check_identifiers(std::iter::once(query.table.as_str()))?;
        check_identifiers(query.columns.iter().map(String::as_str))?;
        self.selects.fetch_add(1, AtomicOrdering::SeqCst);

        let tables = self.tables.lock().map_err(poisoned)?;
        let mut rows: Vec<Row> = tables
            .get(&query.table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| query.filters.iter().all(|f| matches(row, f)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(tables);

        if !query.order.is_empty() {
            rows.sort_by(|a, b| {
                query
                    .order
                    .iter()
                    .map(|o| {
                        let ord = compare(field(a, &o.column), field(b, &o.column)).unwrap_or(Ordering::Equal);
                        if o.descending { ord.reverse() } else { ord }
                    })
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let offset = query.offset.unwrap_or(0).max(0) as usize;
        let limit = query.limit.map(|l| l.max(0) as usize).unwrap_or(usize::MAX);
        let rows = rows.into_iter().skip(offset).take(limit);

        if query.columns.is_empty() {
            return Ok(rows.collect());
        }
        Ok(rows
            .map(|row| {
                query
                    .columns
                    .iter()
                    .map(|c| (c.clone(), field(&row, c).clone()))
                    .collect()
            })
            .collect())
    }

    async fn insert(&self, table: &str, row: Row) -> Result<(), QueryError> {
        check_identifiers(std::iter::once(table))?;
        check_identifiers(row.keys().map(String::as_str))?;

        let mut budget = self.insert_budget.lock().map_err(poisoned)?;
        if let Some(remaining) = budget.get_mut(table) {
            if *remaining == 0 {
                return Err(QueryError::Rejected(format!("insert into {} refused", table)));
            }
            *remaining -= 1;
        }
        drop(budget);

        let mut tables = self.tables.lock().map_err(poisoned)?;
        tables.entry(table.to_string()).or_default().push(row);
        Ok(())
    }

    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> Result<u64, QueryError> {
        check_identifiers(std::iter::once(table))?;
        check_identifiers(changes.keys().map(String::as_str))?;
        if filters.is_empty() {
            return Err(QueryError::Rejected(format!("unfiltered update of {}", table)));
        }

        let mut tables = self.tables.lock().map_err(poisoned)?;
        let mut touched = 0;
        if let Some(rows) = tables.get_mut(table) {
            for row in rows.iter_mut().filter(|row| filters.iter().all(|f| matches(row, f))) {
                for (column, value) in &changes {
                    row.insert(column.clone(), value.clone());
                }
                touched += 1;
            }
        }
        Ok(touched)
    }
}
