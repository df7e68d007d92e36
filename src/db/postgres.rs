use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool, Postgres, QueryBuilder};

use crate::db::{is_valid_identifier, Filter, Query, Row, TableClient};
use crate::errors::QueryError;

/// Table client over a Postgres pool. Rows travel as JSON so callers stay schema-agnostic.
#[derive(Clone)]
pub struct PgTableClient {
    pool: PgPool,
}

impl PgTableClient {
    pub fn new(pool: PgPool) -> Self {
        PgTableClient { pool }
    }
}

fn quote(ident: &str) -> Result<String, QueryError> {
    if !is_valid_identifier(ident) {
        return Err(QueryError::InvalidIdentifier(ident.to_string()));
    }
    Ok(format!("\"{}\"", ident))
}

fn qualified(table: Option<&str>, column: &str) -> Result<String, QueryError> {
    match table {
        Some(table) => Ok(format!("{}.{}", quote(table)?, quote(column)?)),
        None => quote(column),
    }
}

fn push_comparison(
    qb: &mut QueryBuilder<'static, Postgres>,
    column: &str,
    op: &str,
    value: &Value,
) -> Result<(), QueryError> {
    match value {
        // Text comparison keeps ISO dates ordered without knowing the column type.
        Value::String(s) => {
            qb.push(format!("{}::text {} ", column, op)).push_bind(s.clone());
        }
        Value::Number(n) => {
            qb.push(format!("{} {} ", column, op));
            if let Some(i) = n.as_i64() {
                qb.push_bind(i);
            } else if let Some(f) = n.as_f64() {
                qb.push_bind(f);
            } else {
                return Err(QueryError::Rejected(format!("unsupported number {}", n)));
            }
        }
        Value::Bool(b) => {
            qb.push(format!("{} {} ", column, op)).push_bind(*b);
        }
        other => {
            return Err(QueryError::Rejected(format!(
                "unsupported filter value {} on {}",
                other, column
            )))
        }
    }
    Ok(())
}

fn push_filters(
    qb: &mut QueryBuilder<'static, Postgres>,
    table: Option<&str>,
    filters: &[Filter],
) -> Result<(), QueryError> {
    for (i, filter) in filters.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        let column = qualified(table, filter.column())?;
        match filter {
            Filter::Eq(_, Value::Null) => {
                qb.push(format!("{} IS NULL", column));
            }
            Filter::Eq(_, value) => push_comparison(qb, &column, "=", value)?,
            Filter::Gte(_, value) => push_comparison(qb, &column, ">=", value)?,
            Filter::Lte(_, value) => push_comparison(qb, &column, "<=", value)?,
            Filter::In(_, values) => {
                let ints: Option<Vec<i64>> = values.iter().map(Value::as_i64).collect();
                match ints {
                    Some(ints) => {
                        qb.push(format!("{} = ANY(", column)).push_bind(ints).push(")");
                    }
                    None => {
                        let texts: Vec<String> = values
                            .iter()
                            .map(|v| match v {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect();
                        qb.push(format!("{}::text = ANY(", column)).push_bind(texts).push(")");
                    }
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn build_select(query: &Query) -> Result<QueryBuilder<'static, Postgres>, QueryError> {
    let projection = if query.columns.is_empty() {
        "*".to_string()
    } else {
        query
            .columns
            .iter()
            .map(|c| quote(c))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ")
    };

    let mut qb = QueryBuilder::new("SELECT row_to_json(t) FROM (SELECT ");
    qb.push(projection).push(" FROM ").push(quote(&query.table)?);
    push_filters(&mut qb, None, &query.filters)?;

    if !query.order.is_empty() {
        let order = query
            .order
            .iter()
            .map(|o| Ok(format!("{} {}", quote(&o.column)?, if o.descending { "DESC" } else { "ASC" })))
            .collect::<Result<Vec<_>, QueryError>>()?;
        qb.push(" ORDER BY ").push(order.join(", "));
    }
    if let Some(limit) = query.limit {
        qb.push(" LIMIT ").push_bind(limit);
    }
    if let Some(offset) = query.offset {
        qb.push(" OFFSET ").push_bind(offset);
    }
    qb.push(") AS t");
    Ok(qb)
}

pub(crate) fn build_insert(table: &str, row: Row) -> Result<QueryBuilder<'static, Postgres>, QueryError> {
    if row.is_empty() {
        return Err(QueryError::Rejected(format!("empty insert into {}", table)));
    }
    let table = quote(table)?;
    let columns = row
        .keys()
        .map(|c| quote(c))
        .collect::<Result<Vec<_>, _>>()?
        .join(", ");

    // jsonb_populate_record converts each JSON field to the column's declared type.
    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {table} ({columns}) SELECT {columns} FROM jsonb_populate_record(NULL::{table}, "
    ));
    qb.push_bind(Json(row)).push(")");
    Ok(qb)
}

pub(crate) fn build_update(
    table: &str,
    changes: Row,
    filters: &[Filter],
) -> Result<QueryBuilder<'static, Postgres>, QueryError> {
    if changes.is_empty() {
        return Err(QueryError::Rejected(format!("empty update of {}", table)));
    }
    if filters.is_empty() {
        return Err(QueryError::Rejected(format!("unfiltered update of {}", table)));
    }
    let quoted_table = quote(table)?;
    let assignments = changes
        .keys()
        .map(|c| {
            let column = quote(c)?;
            Ok(format!("{column} = r.{column}"))
        })
        .collect::<Result<Vec<_>, QueryError>>()?
        .join(", ");

    let mut qb = QueryBuilder::new(format!(
        "UPDATE {quoted_table} SET {assignments} FROM jsonb_populate_record(NULL::{quoted_table}, "
    ));
    qb.push_bind(Json(changes)).push(") AS r");
    push_filters(&mut qb, Some(table), filters)?;
    Ok(qb)
}

#[async_trait]
impl TableClient for PgTableClient {
    async fn select(&self, query: &Query) -> Result<Vec<Row>, QueryError> {
        let mut qb = build_select(query)?;
        let rows = qb
            .build_query_scalar::<Json<Row>>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }

    async fn insert(&self, table: &str, row: Row) -> Result<(), QueryError> {
        let mut qb = build_insert(table, row)?;
        qb.build().execute(&self.pool).await?;
        Ok(())
    }

    async fn update(&self, table: &str, changes: Row, filters: &[Filter]) -> Result<u64, QueryError> {
        let mut qb = build_update(table, changes, filters)?;
        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
