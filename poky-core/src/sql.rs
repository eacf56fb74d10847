/// Statement construction for the backend stored-procedure surface.
///
/// Every operation in the client maps to exactly one `Call` built here. The
/// builders are pure so the statement text and parameter order can be tested
/// without a connection; the batch builder in particular owns the
/// array-of-tuples encoding whose parameter order must interleave
/// `(key, modified_at)` pairs exactly as requested.
use crate::types::MgetCondition;
use bytes::BytesMut;
use chrono::{DateTime, Utc};
use postgres_types::{to_sql_checked, IsNull, ToSql, Type};
use std::fmt::Write;

/// Base table name the stored procedures operate on.
pub const BASE_TABLE: &str = "poky";

/// A parameter bound to a statement slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Timestamp(Option<DateTime<Utc>>),
}

impl ToSql for SqlParam {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            SqlParam::Text(s) => s.to_sql(ty, out),
            // The backend declares plain `timestamp` columns; adapt when the
            // slot is timezone-less instead of forcing timestamptz.
            SqlParam::Timestamp(Some(ts)) => {
                if *ty == Type::TIMESTAMP {
                    ts.naive_utc().to_sql(ty, out)
                } else {
                    ts.to_sql(ty, out)
                }
            }
            SqlParam::Timestamp(None) => Ok(IsNull::Yes),
        }
    }

    fn accepts(ty: &Type) -> bool {
        <String as ToSql>::accepts(ty)
            || <DateTime<Utc> as ToSql>::accepts(ty)
            || <chrono::NaiveDateTime as ToSql>::accepts(ty)
    }

    to_sql_checked!();
}

/// One parameterized statement: the SQL text plus its bound parameters in
/// slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl Call {
    /// Borrow the parameters in the shape the `postgres` query API expects.
    pub fn borrowed_params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }
}

/// `SELECT * FROM poky WHERE bucket = $1 AND key = $2`
pub fn get_call(bucket: &str, key: &str) -> Call {
    Call {
        sql: format!("SELECT * FROM {} WHERE bucket = $1 AND key = $2", BASE_TABLE),
        params: vec![
            SqlParam::Text(bucket.to_string()),
            SqlParam::Text(key.to_string()),
        ],
    }
}

/// `SELECT upsert_kv_data(...) AS result`. The 3-argument form lets the
/// backend assign `modified_at`; the 4-argument form carries the caller's
/// timestamp for optimistic concurrency.
pub fn set_call(
    bucket: &str,
    key: &str,
    data: &str,
    modified_at: Option<DateTime<Utc>>,
) -> Call {
    let mut params = vec![
        SqlParam::Text(bucket.to_string()),
        SqlParam::Text(key.to_string()),
        SqlParam::Text(data.to_string()),
    ];
    let sql = match modified_at {
        Some(ts) => {
            params.push(SqlParam::Timestamp(Some(ts)));
            "SELECT upsert_kv_data($1, $2, $3, $4) AS result".to_string()
        }
        None => "SELECT upsert_kv_data($1, $2, $3) AS result".to_string(),
    };
    Call { sql, params }
}

/// `SELECT delete_kv_data($1, $2) AS result`
pub fn delete_call(bucket: &str, key: &str) -> Call {
    Call {
        sql: "SELECT delete_kv_data($1, $2) AS result".to_string(),
        params: vec![
            SqlParam::Text(bucket.to_string()),
            SqlParam::Text(key.to_string()),
        ],
    }
}

/// `SELECT * FROM mget($1, ARRAY[($2, $3)::mget_param_row, …])`
///
/// Parameters are flattened in request order: `[bucket, key1, ts1, key2,
/// ts2, …]`; conditions are never reordered so the backend signature can
/// correlate them positionally. Returns `None` for an empty condition list:
/// the backend signature does not support an empty array, so no call is
/// issued at all.
pub fn mget_call(bucket: &str, conditions: &[MgetCondition]) -> Option<Call> {
    if conditions.is_empty() {
        return None;
    }

    let mut sql = String::from("SELECT * FROM mget($1, ARRAY[");
    let mut params = Vec::with_capacity(1 + conditions.len() * 2);
    params.push(SqlParam::Text(bucket.to_string()));

    for (i, cond) in conditions.iter().enumerate() {
        if i > 0 {
            sql.push_str(", ");
        }
        let slot = params.len() + 1;
        let _ = write!(sql, "(${}, ${})::mget_param_row", slot, slot + 1);
        params.push(SqlParam::Text(cond.key.clone()));
        params.push(SqlParam::Timestamp(cond.modified_at));
    }
    sql.push_str("])");

    Some(Call { sql, params })
}

/// `SELECT create_bucket_partition($1) AS result`
pub fn create_partition_call(bucket: &str) -> Call {
    Call {
        sql: "SELECT create_bucket_partition($1) AS result".to_string(),
        params: vec![SqlParam::Text(bucket.to_string())],
    }
}

/// `SELECT purge_bucket($1) AS result`. Destructive reset, test support.
pub fn purge_call(bucket: &str) -> Call {
    Call {
        sql: "SELECT purge_bucket($1) AS result".to_string(),
        params: vec![SqlParam::Text(bucket.to_string())],
    }
}

/// Catalog introspection: counts child tables inheriting from the base
/// table, which is how a partitioned deployment is detected.
pub fn partition_probe_call() -> Call {
    Call {
        sql: format!(
            "SELECT COUNT(*) AS result FROM pg_inherits WHERE inhparent = '{}'::regclass",
            BASE_TABLE
        ),
        params: Vec::new(),
    }
}
