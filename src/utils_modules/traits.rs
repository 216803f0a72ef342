use crate::common::*;

use crate::model::sources::column_map::*;

#[doc = r#"
    Builds a domain type from one postgres result row.

    # Arguments
    * `row` - the row returned by the query
    * `columns` - category -> column names the query selected

    # Errors
    A missing or mistyped column; the error names the column.
"#]
pub trait FromPgRow
where
    Self: Sized,
{
    fn from_pg_row(row: &PgRow, columns: &ColumnMap) -> Result<Self, anyhow::Error>;
}
