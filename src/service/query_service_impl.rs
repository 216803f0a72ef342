use crate::common::*;

use crate::traits::{repository_traits::pg_repository::*, service_traits::query_service::*};

use crate::model::sources::column_map::*;

use crate::utils_modules::traits::*;

use crate::dto::data_point::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: PgRepository> {
    pg_conn: R,
    table: String,
    columns: ColumnMap,
}

impl<R: PgRepository> QueryServiceImpl<R> {
    #[doc = r#"
        Builds the daily sources count query.

        Selects `date(ts)` and every count column of the column map, grouped by
        the day and all selected columns, ordered by day. Counts are cast to
        `bigint` so every integer width decodes the same way, and NULL reads as 0.
    "#]
    pub fn build_query(&self) -> String {
        let select_columns: Vec<String> = self
            .columns
            .column_names()
            .iter()
            .map(|col| format!("coalesce({col}, 0)::bigint as {col}"))
            .collect();

        let group_columns: String = self.columns.column_names().join(", ");

        format!(
            "select date(ts) as ts, {} from {} group by date(ts), {} order by date(ts)",
            select_columns.join(", "),
            self.table,
            group_columns
        )
    }

    #[doc = "Converts the raw rows into `T`, keeping the row order."]
    fn get_query_result_vec<T: FromPgRow>(&self, rows: &[PgRow]) -> Result<Vec<T>, anyhow::Error> {
        rows.iter()
            .map(|row| T::from_pg_row(row, &self.columns))
            .collect::<Result<Vec<T>, _>>()
    }
}

#[async_trait]
impl<R: PgRepository> QueryService for QueryServiceImpl<R> {
    async fn fetch_series(&self) -> anyhow::Result<Vec<DataPoint>> {
        let query: String = self.build_query();

        let rows: Vec<PgRow> = self
            .pg_conn
            .fetch_all(&query)
            .await
            .context("[QueryServiceImpl->fetch_series] failed to load sources count")?;

        let series: Vec<DataPoint> = self.get_query_result_vec::<DataPoint>(&rows)?;

        info!(
            "[QueryServiceImpl->fetch_series] loaded {} daily rows from {}",
            series.len(),
            self.table
        );

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sources::category_set::*;
    use std::sync::Mutex;

    /* In-memory repository: records the queries it receives. */
    #[derive(Default)]
    struct StubPgRepository {
        fail: bool,
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PgRepository for StubPgRepository {
        async fn fetch_all(&self, query: &str) -> Result<Vec<PgRow>, anyhow::Error> {
            self.queries.lock().unwrap().push(query.to_string());

            if self.fail {
                return Err(anyhow!("connection refused"));
            }

            Ok(Vec::new())
        }
    }

    fn service(fail: bool, names: &[&str]) -> QueryServiceImpl<StubPgRepository> {
        let set: CategorySet = CategorySet::from_names(names).unwrap();
        QueryServiceImpl::new(
            StubPgRepository {
                fail,
                ..Default::default()
            },
            "history.sources_count".to_string(),
            ColumnMap::new("vcstype_", &set),
        )
    }

    #[test]
    fn query_selects_groups_and_orders_by_day() {
        let svc: QueryServiceImpl<StubPgRepository> = service(false, &["git", "svn"]);

        assert_eq!(
            svc.build_query(),
            "select date(ts) as ts, \
             coalesce(vcstype_git, 0)::bigint as vcstype_git, \
             coalesce(vcstype_svn, 0)::bigint as vcstype_svn \
             from history.sources_count \
             group by date(ts), vcstype_git, vcstype_svn \
             order by date(ts)"
        );
    }

    #[tokio::test]
    async fn zero_rows_is_an_empty_series() {
        let svc: QueryServiceImpl<StubPgRepository> =
            service(false, &["arch", "bzr", "cvs", "darcs", "git", "hg", "mtn", "svn"]);

        let series: Vec<DataPoint> = svc.fetch_series().await.unwrap();

        assert!(series.is_empty());
        assert_eq!(svc.pg_conn.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repository_failure_propagates() {
        let svc: QueryServiceImpl<StubPgRepository> = service(true, &["git"]);

        let err: anyhow::Error = svc.fetch_series().await.unwrap_err();

        assert!(format!("{:#}", err).contains("connection refused"));
    }

    #[tokio::test]
    async fn live_database_returns_ordered_series() {
        /* Only runs against a real database: SOURCES_COUNT_TEST_DATABASE_URL=postgresql://... */
        let url: String = match env::var("SOURCES_COUNT_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => return,
        };

        let set: CategorySet = CategorySet::default();
        let svc = QueryServiceImpl::new(
            crate::repository::pg_repository_impl::PgRepositoryImpl::from_url(&url),
            "history.sources_count".to_string(),
            ColumnMap::new("vcstype_", &set),
        );

        let series: Vec<DataPoint> = svc.fetch_series().await.unwrap();

        assert!(series.windows(2).all(|w| w[0].date() <= w[1].date()));
        assert!(series.iter().all(|p| p.counts().len() == set.len()));
    }
}
