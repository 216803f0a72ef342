use crate::common::*;

use crate::enums::vcs_type::*;
use crate::model::sources::column_map::*;
use crate::utils_modules::traits::*;

#[doc = r#"
    Source counts of every tracked vcs for one day.

    # Fields
    * `date` - day the counts were observed (`date(ts)`)
    * `counts` - count per vcs category
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct DataPoint {
    date: NaiveDate,
    counts: BTreeMap<VcsType, i64>,
}

impl DataPoint {
    #[doc = "Count of `vcs` on this day, 0 when the category was not loaded."]
    pub fn count_of(&self, vcs: VcsType) -> i64 {
        self.counts.get(&vcs).copied().unwrap_or(0)
    }
}

impl FromPgRow for DataPoint {
    fn from_pg_row(row: &PgRow, columns: &ColumnMap) -> Result<Self, anyhow::Error> {
        /* 1) day */
        let date: NaiveDate = row
            .try_get::<NaiveDate, _>("ts")
            .map_err(|e| anyhow!("[DataPoint->from_pg_row] Missing or invalid 'ts': {}", e))?;

        /* 2) one count column per category */
        let mut counts: BTreeMap<VcsType, i64> = BTreeMap::new();

        for (vcs, column) in columns.iter() {
            let count: i64 = row.try_get::<i64, _>(column.as_str()).map_err(|e| {
                anyhow!(
                    "[DataPoint->from_pg_row] Missing or invalid '{}': {}",
                    column,
                    e
                )
            })?;

            counts.insert(*vcs, count);
        }

        Ok(DataPoint::new(date, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sources::category_set::*;
    use crate::repository::pg_repository_impl::*;
    use crate::traits::repository_traits::pg_repository::*;

    #[test]
    fn missing_category_counts_as_zero() {
        let mut counts: BTreeMap<VcsType, i64> = BTreeMap::new();
        counts.insert(VcsType::Git, 10);

        let point: DataPoint = DataPoint::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), counts);

        assert_eq!(point.count_of(VcsType::Git), 10);
        assert_eq!(point.count_of(VcsType::Svn), 0);
    }

    #[test]
    fn exposes_fields_through_getters() {
        let counts: BTreeMap<VcsType, i64> = [(VcsType::Hg, 4)].into_iter().collect();
        let day: NaiveDate = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();

        let point: DataPoint = DataPoint::new(day, counts.clone());

        assert_eq!(point.date(), &day);
        assert_eq!(point.counts(), &counts);
    }

    /* The tests below need a reachable postgres: SOURCES_COUNT_TEST_DATABASE_URL=postgresql://... */
    fn test_database_url() -> Option<String> {
        env::var("SOURCES_COUNT_TEST_DATABASE_URL").ok()
    }

    fn git_svn_columns() -> ColumnMap {
        let set: CategorySet = CategorySet::from_names(&["git", "svn"]).unwrap();
        ColumnMap::new("vcstype_", &set)
    }

    async fn single_row(url: &str, query: &str) -> PgRow {
        let mut rows: Vec<PgRow> = PgRepositoryImpl::from_url(url)
            .fetch_all(query)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        rows.remove(0)
    }

    #[tokio::test]
    async fn decodes_day_and_bigint_counts() {
        let Some(url) = test_database_url() else {
            return;
        };

        let row: PgRow = single_row(
            &url,
            "select date('2020-01-02 10:30:00'::timestamp) as ts, \
             coalesce(null::int4, 0)::bigint as vcstype_git, \
             coalesce(7::int4, 0)::bigint as vcstype_svn",
        )
        .await;

        let point: DataPoint = DataPoint::from_pg_row(&row, &git_svn_columns()).unwrap();

        assert_eq!(point.date(), &NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(point.count_of(VcsType::Git), 0);
        assert_eq!(point.count_of(VcsType::Svn), 7);
    }

    #[tokio::test]
    async fn missing_count_column_is_named_in_error() {
        let Some(url) = test_database_url() else {
            return;
        };

        let row: PgRow = single_row(
            &url,
            "select date('2020-01-02 10:30:00'::timestamp) as ts, 10::bigint as vcstype_git",
        )
        .await;

        let err: anyhow::Error = DataPoint::from_pg_row(&row, &git_svn_columns()).unwrap_err();

        assert!(err.to_string().contains("vcstype_svn"), "{}", err);
    }

    #[tokio::test]
    async fn mistyped_count_column_is_named_in_error() {
        let Some(url) = test_database_url() else {
            return;
        };

        let row: PgRow = single_row(
            &url,
            "select date('2020-01-02 10:30:00'::timestamp) as ts, \
             10::bigint as vcstype_git, 'five'::text as vcstype_svn",
        )
        .await;

        let err: anyhow::Error = DataPoint::from_pg_row(&row, &git_svn_columns()).unwrap_err();

        assert!(err.to_string().contains("vcstype_svn"), "{}", err);
    }
}
