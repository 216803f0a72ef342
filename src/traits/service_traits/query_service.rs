use crate::common::*;

use crate::dto::data_point::*;

#[async_trait]
pub trait QueryService: Send + Sync {
    #[doc = r#"
        Loads the per-day source counts, ordered by day ascending.

        All or nothing: a connection or query failure is returned as an error
        and no partial series is produced.
    "#]
    async fn fetch_series(&self) -> anyhow::Result<Vec<DataPoint>>;
}
