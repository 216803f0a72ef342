use crate::common::*;

#[async_trait]
pub trait PgRepository: Send + Sync {
    #[doc = "Runs `query` on a fresh connection and returns every row. The connection is closed before returning."]
    async fn fetch_all(&self, query: &str) -> Result<Vec<PgRow>, anyhow::Error>;
}
