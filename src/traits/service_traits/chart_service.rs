use crate::common::*;

use crate::dto::data_point::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Plots one line per tracked category against the dates of `series`
        # Arguments
        * `series` - per-day counts, ordered by date
        * `image_path` - static image output (`.svg` or a bitmap format), overwritten
        * `html_path` - interactive html output, overwritten

        With neither path set nothing is drawn or written.
    "]
    async fn render(
        &self,
        series: &[DataPoint],
        image_path: Option<&Path>,
        html_path: Option<&Path>,
    ) -> anyhow::Result<()>;
}
