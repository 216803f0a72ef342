use crate::common::*;

use crate::dto::data_point::*;

use crate::traits::service_traits::{chart_service::*, query_service::*};

#[derive(Debug, new)]
pub struct MainController<Q: QueryService, C: ChartService> {
    query_service: Q,
    chart_service: C,
}

impl<Q: QueryService, C: ChartService> MainController<Q, C> {
    #[doc = r#"
        Runs one reporting pass.

        1. Returns right away when neither output path is set (nothing to produce)
        2. Loads the daily sources count series from the database
        3. Renders it to the static image and/or the interactive html page

        A load failure returns before anything is rendered, so no output file
        is created or touched.

        # Returns
        * `anyhow::Result<()>` - Ok when every requested artifact was written
    "#]
    pub async fn main_task(
        &self,
        image_path: Option<&Path>,
        html_path: Option<&Path>,
    ) -> anyhow::Result<()> {
        if image_path.is_none() && html_path.is_none() {
            info!("[MainController->main_task] no chart output configured, skipping");
            return Ok(());
        }

        /* 1. Daily sources count per vcs */
        let series: Vec<DataPoint> = self.query_service.fetch_series().await?;

        if series.is_empty() {
            warn!("[MainController->main_task] sources count table returned no rows");
        }

        /* 2. Chart outputs */
        self.chart_service
            .render(&series, image_path, html_path)
            .await
            .context("[MainController->main_task] failed to render sources count chart")?;

        Ok(())
    }
}
