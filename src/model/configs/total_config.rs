use crate::common::*;

use crate::model::configs::{chart_config::*, database_config::*, sources_config::*};

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

impl TotalConfig {
    #[doc = "Reads the server config toml and checks the category list once up front."]
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        info!("[TotalConfig->load] reading config from {}", config_path);

        let config: TotalConfig = read_toml_from_file::<TotalConfig>(config_path)
            .with_context(|| {
                format!(
                    "[TotalConfig->load] Failed to convert the data from '{}' into the TotalConfig structure.",
                    config_path
                )
            })?;

        config
            .sources
            .category_set()
            .context("[TotalConfig->load] invalid [sources] categories")?;

        Ok(config)
    }
}
