pub mod chart_config;
pub mod database_config;
pub mod sources_config;
pub mod total_config;
