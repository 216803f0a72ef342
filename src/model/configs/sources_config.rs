use crate::common::*;

use crate::enums::vcs_type::*;

use crate::model::sources::{category_set::*, column_map::*};

fn default_table() -> String {
    "history.sources_count".to_string()
}

fn default_column_prefix() -> String {
    "vcstype_".to_string()
}

fn default_categories() -> Vec<String> {
    VcsType::ALL.iter().map(|vcs| vcs.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SourcesConfig {
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_column_prefix")]
    pub column_prefix: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl SourcesConfig {
    pub fn category_set(&self) -> Result<CategorySet, ConfigError> {
        CategorySet::from_names(&self.categories)
    }

    pub fn column_map(&self, categories: &CategorySet) -> ColumnMap {
        ColumnMap::new(&self.column_prefix, categories)
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            column_prefix: default_column_prefix(),
            categories: default_categories(),
        }
    }
}
