use crate::common::*;

use crate::enums::vcs_type::*;

#[doc = r#"
    Ordered, immutable list of the vcs categories to load and plot.

    The position of a category in this list is its ordinal: it decides the
    column order of the query, the order of the chart series and the hue
    assigned to the category.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<VcsType>,
}

impl CategorySet {
    pub fn new(categories: Vec<VcsType>) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }

        for (idx, vcs) in categories.iter().enumerate() {
            if categories[..idx].contains(vcs) {
                return Err(ConfigError::DuplicateCategory(vcs.to_string()));
            }
        }

        Ok(CategorySet { categories })
    }

    #[doc = "Parses category names (e.g. from the toml config) preserving their order."]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        let categories: Vec<VcsType> = names
            .iter()
            .map(|name| name.as_ref().parse::<VcsType>())
            .collect::<Result<_, _>>()?;

        CategorySet::new(categories)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn as_slice(&self) -> &[VcsType] {
        &self.categories
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        CategorySet {
            categories: VcsType::ALL.to_vec(),
        }
    }
}
