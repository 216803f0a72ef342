use crate::common::*;

use crate::enums::vcs_type::*;
use crate::model::sources::category_set::*;

#[doc = r#"
    Category -> count column mapping of the sources table.

    Built once from the column prefix and the category list, then shared by the
    query builder and the row reader so both agree on the column names.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<(VcsType, String)>,
}

impl ColumnMap {
    pub fn new(column_prefix: &str, categories: &CategorySet) -> Self {
        let columns: Vec<(VcsType, String)> = categories
            .as_slice()
            .iter()
            .map(|vcs| (*vcs, format!("{}{}", column_prefix, vcs)))
            .collect();

        ColumnMap { columns }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(VcsType, String)> {
        self.columns.iter()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(_, col)| col.as_str()).collect()
    }

}
