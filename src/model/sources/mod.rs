pub mod category_set;
pub mod column_map;
