use crate::common::*;

use crate::dto::data_point::*;
use crate::enums::vcs_type::*;
use crate::utils_modules::color_utils::*;

#[doc = "One plotted line: a category, its colour and its count per date."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct CategoryLine {
    vcs: VcsType,
    color: Rgb,
    values: Vec<i64>,
}

#[doc = r#"
    Everything both chart outputs need, extracted once from the series.

    `date_labels` and every `CategoryLine::values` are aligned by position.
"#]
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct ChartFrame {
    title: String,
    date_labels: Vec<String>,
    lines: Vec<CategoryLine>,
    y_range: (i64, i64),
}

impl ChartFrame {
    pub fn build(title: &str, series: &[DataPoint], palette: &[(VcsType, Rgb)]) -> Self {
        let date_labels: Vec<String> = series
            .iter()
            .map(|point| point.date().format("%Y-%m-%d").to_string())
            .collect();

        let lines: Vec<CategoryLine> = palette
            .iter()
            .map(|(vcs, color)| {
                let values: Vec<i64> = series.iter().map(|point| point.count_of(*vcs)).collect();
                CategoryLine::new(*vcs, *color, values)
            })
            .collect();

        let all_values: Vec<i64> = lines
            .iter()
            .flat_map(|line| line.values().iter().copied())
            .collect();

        ChartFrame {
            title: title.to_string(),
            date_labels,
            lines,
            y_range: calculate_y_range(&all_values),
        }
    }
}

#[doc = "Y-axis range with 10% padding, never below zero"]
fn calculate_y_range(values: &[i64]) -> (i64, i64) {
    if values.is_empty() {
        return (0, 100);
    }

    let min_val: i64 = *values.iter().min().unwrap_or(&0);
    let max_val: i64 = *values.iter().max().unwrap_or(&100);

    let padding: i64 = ((max_val - min_val) as f64 * 0.1).max(1.0) as i64;

    let y_min: i64 = (min_val - padding).max(0);
    let y_max: i64 = max_val + padding;

    (y_min, y_max)
}
