use crate::common::*;

fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    700
}

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    pub image_path: Option<PathBuf>,
    pub html_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            image_path: Some(PathBuf::from("sources_count.png")),
            html_path: Some(PathBuf::from("sources_count.html")),
        }
    }
}
