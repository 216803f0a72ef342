use crate::common::*;

use crate::enums::vcs_type::*;
use crate::model::sources::category_set::*;

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("invalid argument: hue must be within [0.0, 1.0], got {0}")]
    InvalidHue(f64),
}

#[doc = "RGB triple with every channel in [0.0, 1.0]."]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |c: f64| -> u8 { (c * 255.0).round().clamp(0.0, 255.0) as u8 };
        (channel(self.r), channel(self.g), channel(self.b))
    }
}

#[doc = r#"
    Maps a hue in [0.0, 1.0] to a fully saturated, full brightness colour
    (HSV with s = v = 1, converted to RGB).

    0.0 and 1.0 are both pure red, 1/3 is green and 2/3 is blue.

    # Errors
    * `ColorError::InvalidHue` - the hue is outside [0.0, 1.0] or NaN
"#]
pub fn color_for(hue: f64) -> Result<Rgb, ColorError> {
    if !(0.0..=1.0).contains(&hue) {
        return Err(ColorError::InvalidHue(hue));
    }

    let scaled: f64 = hue * 6.0;
    let sector: f64 = scaled.floor();
    let f: f64 = scaled - sector;

    /* s = v = 1 => p = 0, q = 1 - f, t = f */
    let (q, t) = (1.0 - f, f);

    let rgb: Rgb = match (sector as u8) % 6 {
        0 => Rgb::new(1.0, t, 0.0),
        1 => Rgb::new(q, 1.0, 0.0),
        2 => Rgb::new(0.0, 1.0, t),
        3 => Rgb::new(0.0, q, 1.0),
        4 => Rgb::new(t, 0.0, 1.0),
        _ => Rgb::new(1.0, 0.0, q),
    };

    Ok(rgb)
}

#[doc = r#"
    Spreads the categories evenly around the hue wheel.

    # Arguments
    * `categories` - ordered category list

    # Returns
    * `Vec<(VcsType, Rgb)>` - index `i` of `n` gets `color_for(i / n)`, in list order
"#]
pub fn palette_for(categories: &CategorySet) -> Result<Vec<(VcsType, Rgb)>, ColorError> {
    let total: f64 = categories.len() as f64;

    categories
        .as_slice()
        .iter()
        .enumerate()
        .map(|(idx, vcs)| -> Result<(VcsType, Rgb), ColorError> {
            Ok((*vcs, color_for(idx as f64 / total)?))
        })
        .collect()
}
