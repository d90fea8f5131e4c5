use serde::{Deserialize, Serialize};

use crate::color::ColorField;
use crate::Section;

/// Paints the background over the particles, letting them punch holes in it.
#[derive(Section, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundMask {
    #[editor(section)]
    pub cover: BackgroundMaskCover,
    pub enable: bool,
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BackgroundMaskCover {
    #[editor(color)]
    pub color: ColorField,
    #[editor(step = 0.01, min = 0.0, max = 1.0)]
    pub opacity: f64,
}

impl Default for BackgroundMaskCover {
    fn default() -> Self {
        Self {
            color: ColorField::wrapped("#fff"),
            opacity: 1.0,
        }
    }
}
