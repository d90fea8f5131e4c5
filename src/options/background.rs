use serde::{Deserialize, Serialize};

use crate::color::ColorField;
use crate::Section;

/// Canvas background drawn behind the particles.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Background {
    #[editor(color)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorField>,
    pub image: String,
    pub position: String,
    pub repeat: String,
    pub size: String,
    #[editor(step = 0.01, min = 0.0, max = 1.0)]
    pub opacity: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            color: None,
            image: String::new(),
            position: "50% 50%".into(),
            repeat: "no-repeat".into(),
            size: "cover".into(),
            opacity: 1.0,
        }
    }
}
