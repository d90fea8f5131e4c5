use serde::{Deserialize, Serialize};

use crate::color::ColorField;
use crate::Section;

/// Lines drawn between nearby particles.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Links {
    #[editor(section)]
    pub shadow: LinksShadow,
    #[editor(section)]
    pub triangles: LinksTriangles,
    pub blink: bool,
    #[editor(color)]
    pub color: ColorField,
    pub consent: bool,
    pub distance: f64,
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[editor(step = 0.01, min = 0.0, max = 1.0)]
    pub opacity: f64,
    pub warp: bool,
    pub width: f64,
}

impl Default for Links {
    fn default() -> Self {
        Self {
            shadow: LinksShadow::default(),
            triangles: LinksTriangles::default(),
            blink: false,
            color: ColorField::wrapped("#fff"),
            consent: false,
            distance: 100.0,
            enable: false,
            id: None,
            opacity: 1.0,
            warp: false,
            width: 1.0,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LinksShadow {
    pub blur: f64,
    #[editor(color)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorField>,
    pub enable: bool,
}

impl Default for LinksShadow {
    fn default() -> Self {
        Self {
            blur: 5.0,
            color: Some(ColorField::wrapped("#00ff00")),
            enable: false,
        }
    }
}

/// Filled triangles between three mutually linked particles.
#[derive(Section, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LinksTriangles {
    #[editor(color)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorField>,
    pub enable: bool,
    #[editor(step = 0.01)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}
