use serde::{Deserialize, Serialize};

use crate::color::ColorField;
use crate::Section;

use super::Links;

/// How particles look and move.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Particles {
    #[editor(color)]
    pub color: ColorField,
    #[editor(section)]
    pub links: Links,
    #[editor(section, key = "move", label = "Move")]
    #[serde(rename = "move")]
    pub movement: Move,
    #[editor(section)]
    pub number: Number,
    #[editor(section)]
    pub opacity: Opacity,
    #[editor(section)]
    pub shape: Shape,
    #[editor(section)]
    pub size: Size,
    #[editor(section)]
    pub stroke: Stroke,
}

impl Default for Particles {
    fn default() -> Self {
        Self {
            color: ColorField::wrapped("#fff"),
            links: Links::default(),
            movement: Move::default(),
            number: Number::default(),
            opacity: Opacity::default(),
            shape: Shape::default(),
            size: Size::default(),
            stroke: Stroke::default(),
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Move {
    /// `none`, `top`, `right`, `bottom`, `left` or a diagonal.
    pub direction: String,
    pub enable: bool,
    /// What happens at the canvas edge: `out` wraps, `bounce` reflects.
    pub out_mode: String,
    pub random: bool,
    pub speed: f64,
    pub straight: bool,
}

impl Default for Move {
    fn default() -> Self {
        Self {
            direction: "none".into(),
            enable: false,
            out_mode: "out".into(),
            random: false,
            speed: 2.0,
            straight: false,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Number {
    #[editor(section)]
    pub density: Density,
    pub limit: f64,
    pub value: f64,
}

impl Default for Number {
    fn default() -> Self {
        Self {
            density: Density::default(),
            limit: 0.0,
            value: 100.0,
        }
    }
}

/// Scales the particle count to the canvas area.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Density {
    pub area: f64,
    pub enable: bool,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            area: 800.0,
            enable: false,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Opacity {
    pub random: bool,
    #[editor(step = 0.01, min = 0.0, max = 1.0)]
    pub value: f64,
}

impl Default for Opacity {
    fn default() -> Self {
        Self {
            random: false,
            value: 1.0,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Shape {
    #[editor(key = "type", label = "Type")]
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            kind: "circle".into(),
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Size {
    pub random: bool,
    pub value: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            random: false,
            value: 3.0,
        }
    }
}

#[derive(Section, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Stroke {
    #[editor(color)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorField>,
    pub width: f64,
}
