use serde::{Deserialize, Serialize};

use crate::color::ColorField;
use crate::Section;

/// Particles infect each other and move through a list of stages.
#[derive(Section, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Infection {
    #[editor(list(item = "stage", item_label = "Stage", add = "addStage", add_label = "Add Stage"))]
    pub stages: Vec<InfectionStage>,
    pub cure: bool,
    pub delay: f64,
    pub enable: bool,
    pub infections: f64,
}

/// One stage of an infection.
///
/// The default is what "Add Stage" appends: red, radius 0, rate 1.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InfectionStage {
    #[editor(color)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infected_stage: Option<f64>,
    pub radius: f64,
    pub rate: f64,
}

impl Default for InfectionStage {
    fn default() -> Self {
        Self {
            color: Some(ColorField::wrapped("#ff0000")),
            duration: None,
            infected_stage: None,
            radius: 0.0,
            rate: 1.0,
        }
    }
}
