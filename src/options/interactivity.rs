use serde::{Deserialize, Serialize};

use crate::Section;

/// Pointer interaction with the particles.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Interactivity {
    /// `canvas`, `parent` or `window`.
    pub detects_on: String,
    #[editor(section)]
    pub events: Events,
    #[editor(section)]
    pub modes: Modes,
}

impl Default for Interactivity {
    fn default() -> Self {
        Self {
            detects_on: "canvas".into(),
            events: Events::default(),
            modes: Modes::default(),
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Events {
    #[editor(section)]
    pub on_click: ClickEvent,
    #[editor(section)]
    pub on_hover: HoverEvent,
    pub resize: bool,
}

impl Default for Events {
    fn default() -> Self {
        Self {
            on_click: ClickEvent::default(),
            on_hover: HoverEvent::default(),
            resize: true,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClickEvent {
    pub enable: bool,
    pub mode: String,
}

impl Default for ClickEvent {
    fn default() -> Self {
        Self {
            enable: false,
            mode: "push".into(),
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverEvent {
    pub enable: bool,
    pub mode: String,
    #[editor(section)]
    pub parallax: Parallax,
}

impl Default for HoverEvent {
    fn default() -> Self {
        Self {
            enable: false,
            mode: "grab".into(),
            parallax: Parallax::default(),
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Parallax {
    pub enable: bool,
    pub force: f64,
    pub smooth: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            enable: false,
            force: 2.0,
            smooth: 10.0,
        }
    }
}

/// Parameters for each interaction mode.
#[derive(Section, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Modes {
    #[editor(section)]
    pub bubble: Bubble,
    #[editor(section)]
    pub connect: Connect,
    #[editor(section)]
    pub grab: Grab,
    #[editor(section)]
    pub push: Push,
    #[editor(section)]
    pub remove: Remove,
    #[editor(section)]
    pub repulse: Repulse,
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Bubble {
    pub distance: f64,
    #[editor(step = 0.1)]
    pub duration: f64,
    #[editor(step = 0.01, min = 0.0, max = 1.0)]
    pub opacity: f64,
    pub size: f64,
}

impl Default for Bubble {
    fn default() -> Self {
        Self {
            distance: 200.0,
            duration: 0.4,
            opacity: 0.8,
            size: 40.0,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Connect {
    pub distance: f64,
    pub radius: f64,
}

impl Default for Connect {
    fn default() -> Self {
        Self {
            distance: 80.0,
            radius: 60.0,
        }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Grab {
    pub distance: f64,
}

impl Default for Grab {
    fn default() -> Self {
        Self { distance: 100.0 }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Push {
    pub quantity: f64,
}

impl Default for Push {
    fn default() -> Self {
        Self { quantity: 4.0 }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Remove {
    pub quantity: f64,
}

impl Default for Remove {
    fn default() -> Self {
        Self { quantity: 2.0 }
    }
}

#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Repulse {
    pub distance: f64,
    #[editor(step = 0.1)]
    pub duration: f64,
    pub speed: f64,
}

impl Default for Repulse {
    fn default() -> Self {
        Self {
            distance: 200.0,
            duration: 0.4,
            speed: 1.0,
        }
    }
}
