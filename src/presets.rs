//! Built-in option presets

use crate::error::EditorError;
use crate::options::Options;

pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub json: &'static str,
}

impl Preset {
    pub fn load(&self) -> Result<Options, EditorError> {
        Options::from_json(self.json)
    }
}

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "Default",
        description: "Engine defaults",
        json: "{}",
    },
    Preset {
        name: "Constellation",
        description: "Slow drifting stars joined by faint links",
        json: r##"{
            "background": { "color": "#0b0e1a" },
            "particles": {
                "color": "#ffffff",
                "links": {
                    "enable": true,
                    "distance": 140,
                    "opacity": 0.35,
                    "color": { "value": "#9fb4ff" }
                },
                "move": { "enable": true, "speed": 0.6 },
                "number": { "value": 80, "density": { "enable": true, "area": 800 } },
                "size": { "value": 2, "random": true }
            }
        }"##,
    },
    Preset {
        name: "Neon Web",
        description: "RGB and HSL colors with link triangles",
        json: r##"{
            "background": { "color": { "value": { "r": 12, "g": 0, "b": 24 } } },
            "particles": {
                "color": { "value": { "h": 300, "s": 100, "l": 60 } },
                "links": {
                    "enable": true,
                    "distance": 120,
                    "color": { "value": { "r": 0, "g": 255, "b": 200 } },
                    "shadow": { "enable": true, "blur": 8, "color": { "value": "#ff00ff" } },
                    "triangles": { "enable": true, "opacity": 0.05 }
                },
                "move": { "enable": true, "speed": 2, "outMode": "bounce" },
                "number": { "value": 60 }
            }
        }"##,
    },
    Preset {
        name: "Outbreak",
        description: "Infection with three stages",
        json: r##"{
            "infection": {
                "enable": true,
                "infections": 1,
                "stages": [
                    { "color": { "value": "#ff0000" }, "radius": 0, "rate": 1 },
                    { "color": "#ff8800", "duration": 2, "rate": 0.5 },
                    { "color": { "value": { "h": 120, "s": 60, "l": 40 } }, "infectedStage": 0, "radius": 10, "rate": 0.2 }
                ]
            },
            "particles": {
                "move": { "enable": true, "speed": 1.5 },
                "number": { "value": 120 }
            }
        }"##,
    },
    Preset {
        name: "Hover Bubbles",
        description: "Particles grow under the pointer and are pushed on click",
        json: r##"{
            "interactivity": {
                "events": {
                    "onHover": { "enable": true, "mode": "bubble", "parallax": { "enable": true, "force": 40 } },
                    "onClick": { "enable": true, "mode": "push" }
                },
                "modes": { "bubble": { "distance": 150, "size": 12, "opacity": 1 } }
            },
            "backgroundMask": { "enable": false, "cover": { "color": { "value": "#101010" } } },
            "particles": {
                "color": { "value": "#4fc3f7" },
                "opacity": { "value": 0.7 },
                "size": { "value": 4 },
                "move": { "enable": true }
            }
        }"##,
    },
];
