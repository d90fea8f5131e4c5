//! Integration tests for the built-in presets.

use std::cell::RefCell;
use std::rc::Rc;

use particles_editor::prelude::*;

fn preset(name: &str) -> &'static Preset {
    PRESETS.iter().find(|p| p.name == name).unwrap()
}

#[test]
fn test_default_preset_matches_default_options() {
    assert_eq!(preset("Default").load().unwrap(), Options::default());
}

#[test]
fn test_preset_color_shapes() {
    let neon = preset("Neon Web").load().unwrap();
    assert_eq!(
        neon.background.color,
        Some(ColorField::Wrapped(Some(ColorValue::Rgb(Rgb::new(12, 0, 24)))))
    );
    assert_eq!(
        neon.particles.color,
        ColorField::Wrapped(Some(ColorValue::Hsl(Hsl {
            h: 300.0,
            s: 100.0,
            l: 60.0,
        })))
    );

    let constellation = preset("Constellation").load().unwrap();
    assert_eq!(constellation.particles.color, ColorField::Hex("#ffffff".into()));
}

#[test]
fn test_preset_stages_build_list_groups() {
    let outbreak = preset("Outbreak").load().unwrap();
    assert_eq!(outbreak.infection.stages.len(), 3);
    assert_eq!(outbreak.infection.stages[1].duration, Some(2.0));
    assert_eq!(outbreak.infection.stages[2].infected_stage, Some(0.0));

    let options = Rc::new(RefCell::new(outbreak));
    let editor = OptionsEditor::new(options, || {}).unwrap();
    assert!(editor.group(&["infection", "stages", "stage_3"]).is_ok());
    assert!(editor.group(&["infection", "stages", "stage_4"]).is_err());
}

#[test]
fn test_every_preset_builds_an_editor() {
    for preset in PRESETS {
        let options = Rc::new(RefCell::new(preset.load().unwrap()));
        assert!(OptionsEditor::new(options, || {}).is_ok(), "{}", preset.name);
    }
}
