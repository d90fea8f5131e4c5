//! Integration tests for the `#[derive(Section)]` macro.
//!
//! These build editors over small hand-written option types and check the
//! groups, keys, labels and constraints the generated composers produce.

use std::cell::RefCell;
use std::rc::Rc;

use particles_editor::prelude::*;

#[derive(Section, Default, Clone, Debug, PartialEq)]
struct Scene {
    #[editor(section, expanded)]
    camera: Camera,
    #[editor(list(
        item = "light",
        item_label = "Light",
        add = "addLight",
        add_label = "Add Light",
        default = spot_light
    ))]
    lights: Vec<Light>,
    #[editor(list)]
    tags: Vec<Tag>,
    frame_rate: f64,
    #[editor(label = "HDR")]
    hdr: bool,
    #[editor(key = "title", label = "Scene Title")]
    name: String,
    #[editor(skip)]
    #[allow(dead_code)]
    cache_size: usize,
}

#[derive(Section, Default, Clone, Debug, PartialEq)]
struct Camera {
    #[editor(step = 0.5, min = 10, max = 120)]
    field_of_view: f64,
    #[editor(color)]
    clear_color: Option<ColorField>,
}

#[derive(Section, Clone, Debug, PartialEq)]
struct Light {
    #[editor(color)]
    color: ColorField,
    intensity: f64,
}

#[derive(Section, Default, Clone, Debug, PartialEq)]
struct Tag {
    text: String,
}

fn spot_light() -> Light {
    Light {
        color: ColorField::Hex("ffffff".into()),
        intensity: 2.0,
    }
}

fn editor(scene: Scene) -> (OptionsEditor<Scene>, SharedOptions<Scene>) {
    let scene = Rc::new(RefCell::new(scene));
    let editor = OptionsEditor::new(Rc::clone(&scene), || {}).unwrap();
    (editor, scene)
}

#[test]
fn test_default_keys_and_labels() {
    let (editor, _) = editor(Scene::default());
    let root = editor.tree().group(editor.root()).unwrap();

    let properties: Vec<_> = root
        .properties()
        .iter()
        .map(|p| (p.key(), p.label()))
        .collect();
    assert_eq!(
        properties,
        [
            ("frameRate", "Frame Rate"),
            ("hdr", "HDR"),
            ("title", "Scene Title"),
        ]
    );
}

#[test]
fn test_skip_leaves_field_out() {
    let (editor, _) = editor(Scene::default());
    let root = editor.tree().group(editor.root()).unwrap();
    assert!(root.property("cacheSize").is_none());
}

#[test]
fn test_expanded_section() {
    let (editor, _) = editor(Scene::default());
    let camera = editor.group(&["camera"]).unwrap();
    let group = editor.tree().group(camera).unwrap();

    assert_eq!(group.label(), "Camera");
    assert!(!group.is_collapsed());

    let fov = group.property("fieldOfView").unwrap();
    assert_eq!(fov.label(), "Field Of View");
    assert_eq!(fov.constraints().step, Some(0.5));
    assert_eq!(fov.constraints().min, Some(10.0));
    assert_eq!(fov.constraints().max, Some(120.0));
    assert_eq!(group.property("clearColor").unwrap().kind(), ValueKind::Color);
}

#[test]
fn test_list_with_custom_default() {
    let (mut editor, scene) = editor(Scene::default());
    let lights = editor.group(&["lights"]).unwrap();
    assert!(editor.tree().group(lights).unwrap().button("addLight").is_some());

    editor.click_path(&["lights"], "addLight").unwrap();

    assert_eq!(scene.borrow().lights, vec![spot_light()]);
    let light = editor.group(&["lights", "light_1"]).unwrap();
    assert_eq!(editor.tree().group(light).unwrap().label(), "Light 1");

    editor
        .edit_path(&["lights", "light_1"], "intensity", 4.0)
        .unwrap();
    assert_eq!(scene.borrow().lights[0].intensity, 4.0);
}

#[test]
fn test_list_defaults() {
    let (mut editor, scene) = editor(Scene {
        tags: vec![Tag {
            text: "intro".into(),
        }],
        ..Default::default()
    });

    let tags = editor.group(&["tags"]).unwrap();
    let group = editor.tree().group(tags).unwrap();
    assert_eq!(group.button("add").unwrap().label(), "Add");
    assert!(editor.group(&["tags", "item_1"]).is_ok());

    editor.click_path(&["tags"], "add").unwrap();
    assert_eq!(scene.borrow().tags.len(), 2);
    assert_eq!(scene.borrow().tags[1], Tag::default());

    let second = editor.group(&["tags", "item_2"]).unwrap();
    assert_eq!(editor.tree().group(second).unwrap().label(), "Item 2");
}

#[test]
fn test_string_field_round_trip() {
    let (mut editor, scene) = editor(Scene::default());
    editor.edit_path(&[], "title", "Night").unwrap();
    assert_eq!(scene.borrow().name, "Night");
}
