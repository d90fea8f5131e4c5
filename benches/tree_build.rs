//! Benchmarks for building the editor tree and replaying edits.
//!
//! Run with: `cargo bench`

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use particles_editor::options::InfectionStage;
use particles_editor::prelude::*;

fn options_with_stages(stages: usize) -> Options {
    let mut options = Options::default();
    options.infection.stages = vec![InfectionStage::default(); stages];
    options
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");

    for stages in [0, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(stages), &stages, |b, &stages| {
            let options = options_with_stages(stages);
            b.iter(|| {
                let shared = Rc::new(RefCell::new(options.clone()));
                let editor = OptionsEditor::new(shared, || {}).unwrap();
                black_box(editor.tree().len())
            })
        });
    }

    group.finish();
}

fn bench_edits(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");

    group.bench_function("number", |b| {
        let shared = Rc::new(RefCell::new(Options::default()));
        let mut editor = OptionsEditor::new(shared, || {}).unwrap();
        let links = editor.group(&["particles", "links"]).unwrap();
        let mut distance = 0.0;
        b.iter(|| {
            distance += 1.0;
            black_box(editor.edit(links, "distance", PropertyValue::Number(distance)).unwrap())
        })
    });

    group.bench_function("color", |b| {
        let shared = Rc::new(RefCell::new(Options::default()));
        let mut editor = OptionsEditor::new(shared, || {}).unwrap();
        let particles = editor.group(&["particles"]).unwrap();
        b.iter(|| {
            black_box(
                editor
                    .edit(particles, "color", PropertyValue::Text("#336699".into()))
                    .unwrap(),
            )
        })
    });

    group.bench_function("dropped", |b| {
        let shared = Rc::new(RefCell::new(Options::default()));
        let mut editor = OptionsEditor::new(shared, || {}).unwrap();
        let links = editor.group(&["particles", "links"]).unwrap();
        b.iter(|| black_box(editor.edit(links, "enable", PropertyValue::Number(1.0)).unwrap()))
    });

    group.bench_function("add_stage", |b| {
        let shared = Rc::new(RefCell::new(Options::default()));
        let mut editor = OptionsEditor::new(shared, || {}).unwrap();
        let stages = editor.group(&["infection", "stages"]).unwrap();
        b.iter(|| editor.click(stages, "addStage").unwrap())
    });

    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    c.bench_function("load_presets", |b| {
        b.iter(|| {
            for preset in PRESETS {
                black_box(preset.load().unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_edits, bench_presets);
criterion_main!(benches);
