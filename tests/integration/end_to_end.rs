use muembed::{
    app,
    config::{AssembleConfigBuilder, Mode},
};
use muembed_domain::render::Layout;

use crate::common::CatalogWorkspace;

fn markers(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("/* muembed:")).collect()
}

#[test]
fn dependencies_are_embedded_once_in_dependency_order() {
    let ws = CatalogWorkspace::new();
    let catalog = ws.diverging();
    let config = AssembleConfigBuilder::default()
        .catalog(catalog)
        .out_dir(ws.root())
        .targets(vec!["clean".to_string()])
        .build()
        .unwrap();

    let output = app::run(&config).unwrap();

    assert_eq!(output.targets.len(), 1);
    assert_eq!(output.mismatch_count(), 0);
    assert_eq!(
        markers(&ws.read("out/clean.h")),
        [
            "/* muembed: MUX_H 1.0.0 header */",
            "/* muembed: MUY_H 2.1.0 header */",
            "/* muembed: MUX_H 1.0.0 implementation */",
            "/* muembed: MUY_H 2.1.0 implementation */",
        ]
    );
}

#[test]
fn interleaved_layout_with_annotations() {
    let ws = CatalogWorkspace::new();
    let catalog = ws.diverging();
    let config = AssembleConfigBuilder::default()
        .catalog(catalog)
        .out_dir(ws.root())
        .targets(vec!["diverging".to_string()])
        .layout(Layout::Interleaved)
        .annotate_mismatches(true)
        .build()
        .unwrap();

    let output = app::run(&config).unwrap();
    let text = ws.read("out/diverging.h");

    assert_eq!(output.mismatch_count(), 1);
    assert!(text.contains("#pragma message(\"version mismatch for MUX_H"));
    assert_eq!(
        markers(&text),
        [
            "/* muembed: MUX_H 1.0.0 header */",
            "/* muembed: MUX_H 1.0.0 implementation */",
            "/* muembed: MUZ_H 1.0.0 header */",
            "/* muembed: MUZ_H 1.0.0 implementation */",
        ]
    );
}

#[test]
fn check_mode_reports_without_writing() {
    let ws = CatalogWorkspace::new();
    let catalog = ws.diverging();
    let config = AssembleConfigBuilder::default()
        .mode(Mode::Check)
        .catalog(catalog)
        .out_dir(ws.root())
        .build()
        .unwrap();

    let output = app::run(&config).unwrap();

    assert!(output.targets.iter().all(|t| !t.written));
    assert_eq!(output.mismatch_count(), 1);
    assert!(!ws.path("out").exists());
}
