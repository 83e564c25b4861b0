//! WASM build test
//!
//! Browser-only checks for the JS exports and DOM mounting.

#![cfg(target_arch = "wasm32")]

use arrow_dropup_wasm::api::{arrow_dropup_json, arrow_dropup_markup, arrow_dropup_tree, mount_arrow_dropup};
use arrow_dropup_wasm::icons::arrow_dropup::{GLYPH_PATH, SVG_NAMESPACE};
use arrow_dropup_wasm::renderers::svg::SVGDocumentGenerator;
use arrow_dropup_wasm::{arrow_dropup, RenderError, SvgElement};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> web_sys::Element {
    let document = SVGDocumentGenerator::document().unwrap();
    document.create_element("div").unwrap()
}

#[wasm_bindgen_test]
fn test_tree_export_matches_rust_tree() {
    let value = arrow_dropup_tree().unwrap();
    let tree: SvgElement = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(tree, arrow_dropup());
}

#[wasm_bindgen_test]
fn test_markup_and_json_exports() {
    assert!(arrow_dropup_markup().starts_with("<svg "));
    let json = arrow_dropup_json().unwrap();
    assert!(json.contains(GLYPH_PATH));
}

#[wasm_bindgen_test]
fn test_mount_appends_svg_in_namespace() {
    let parent = host();
    let svg = mount_arrow_dropup(&parent).unwrap();

    assert_eq!(parent.child_element_count(), 1);
    assert_eq!(svg.local_name(), "svg");
    assert_eq!(svg.namespace_uri().as_deref(), Some(SVG_NAMESPACE));
    assert_eq!(svg.get_attribute("viewBox").as_deref(), Some("0 0 24 24"));
    assert_eq!(svg.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn test_mounted_paths() {
    let parent = host();
    let svg = mount_arrow_dropup(&parent).unwrap();

    let background = svg.first_element_child().unwrap();
    assert_eq!(background.namespace_uri().as_deref(), Some(SVG_NAMESPACE));
    assert_eq!(background.get_attribute("fill").as_deref(), Some("none"));

    let glyph = svg.last_element_child().unwrap();
    assert_eq!(glyph.get_attribute("d").as_deref(), Some(GLYPH_PATH));
}

#[wasm_bindgen_test]
fn test_mount_twice_creates_separate_nodes() {
    let parent = host();
    let first = mount_arrow_dropup(&parent).unwrap();
    let second = mount_arrow_dropup(&parent).unwrap();

    assert_eq!(parent.child_element_count(), 2);
    assert!(!first.is_same_node(Some(&*second)));
}

#[wasm_bindgen_test]
fn test_build_detached_has_no_parent() {
    let svg = SVGDocumentGenerator::build_detached(&arrow_dropup()).unwrap();

    assert!(svg.parent_node().is_none());
    assert_eq!(svg.namespace_uri().as_deref(), Some(SVG_NAMESPACE));
    assert_eq!(svg.child_element_count(), 2);

    let background = svg.first_element_child().unwrap();
    let glyph = svg.last_element_child().unwrap();
    for path in [&background, &glyph] {
        assert_eq!(path.local_name(), "path");
        assert_eq!(path.namespace_uri().as_deref(), Some(SVG_NAMESPACE));
    }
}

#[wasm_bindgen_test]
fn test_render_error_becomes_js_string() {
    let value = JsValue::from(RenderError::NoDocument);
    assert_eq!(value.as_string().as_deref(), Some("window has no document"));
}

#[wasm_bindgen_test]
fn test_render_error_from_rejected_dom_call() {
    let err = RenderError::from_js("appendChild", JsValue::from_str("x"));
    assert_eq!(err, RenderError::Dom("appendChild: x".to_string()));

    let value = JsValue::from(err);
    assert_eq!(value.as_string().as_deref(), Some("DOM operation failed: appendChild: x"));
}
