//! WASM browser tests for vitae-editor-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

use vitae_editor_browser::{BadgeEditor, HiddenFormBridge};

fn fresh_id(prefix: &str) -> String {
    format!("{}-{}", prefix, js_sys::Math::random().to_bits())
}

/// Create a hidden field with the given JSON plus a mounted editor over it.
/// Returns (host, field input, editor).
fn make_editor(initial_json: Option<&str>) -> (HtmlElement, HtmlInputElement, BadgeEditor) {
    let document = gloo_utils::document();
    let body = document.body().expect("no body");

    let field_id = fresh_id("badge-field");
    let field: HtmlInputElement = document
        .create_element("input")
        .expect("create field")
        .dyn_into()
        .expect("field is an input");
    field.set_type("hidden");
    field.set_id(&field_id);
    if let Some(json) = initial_json {
        field.set_value(json);
    }
    body.append_child(&field).expect("append field");

    let host: HtmlElement = document
        .create_element("div")
        .expect("create host")
        .dyn_into()
        .expect("host is an element");
    if initial_json.is_some() {
        host.set_attribute("field", &field_id).expect("set field attr");
    }
    body.append_child(&host).expect("append host");

    let mut editor = BadgeEditor::new();
    editor.mount(&host);
    (host, field, editor)
}

fn rendered_labels(host: &HtmlElement) -> Vec<String> {
    let rows = host
        .query_selector_all("li[data-badge-row] span")
        .expect("query rows");
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|node| node.text_content())
        .collect()
}

fn click(element: &Element) {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .expect("clickable element")
        .click();
}

fn type_and_add(host: &HtmlElement, text: &str) {
    let input: HtmlInputElement = host
        .query_selector("input.badge-input")
        .expect("query input")
        .expect("input present")
        .dyn_into()
        .expect("input element");
    input.set_value(text);
    let button = host
        .query_selector("[data-badge-add]")
        .expect("query add")
        .expect("add present");
    click(&button);
}

fn remove_row(host: &HtmlElement, index: u32) {
    let buttons = host
        .query_selector_all("li[data-badge-row] [data-badge-remove]")
        .expect("query remove buttons");
    let button = buttons.item(index).expect("remove button present");
    click(button.unchecked_ref::<Element>());
}

// === Initialization ===

#[wasm_bindgen_test]
fn test_mount_renders_initial_rows_in_order() {
    let (host, _field, editor) = make_editor(Some(r#"["a","b"]"#));
    assert!(editor.is_mounted());
    assert_eq!(rendered_labels(&host), ["a", "b"]);
    assert_eq!(editor.labels(), ["a", "b"]);

    // Input row is the trailing child of the container.
    let list = host.query_selector("ul").expect("query ul").expect("ul");
    let last = list.last_element_child().expect("last child");
    assert_eq!(last.class_name(), "badge-input-row");
}

#[wasm_bindgen_test]
fn test_mount_without_field_attribute_is_empty() {
    let (host, _field, editor) = make_editor(None);
    assert!(editor.is_mounted());
    assert!(rendered_labels(&host).is_empty());
    assert_eq!(editor.to_json(), "[]");
}

#[wasm_bindgen_test]
fn test_mount_with_malformed_field_is_empty() {
    let (host, field, _editor) = make_editor(Some("not json at all"));
    assert!(rendered_labels(&host).is_empty());
    // Initialization never writes the field back.
    assert_eq!(field.value(), "not json at all");
}

#[wasm_bindgen_test]
fn test_reinit_is_idempotent() {
    let (host, field, mut editor) = make_editor(Some(r#"["a","b"]"#));

    let seen = Rc::new(Cell::new(0u32));
    let seen_in_handler = Rc::clone(&seen);
    let _listener = EventListener::new(&host, "badges-changed", move |_event| {
        seen_in_handler.set(seen_in_handler.get() + 1);
    });

    editor.attribute_changed("field");
    assert_eq!(rendered_labels(&host), ["a", "b"]);

    // Exactly one handler pair survives re-initialization: one add must
    // yield exactly one mutation and one change notification.
    type_and_add(&host, "c");
    assert_eq!(rendered_labels(&host), ["a", "b", "c"]);
    assert_eq!(field.value(), r#"["a","b","c"]"#);
    assert_eq!(seen.get(), 1);

    remove_row(&host, 2);
    assert_eq!(rendered_labels(&host), ["a", "b"]);
    assert_eq!(seen.get(), 2);
}

// === Add ===

#[wasm_bindgen_test]
fn test_add_appends_and_writes_field() {
    let (host, field, _editor) = make_editor(Some(r#"["x","y"]"#));
    type_and_add(&host, "z");
    assert_eq!(rendered_labels(&host), ["x", "y", "z"]);
    assert_eq!(field.value(), r#"["x","y","z"]"#);

    // Input cleared after a successful add.
    let input: HtmlInputElement = host
        .query_selector("input.badge-input")
        .expect("query input")
        .expect("input present")
        .dyn_into()
        .expect("input element");
    assert_eq!(input.value(), "");
}

#[wasm_bindgen_test]
fn test_add_trims_input() {
    let (host, field, _editor) = make_editor(Some("[]"));
    type_and_add(&host, "  a  ");
    assert_eq!(rendered_labels(&host), ["a"]);
    assert_eq!(field.value(), r#"["a"]"#);
}

#[wasm_bindgen_test]
fn test_add_duplicate_rejected() {
    let (host, field, _editor) = make_editor(Some("[]"));
    type_and_add(&host, "a");
    type_and_add(&host, "a");
    assert_eq!(rendered_labels(&host), ["a"]);
    assert_eq!(field.value(), r#"["a"]"#);
}

#[wasm_bindgen_test]
fn test_add_empty_is_noop() {
    let (host, field, _editor) = make_editor(Some(r#"["a"]"#));
    type_and_add(&host, "   ");
    assert_eq!(rendered_labels(&host), ["a"]);
    // No mutation happened, so the field was never rewritten.
    assert_eq!(field.value(), r#"["a"]"#);
}

// === Remove ===

#[wasm_bindgen_test]
fn test_remove_middle_row() {
    let (host, field, _editor) = make_editor(Some(r#"["x","y","z"]"#));
    remove_row(&host, 1);
    assert_eq!(rendered_labels(&host), ["x", "z"]);
    assert_eq!(field.value(), r#"["x","z"]"#);
}

#[wasm_bindgen_test]
fn test_remove_on_detached_row_is_noop() {
    let (host, field, editor) = make_editor(Some(r#"["x","y"]"#));

    // Hold a reference to the first row, then detach it from the container.
    let rows = host
        .query_selector_all("li[data-badge-row]")
        .expect("query rows");
    let row: Element = rows.item(0).expect("row present").unchecked_into();
    row.remove();

    // Clicking the stale row's delete control must leave the list and the
    // field untouched.
    let button = row
        .query_selector("[data-badge-remove]")
        .expect("query remove")
        .expect("remove present");
    click(&button);

    assert_eq!(editor.labels(), ["x", "y"]);
    assert_eq!(field.value(), r#"["x","y"]"#);
}

#[wasm_bindgen_test]
fn test_spec_scenario_add_then_remove() {
    let (host, field, _editor) = make_editor(Some(r#"["x","y"]"#));
    type_and_add(&host, "z");
    assert_eq!(field.value(), r#"["x","y","z"]"#);
    remove_row(&host, 1);
    assert_eq!(rendered_labels(&host), ["x", "z"]);
    assert_eq!(field.value(), r#"["x","z"]"#);
}

// === Change notification ===

#[wasm_bindgen_test]
fn test_badges_changed_event() {
    let (host, _field, _editor) = make_editor(Some("[]"));

    let seen = Rc::new(Cell::new(0u32));
    let seen_in_handler = Rc::clone(&seen);
    let _listener = EventListener::new(&host, "badges-changed", move |_event| {
        seen_in_handler.set(seen_in_handler.get() + 1);
    });

    type_and_add(&host, "a");
    assert_eq!(seen.get(), 1);

    // Rejected adds emit nothing.
    type_and_add(&host, "a");
    type_and_add(&host, "  ");
    assert_eq!(seen.get(), 1);

    remove_row(&host, 0);
    assert_eq!(seen.get(), 2);
}

// === Unmount ===

#[wasm_bindgen_test]
fn test_unmount_clears_subtree() {
    let (host, _field, mut editor) = make_editor(Some(r#"["a"]"#));
    editor.unmount();
    assert!(!editor.is_mounted());
    assert!(host.first_element_child().is_none());
}

// === Hidden form bridge ===

#[wasm_bindgen_test]
fn test_bridge_copies_editable_fields() {
    let document = gloo_utils::document();
    let body = document.body().expect("no body");

    let region_id = fresh_id("region");
    let submit_id = fresh_id("submit");
    let form_id = fresh_id("form");

    let region = document.create_element("div").expect("region");
    region.set_id(&region_id);
    region
        .set_inner_html("<p contenteditable=\"true\" data-field=\"title\">  Jane Doe </p>");
    body.append_child(&region).expect("append region");

    let form = document.create_element("form").expect("form");
    form.set_id(&form_id);
    form.set_inner_html(
        "<input type=\"hidden\" data-field=\"title\">\
         <input type=\"hidden\" data-field=\"other\" value=\"untouched\">",
    );
    body.append_child(&form).expect("append form");

    let submit = document.create_element("button").expect("submit");
    submit.set_id(&submit_id);
    submit.set_attribute("type", "button").expect("type");
    body.append_child(&submit).expect("append submit");

    let _bridge = HiddenFormBridge::connect(&region_id, &submit_id, &form_id)
        .expect("bridge connects");
    click(&submit);

    let title: HtmlInputElement = form
        .query_selector("input[data-field=\"title\"]")
        .expect("query title")
        .expect("title present")
        .dyn_into()
        .expect("title input");
    assert_eq!(title.value(), "Jane Doe");

    let other: HtmlInputElement = form
        .query_selector("input[data-field=\"other\"]")
        .expect("query other")
        .expect("other present")
        .dyn_into()
        .expect("other input");
    assert_eq!(other.value(), "untouched");
}

#[wasm_bindgen_test]
fn test_bridge_connect_requires_submit_element() {
    assert!(HiddenFormBridge::connect("nope", &fresh_id("missing"), "nope").is_err());
}
