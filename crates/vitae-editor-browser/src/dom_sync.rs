//! DOM synchronization for the badge list.
//!
//! Rows are reconciled against the render plan keyed by their stable badge
//! IDs: rows already in place are left alone, new rows are created and
//! inserted before the trailing input row, and rows whose label is gone are
//! removed.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement};

use vitae_editor_core::{BadgeEditorConfig, BadgeRender};

/// Build the trailing input row: a text input plus the "Add" control.
///
/// Returns the row element together with the input and button for handler
/// wiring.
pub fn build_input_row(
    document: &Document,
) -> Result<(Element, HtmlInputElement, Element), JsValue> {
    let row = document.create_element("li")?;
    row.set_class_name("badge-input-row");

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("text");
    input.set_class_name("badge-input");
    input.set_placeholder("New badge");
    row.append_child(&input)?;

    let button = document.create_element("button")?;
    button.set_attribute("type", "button")?;
    button.set_attribute("data-badge-add", "")?;
    button.set_class_name("badge-add");
    button.set_text_content(Some("Add"));
    row.append_child(&button)?;

    Ok((row, input, button))
}

/// Build one badge row: label span plus an accessible delete control.
pub fn build_row(
    document: &Document,
    render: &BadgeRender,
    config: &BadgeEditorConfig,
) -> Result<Element, JsValue> {
    let row = document.create_element("li")?;
    row.set_id(&render.id);
    row.set_attribute("data-badge-row", "")?;
    row.set_class_name(&config.item_class());

    let label = document.create_element("span")?;
    label.set_class_name(&config.label_class());
    label.set_text_content(Some(&render.label));
    row.append_child(&label)?;

    let remove = document.create_element("button")?;
    remove.set_attribute("type", "button")?;
    remove.set_attribute("data-badge-remove", "")?;
    remove.set_class_name(&config.remove_class());
    remove.set_attribute("aria-label", &format!("Remove badge {}", render.label))?;
    remove.set_text_content(Some("\u{00d7}"));
    row.append_child(&remove)?;

    Ok(row)
}

/// Update badge row elements incrementally.
///
/// Uses the stable content-based row IDs for DOM reconciliation:
/// - Rows already at their position are not touched
/// - Out-of-position rows are moved
/// - New rows get created and inserted before the trailing input row
/// - Rows with no label in the plan get deleted
pub fn sync_badge_dom(
    document: &Document,
    list_el: &Element,
    new_rows: &[BadgeRender],
    config: &BadgeEditorConfig,
    input_row: &Element,
) {
    // Pool of existing row elements by ID.
    let mut old_elements: HashMap<String, Element> = HashMap::new();
    let mut child_opt = list_el.first_element_child();
    while let Some(child) = child_opt {
        let next = child.next_element_sibling();
        if child.has_attribute("data-badge-row") {
            if let Some(id) = child.get_attribute("id") {
                old_elements.insert(id, child);
            }
        }
        child_opt = next;
    }

    // The input row is always the last child, so the cursor never runs off
    // the end while plan rows remain.
    let input_row_node: &web_sys::Node = input_row.as_ref();
    let mut cursor: Option<web_sys::Node> = list_el.first_element_child().map(Into::into);

    for render in new_rows {
        if let Some(existing) = old_elements.remove(render.id.as_str()) {
            let existing_node: &web_sys::Node = existing.as_ref();
            let at_correct_position = cursor
                .as_ref()
                .map(|c| c == existing_node)
                .unwrap_or(false);

            if at_correct_position {
                cursor = existing.next_element_sibling().map(Into::into);
            } else {
                tracing::trace!(id = %render.id, "badge row out of position, moving");
                let before = cursor.as_ref().or(Some(input_row_node));
                let _ = list_el.insert_before(existing_node, before);
            }
        } else {
            match build_row(document, render, config) {
                Ok(row) => {
                    let before = cursor.as_ref().or(Some(input_row_node));
                    let _ = list_el.insert_before(row.as_ref(), before);
                }
                Err(err) => {
                    tracing::warn!(?err, id = %render.id, "failed to build badge row");
                }
            }
        }
    }

    // Remove stale rows.
    for (_, element) in old_elements {
        element.remove();
    }
}
