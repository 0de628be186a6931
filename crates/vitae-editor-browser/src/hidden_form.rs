//! Hidden-form submit bridge.
//!
//! The resume pages keep their editable regions as `contenteditable`
//! elements and submit through a hidden form driven by htmx. On a
//! submit-button click this bridge copies every editable region's trimmed
//! text into the form's matching hidden input (paired by `data-field`), then
//! triggers the form's htmx submit.

use gloo_events::EventListener;
use gloo_utils::{document, window};
use js_sys::{Function, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};

/// Owns the submit-click listener; dropping the bridge detaches it.
#[wasm_bindgen]
pub struct HiddenFormBridge {
    _listener: EventListener,
}

#[wasm_bindgen]
impl HiddenFormBridge {
    /// Register the click listener on the submit control.
    ///
    /// - `region_id`: element containing the `[contenteditable=true]` fields
    /// - `submit_id`: the submit control to listen on
    /// - `form_id`: the hidden form receiving the values
    pub fn connect(
        region_id: &str,
        submit_id: &str,
        form_id: &str,
    ) -> Result<HiddenFormBridge, JsError> {
        let submit = document()
            .get_element_by_id(submit_id)
            .ok_or_else(|| JsError::new(&format!("no element with id {submit_id}")))?;

        let region_id = region_id.to_owned();
        let form_id = form_id.to_owned();
        let listener = EventListener::new(&submit, "click", move |_event| {
            copy_editable_fields(&region_id, &form_id);
        });

        Ok(Self {
            _listener: listener,
        })
    }
}

/// Copy each editable region's trimmed text into the form's hidden inputs,
/// then trigger the htmx submit.
fn copy_editable_fields(region_id: &str, form_id: &str) {
    let document = document();
    let Some(region) = document.get_element_by_id(region_id) else {
        tracing::warn!(region_id, "editable region missing, skipping submit copy");
        return;
    };
    let Some(form) = document.get_element_by_id(form_id) else {
        tracing::warn!(form_id, "hidden form missing, skipping submit copy");
        return;
    };

    let Ok(editables) = region.query_selector_all("[contenteditable=true]") else {
        return;
    };
    for i in 0..editables.length() {
        let Some(node) = editables.item(i) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        let Some(name) = element.get_attribute("data-field") else {
            continue;
        };
        let value = element.text_content().unwrap_or_default();
        let selector = format!("input[type=\"hidden\"][data-field=\"{name}\"]");
        if let Ok(Some(hidden)) = form.query_selector(&selector) {
            if let Some(input) = hidden.dyn_ref::<HtmlInputElement>() {
                input.set_value(value.trim());
            }
        }
    }

    trigger_htmx_submit(&form);
}

/// Call the global `htmx.trigger(form, "submit")`; a missing htmx runtime is
/// a warning, never a throw.
fn trigger_htmx_submit(form: &Element) {
    let global = JsValue::from(window());
    let htmx = match Reflect::get(&global, &JsValue::from_str("htmx")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => {
            tracing::warn!("htmx global missing, form not submitted");
            return;
        }
    };
    let trigger = match Reflect::get(&htmx, &JsValue::from_str("trigger")) {
        Ok(value) => value,
        Err(_) => return,
    };
    let Some(trigger) = trigger.dyn_ref::<Function>() else {
        tracing::warn!("htmx.trigger is not a function");
        return;
    };
    if let Err(err) = trigger.call2(&htmx, form.as_ref(), &JsValue::from_str("submit")) {
        tracing::warn!(?err, "htmx trigger failed");
    }
}
