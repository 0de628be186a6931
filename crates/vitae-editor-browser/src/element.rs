//! The `badge-editor` component.
//!
//! Lifecycle is mount-based: the host page (or a small custom-element shim)
//! calls `mount` on attach, `attributeChanged` when the watched `field`
//! attribute changes, and `unmount` on detach. wasm-bindgen cannot subclass
//! `HTMLElement`, so the shim owns the element class and forwards into here:
//!
//! ```js
//! customElements.define("badge-editor", class extends HTMLElement {
//!     static observedAttributes = ["field"];
//!     connectedCallback() { this.editor = new BadgeEditor(); this.editor.mount(this); }
//!     attributeChangedCallback(name) { this.editor?.attributeChanged(name); }
//!     disconnectedCallback() { this.editor?.unmount(); }
//! });
//! ```
//!
//! Each instance owns its two event listeners; re-initialization drops the
//! previous pair before attaching new ones, so handlers never double-fire
//! across re-attachments.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, HtmlElement, HtmlInputElement};

use vitae_editor_core::{
    AddOutcome, BadgeEditorConfig, BadgeList, BadgeRender, IconVariant, find_badge_index,
    render_badges,
};

use crate::dom_sync::{build_input_row, sync_badge_dom};

/// Shared state between the component and its event listeners.
struct EditorState {
    config: BadgeEditorConfig,
    list: BadgeList,
    rows: Vec<BadgeRender>,
    host: HtmlElement,
    list_el: Element,
    input_el: HtmlInputElement,
    input_row: Element,
}

/// The badge list editor exposed to JavaScript.
///
/// Keeps an ordered, de-duplicated list of labels in sync with its rendered
/// rows and with the hidden field named by the host's `field` attribute.
#[wasm_bindgen]
pub struct BadgeEditor {
    host: Option<HtmlElement>,
    state: Option<Rc<RefCell<EditorState>>>,
    add_listener: Option<EventListener>,
    remove_listener: Option<EventListener>,
}

#[wasm_bindgen]
impl BadgeEditor {
    /// Create an unmounted editor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            host: None,
            state: None,
            add_listener: None,
            remove_listener: None,
        }
    }

    /// Mount into a host element and initialize from its attributes.
    pub fn mount(&mut self, host: &HtmlElement) {
        self.host = Some(host.clone());
        self.init();
    }

    /// React to a watched attribute change.
    ///
    /// Only `field` triggers re-initialization; the class-name attributes are
    /// read at the next initialization anyway.
    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&mut self, name: &str) {
        if name == "field" && self.host.is_some() {
            self.init();
        }
    }

    /// Check if the editor is mounted with a live subtree.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.state.is_some()
    }

    /// Unmount, releasing listeners and clearing the host subtree.
    pub fn unmount(&mut self) {
        self.add_listener = None;
        self.remove_listener = None;
        self.state = None;
        if let Some(host) = self.host.take() {
            host.set_inner_html("");
        }
    }

    /// The current labels, in presentation order.
    #[wasm_bindgen(js_name = getLabels)]
    pub fn labels(&self) -> Vec<String> {
        self.state
            .as_ref()
            .map(|state| state.borrow().list.labels().to_vec())
            .unwrap_or_default()
    }

    /// The serialized projection of the current state.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        self.state
            .as_ref()
            .map(|state| state.borrow().list.to_json())
            .unwrap_or_else(|| String::from("[]"))
    }
}

impl Default for BadgeEditor {
    fn default() -> Self {
        Self::new()
    }
}

// Internal methods (not exposed to JS)
impl BadgeEditor {
    /// (Re-)initialize: read config, load the field, rebuild the subtree,
    /// attach handlers.
    ///
    /// Any missing element aborts initialization for this instance with a
    /// warning instead of raising to the host page. Initialization never
    /// writes the field; only mutations do.
    fn init(&mut self) {
        // Release the previous listener pair before any reattach.
        self.add_listener = None;
        self.remove_listener = None;
        self.state = None;

        let Some(host) = self.host.clone() else {
            return;
        };
        let Some(document) = dom_document() else {
            tracing::warn!("badge editor: no document, aborting initialization");
            return;
        };

        let config = read_config(&host);
        let raw = config
            .field_id
            .as_deref()
            .and_then(|id| read_field_value(&document, id))
            .unwrap_or_default();
        let list = BadgeList::from_json(&raw);

        // Rebuild the visual structure from scratch.
        host.set_inner_html("");
        let built = build_subtree(&document, &host, &config);
        let Some((list_el, input_row, input_el, add_btn)) = built else {
            tracing::warn!("badge editor: could not build subtree, aborting initialization");
            return;
        };

        let rows = render_badges(&list);
        sync_badge_dom(&document, &list_el, &rows, &config, &input_row);

        let state = Rc::new(RefCell::new(EditorState {
            config,
            list,
            rows,
            host,
            list_el: list_el.clone(),
            input_el,
            input_row,
        }));

        let add_state = Rc::clone(&state);
        self.add_listener = Some(EventListener::new(&add_btn, "click", move |_event| {
            handle_add(&add_state);
        }));

        let remove_state = Rc::clone(&state);
        self.remove_listener = Some(EventListener::new(&list_el, "click", move |event| {
            handle_remove(&remove_state, event);
        }));

        self.state = Some(state);
    }
}

/// Handle an "Add" click: trim, dedupe, append, resync.
fn handle_add(state: &Rc<RefCell<EditorState>>) {
    let projection = {
        let mut st = state.borrow_mut();
        let raw = st.input_el.value();
        match st.list.add(&raw) {
            AddOutcome::Added(index) => {
                tracing::debug!(index, "badge added");
                st.input_el.set_value("");
                refresh_rows(&mut st);
                Some((st.host.clone(), st.config.field_id.clone(), st.list.to_json()))
            }
            AddOutcome::Duplicate => {
                notify_duplicate();
                None
            }
            AddOutcome::Empty => None,
        }
    };

    // Borrow released before touching the page: field writes and the change
    // event can re-enter the component from host listeners.
    if let Some((host, field_id, json)) = projection {
        write_projection(&host, field_id.as_deref(), &json);
    }
}

/// Handle a delegated click on a row's delete control.
fn handle_remove(state: &Rc<RefCell<EditorState>>, event: &web_sys::Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let Some(control) = target.closest("[data-badge-remove]").ok().flatten() else {
        return;
    };
    let Some(row) = control.closest("li[data-badge-row]").ok().flatten() else {
        return;
    };

    let projection = {
        let mut st = state.borrow_mut();

        // Stale reference guard: the row must still be a child of this
        // instance's container and resolve through the current plan.
        if row.parent_element().as_ref() != Some(&st.list_el) {
            return;
        }
        let Some(id) = row.get_attribute("id") else {
            return;
        };
        let Some(index) = find_badge_index(&st.rows, &id) else {
            return;
        };

        let removed = st.list.remove(index);
        tracing::debug!(?removed, "badge removed");
        refresh_rows(&mut st);
        (st.host.clone(), st.config.field_id.clone(), st.list.to_json())
    };

    let (host, field_id, json) = projection;
    write_projection(&host, field_id.as_deref(), &json);
}

/// Re-render the plan and reconcile the DOM after a mutation.
fn refresh_rows(st: &mut EditorState) {
    let Some(document) = dom_document() else {
        return;
    };
    let new_rows = render_badges(&st.list);
    sync_badge_dom(&document, &st.list_el, &new_rows, &st.config, &st.input_row);
    st.rows = new_rows;
}

/// Write the serialized projection to the field and emit the change event.
fn write_projection(host: &HtmlElement, field_id: Option<&str>, json: &str) {
    if let Some(field_id) = field_id {
        if let Some(document) = dom_document() {
            write_field_value(&document, field_id, json);
        }
    }
    notify_change(host, json);
}

/// Dispatch a bubbling `badges-changed` event carrying the serialized list.
fn notify_change(host: &HtmlElement, json: &str) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&JsValue::from_str(json));
    if let Ok(event) = CustomEvent::new_with_event_init_dict("badges-changed", &init) {
        let _ = host.dispatch_event(&event);
    }
}

/// Surface the duplicate notice.
///
/// Kept as the blocking alert the surrounding pages expect; `AddOutcome`
/// keeps this policy swappable at the edge.
fn notify_duplicate() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Badge already exists");
    }
}

/// Snapshot the host's attributes into an immutable config.
fn read_config(host: &HtmlElement) -> BadgeEditorConfig {
    BadgeEditorConfig {
        field_id: host.get_attribute("field"),
        icon_variant: IconVariant::from_flag(host.has_attribute("light-icon")),
        list_class: host.get_attribute("list-class"),
        item_class: host.get_attribute("item-class"),
        label_class: host.get_attribute("label-class"),
    }
}

/// Build the list container and trailing input row inside the host.
fn build_subtree(
    document: &Document,
    host: &HtmlElement,
    config: &BadgeEditorConfig,
) -> Option<(Element, Element, HtmlInputElement, Element)> {
    let list_el = document.create_element("ul").ok()?;
    list_el.set_class_name(&config.list_class());

    let (input_row, input_el, add_btn) = build_input_row(document).ok()?;
    list_el.append_child(&input_row).ok()?;
    host.append_child(&list_el).ok()?;

    Some((list_el, input_row, input_el, add_btn))
}

fn dom_document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Read the field element's current text (input value or text content).
fn read_field_value(document: &Document, field_id: &str) -> Option<String> {
    let element = document.get_element_by_id(field_id)?;
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else {
        element.text_content()
    }
}

/// Overwrite the field element's text with the serialized projection.
fn write_field_value(document: &Document, field_id: &str, json: &str) {
    let Some(element) = document.get_element_by_id(field_id) else {
        tracing::warn!(field_id, "badge field element missing, dropping update");
        return;
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(json);
    } else {
        element.set_text_content(Some(json));
    }
}
