//! Page skeleton - the static markup the engines attach to
//!
//! Renders, per configured module:
//!
//! ```text
//! div#mod-worldclocks-{id}.mod-worldclocks.mod-worldclocks--{style}[data-module-id]
//!   div.worldclocks-container
//!     div.worldclock[data-timezone]   (one per configured clock)
//! ```

use log::debug;
use worldclocks_core::{ModuleConfig, WidgetPayload};
use worldclocks_dom::{Document, NodeId};
use worldclocks_engine::{friendly_name, markup};

/// Render every module of `payload` into a fresh document
pub fn render_page(payload: &WidgetPayload) -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    for (key, config) in payload {
        if render_module(&mut doc, body, config).is_none() {
            debug!("Module '{}' renders nothing", key);
        }
    }

    doc
}

/// Render one module's container under `parent`
///
/// Nothing is rendered for a module without an id, or with no clocks and
/// no local clock to add.
pub fn render_module(doc: &mut Document, parent: NodeId, config: &ModuleConfig) -> Option<NodeId> {
    let module_id = config.module_id?;
    if config.clocks.is_empty() && !config.display.show_local_time {
        return None;
    }

    let style = config.display.display_style.as_str();
    let container = doc.create_element("div");
    doc.set_id(container, &markup::container_id(module_id));
    doc.set_class_name(
        container,
        &format!("{} {}--{}", markup::MODULE, markup::MODULE, style),
    );
    doc.set_data(container, "module-id", &module_id.to_string());

    let list = doc.create_element("div");
    doc.add_class(list, markup::CLOCKS_CONTAINER);
    doc.append_child(container, list);

    for descriptor in &config.clocks {
        let label = if descriptor.display_name.trim().is_empty() {
            friendly_name(&descriptor.timezone)
        } else {
            descriptor.display_name.clone()
        };
        let clock = markup::build_clock_element(
            doc,
            &config.display,
            &descriptor.timezone,
            &label,
            false,
        );
        doc.append_child(list, clock);
    }

    doc.append_child(parent, container);
    Some(container)
}
