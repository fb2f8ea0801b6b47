//! Screen renderer: fragment instantiation, bindings, list rendering.

use crate::app::store::Store;
use crate::view::binder::apply_bindings;
use crate::view::lists;
use crate::view::node::Node;
use crate::view::template::TemplateRegistry;

pub type ScreenRenderer = fn(&mut Node, &Store);

/// List renderer registered for a screen, if any.
pub fn screen_renderer(id: &str) -> Option<ScreenRenderer> {
    match id {
        "home" => Some(lists::render_home),
        "map" => Some(lists::render_map),
        "point-details" => Some(lists::render_point_details),
        "wallet" => Some(lists::render_wallet),
        "history" => Some(lists::render_history),
        "store" => Some(lists::render_store),
        _ => None,
    }
}

/// Replace the contents of `root` with a fresh copy of the fragment for `id`
/// (or the default fragment), then bind and populate it.
///
/// Returns `false` without touching `root` when no fragment is available.
pub fn render_screen(root: &mut Node, templates: &TemplateRegistry, store: &Store, id: &str) -> bool {
    let Some(fragment) = templates.get_or_default(id) else {
        return false;
    };
    root.children = fragment.to_vec();
    apply_bindings(root, store);
    if let Some(renderer) = screen_renderer(id) {
        renderer(root, store);
    }
    true
}
