use crate::app::store::{Store, UserProfile};
use crate::app::toast::{Toast, ToastVariant};
use crate::config::AppConfig;
use crate::view::node::{DataAttrs, Node, Tag};
use crate::view::render::render_screen;
use crate::view::template::TemplateRegistry;
use std::ops::RangeInclusive;
use std::time::Instant;

/// Everything the event loop owns: the store, the live view and UI chrome.
pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub templates: TemplateRegistry,
    /// Live view; its children are replaced on every screen load.
    pub view: Node,
    pub current_screen: String,
    /// Index into the focusable elements of `view`.
    pub focus: usize,
    /// First body line shown, when scrolled by hand. `None` follows the focus.
    pub scroll: Option<usize>,
    /// Rows available to the screen body.
    pub viewport_height: usize,
    pub toast: Toast,
    pub bonus_range: RangeInclusive<i64>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(UserProfile::from(&config.profile));
        let toast = Toast::new(config.toast.duration());
        let bonus_range = config.rewards.bonus_range();
        Self {
            current_screen: config.ui.start_screen.clone(),
            config,
            store,
            templates: TemplateRegistry::declared(),
            view: Node::root(),
            focus: 0,
            scroll: None,
            viewport_height: 0,
            toast,
            bonus_range,
            should_quit: false,
            dirty: true,
        }
    }

    /// Render `id` (or the default screen) into the live view and make it current.
    pub fn load_screen(&mut self, id: &str) {
        if !render_screen(&mut self.view, &self.templates, &self.store, id) {
            tracing::warn!(screen = id, "no fragment to render");
            return;
        }
        tracing::debug!(screen = id, "screen loaded");
        self.current_screen = id.to_string();
        self.focus = 0;
        self.scroll = None;
        self.dirty = true;
    }

    /// Re-render the current screen in place. Focus stays on the same element
    /// while it is still focusable, otherwise it moves to the first element
    /// that triggers no action.
    pub fn refresh_current_screen(&mut self) {
        let key = self.focused_node().map(FocusKey::of);
        let scroll = self.scroll;
        let id = self.current_screen.clone();
        self.load_screen(&id);
        self.scroll = scroll;

        let paths = self.view.focusable_paths();
        let nodes: Vec<&Node> = paths.iter().filter_map(|p| self.view.at(p)).collect();
        self.focus = key
            .and_then(|key| nodes.iter().position(|n| key.matches(n)))
            .or_else(|| nodes.iter().position(|n| n.data.action.is_none()))
            .unwrap_or(0);
    }

    pub fn show_toast(&mut self, message: impl Into<String>, variant: ToastVariant) {
        self.toast.show(message, variant, Instant::now());
        self.dirty = true;
    }

    pub fn focusable_count(&self) -> usize {
        self.view.focusable_paths().len()
    }

    pub fn focused_path(&self) -> Option<Vec<usize>> {
        self.view.focusable_paths().into_iter().nth(self.focus)
    }

    pub fn focused_node(&self) -> Option<&Node> {
        self.focused_path().and_then(|path| self.view.at(&path))
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut Node> {
        let path = self.focused_path()?;
        self.view.at_mut(&path).filter(|n| n.tag == Tag::Input)
    }

    pub fn focus_next(&mut self) {
        let count = self.focusable_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.scroll = None;
            self.dirty = true;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.focusable_count();
        if count > 0 {
            self.focus = if self.focus == 0 { count - 1 } else { self.focus - 1 };
            self.scroll = None;
            self.dirty = true;
        }
    }

    /// Terminal resized to `area`.
    pub fn set_viewport(&mut self, area: ratatui::layout::Rect) {
        self.viewport_height = crate::ui::body_height(area);
        self.dirty = true;
    }

    pub fn screen_title(&self) -> &'static str {
        match self.current_screen.as_str() {
            "login" => "Entrar",
            "signup" => "Cadastro",
            "home" => "Início",
            "map" => "Mapa",
            "point-details" => "Ponto",
            "wallet" => "Carteira",
            "history" => "Histórico",
            "store" => "Loja",
            _ => "Boas-vindas",
        }
    }
}

/// What identifies an element across a re-render of the same screen.
struct FocusKey {
    data: DataAttrs,
    name: Option<String>,
    text: String,
}

impl FocusKey {
    fn of(node: &Node) -> Self {
        Self {
            data: node.data.clone(),
            name: node.name.clone(),
            text: node.text.clone(),
        }
    }

    fn matches(&self, node: &Node) -> bool {
        node.data == self.data && node.name == self.name && node.text == self.text
    }
}
