use crate::view::node::Node;
use crate::view::screens;
use std::collections::HashMap;

/// Screen used when a requested screen has no fragment.
pub const DEFAULT_SCREEN: &str = "welcome";

/// Screen id → fragment, filled once at start-up.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Vec<Node>>,
}

impl TemplateRegistry {
    pub fn from_fragments<'a>(fragments: impl IntoIterator<Item = (&'a str, Vec<Node>)>) -> Self {
        Self {
            templates: fragments
                .into_iter()
                .map(|(id, nodes)| (id.to_string(), nodes))
                .collect(),
        }
    }

    pub fn declared() -> Self {
        Self::from_fragments(screens::declared())
    }

    pub fn get(&self, id: &str) -> Option<&[Node]> {
        self.templates.get(id).map(Vec::as_slice)
    }

    /// Fragment for `id`, else the default screen's fragment.
    pub fn get_or_default(&self, id: &str) -> Option<&[Node]> {
        self.get(id).or_else(|| self.get(DEFAULT_SCREEN))
    }
}
