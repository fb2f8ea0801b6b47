//! Element tree for the live view and the screen fragments it is cloned from.
//!
//! Nodes carry the same declarative data the handlers and renderers read:
//! navigation targets, action names, target ids, binding keys and list roles.
//! Paths are child-index sequences from the root.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Root,
    Section,
    Heading,
    Text,
    Strong,
    Button,
    Submit,
    List,
    Item,
    /// Children are laid out on one line.
    Row,
    Chip,
    Form,
    Input,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Accent,
    Positive,
    Negative,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataAttrs {
    pub screen_trigger: Option<String>,
    pub action: Option<String>,
    pub point_id: Option<String>,
    pub product_id: Option<String>,
    pub point_source: Option<String>,
    pub bind: Option<String>,
    pub list: Option<String>,
    pub auth_form: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub text: String,
    pub tone: Tone,
    pub data: DataAttrs,
    pub disabled: bool,
    /// Form field name, inputs only.
    pub name: Option<String>,
    pub value: String,
    pub masked: bool,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            text: String::new(),
            tone: Tone::Normal,
            data: DataAttrs::default(),
            disabled: false,
            name: None,
            value: String::new(),
            masked: false,
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(Tag::Root)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn bind(mut self, key: &str) -> Self {
        self.data.bind = Some(key.to_string());
        self
    }

    pub fn list(mut self, role: &str) -> Self {
        self.data.list = Some(role.to_string());
        self
    }

    pub fn screen_trigger(mut self, screen: &str) -> Self {
        self.data.screen_trigger = Some(screen.to_string());
        self
    }

    pub fn action(mut self, action: &str) -> Self {
        self.data.action = Some(action.to_string());
        self
    }

    pub fn point_id(mut self, id: &str) -> Self {
        self.data.point_id = Some(id.to_string());
        self
    }

    pub fn product_id(mut self, id: &str) -> Self {
        self.data.product_id = Some(id.to_string());
        self
    }

    pub fn point_source(mut self, source: &str) -> Self {
        self.data.point_source = Some(source.to_string());
        self
    }

    pub fn auth_form(mut self, kind: &str) -> Self {
        self.data.auth_form = Some(kind.to_string());
        self
    }

    pub fn field(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self.tag, Tag::Button | Tag::Submit | Tag::Input) && !self.disabled
    }

    /// Pre-order traversal.
    pub fn walk(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// First node in document order matching `pred`, `self` included.
    pub fn find_mut(&mut self, pred: &impl Fn(&Node) -> bool) -> Option<&mut Node> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(pred))
    }

    pub fn find_list_mut(&mut self, role: &str) -> Option<&mut Node> {
        self.find_mut(&|n: &Node| n.data.list.as_deref() == Some(role))
    }

    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &i in path {
            node = node.children.get(i)?;
        }
        Some(node)
    }

    pub fn at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &i in path {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    /// Nearest node on the way from `path` up to the root that matches `pred`.
    pub fn closest(&self, path: &[usize], pred: impl Fn(&Node) -> bool) -> Option<&Node> {
        (0..=path.len())
            .rev()
            .find_map(|len| self.at(&path[..len]).filter(|n| pred(*n)))
    }

    /// Paths of all focusable nodes in document order.
    pub fn focusable_paths(&self) -> Vec<Vec<usize>> {
        fn collect(node: &Node, path: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
            if node.is_focusable() {
                out.push(path.clone());
            }
            for (i, child) in node.children.iter().enumerate() {
                path.push(i);
                collect(child, path, out);
                path.pop();
            }
        }
        let mut out = Vec::new();
        collect(self, &mut Vec::new(), &mut out);
        out
    }

    /// Named input values below this node.
    pub fn form_data(&self) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        self.walk(&mut |n: &Node| {
            if let (Tag::Input, Some(name)) = (n.tag, &n.name) {
                fields.insert(name.clone(), n.value.clone());
            }
        });
        fields
    }
}

pub fn heading(text: &str) -> Node {
    Node::new(Tag::Heading).text(text)
}

pub fn text(text: &str) -> Node {
    Node::new(Tag::Text).text(text)
}

pub fn muted(text: &str) -> Node {
    Node::new(Tag::Text).text(text).tone(Tone::Muted)
}

pub fn strong(text: &str) -> Node {
    Node::new(Tag::Strong).text(text)
}

pub fn button(label: &str) -> Node {
    Node::new(Tag::Button).text(label)
}

pub fn row(children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(Tag::Row).children(children)
}

pub fn section(children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(Tag::Section).children(children)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::root()
            .child(heading("Title"))
            .child(
                section([
                    Node::new(Tag::List).list("things"),
                    row([button("A").action("a"), button("B").disabled(true)]),
                ])
                .action("outer"),
            )
            .child(
                Node::new(Tag::Form)
                    .auth_form("login")
                    .child(Node::new(Tag::Input).field("name"))
                    .child(Node::new(Tag::Submit).text("Go")),
            )
    }

    #[test]
    fn test_focusable_paths_skip_disabled() {
        let root = sample();
        assert_eq!(
            root.focusable_paths(),
            vec![vec![1, 1, 0], vec![2, 0], vec![2, 1]]
        );
    }

    #[test]
    fn test_closest_prefers_nearest_ancestor() {
        let root = sample();
        let hit = root.closest(&[1, 1, 0], |n| n.data.action.is_some());
        assert_eq!(hit.and_then(|n| n.data.action.as_deref()), Some("a"));

        let hit = root.closest(&[1, 0], |n| n.data.action.is_some());
        assert_eq!(hit.and_then(|n| n.data.action.as_deref()), Some("outer"));

        assert!(root.closest(&[0], |n| n.data.action.is_some()).is_none());
        assert!(root.closest(&[9, 9], |n| n.tag == Tag::Root).is_some());
    }

    #[test]
    fn test_find_list_mut() {
        let mut root = sample();
        assert!(root.find_list_mut("things").is_some());
        assert!(root.find_list_mut("missing").is_none());
    }

    #[test]
    fn test_form_data_collects_named_inputs() {
        let mut root = sample();
        if let Some(input) = root.at_mut(&[2, 0]) {
            input.value = "Ana".to_string();
        }
        let fields = root.form_data();
        assert_eq!(fields.get("name").map(String::as_str), Some("Ana"));
        assert_eq!(fields.len(), 1);
    }
}
