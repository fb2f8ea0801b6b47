//! Per-screen list renderers.
//!
//! Every renderer looks its container up by list role and does nothing when
//! the current fragment has no such container.

use crate::app::store::{CollectionPoint, HistoryEntry, Product, Store, Tip};
use crate::view::format::{format_coins, format_distance, format_ledger_value};
use crate::view::node::{button, muted, row, strong, text, Node, Tag, Tone};

pub const WALLET_HISTORY_LEN: usize = 4;
pub const EMPTY_HISTORY: &str = "Nenhuma movimentação registrada.";

/// Replace the children of `container` with one built node per item.
pub fn render_list<T>(
    container: Option<&mut Node>,
    items: impl IntoIterator<Item = T>,
    build: impl Fn(T) -> Option<Node>,
) {
    let Some(container) = container else {
        return;
    };
    container.children.clear();
    container.children.extend(items.into_iter().filter_map(build));
}

pub fn render_home(root: &mut Node, store: &Store) {
    render_list(root.find_list_mut("tips"), &store.tips, |tip| Some(tip_item(tip)));
}

pub fn render_map(root: &mut Node, store: &Store) {
    render_list(
        root.find_list_mut("points"),
        store.points_by_distance(),
        |point| Some(point_card(point)),
    );
    sync_selected_point_actions(root, store);
}

pub fn render_point_details(root: &mut Node, store: &Store) {
    if let Some(point) = store.selected_point() {
        render_list(
            root.find_list_mut("selectedPointChips"),
            &point.materials,
            |material| Some(Node::new(Tag::Chip).text(material.as_str())),
        );
    }
    sync_selected_point_actions(root, store);
}

pub fn render_wallet(root: &mut Node, store: &Store) {
    let recent = &store.history[..store.history.len().min(WALLET_HISTORY_LEN)];
    render_history_list(root.find_list_mut("historyShort"), recent);
}

pub fn render_history(root: &mut Node, store: &Store) {
    render_history_list(root.find_list_mut("historyFull"), &store.history);
}

pub fn render_store(root: &mut Node, store: &Store) {
    render_list(root.find_list_mut("products"), &store.products, |product| {
        Some(product_card(product, store.can_afford(product.cost)))
    });
}

/// History lines in collection order, or a single placeholder when empty.
pub fn render_history_list(container: Option<&mut Node>, entries: &[HistoryEntry]) {
    let Some(container) = container else {
        return;
    };
    if entries.is_empty() {
        container.children.clear();
        container.children.push(Node::new(Tag::Item).child(muted(EMPTY_HISTORY)));
        return;
    }
    render_list(Some(container), entries, |entry| Some(history_item(entry)));
}

/// Point every "selected point" control at the current selection.
pub fn sync_selected_point_actions(root: &mut Node, store: &Store) {
    let Some(selected) = store.selected_point() else {
        return;
    };
    let id = selected.id.clone();
    root.walk_mut(&mut |node: &mut Node| {
        if node.data.point_source.as_deref() == Some("selected") {
            node.data.point_id = Some(id.clone());
        }
    });
}

fn tip_item(tip: &Tip) -> Node {
    Node::new(Tag::Item)
        .child(strong(&tip.title))
        .child(text(&tip.description))
}

fn point_card(point: &CollectionPoint) -> Node {
    let details = format!(
        "{} km • Materiais: {}",
        format_distance(point.distance_km),
        point.materials.join(", ")
    );
    Node::new(Tag::Item)
        .child(strong(&point.name))
        .child(text(&point.address))
        .child(muted(&details))
        .child(row([
            button("Destacar").action("focus-point").point_id(&point.id),
            button("Detalhes").action("open-point").point_id(&point.id),
        ]))
}

fn history_item(entry: &HistoryEntry) -> Node {
    let tone = if entry.value >= 0 {
        Tone::Positive
    } else {
        Tone::Negative
    };
    Node::new(Tag::Item).child(row([
        strong(&entry.date),
        text(&entry.description),
        Node::new(Tag::Text)
            .text(format_ledger_value(entry.value))
            .tone(tone),
    ]))
}

fn product_card(product: &Product, affordable: bool) -> Node {
    let label = if affordable {
        "Resgatar"
    } else {
        "Saldo insuficiente"
    };
    Node::new(Tag::Item)
        .child(muted(&product.category))
        .child(strong(&product.name))
        .child(text(&product.description))
        .child(
            Node::new(Tag::Text)
                .text(format!("{} EcoCoins", format_coins(product.cost)))
                .tone(Tone::Accent),
        )
        .child(
            button(label)
                .action("redeem-product")
                .product_id(&product.id)
                .disabled(!affordable),
        )
}
