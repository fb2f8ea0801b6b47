//! Binding keys and the store reads behind them.

use crate::app::store::{CollectionPoint, Store};
use crate::view::format::format_coins;
use crate::view::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binder {
    UserName,
    Coins,
    MonthlyGain,
    MonthlyGoal,
    SelectedPointName,
    SelectedPointMaterials,
    SelectedPointAddress,
    SelectedPointHours,
    SelectedPointContact,
}

impl Binder {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "userName" => Some(Self::UserName),
            "coins" => Some(Self::Coins),
            "monthlyGain" => Some(Self::MonthlyGain),
            "monthlyGoal" => Some(Self::MonthlyGoal),
            "selectedPointName" => Some(Self::SelectedPointName),
            "selectedPointMaterials" => Some(Self::SelectedPointMaterials),
            "selectedPointAddress" => Some(Self::SelectedPointAddress),
            "selectedPointHours" => Some(Self::SelectedPointHours),
            "selectedPointContact" => Some(Self::SelectedPointContact),
            _ => None,
        }
    }

    pub fn read(self, store: &Store) -> String {
        let profile = &store.profile;
        match self {
            Self::UserName => profile.name.clone(),
            Self::Coins => format_coins(profile.coins),
            Self::MonthlyGain => format!("+{} Eco", format_coins(profile.monthly_gain)),
            Self::MonthlyGoal => format_coins(profile.monthly_goal),
            Self::SelectedPointName => selected(store, |p| p.name.clone()),
            Self::SelectedPointMaterials => selected(store, |p| p.materials.join(", ")),
            Self::SelectedPointAddress => selected(store, |p| p.address.clone()),
            Self::SelectedPointHours => selected(store, |p| p.hours.clone()),
            Self::SelectedPointContact => selected(store, |p| p.phone.clone()),
        }
    }
}

fn selected(store: &Store, f: impl Fn(&CollectionPoint) -> String) -> String {
    store.selected_point().map(f).unwrap_or_default()
}

/// Set the text of every bound node under `root` whose key names a binder.
pub fn apply_bindings(root: &mut Node, store: &Store) {
    root.walk_mut(&mut |node: &mut Node| {
        if let Some(binder) = node.data.bind.as_deref().and_then(Binder::from_key) {
            node.text = binder.read(store);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::UserProfile;
    use crate::config::model::ProfileConfig;
    use crate::view::node::{strong, Tag};

    fn store() -> Store {
        Store::new(UserProfile::from(&ProfileConfig::default()))
    }

    #[test]
    fn test_binder_reads() {
        let mut s = store();
        assert_eq!(Binder::Coins.read(&s), "2.750");
        assert_eq!(Binder::MonthlyGain.read(&s), "+350 Eco");
        assert_eq!(Binder::MonthlyGoal.read(&s), "5.000");
        assert_eq!(Binder::SelectedPointName.read(&s), "Eco Ambiental");
        assert_eq!(
            Binder::SelectedPointMaterials.read(&s),
            "Plástico, Vidro, Papel, Metal"
        );

        s.select_point("bairro-x");
        assert_eq!(Binder::SelectedPointContact.read(&s), "(71) 98888-1111");
        assert_eq!(Binder::SelectedPointHours.read(&s), "Seg a Sex, 9h às 17h");
    }

    #[test]
    fn test_apply_bindings_skips_unknown_keys() {
        let s = store();
        let mut root = Node::root()
            .child(strong("?").bind("userName"))
            .child(strong("keep").bind("noSuchKey"))
            .child(Node::new(Tag::Row).child(strong("?").bind("coins")));

        apply_bindings(&mut root, &s);

        assert_eq!(root.children[0].text, "Eco Lover");
        assert_eq!(root.children[1].text, "keep");
        assert_eq!(root.children[2].children[0].text, "2.750");
    }

    #[test]
    fn test_empty_catalogue_binds_empty_text() {
        let mut s = store();
        s.points.clear();
        assert_eq!(Binder::SelectedPointAddress.read(&s), "");
    }
}
