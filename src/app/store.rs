//! In-memory state store: profile, catalogues, history and the selected point.
//!
//! Nothing here is persisted. The store is created once at start-up from the
//! seed data and the configured profile, and owned by [`AppState`].
//!
//! [`AppState`]: crate::app::state::AppState

use crate::app::seed;
use crate::config::model::ProfileConfig;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub coins: i64,
    pub monthly_gain: i64,
    pub monthly_goal: i64,
}

impl From<&ProfileConfig> for UserProfile {
    fn from(cfg: &ProfileConfig) -> Self {
        Self {
            name: cfg.user_name.clone(),
            coins: cfg.coins,
            monthly_gain: cfg.monthly_gain,
            monthly_goal: cfg.monthly_goal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPoint {
    pub id: String,
    pub name: String,
    pub address: String,
    pub materials: Vec<String>,
    pub phone: String,
    pub hours: String,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: String,
    pub date: String,
    pub description: String,
    /// Positive for earnings, negative for redemptions.
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub cost: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum RedeemError {
    #[error("insufficient balance: {balance} available, {cost} required")]
    InsufficientBalance { balance: i64, cost: i64 },
}

#[derive(Debug, Clone)]
pub struct Store {
    pub profile: UserProfile,
    pub points: Vec<CollectionPoint>,
    pub selected_point_id: String,
    /// Newest first.
    pub history: Vec<HistoryEntry>,
    pub products: Vec<Product>,
    pub tips: Vec<Tip>,
}

impl Store {
    pub fn new(profile: UserProfile) -> Self {
        let points = seed::collection_points();
        let selected_point_id = points.first().map(|p| p.id.clone()).unwrap_or_default();
        Self {
            profile,
            points,
            selected_point_id,
            history: seed::history(),
            products: seed::products(),
            tips: seed::tips(),
        }
    }

    pub fn point(&self, id: &str) -> Option<&CollectionPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// The selected point, or the first point when the reference is stale.
    /// `None` only for an empty catalogue.
    pub fn selected_point(&self) -> Option<&CollectionPoint> {
        self.point(&self.selected_point_id).or_else(|| self.points.first())
    }

    /// Select `id` if it names a point; otherwise the selection is unchanged.
    pub fn select_point(&mut self, id: &str) -> Option<&CollectionPoint> {
        let idx = self.points.iter().position(|p| p.id == id)?;
        self.selected_point_id = self.points[idx].id.clone();
        self.points.get(idx)
    }

    /// Points ordered by ascending distance; ties keep catalogue order.
    pub fn points_by_distance(&self) -> Vec<&CollectionPoint> {
        let mut sorted: Vec<_> = self.points.iter().collect();
        sorted.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        sorted
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn can_afford(&self, cost: i64) -> bool {
        self.profile.coins >= cost
    }

    pub fn credit(&mut self, amount: i64) {
        self.profile.coins += amount;
        self.profile.monthly_gain += amount;
    }

    /// Debit `cost`, refusing to take the balance below zero.
    pub fn debit(&mut self, cost: i64) -> Result<(), RedeemError> {
        if !self.can_afford(cost) {
            return Err(RedeemError::InsufficientBalance {
                balance: self.profile.coins,
                cost,
            });
        }
        self.profile.coins -= cost;
        Ok(())
    }

    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.insert(0, entry);
    }
}
