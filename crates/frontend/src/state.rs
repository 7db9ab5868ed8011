//! Session-scoped application state, provided once via context. There
//! is a single logical actor (the user) driving updates serially, so
//! plain signals are enough.

use chrono::{NaiveDate, Utc};
use contracts::filters::FilterState;
use contracts::layout::DashboardLayout;
use contracts::views::UserView;
use engine::promotions::PromotionStore;
use leptos::prelude::*;
use std::collections::HashMap;

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Clone, Copy)]
pub struct AppState {
    /// Shared filter state, one instance across all views.
    pub filters: RwSignal<FilterState>,
    /// Simulated identity for the client view.
    pub user_email: RwSignal<Option<String>>,
    /// Per-view layout customizations; views fall back to their preset
    /// until customized. Not persisted beyond the session.
    pub layouts: RwSignal<HashMap<UserView, DashboardLayout>>,
    pub promotions: RwSignal<PromotionStore>,
    /// Transient user-facing notification.
    pub notice: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterState::new(today())),
            user_email: RwSignal::new(Some("ana.ruiz@tecnomarket.es".to_string())),
            layouts: RwSignal::new(HashMap::new()),
            promotions: RwSignal::new(PromotionStore::with_seed()),
            notice: RwSignal::new(None),
        }
    }

    /// Current layout for a view: the customized one, or the preset.
    pub fn layout_for(&self, view: UserView) -> DashboardLayout {
        self.layouts
            .get()
            .get(&view)
            .cloned()
            .unwrap_or_else(|| DashboardLayout::preset_for(view))
    }

    pub fn set_layout(&self, view: UserView, layout: DashboardLayout) {
        self.layouts.update(|map| {
            map.insert(view, layout);
        });
    }

    pub fn reset_layout(&self, view: UserView) {
        self.layouts.update(|map| {
            map.remove(&view);
        });
    }

    pub fn notify(&self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState context not found")
}
