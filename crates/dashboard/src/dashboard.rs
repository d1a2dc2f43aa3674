//! Event-driven dashboard controller.
//!
//! Single-threaded by construction: every entry point runs to completion on
//! the caller's thread, and the only "timers" are deadlines checked by
//! [`Dashboard::poll`].

use std::time::Instant;

use chrono::{DateTime, Utc};

use shelfstack_catalog::{
    CATEGORIES, CategorySelector, FilterCriteria, PriceRange, Product, ProductId, StockStatus,
    filter_products,
};
use shelfstack_storage::{CatalogSlot, ProductStore, StorageError, StoreError};

use crate::config::DashboardConfig;
use crate::debounce::Debouncer;
use crate::form::{FormMode, FormSession};

/// Result of submitting the open form.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The record was added or updated and the form closed.
    Saved(Product),
    /// The draft failed validation; the form stays open with field errors.
    Rejected,
    /// The store could not apply the submission; the failure was logged and
    /// the form stays open so the user can retry.
    Failed,
}

/// A staged destructive action awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteRequest {
    One(ProductId),
    Many(Vec<ProductId>),
}

enum Backing {
    /// Waiting out the first-load delay; the slot has not been read yet.
    Waiting(Box<dyn CatalogSlot>),
    Ready(ProductStore),
    /// Opening the slot failed; the error was surfaced once through `poll`.
    Failed,
}

/// The dashboard's working state: store, search, filters, form, and the
/// delete-confirmation stage.
///
/// All methods that depend on time take an explicit instant, so the
/// controller is fully deterministic under test.
pub struct Dashboard {
    config: DashboardConfig,
    opened_at: Instant,
    backing: Backing,
    debouncer: Debouncer,
    search_text: String,
    applied_search: String,
    criteria: FilterCriteria,
    visible: Vec<Product>,
    form: Option<FormSession>,
    pending_delete: Option<DeleteRequest>,
}

impl Dashboard {
    /// Start the dashboard over a catalog slot.
    ///
    /// The slot is not read until the first-load delay has elapsed; until
    /// then [`Dashboard::is_loading`] reports true and the visible list is
    /// empty.
    pub fn new(slot: Box<dyn CatalogSlot>, config: DashboardConfig, now: Instant) -> Self {
        Self {
            config,
            opened_at: now,
            backing: Backing::Waiting(slot),
            debouncer: Debouncer::new(config.search_debounce),
            search_text: String::new(),
            applied_search: String::new(),
            criteria: FilterCriteria::default(),
            visible: Vec::new(),
            form: None,
            pending_delete: None,
        }
    }

    /// Advance time-based state: complete the first load once its delay has
    /// elapsed, and apply a debounced search term that has gone quiet.
    pub fn poll(&mut self, now: Instant) -> Result<(), StorageError> {
        if matches!(self.backing, Backing::Waiting(_))
            && now >= self.opened_at + self.config.first_load_delay
        {
            match std::mem::replace(&mut self.backing, Backing::Failed) {
                Backing::Waiting(slot) => match ProductStore::open(slot) {
                    Ok(store) => {
                        self.backing = Backing::Ready(store);
                        self.refresh();
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "failed to open the catalog store");
                        return Err(err);
                    }
                },
                other => self.backing = other,
            }
        }

        if let Some(term) = self.debouncer.poll(now) {
            self.applied_search = term;
            self.refresh();
        }

        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.backing, Backing::Waiting(_))
    }

    /// Full catalog, newest first (empty while loading).
    pub fn products(&self) -> &[Product] {
        match &self.backing {
            Backing::Ready(store) => store.list(),
            _ => &[],
        }
    }

    /// The filter engine's output for the applied search term and criteria.
    pub fn visible_products(&self) -> &[Product] {
        &self.visible
    }

    // --- search -----------------------------------------------------------

    /// Record a search keystroke. The raw text is visible immediately; the
    /// filtered list only follows once the input goes quiet.
    pub fn search_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.search_text = text.clone();
        self.debouncer.input(text, now);
    }

    /// The text currently in the search box.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The debounced term the visible list reflects.
    pub fn applied_search(&self) -> &str {
        &self.applied_search
    }

    // --- filter panel -----------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_category(&mut self, category: CategorySelector) {
        self.criteria.category = category;
        self.refresh();
    }

    pub fn set_stock_status(&mut self, stock_status: StockStatus) {
        self.criteria.stock_status = stock_status;
        self.refresh();
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.criteria.price_range = price_range;
        self.refresh();
    }

    /// Reset every criterion to its default.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refresh();
    }

    /// Badge count for the filter panel.
    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_count()
    }

    /// Category choices for the filter panel and the form's selector.
    pub fn category_options(&self) -> &'static [&'static str] {
        &CATEGORIES
    }

    // --- create/edit form -------------------------------------------------

    pub fn form(&self) -> Option<&FormSession> {
        self.form.as_ref()
    }

    /// Mutable access to the open form (input binding).
    pub fn form_mut(&mut self) -> Option<&mut FormSession> {
        self.form.as_mut()
    }

    /// Open a creation form with empty defaults.
    pub fn open_create_form(&mut self) {
        self.form = Some(FormSession::create());
    }

    /// Open an edit form pre-populated from an existing record. Returns
    /// false if the record is unknown (or the store has not loaded yet).
    pub fn open_edit_form(&mut self, id: ProductId) -> bool {
        let Backing::Ready(store) = &self.backing else {
            return false;
        };
        match store.get(id) {
            Some(product) => {
                self.form = Some(FormSession::edit(product));
                true
            }
            None => false,
        }
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form, routing to add or update by its mode.
    ///
    /// Returns `None` when no form is open. Validation failure and store
    /// failure both leave the form open; only a saved record closes it.
    pub fn submit_form(&mut self) -> Option<SubmitOutcome> {
        self.submit_form_at(Utc::now())
    }

    /// [`Dashboard::submit_form`] with an explicit submission instant.
    pub fn submit_form_at(&mut self, now: DateTime<Utc>) -> Option<SubmitOutcome> {
        let form = self.form.as_mut()?;
        if !form.validate() {
            return Some(SubmitOutcome::Rejected);
        }
        let mode = form.mode();
        let draft = form.draft.clone();

        let Backing::Ready(store) = &mut self.backing else {
            tracing::error!("form submitted before the catalog store loaded");
            return Some(SubmitOutcome::Failed);
        };

        let result = match mode {
            FormMode::Create => store.add_at(&draft, now).map(Some),
            FormMode::Edit(id) => store.update_at(id, &draft, now),
        };

        match result {
            Ok(Some(product)) => {
                self.form = None;
                self.refresh();
                Some(SubmitOutcome::Saved(product))
            }
            Ok(None) => {
                // The record being edited vanished underneath the form.
                tracing::warn!("edited product no longer exists; discarding the form");
                self.form = None;
                self.refresh();
                Some(SubmitOutcome::Failed)
            }
            Err(StoreError::Rejected(report)) => {
                if let Some(form) = self.form.as_mut() {
                    form.set_errors(report);
                }
                Some(SubmitOutcome::Rejected)
            }
            Err(err) => {
                tracing::error!(error = %err, "product submission failed; keeping the form open");
                Some(SubmitOutcome::Failed)
            }
        }
    }

    // --- destructive actions ----------------------------------------------

    /// Stage a single-record delete for confirmation.
    pub fn request_delete(&mut self, id: ProductId) {
        self.pending_delete = Some(DeleteRequest::One(id));
    }

    /// Stage a multi-record delete for confirmation.
    pub fn request_bulk_delete(&mut self, ids: Vec<ProductId>) {
        self.pending_delete = Some(DeleteRequest::Many(ids));
    }

    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref()
    }

    /// Discard the staged delete without touching the store.
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Carry out the staged delete. Returns the number of removed records;
    /// zero when nothing was staged.
    pub fn confirm_delete(&mut self) -> Result<usize, StorageError> {
        let Some(request) = self.pending_delete.take() else {
            return Ok(0);
        };
        let Backing::Ready(store) = &mut self.backing else {
            return Ok(0);
        };

        let removed = match request {
            DeleteRequest::One(id) => usize::from(store.delete(id)?),
            DeleteRequest::Many(ids) => store.bulk_delete(&ids)?,
        };

        self.refresh();
        Ok(removed)
    }

    /// Recompute the visible list from the store, the applied search term,
    /// and the criteria.
    fn refresh(&mut self) {
        if let Backing::Ready(store) = &self.backing {
            self.visible = filter_products(store.list(), &self.applied_search, &self.criteria);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use shelfstack_storage::InMemoryCatalogSlot;

    const LOAD_DELAY: Duration = Duration::from_millis(500);
    const QUIET: Duration = Duration::from_millis(300);

    fn config() -> DashboardConfig {
        DashboardConfig {
            search_debounce: QUIET,
            first_load_delay: LOAD_DELAY,
        }
    }

    fn ready_dashboard(t0: Instant) -> Dashboard {
        let mut dashboard = Dashboard::new(Box::new(InMemoryCatalogSlot::new()), config(), t0);
        dashboard.poll(t0 + LOAD_DELAY).unwrap();
        dashboard
    }

    #[test]
    fn loading_gate_holds_until_the_delay_elapses() {
        let t0 = Instant::now();
        let mut dashboard = Dashboard::new(Box::new(InMemoryCatalogSlot::new()), config(), t0);

        assert!(dashboard.is_loading());
        assert!(dashboard.visible_products().is_empty());

        dashboard.poll(t0 + LOAD_DELAY - Duration::from_millis(1)).unwrap();
        assert!(dashboard.is_loading());

        dashboard.poll(t0 + LOAD_DELAY).unwrap();
        assert!(!dashboard.is_loading());
        // An empty slot was seeded with the sample catalog.
        assert_eq!(dashboard.visible_products().len(), 8);
    }

    #[test]
    fn search_applies_only_after_the_quiet_period() {
        let t0 = Instant::now();
        let mut dashboard = ready_dashboard(t0);
        let all = dashboard.visible_products().len();

        let typing = t0 + LOAD_DELAY + Duration::from_millis(10);
        dashboard.search_input("mac", typing);
        assert_eq!(dashboard.search_text(), "mac");
        assert_eq!(dashboard.applied_search(), "");

        // Still inside the quiet period: nothing narrowed yet.
        dashboard.poll(typing + QUIET - Duration::from_millis(1)).unwrap();
        assert_eq!(dashboard.visible_products().len(), all);

        dashboard.poll(typing + QUIET).unwrap();
        assert_eq!(dashboard.applied_search(), "mac");
        assert!(dashboard.visible_products().len() < all);
        assert!(
            dashboard
                .visible_products()
                .iter()
                .all(|p| p.name.to_lowercase().contains("mac")
                    || p.description.to_lowercase().contains("mac"))
        );
    }

    #[test]
    fn filter_panel_changes_apply_immediately() {
        let t0 = Instant::now();
        let mut dashboard = ready_dashboard(t0);

        dashboard.set_stock_status(StockStatus::OutOfStock);
        assert!(dashboard.visible_products().iter().all(|p| !p.in_stock));
        assert_eq!(dashboard.active_filter_count(), 1);

        dashboard.set_category(CategorySelector::Is("Beauty".to_string()));
        assert_eq!(dashboard.active_filter_count(), 2);
        assert!(
            dashboard
                .visible_products()
                .iter()
                .all(|p| p.category == "Beauty" && !p.in_stock)
        );

        dashboard.clear_filters();
        assert_eq!(dashboard.active_filter_count(), 0);
        assert_eq!(dashboard.visible_products().len(), dashboard.products().len());
    }

    #[test]
    fn category_options_expose_the_fixed_list() {
        let dashboard = ready_dashboard(Instant::now());
        let options = dashboard.category_options();
        assert_eq!(options.len(), 10);
        assert!(options.contains(&"Beauty"));
        assert!(options.contains(&"Other"));
    }

    #[test]
    fn edit_form_requires_a_loaded_store_and_a_known_id() {
        let t0 = Instant::now();
        let mut dashboard = Dashboard::new(Box::new(InMemoryCatalogSlot::new()), config(), t0);

        // Still loading: nothing to edit yet.
        assert!(!dashboard.open_edit_form(ProductId::generate()));

        dashboard.poll(t0 + LOAD_DELAY).unwrap();
        assert!(!dashboard.open_edit_form(ProductId::generate()));

        let id = dashboard.products()[0].id;
        assert!(dashboard.open_edit_form(id));
        assert_eq!(dashboard.form().unwrap().mode(), FormMode::Edit(id));
    }

    #[test]
    fn confirm_without_a_staged_delete_is_a_no_op() {
        let t0 = Instant::now();
        let mut dashboard = ready_dashboard(t0);
        let before = dashboard.products().len();

        assert_eq!(dashboard.confirm_delete().unwrap(), 0);
        assert_eq!(dashboard.products().len(), before);
    }
}
