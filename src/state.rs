use std::time::Instant;

use chrono::Utc;

use crate::data::export::{self, ExportError, ExportFormat, ExportPayload};
use crate::data::filter::{self, FilterCriteria, SizeFilter, StatusFilter};
use crate::data::model::{RecoveryDataset, RecoveryRecord};
use crate::data::sort::{self, SortColumn, SortState};
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The record store: owns the ingested dataset and the derived view,
/// independent of rendering. Callers hold this explicitly; there is no
/// ambient global instance.
pub struct AppState {
    /// Ingested report (None until a report is opened).
    pub dataset: Option<RecoveryDataset>,

    /// Active filter criteria. `criteria.search` holds only applied text;
    /// in-flight keystrokes live in `search_input` until the debounce fires.
    pub criteria: FilterCriteria,

    /// Active sort column and direction.
    pub sort: SortState,

    /// Indices of records passing the current criteria, in sort order
    /// (cached). Always a permutation of a subset of the dataset indices.
    pub visible_indices: Vec<usize>,

    /// Live contents of the search box, not yet applied to the view.
    pub search_input: String,

    /// Trailing-edge timer gating search application.
    pub search_debounce: Debouncer,

    /// Status / warning message shown in the UI. Non-fatal by contract.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            criteria: FilterCriteria::default(),
            sort: SortState::default(),
            visible_indices: Vec::new(),
            search_input: String::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a report, wholly replacing any previous dataset. Criteria and
    /// sort reset to their defaults and the view resets to dataset order.
    pub fn set_dataset(&mut self, dataset: RecoveryDataset) {
        self.criteria = FilterCriteria::default();
        self.sort = SortState::default();
        self.search_input.clear();
        self.search_debounce.cancel();
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the view after any criteria or sort change: filter, then
    /// stable sort. Synchronous; resolves fully before returning.
    pub fn rebuild_view(&mut self) {
        if let Some(ds) = &self.dataset {
            let mut indices = filter::filtered_indices(ds, &self.criteria);
            sort::sort_indices(ds, &mut indices, self.sort);
            self.visible_indices = indices;
        }
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.criteria.status = status;
        self.rebuild_view();
    }

    pub fn set_size_filter(&mut self, size: SizeFilter) {
        self.criteria.size = size;
        self.rebuild_view();
    }

    /// Record a search keystroke: buffer the text and restart the quiet
    /// period. The view is untouched until [`tick`](Self::tick) fires.
    pub fn queue_search(&mut self, text: String, now: Instant) {
        self.search_input = text;
        self.search_debounce.schedule(now);
    }

    /// Apply the buffered search text immediately.
    pub fn apply_search(&mut self) {
        self.criteria.search = self.search_input.clone();
        self.rebuild_view();
    }

    /// Drive the pending debounce; called once per frame.
    pub fn tick(&mut self, now: Instant) {
        if self.search_debounce.poll(now) {
            self.apply_search();
        }
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.rebuild_view();
    }

    /// (visible, total) record counts.
    pub fn counts(&self) -> (usize, usize) {
        let total = self.dataset.as_ref().map_or(0, RecoveryDataset::len);
        (self.visible_indices.len(), total)
    }

    /// Records of the current view, in view order.
    pub fn visible_records(&self) -> impl Iterator<Item = &RecoveryRecord> {
        let dataset = self.dataset.as_ref();
        self.visible_indices
            .iter()
            .filter_map(move |&i| dataset.map(|ds| &ds.results[i]))
    }

    /// Serialize the current view for the host save capability. An empty
    /// view is an error the caller surfaces as a warning.
    pub fn export_view(&self, format: ExportFormat) -> Result<ExportPayload, ExportError> {
        export::export_view(self.visible_records(), format, Utc::now())
    }

    /// Surface a non-fatal notification.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
