//! Table engine: projection, search, sort, pagination and selection.
//!
//! [`TableEngine`] owns the inputs (dataset, columns, config) and a derived
//! view state. Every input change re-derives the affected state from the
//! nearest upstream stage:
//!
//! ```text
//! dataset/columns -> project -> (sort) -> filter -> page count -> slice
//! search          ->                      filter -> page count -> page 1 -> slice
//! header click    ->            sort active rows ->       keep page -> slice
//! ```
//!
//! Selection is a side list of ids and never affects the pipeline.

mod action;
mod config;
mod filter;
mod load;
mod page;
mod project;
mod selection;
mod sort;

pub use action::*;
pub use config::*;
pub use filter::*;
pub use load::*;
pub use page::*;
pub use project::*;
pub use selection::*;
pub use sort::*;

use std::num::NonZeroUsize;
use std::ops::Range;

use log::{debug, info, trace, warn};

use crate::error::Error;
use crate::model::Column;
use crate::model::Dataset;
use crate::model::Record;

/// Which sequence pagination, sorting and slicing act on.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveView {
    /// No search: the projected rows.
    #[default]
    Full,
    /// Search active: the rows matching `query`.
    Filtered { query: String, rows: Vec<Record> },
}

impl ActiveView {
    fn from_query(projected: &[Record], query: &str) -> Self {
        match filter(projected, query) {
            Some(rows) => ActiveView::Filtered {
                query: query.to_string(),
                rows,
            },
            None => ActiveView::Full,
        }
    }

    /// The active search query, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            ActiveView::Full => None,
            ActiveView::Filtered { query, .. } => Some(query),
        }
    }
}

/// Derived view state. Rebuilt from inputs, never patched.
#[derive(Debug, Clone)]
struct ViewState {
    projected: Vec<Record>,
    active: ActiveView,
    sort: Option<SortState>,
    current_page: usize,
    page_count: usize,
    visible: Range<usize>,
    selection: Selection,
    load_state: LoadState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            projected: Vec::new(),
            active: ActiveView::Full,
            sort: None,
            current_page: 1,
            page_count: 0,
            visible: 0..0,
            selection: Selection::new(),
            load_state: LoadState::Loading,
        }
    }
}

/// Page and search requested from outside, applied on the first dataset.
#[derive(Debug, Clone, Default)]
struct InitialView {
    page: Option<usize>,
    search: Option<String>,
}

/// The table's data pipeline and interaction state.
///
/// # Example
///
/// ```
/// use datatable_lib::engine::{TableConfig, TableEngine};
/// use datatable_lib::model::{Column, Record};
///
/// let columns = vec![Column::new("id", "ID"), Column::new("title", "Title")];
/// let mut table = TableEngine::new(columns, TableConfig::default());
///
/// let dataset: Vec<Record> = (1..=32)
///     .map(|id| Record::new().set("id", id).set("title", format!("Item {id}")))
///     .collect();
/// table.set_dataset(dataset);
///
/// assert_eq!(table.page_count(), 3);
/// assert!(table.next());
/// assert_eq!(table.visible()[0].key("id").as_deref(), Some("16"));
/// ```
#[derive(Debug, Clone)]
pub struct TableEngine {
    config: TableConfig,
    columns: Vec<Column>,
    dataset: Dataset,
    state: ViewState,
    initial: Option<InitialView>,
}

impl TableEngine {
    /// Creates an empty, loading table with the given columns.
    pub fn new(columns: Vec<Column>, config: TableConfig) -> Self {
        Self {
            config,
            columns,
            dataset: Vec::new(),
            state: ViewState::default(),
            initial: Some(InitialView::default()),
        }
    }

    /// Page to open when the first dataset arrives.
    ///
    /// Clamped to the available pages. Later datasets start on page 1.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        if let Some(initial) = self.initial.as_mut() {
            initial.page = Some(page);
        }
        self
    }

    /// Search to apply when the first dataset arrives.
    ///
    /// Overrides anything typed before the data arrived. Later datasets keep
    /// whatever query is active at that time.
    pub fn with_initial_search(mut self, query: impl Into<String>) -> Self {
        if let Some(initial) = self.initial.as_mut() {
            initial.search = Some(query.into());
        }
        self
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Replaces the dataset and re-derives everything from it.
    ///
    /// The active query and sort are re-applied to the new rows, the page
    /// resets, and selected ids that no longer exist are dropped.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        info!("Dataset delivered: {} records", dataset.len());
        self.dataset = dataset;
        let initial = self.initial.take();
        self.rebuild(initial.unwrap_or_default());
    }

    /// Replaces the column schema and re-projects the dataset.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        debug!("Columns changed: {} columns", columns.len());
        self.columns = columns;
        if self.initial.is_none() {
            self.rebuild(InitialView::default());
        }
    }

    /// Sets the search query and returns to page 1.
    ///
    /// An empty query clears the search.
    pub fn set_search(&mut self, query: &str) {
        debug!("Search: {:?}", query);
        self.state.active = ActiveView::from_query(&self.state.projected, query);
        self.state.current_page = 1;
        self.refresh();
    }

    /// Handles a click on the header of column `key`.
    ///
    /// A new key sorts ascending, the current key flips direction. Only the
    /// active rows are sorted, and the current page is kept.
    pub fn click_header(&mut self, key: &str) {
        let next = SortState::after_click(self.state.sort.as_ref(), key);
        debug!("Sort by {} {:?}", next.key, next.direction);

        let rows = match &mut self.state.active {
            ActiveView::Full => &mut self.state.projected,
            ActiveView::Filtered { rows, .. } => rows,
        };
        sort(rows, &next.key, next.direction);

        self.state.sort = Some(next);
        self.refresh();
    }

    /// Goes back one page. No-op on the first page.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            debug!("Previous ignored on page {}", self.state.current_page);
            return false;
        }
        self.state.current_page -= 1;
        self.refresh();
        true
    }

    /// Goes forward one page. No-op on the last page.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            debug!("Next ignored on page {}", self.state.current_page);
            return false;
        }
        self.state.current_page += 1;
        self.refresh();
        true
    }

    /// Jumps to a 1-based page. No-op when the page does not exist.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page == 0 || page > self.state.page_count {
            debug!("Page {} out of range 1..={}", page, self.state.page_count);
            return false;
        }
        self.state.current_page = page;
        self.refresh();
        true
    }

    /// Checks or unchecks the record with `id`.
    ///
    /// Checking resolves the id against the projected rows; an unknown id is
    /// ignored. Returns true if the selection changed.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        if !checked {
            return self.state.selection.deselect(id);
        }
        if self.find(id).is_none() {
            debug!("Cannot select unknown id {:?}", id);
            return false;
        }
        self.state.selection.select(id)
    }

    /// Drops the whole selection.
    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    /// Marks the table as loading.
    pub fn begin_loading(&mut self) {
        debug!("Loading");
        self.state.load_state = LoadState::Loading;
    }

    /// Marks the table as ready to show rows.
    pub fn mark_ready(&mut self) {
        info!("Table ready");
        self.state.load_state = LoadState::Ready;
    }

    /// Marks the load as failed.
    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Table load failed: {}", reason);
        self.state.load_state = LoadState::Failed(reason);
    }

    /// Applies an [`Action`]. Returns false when it was a no-op.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::SetDataset(dataset) => self.set_dataset(dataset),
            Action::SetColumns(columns) => self.set_columns(columns),
            Action::Search(query) => self.set_search(&query),
            Action::ClickHeader(key) => self.click_header(&key),
            Action::PreviousPage => return self.previous(),
            Action::NextPage => return self.next(),
            Action::GoToPage(page) => return self.go_to_page(page),
            Action::Toggle { id, checked } => return self.toggle(&id, checked),
            Action::ClearSelection => {
                if self.state.selection.is_empty() {
                    return false;
                }
                self.clear_selection();
            }
            Action::BeginLoading => self.begin_loading(),
            Action::MarkReady => self.mark_ready(),
            Action::MarkFailed(reason) => self.mark_failed(reason),
        }
        true
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    fn rebuild(&mut self, initial: InitialView) {
        let mut projected = project(&self.dataset, &self.columns);
        if let Some(state) = &self.state.sort {
            sort(&mut projected, &state.key, state.direction);
        }

        let id_field = &self.config.id_field;
        self.state.selection.retain(|id| {
            projected
                .iter()
                .any(|record| record.key(id_field).as_deref() == Some(id))
        });

        let query = match initial.search {
            Some(search) => search,
            None => self.query().unwrap_or_default().to_string(),
        };
        self.state.active = ActiveView::from_query(&projected, &query);
        self.state.projected = projected;
        self.state.current_page = initial.page.unwrap_or(1);
        self.refresh();
    }

    /// Recomputes page count, clamps the page and re-slices.
    fn refresh(&mut self) {
        let len = self.active_rows().len();
        let page_size = self.config.page_size;
        self.state.page_count = page_count(len, page_size);
        self.state.current_page = self
            .state
            .current_page
            .clamp(1, self.state.page_count.max(1));
        self.state.visible = page_range(len, page_size, self.state.current_page);
        trace!(
            "Page {}/{} shows rows {:?} of {}",
            self.state.current_page, self.state.page_count, self.state.visible, len
        );
    }

    fn find(&self, id: &str) -> Option<&Record> {
        let id_field = &self.config.id_field;
        self.state
            .projected
            .iter()
            .find(|record| record.key(id_field).as_deref() == Some(id))
    }

    // =========================================================================
    // Read model
    // =========================================================================

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.config.page_size
    }

    /// Dataset restricted to the columns, in current order.
    pub fn projected(&self) -> &[Record] {
        &self.state.projected
    }

    pub fn active_view(&self) -> &ActiveView {
        &self.state.active
    }

    /// The sequence currently paginated: filtered rows or all projected rows.
    pub fn active_rows(&self) -> &[Record] {
        match &self.state.active {
            ActiveView::Full => &self.state.projected,
            ActiveView::Filtered { rows, .. } => rows,
        }
    }

    /// The active search query, if any.
    pub fn query(&self) -> Option<&str> {
        self.state.active.query()
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.state.sort.as_ref()
    }

    /// 1-based current page.
    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count
    }

    pub fn can_previous(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn can_next(&self) -> bool {
        self.state.current_page < self.state.page_count
    }

    /// Rows on the current page.
    pub fn visible(&self) -> &[Record] {
        &self.active_rows()[self.state.visible.clone()]
    }

    /// Index range of [`visible`](Self::visible) within the active rows.
    pub fn visible_range(&self) -> Range<usize> {
        self.state.visible.clone()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selection.is_selected(id)
    }

    /// Selected records in selection order, regardless of page or search.
    pub fn selected(&self) -> Vec<&Record> {
        self.state
            .selection
            .keys()
            .filter_map(|id| self.find(id))
            .collect()
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// The `{ "products": [...] }` selection result.
    pub fn export(&self) -> SelectionExport<'_> {
        SelectionExport {
            products: self.selected(),
        }
    }

    /// The selection result as pretty JSON.
    pub fn export_json(&self) -> Result<String, Error> {
        Ok(self.export().to_json_pretty()?)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.state.load_state
    }
}
