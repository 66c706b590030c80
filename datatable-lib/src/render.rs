//! Render-ready snapshot of a table.
//!
//! [`TableView`] captures everything a front end paints: header labels with
//! sort markers, the body (rows or a placeholder), the pager and the
//! selection result. [`TableView::to_text`] lays it out as plain text.

use unicode_width::UnicodeWidthStr;

use crate::engine::LoadState;
use crate::engine::TableEngine;
use crate::error::Error;
use crate::model::Value;

/// Header of the leading checkbox column.
pub const ACTION_HEADER: &str = "Action";

/// A column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    /// `▲` or `▼` on the sorted column.
    pub indicator: Option<&'static str>,
}

impl HeaderCell {
    /// Label followed by the sort marker, if any.
    pub fn text(&self) -> String {
        match self.indicator {
            Some(marker) => format!("{} {}", self.label, marker),
            None => self.label.clone(),
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Record id, if the record has one.
    pub id: Option<String>,
    pub checked: bool,
    /// Formatted cells in column order.
    pub cells: Vec<String>,
}

/// What the table body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Failed(String),
    NoData,
    Rows(Vec<RowView>),
}

impl Body {
    /// Placeholder text for non-row bodies.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            Body::Loading => Some("Loading...".to_string()),
            Body::Failed(reason) => Some(format!("Failed to load: {}", reason)),
            Body::NoData => Some("No data".to_string()),
            Body::Rows(_) => None,
        }
    }
}

/// Pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: usize,
    pub count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

impl Pager {
    /// `"2 of 3 pages"`, or `"No pages"` when there is nothing to page.
    pub fn label(&self) -> String {
        if self.count == 0 {
            "No pages".to_string()
        } else {
            format!("{} of {} pages", self.current, self.count)
        }
    }
}

/// Everything needed to paint the table once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub query: Option<String>,
    pub headers: Vec<HeaderCell>,
    pub body: Body,
    pub pager: Pager,
    /// Pretty JSON selection result, when something is selected.
    pub result: Option<String>,
}

impl TableView {
    /// Captures the current state of `engine`.
    pub fn new(engine: &TableEngine) -> Result<Self, Error> {
        let config = engine.config();
        let sort = engine.sort();

        let headers = engine
            .columns()
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                indicator: sort
                    .filter(|state| state.key == column.key)
                    .map(|state| state.direction.indicator()),
            })
            .collect();

        let body = match engine.load_state() {
            LoadState::Loading => Body::Loading,
            LoadState::Failed(reason) => Body::Failed(reason.clone()),
            LoadState::Ready if engine.visible().is_empty() => Body::NoData,
            LoadState::Ready => Body::Rows(
                engine
                    .visible()
                    .iter()
                    .map(|record| {
                        let id = record.key(&config.id_field);
                        let checked = id.as_deref().is_some_and(|id| engine.is_selected(id));
                        let cells = engine
                            .columns()
                            .iter()
                            .map(|column| {
                                let value = record.get(&column.key).unwrap_or(&Value::Null);
                                format_cell(value, column.key == config.id_field, config.decimals)
                            })
                            .collect();
                        RowView { id, checked, cells }
                    })
                    .collect(),
            ),
        };

        let pager = Pager {
            current: engine.current_page(),
            count: engine.page_count(),
            can_previous: engine.can_previous(),
            can_next: engine.can_next(),
        };

        let result = if engine.selection().is_empty() {
            None
        } else {
            Some(engine.export_json()?)
        };

        Ok(Self {
            query: engine.query().map(str::to_string),
            headers,
            body,
            pager,
            result,
        })
    }

    /// Lays the snapshot out as aligned plain text.
    pub fn to_text(&self) -> String {
        let mut header_line = vec![ACTION_HEADER.to_string()];
        header_line.extend(self.headers.iter().map(HeaderCell::text));

        let rows: Vec<Vec<String>> = match &self.body {
            Body::Rows(rows) => rows
                .iter()
                .map(|row| {
                    let mut line = vec![if row.checked { "[x]" } else { "[ ]" }.to_string()];
                    line.extend(row.cells.iter().cloned());
                    line
                })
                .collect(),
            _ => Vec::new(),
        };

        let mut widths: Vec<usize> = header_line.iter().map(|cell| cell.width()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }

        let mut out = String::new();
        out.push_str(&format!("Search: {}\n", self.query.as_deref().unwrap_or("")));
        out.push_str(&join_padded(&header_line, &widths));
        out.push('\n');
        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        match self.body.placeholder() {
            Some(text) => {
                out.push_str(&text);
                out.push('\n');
            }
            None => {
                for row in &rows {
                    out.push_str(&join_padded(row, &widths));
                    out.push('\n');
                }
            }
        }

        out.push('\n');
        out.push_str(&format!(
            "{}  {}  {}\n",
            button("Previous", self.pager.can_previous),
            self.pager.label(),
            button("Next", self.pager.can_next),
        ));

        if let Some(result) = &self.result {
            out.push_str("\nResult:\n");
            out.push_str(result);
            out.push('\n');
        }

        out
    }
}

/// Formats a cell value for display.
///
/// Numbers get `decimals` places except in the id column. Null is blank.
pub fn format_cell(value: &Value, is_id: bool, decimals: usize) -> String {
    match value {
        Value::Number(n) if !is_id => match n.as_f64() {
            Some(f) => format!("{:.*}", decimals, f),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!(" {} ", label)
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    line.trim_end().to_string()
}
