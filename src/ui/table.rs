use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::badge_color;
use crate::data::size;
use crate::data::sort::{SortColumn, SortDirection, SortState};
use crate::data::status;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

const HEADER_COLUMNS: [SortColumn; 5] = [
    SortColumn::Filename,
    SortColumn::Filepath,
    SortColumn::Status,
    SortColumn::Size,
    SortColumn::Details,
];

/// Render the sortable results table in the central panel.
pub fn results_table(ui: &mut Ui, state: &mut AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a recovery report to view results  (File → Open…)");
        });
        return;
    };
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("The report contains no results.");
        });
        return;
    }

    // Mutations are deferred past the table closures, which hold shared
    // borrows of the state.
    let sort = state.sort;
    let mut clicked_column: Option<SortColumn> = None;
    let mut copied_path: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true))
        .column(Column::auto().resizable(true))
        .column(Column::auto().resizable(true))
        .column(Column::auto())
        .column(Column::remainder())
        .column(Column::auto())
        .header(22.0, |mut header| {
            for column in HEADER_COLUMNS {
                header.col(|ui| {
                    if ui
                        .add(egui::Button::new(header_text(column, sort)).frame(false))
                        .clicked()
                    {
                        clicked_column = Some(column);
                    }
                });
            }
            // Actions column has no sortable header.
            header.col(|_ui| {});
        })
        .body(|body| {
            body.rows(20.0, state.visible_indices.len(), |mut row| {
                let record = &dataset.results[state.visible_indices[row.index()]];

                row.col(|ui| {
                    ui.label(&record.filename);
                });
                row.col(|ui| {
                    ui.label(&record.filepath);
                });
                row.col(|ui| {
                    let category = status::classify(&record.status);
                    ui.label(RichText::new(&record.status).color(badge_color(category)));
                });
                row.col(|ui| {
                    ui.label(size::format(size::parse(&record.size)));
                });
                row.col(|ui| {
                    let response = ui.label(&record.details);
                    if !record.duplicate_files.is_empty() {
                        response.on_hover_text(format!(
                            "Identical content:\n{}",
                            record.duplicate_files.join("\n")
                        ));
                    }
                });
                row.col(|ui| {
                    if ui.small_button("Copy path").clicked() {
                        copied_path = Some(record.filepath.clone());
                    }
                });
            });
        });

    if let Some(column) = clicked_column {
        state.toggle_sort(column);
    }
    if let Some(path) = copied_path {
        ui.ctx().copy_text(path.clone());
        state.notify(format!("Copied path: {path}"));
    }
}

fn header_text(column: SortColumn, sort: SortState) -> RichText {
    let marker = if sort.column == Some(column) {
        match sort.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else {
        ""
    };
    RichText::new(format!("{}{marker}", column.label())).strong()
}
