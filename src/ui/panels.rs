use std::time::Instant;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::export::ExportFormat;
use crate::data::filter::{SizeFilter, StatusFilter, BUCKETS};
use crate::data::size;
use crate::data::status::CLASSIFIED;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open report…").clicked() {
                open_report_dialog(state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Export CSV…").clicked() {
                export_dialog(state, ExportFormat::Csv);
                ui.close_menu();
            }
            if ui.button("Export JSON…").clicked() {
                export_dialog(state, ExportFormat::Json);
                ui.close_menu();
            }
        });

        ui.separator();

        if state.dataset.is_some() {
            let (visible, total) = state.counts();
            ui.label(format!("{visible} of {total} results shown"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets and summary
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Free-text search (debounced) ----
    ui.strong("Search");
    let mut search = state.search_input.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut search).hint_text("filename, path, details, status"),
    );
    if response.changed() {
        state.queue_search(search, Instant::now());
    }
    if state.search_debounce.is_pending() {
        ui.weak("filtering…");
    }
    ui.add_space(4.0);

    // ---- Status category ----
    ui.strong("Status");
    let current = match state.criteria.status {
        StatusFilter::All => "All".to_string(),
        StatusFilter::Category(category) => category.label().to_string(),
    };
    egui::ComboBox::from_id_salt("status_filter")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.criteria.status == StatusFilter::All, "All")
                .clicked()
            {
                state.set_status_filter(StatusFilter::All);
            }
            for category in CLASSIFIED {
                let selected = state.criteria.status == StatusFilter::Category(category);
                if ui.selectable_label(selected, category.label()).clicked() {
                    state.set_status_filter(StatusFilter::Category(category));
                }
            }
        });
    ui.add_space(4.0);

    // ---- Size bucket ----
    ui.strong("Size");
    let current = match state.criteria.size {
        SizeFilter::All => "All".to_string(),
        SizeFilter::Bucket(bucket) => format!("{} ({})", bucket.label(), bucket.description()),
    };
    egui::ComboBox::from_id_salt("size_filter")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.criteria.size == SizeFilter::All, "All")
                .clicked()
            {
                state.set_size_filter(SizeFilter::All);
            }
            for bucket in BUCKETS {
                let selected = state.criteria.size == SizeFilter::Bucket(bucket);
                let label = format!("{} ({})", bucket.label(), bucket.description());
                if ui.selectable_label(selected, label).clicked() {
                    state.set_size_filter(SizeFilter::Bucket(bucket));
                }
            }
        });

    // ---- Recovery summary ----
    if let Some(dataset) = &state.dataset {
        ui.separator();
        ui.heading("Summary");
        let stats = &dataset.statistics;
        ui.label(format!("Successfully recovered: {}", stats.successful));
        ui.label(format!("Failed recoveries: {}", stats.failed));
        ui.label(format!("Skipped (already registered): {}", stats.skipped));
        ui.label(format!("Duplicate files found: {}", stats.duplicates));
        ui.label(format!("Total files: {}", stats.total));
        ui.label(format!("Total size: {}", size::format(stats.total_size)));
        if let Some(timestamp) = &stats.timestamp {
            ui.label(format!("Completed: {timestamp}"));
        }
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_report_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open recovery report")
        .add_filter("Recovery report", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} results from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load report: {e:#}");
                state.notify(format!("Error: {e:#}"));
            }
        }
    }
}

/// Serialize the current view and hand it to the host save dialog. An empty
/// view aborts with a warning; save failures surface as notifications and
/// never disturb the filter/sort state.
pub fn export_dialog(state: &mut AppState, format: ExportFormat) {
    let payload = match state.export_view(format) {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("Export aborted: {e}");
            state.notify(format!("Export aborted: {e}"));
            return;
        }
    };

    let file = rfd::FileDialog::new()
        .set_title("Export results")
        .set_file_name(payload.file_name)
        .add_filter(payload.mime_type, &[format.extension()])
        .save_file();

    if let Some(path) = file {
        match std::fs::write(&path, payload.contents.as_bytes()) {
            Ok(()) => {
                let (visible, _) = state.counts();
                log::info!("Exported {visible} rows to {}", path.display());
                state.notify(format!("Exported {visible} rows to {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to write export: {e}");
                state.notify(format!("Failed to write export: {e}"));
            }
        }
    }
}
