use eframe::egui::{self, Color32, Key, RichText, Ui};

use crate::data::filter::FilterOperator;
use crate::data::loader::{CSV_MEDIA_TYPE, RESULTS_FILE_NAME};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter form
// ---------------------------------------------------------------------------

/// Render the filter form: column, operator, value and the Apply button.
pub fn filter_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter");
    ui.separator();

    if !state.show_filter {
        ui.label("No CSV loaded.");
        return;
    }

    let labels = state.column_labels();
    let selected = labels
        .get(state.column)
        .cloned()
        .unwrap_or_else(|| state.column.to_string());

    ui.strong("Column");
    egui::ComboBox::from_id_salt("column")
        .selected_text(selected)
        .show_ui(ui, |ui: &mut Ui| {
            for (i, label) in labels.iter().enumerate() {
                ui.selectable_value(&mut state.column, i, label.as_str());
            }
        });
    ui.add_space(4.0);

    ui.strong("Operator");
    egui::ComboBox::from_id_salt("operator")
        .selected_text(state.operator.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for op in FilterOperator::ALL {
                ui.selectable_value(&mut state.operator, op, op.to_string());
            }
        });
    ui.add_space(4.0);

    ui.strong("Value");
    let response = ui.add(egui::TextEdit::singleline(&mut state.value).hint_text("value"));
    // Enter in the value field behaves like Apply
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
    if state.operator.is_numeric() {
        ui.weak("Compared as numbers; non-numeric fields never match.");
    }
    ui.add_space(8.0);

    if ui.button("Apply").clicked() || submitted {
        state.apply_filter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.show_results, egui::Button::new("Export results…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(name) = &state.file_name {
            ui.label(name.as_str());
        }
        if let Some(grid) = &state.grid {
            ui.label(format!(
                "{} rows, {} columns",
                grid.data_rows().len(),
                grid.column_count()
            ));
        }

        if let Some(msg) = &state.error_message {
            ui.separator();
            ui.label(RichText::new(format!("Error: {msg}")).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open CSV file")
        .add_filter(format!("CSV ({CSV_MEDIA_TYPE})"), &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export results")
        .set_file_name(RESULTS_FILE_NAME)
        .add_filter(format!("CSV ({CSV_MEDIA_TYPE})"), &["csv"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export(&path) {
            log::error!("{e}");
            state.error_message = Some(e.to_string());
        }
    }
}
