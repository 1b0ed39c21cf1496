use eframe::egui::{self, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the last filter result as a table, with its CSV text above.
pub fn results_view(ui: &mut Ui, state: &AppState) {
    let result = match state.result.as_ref().filter(|_| state.show_results) {
        Some(result) => result,
        None => {
            let hint = if state.show_filter {
                "Pick a column and press Apply"
            } else {
                "Open a CSV file to filter it  (File → Open…)"
            };
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(hint);
            });
            return;
        }
    };

    ui.label(format!("{} matching rows", result.data_rows().len()));

    egui::CollapsingHeader::new("CSV text")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::vertical()
                .id_salt("csv_text")
                .max_height(160.0)
                .show(ui, |ui: &mut Ui| {
                    ui.monospace(state.result_text.as_str());
                });
        });
    ui.separator();

    // Ragged rows can be wider than the header.
    let width = result.max_width();
    let header = result.header();
    let rows = result.data_rows();

    // Column widths are stored per table; key them on the column count.
    ui.push_id(width, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(60.0), width)
            .header(20.0, |mut row| {
                for col in 0..width {
                    row.col(|ui: &mut Ui| {
                        ui.strong(header.get(col).map(String::as_str).unwrap_or(""));
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let fields = &rows[row.index()];
                    for col in 0..width {
                        row.col(|ui: &mut Ui| {
                            ui.label(fields.get(col).map(String::as_str).unwrap_or(""));
                        });
                    }
                });
            });
    });
}
