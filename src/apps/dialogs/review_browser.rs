use super::DialogContent;
use crate::helpers::AppState;

/// Read-only browser over completed tests: a summary table on top and the
/// per-question breakdown of the selected row underneath.
#[derive(Default)]
pub struct ReviewBrowser {
    selected: Option<usize>,
}

impl ReviewBrowser {
    fn table_ui(&mut self, ui: &mut egui::Ui, state: &AppState) {
        use egui_extras::{Column, TableBuilder};

        let text_height = egui::TextStyle::Body.resolve(ui.style()).size;

        TableBuilder::new(ui)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(120.0).at_least(60.0))
            .column(Column::initial(140.0).at_least(80.0))
            .column(Column::remainder())
            .min_scrolled_height(0.0)
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Test");
                });
                header.col(|ui| {
                    ui.strong("Taken");
                });
                header.col(|ui| {
                    ui.strong("Score");
                });
            })
            .body(|mut body| {
                for (i, completed) in state.completed.iter().enumerate() {
                    body.row(text_height, |mut row| {
                        row.col(|ui| {
                            let picked = self.selected == Some(i);
                            if ui.selectable_label(picked, &completed.test_name).clicked() {
                                self.selected = Some(i);
                            }
                        });
                        row.col(|ui| {
                            ui.label(completed.taken.format("%Y-%m-%d %H:%M").to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!(
                                "{}/{} ({}%)",
                                completed.correct(),
                                completed.total(),
                                completed.percent()
                            ));
                        });
                    });
                }
            });
    }
}

impl DialogContent for ReviewBrowser {
    fn title(&self) -> &'static str {
        "Review Completed Tests"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut keep_open = true;

        if state.completed.is_empty() {
            ui.label("No completed tests yet.");
        } else {
            self.table_ui(ui, state);
            if let Some(completed) = self.selected.and_then(|i| state.completed.get(i)) {
                ui.separator();
                for record in &completed.records {
                    let mark = if record.correct { "✔" } else { "✘" };
                    ui.label(format!("{} {} (answered {})", mark, record.prompt, record.given));
                }
            }
        }

        ui.separator();
        if ui.button("Close").clicked() {
            keep_open = false;
        }

        keep_open
    }
}
