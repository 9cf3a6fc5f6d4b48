use super::DialogContent;
use crate::helpers::{AppState, Operator, Question};

/// Authoring form for arithmetic questions. Saved questions land in the
/// shared question bank.
pub struct ArithmeticEditor {
    lhs: String,
    rhs: String,
    op: Operator,
    error: Option<String>,
    saved: u32,
}

impl Default for ArithmeticEditor {
    fn default() -> Self {
        Self {
            lhs: "".to_string(),
            rhs: "".to_string(),
            op: Operator::default(),
            error: None,
            saved: 0,
        }
    }
}

impl ArithmeticEditor {
    fn parsed(&self) -> Option<(i64, i64)> {
        let lhs = self.lhs.trim().parse::<i64>().ok()?;
        let rhs = self.rhs.trim().parse::<i64>().ok()?;
        Some((lhs, rhs))
    }

    fn save(&mut self, state: &mut AppState) {
        let (lhs, rhs) = match self.parsed() {
            Some(operands) => operands,
            None => {
                self.error = Some("Both operands must be whole numbers.".to_string());
                return;
            }
        };
        if self.op.apply(lhs, rhs).is_none() {
            self.error = Some(match self.op {
                Operator::Divide => "Division must come out exact, with a non-zero divisor.",
                _ => "That combination overflows.",
            }
            .to_string());
            return;
        }

        let question = Question::Arithmetic {
            lhs,
            op: self.op,
            rhs,
        };
        log::debug!("Adding to the bank: {}", question.prompt());
        state.bank.add(question);
        self.saved += 1;
        self.error = None;
        self.lhs.clear();
        self.rhs.clear();
    }
}

impl DialogContent for ArithmeticEditor {
    fn title(&self) -> &'static str {
        "New Arithmetic Question"
    }

    fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let mut keep_open = true;

        egui::Grid::new("arithmetic_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .striped(false)
            .show(ui, |ui| {
                ui.label("Left operand:");
                ui.text_edit_singleline(&mut self.lhs);
                ui.end_row();

                ui.label("Operator:");
                egui::ComboBox::from_id_source("arithmetic_op")
                    .selected_text(format!("{}", self.op))
                    .show_ui(ui, |ui| {
                        ui.style_mut().wrap = Some(false);
                        ui.set_min_width(60.0);
                        for op in Operator::iter() {
                            ui.selectable_value(&mut self.op, op, format!("{}", op));
                        }
                    });
                ui.end_row();

                ui.label("Right operand:");
                ui.text_edit_singleline(&mut self.rhs);
                ui.end_row();
            });

        if let Some((lhs, rhs)) = self.parsed() {
            let preview = Question::Arithmetic {
                lhs,
                op: self.op,
                rhs,
            };
            ui.label(preview.prompt());
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save question").clicked() {
                self.save(state);
            }
            if ui.button("Done").clicked() {
                keep_open = false;
            }
        });

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::LIGHT_RED, error);
        }
        if self.saved > 0 {
            ui.label(format!("{} question(s) added this session.", self.saved));
        }

        keep_open
    }
}
