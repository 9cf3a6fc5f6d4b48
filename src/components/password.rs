#[allow(clippy::ptr_arg)] // false positive
pub fn password_ui(ui: &mut egui::Ui, password: &mut String) -> egui::Response {
    // Reveal state lives in temp memory, keyed off the caller's id.
    let reveal_id = ui.id().with("reveal_password");
    // Read by value so the Memory borrow ends before we draw anything.
    let mut reveal = ui.data_mut(|d| d.get_temp::<bool>(reveal_id).unwrap_or(false));

    // Lay out right-to-left: the eye keeps its natural size and the
    // text edit stretches over whatever is left.
    let output = ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        let eye = ui
            .add(egui::SelectableLabel::new(reveal, "👁"))
            .on_hover_text("Show/hide password");
        if eye.clicked() {
            reveal = !reveal;
        }

        ui.add_sized(
            ui.available_size(),
            egui::TextEdit::singleline(password).password(!reveal),
        )
    });

    ui.data_mut(|d| d.insert_temp(reveal_id, reveal));

    // Hand back the text edit's response, not the layout's, so callers
    // can check `changed()` or `lost_focus()` on the field itself.
    output.inner
}

/// Single-line password entry with an eye toggle to reveal the text.
///
/// ```ignore
/// ui.add(password(&mut form.password));
/// ```
pub fn password(password: &mut String) -> impl egui::Widget + '_ {
    move |ui: &mut egui::Ui| password_ui(ui, password)
}
