use crate::error::Notice;
use crate::login::Authenticator;
use crate::ui::state::LoginState;
use eframe::egui;

pub struct LoginScreen;

impl LoginScreen {
    /// Returns the login result once the user pressed the button or Enter
    pub fn show(
        ui: &mut egui::Ui,
        state: &mut LoginState,
        gate: &dyn Authenticator,
    ) -> Option<Result<(), Notice>> {
        ui.vertical_centered(|ui| {
            ui.add_space(100.0);
            ui.heading("Steel Inventory");
            ui.add_space(20.0);

            ui.label("Login:");
            ui.text_edit_singleline(&mut state.username);
            ui.add_space(5.0);

            ui.label("Password:");
            let password = ui.add(egui::TextEdit::singleline(&mut state.password).password(true));
            ui.add_space(10.0);

            let enter_pressed =
                password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Log in").clicked() || enter_pressed {
                Some(state.attempt(gate))
            } else {
                None
            }
        })
        .inner
    }
}
