use crate::error::{Notice, Severity};
use eframe::egui;

/// Centered message box for a [`Notice`]
pub struct NoticeWindow<'a> {
    pub notice: &'a Notice,
}

impl<'a> NoticeWindow<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    /// Draws the window; returns false once the user dismissed it
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut open = true;
        egui::Window::new(self.notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let color = match self.notice.severity {
                    Severity::Warning => ui.visuals().warn_fg_color,
                    Severity::Error => ui.visuals().error_fg_color,
                };
                ui.label(
                    egui::RichText::new(self.notice.severity.as_str())
                        .strong()
                        .color(color),
                );
                ui.label(self.notice.message.as_str());
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    open = false;
                }
            });
        open
    }
}
