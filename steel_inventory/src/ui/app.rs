use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{
    components::NoticeWindow,
    screens::{InventoryScreen, LoginScreen},
    state::{InventoryState, LoginState, Screen},
};
use crate::config::AppConfig;
use crate::error::Notice;
use crate::inventory_db::SqliteStore;
use crate::login::PlaceholderGate;
use crate::open_inventory;
use crate::service::InventoryService;

pub struct SteelInventoryApp {
    config: AppConfig,
    gate: PlaceholderGate,
    screen: Screen,
    login_state: LoginState,
    inventory_state: InventoryState,
    service: Option<InventoryService<SqliteStore>>,
    notice: Option<Notice>,
}

impl SteelInventoryApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            gate: PlaceholderGate::new(config.operator.clone()),
            config,
            screen: Screen::Login,
            login_state: LoginState::default(),
            inventory_state: InventoryState::default(),
            service: None,
            notice: None,
        }
    }

    /// The database is opened only after a successful login
    fn open_inventory(&mut self) {
        match open_inventory(&self.config.database_path) {
            Ok(service) => {
                self.service = Some(service);
                self.screen = Screen::Inventory;
            }
            Err(e) => {
                log::error!("Failed to open inventory: {e}");
                self.notice = Some(e.notice());
            }
        }
    }
}

impl eframe::App for SteelInventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let enabled = self.notice.is_none();

        match self.screen {
            Screen::Login => {
                let attempt = egui::CentralPanel::default()
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(enabled, |ui| {
                            LoginScreen::show(ui, &mut self.login_state, &self.gate)
                        })
                        .inner
                    })
                    .inner;
                match attempt {
                    Some(Ok(())) => self.open_inventory(),
                    Some(Err(notice)) => self.notice = Some(notice),
                    None => {}
                }
            }
            Screen::Inventory => {
                if let Some(service) = self.service.as_mut() {
                    if let Err(notice) =
                        InventoryScreen::show(ctx, &mut self.inventory_state, service, enabled)
                    {
                        self.notice = Some(notice);
                    }
                }
            }
        }

        if let Some(notice) = &self.notice {
            if !NoticeWindow::new(notice).show(ctx) {
                self.notice = None;
            }
        }
    }
}

pub fn launch_gui(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Steel Inventory",
        options,
        Box::new(move |_cc| Ok(Box::new(SteelInventoryApp::new(config)))),
    )
}
