mod app;
mod components;
mod screens;
mod state;

pub use app::{launch_gui, SteelInventoryApp};
pub use state::{InventoryState, LoginState, Screen};
