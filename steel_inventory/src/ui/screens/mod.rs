mod inventory;
mod login;

pub use inventory::InventoryScreen;
pub use login::LoginScreen;
