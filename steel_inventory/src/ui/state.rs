use crate::error::Notice;
use crate::login::Authenticator;
use crate::models::{ItemId, SteelForm};
use crate::service::{AddOutcome, InventoryService};
use crate::store::SteelStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Inventory,
}

#[derive(Debug, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
}

impl LoginState {
    /// Checks the typed credentials. The password field is cleared either way.
    pub fn attempt(&mut self, gate: &dyn Authenticator) -> Result<(), Notice> {
        let result = gate
            .authenticate(&self.username, &self.password)
            .map_err(|e| e.notice());
        self.password.clear();
        result
    }
}

/// Form contents, selection and status line of the inventory screen
#[derive(Debug, Default)]
pub struct InventoryState {
    pub form: SteelForm,
    pub selected: Option<ItemId>,
    pub status: String,
}

impl InventoryState {
    /// Submits the form. On success the form is cleared; on failure it is
    /// left exactly as typed.
    pub fn submit_add<S: SteelStore>(
        &mut self,
        service: &mut InventoryService<S>,
    ) -> Result<(), Notice> {
        let outcome = service.add_or_merge(&self.form).map_err(|e| e.notice())?;
        self.status = match &outcome {
            AddOutcome::Created(item) => format!("Added {}", item.code),
            AddOutcome::Merged(item) => format!("Merged into {}", item.code),
        };
        self.form.clear();
        Ok(())
    }

    pub fn delete_selected<S: SteelStore>(
        &mut self,
        service: &mut InventoryService<S>,
    ) -> Result<(), Notice> {
        let item = service.delete(self.selected).map_err(|e| e.notice())?;
        self.selected = None;
        self.status = format!("Deleted {}", item.code);
        Ok(())
    }

    /// Moves the selected item into the form for resubmission
    pub fn edit_selected<S: SteelStore>(
        &mut self,
        service: &mut InventoryService<S>,
    ) -> Result<(), Notice> {
        self.form = service
            .load_for_edit(self.selected)
            .map_err(|e| e.notice())?;
        self.selected = None;
        self.status = format!("Editing {}; press Add to save", self.form.code);
        Ok(())
    }
}
