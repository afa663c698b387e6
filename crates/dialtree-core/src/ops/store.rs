use crate::errors::Result;
use crate::model::{Dial, MenuOption, Submenu};

/// Persistent mapping from external ids to entity records
///
/// All reads and writes key on the external id field (`id` / `subMenuId`),
/// never on a store-internal key. A lookup miss is `Ok(None)` - the
/// NotFound signal - and never an error; only store-level I/O failures
/// produce `Err` (classified as Internal). Writes are upserts and are
/// immediately durable; there is no write-behind and no in-process cache.
///
/// Object-safe so the server can hold a `Box<dyn EntityStore + Send>` behind
/// its shared state.
pub trait EntityStore: Send {
    /// Insert or replace an option, keyed on `option.id`
    fn persist_option(&mut self, option: &MenuOption) -> Result<()>;

    /// Look up an option by external id
    fn get_option(&self, id: &str) -> Result<Option<MenuOption>>;

    /// List options, optionally filtered by exact `parent_id` match
    ///
    /// Returned in store iteration order (insertion order).
    fn list_options(&self, parent_id: Option<&str>) -> Result<Vec<MenuOption>>;

    /// Hard-delete an option; silent no-op when the id is absent
    fn delete_option(&mut self, id: &str) -> Result<()>;

    /// Insert or replace a submenu, keyed on `submenu.sub_menu_id`
    fn persist_submenu(&mut self, submenu: &Submenu) -> Result<()>;

    /// Look up a submenu by external id
    fn get_submenu(&self, sub_menu_id: &str) -> Result<Option<Submenu>>;

    /// Insert or replace a dial, keyed on `dial.id`
    fn persist_dial(&mut self, dial: &Dial) -> Result<()>;

    /// Look up a dial by external id
    fn get_dial(&self, id: &str) -> Result<Option<Dial>>;

    /// List all dials in store iteration order (insertion order)
    fn list_dials(&self) -> Result<Vec<Dial>>;
}

/// In-memory store for options, submenus and dials
///
/// Vec-backed so iteration order is insertion order, which the list
/// endpoints expose. Linear scans are fine at menu-configuration scale.
/// Used directly in tests and as the reference implementation; production
/// runs the SQLite store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    options: Vec<MenuOption>,
    submenus: Vec<Submenu>,
    dials: Vec<Dial>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    fn persist_option(&mut self, option: &MenuOption) -> Result<()> {
        match self.options.iter_mut().find(|o| o.id == option.id) {
            Some(existing) => *existing = option.clone(),
            None => self.options.push(option.clone()),
        }
        Ok(())
    }

    fn get_option(&self, id: &str) -> Result<Option<MenuOption>> {
        Ok(self.options.iter().find(|o| o.id == id).cloned())
    }

    fn list_options(&self, parent_id: Option<&str>) -> Result<Vec<MenuOption>> {
        let options = self
            .options
            .iter()
            .filter(|o| match parent_id {
                Some(pid) => o.parent_id.as_deref() == Some(pid),
                None => true,
            })
            .cloned()
            .collect();
        Ok(options)
    }

    fn delete_option(&mut self, id: &str) -> Result<()> {
        self.options.retain(|o| o.id != id);
        Ok(())
    }

    fn persist_submenu(&mut self, submenu: &Submenu) -> Result<()> {
        match self
            .submenus
            .iter_mut()
            .find(|s| s.sub_menu_id == submenu.sub_menu_id)
        {
            Some(existing) => *existing = submenu.clone(),
            None => self.submenus.push(submenu.clone()),
        }
        Ok(())
    }

    fn get_submenu(&self, sub_menu_id: &str) -> Result<Option<Submenu>> {
        Ok(self
            .submenus
            .iter()
            .find(|s| s.sub_menu_id == sub_menu_id)
            .cloned())
    }

    fn persist_dial(&mut self, dial: &Dial) -> Result<()> {
        match self.dials.iter_mut().find(|d| d.id == dial.id) {
            Some(existing) => *existing = dial.clone(),
            None => self.dials.push(dial.clone()),
        }
        Ok(())
    }

    fn get_dial(&self, id: &str) -> Result<Option<Dial>> {
        Ok(self.dials.iter().find(|d| d.id == id).cloned())
    }

    fn list_dials(&self) -> Result<Vec<Dial>> {
        Ok(self.dials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.list_options(None).unwrap().is_empty());
        assert!(store.list_dials().unwrap().is_empty());
    }

    #[test]
    fn test_persist_option_is_upsert() {
        let mut store = MemoryStore::new();
        let mut option = MenuOption::new("opt-1".to_string(), "Sales".to_string(), vec![]);
        store.persist_option(&option).unwrap();

        option.menu = "Service".to_string();
        store.persist_option(&option).unwrap();

        let options = store.list_options(None).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].menu, "Service");
    }

    #[test]
    fn test_get_miss_is_none_not_error() {
        let store = MemoryStore::new();
        assert!(store.get_option("nonexistent").unwrap().is_none());
        assert!(store.get_submenu("nonexistent").unwrap().is_none());
        assert!(store.get_dial("nonexistent").unwrap().is_none());
    }

    #[test]
    fn test_list_options_preserves_insertion_order() {
        let mut store = MemoryStore::new();
        for i in 0..5 {
            let option =
                MenuOption::new(format!("opt-{i}"), format!("Menu {i}"), vec![]);
            store.persist_option(&option).unwrap();
        }

        let ids: Vec<String> = store
            .list_options(None)
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, ["opt-0", "opt-1", "opt-2", "opt-3", "opt-4"]);
    }

    #[test]
    fn test_delete_option_missing_is_noop() {
        let mut store = MemoryStore::new();
        assert!(store.delete_option("nonexistent").is_ok());
    }
}
