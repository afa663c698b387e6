//! SQLite-backed entity store
//!
//! Persists options, submenus and dials with array-valued fields stored as
//! JSON text columns. All access keys on the external id columns; rowid is
//! only used to expose insertion order from the list queries.

use dialtree_core::errors::Result;
use dialtree_core::model::{Dial, MenuOption, Submenu};
use dialtree_core::ops::EntityStore;
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{column_decode_error, from_rusqlite};

/// SQLite implementation of the entity store
///
/// Owns the connection for the process lifetime; the server wraps it in a
/// mutex and every request round-trips through here.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an opened (and migrated) connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    fn row_to_option(
        (id, menu, parent_id, sub_menus_json, dial, dial_extension): (
            String,
            String,
            Option<String>,
            String,
            Option<String>,
            Option<String>,
        ),
    ) -> Result<MenuOption> {
        let sub_menus: Vec<String> = serde_json::from_str(&sub_menus_json)
            .map_err(|e| column_decode_error("sub_menus", e))?;
        Ok(MenuOption {
            id,
            menu,
            parent_id,
            sub_menus,
            dial,
            dial_extension,
        })
    }
}

impl EntityStore for SqliteStore {
    fn persist_option(&mut self, option: &MenuOption) -> Result<()> {
        let sub_menus_json = serde_json::to_string(&option.sub_menus)?;
        self.conn
            .execute(
                "INSERT INTO options (id, menu, parent_id, sub_menus, dial, dial_extension)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                    menu = excluded.menu,
                    parent_id = excluded.parent_id,
                    sub_menus = excluded.sub_menus,
                    dial = excluded.dial,
                    dial_extension = excluded.dial_extension",
                rusqlite::params![
                    option.id,
                    option.menu,
                    option.parent_id,
                    sub_menus_json,
                    option.dial,
                    option.dial_extension,
                ],
            )
            .map_err(from_rusqlite)?;

        Ok(())
    }

    fn get_option(&self, id: &str) -> Result<Option<MenuOption>> {
        let row = self
            .conn
            .prepare(
                "SELECT id, menu, parent_id, sub_menus, dial, dial_extension
                 FROM options WHERE id = ?",
            )
            .map_err(from_rusqlite)?
            .query_row([id], |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })
            .optional()
            .map_err(from_rusqlite)?;

        row.map(Self::row_to_option).transpose()
    }

    fn list_options(&self, parent_id: Option<&str>) -> Result<Vec<MenuOption>> {
        let (sql, params): (&str, Vec<&str>) = match parent_id {
            Some(pid) => (
                "SELECT id, menu, parent_id, sub_menus, dial, dial_extension
                 FROM options WHERE parent_id = ? ORDER BY rowid",
                vec![pid],
            ),
            None => (
                "SELECT id, menu, parent_id, sub_menus, dial, dial_extension
                 FROM options ORDER BY rowid",
                vec![],
            ),
        };

        let mut stmt = self.conn.prepare(sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params), |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter().map(Self::row_to_option).collect()
    }

    fn delete_option(&mut self, id: &str) -> Result<()> {
        // Affected-row count deliberately ignored: delete is a silent no-op
        // when the id is absent
        self.conn
            .execute("DELETE FROM options WHERE id = ?", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    fn persist_submenu(&mut self, submenu: &Submenu) -> Result<()> {
        let dials_json = serde_json::to_string(&submenu.dials)?;
        self.conn
            .execute(
                "INSERT INTO submenus (sub_menu_id, option_id, sub_menu, dials)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(sub_menu_id) DO UPDATE SET
                    option_id = excluded.option_id,
                    sub_menu = excluded.sub_menu,
                    dials = excluded.dials",
                rusqlite::params![
                    submenu.sub_menu_id,
                    submenu.option,
                    submenu.sub_menu,
                    dials_json,
                ],
            )
            .map_err(from_rusqlite)?;

        Ok(())
    }

    fn get_submenu(&self, sub_menu_id: &str) -> Result<Option<Submenu>> {
        let row: Option<(String, Option<String>, String, String)> = self
            .conn
            .prepare(
                "SELECT sub_menu_id, option_id, sub_menu, dials
                 FROM submenus WHERE sub_menu_id = ?",
            )
            .map_err(from_rusqlite)?
            .query_row([sub_menu_id], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some((sub_menu_id, option, sub_menu, dials_json)) => {
                let dials: Vec<String> = serde_json::from_str(&dials_json)
                    .map_err(|e| column_decode_error("dials", e))?;
                Ok(Some(Submenu {
                    sub_menu_id,
                    option,
                    sub_menu,
                    dials,
                }))
            }
            None => Ok(None),
        }
    }

    fn persist_dial(&mut self, dial: &Dial) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO dials (id, dial, dial_extension, submenu_id)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                    dial = excluded.dial,
                    dial_extension = excluded.dial_extension,
                    submenu_id = excluded.submenu_id",
                rusqlite::params![dial.id, dial.dial, dial.dial_extension, dial.submenu],
            )
            .map_err(from_rusqlite)?;

        Ok(())
    }

    fn get_dial(&self, id: &str) -> Result<Option<Dial>> {
        self.conn
            .prepare(
                "SELECT id, dial, dial_extension, submenu_id
                 FROM dials WHERE id = ?",
            )
            .map_err(from_rusqlite)?
            .query_row([id], |row| {
                Ok(Dial {
                    id: row.get(0)?,
                    dial: row.get(1)?,
                    dial_extension: row.get(2)?,
                    submenu: row.get(3)?,
                })
            })
            .optional()
            .map_err(from_rusqlite)
    }

    fn list_dials(&self) -> Result<Vec<Dial>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, dial, dial_extension, submenu_id
                 FROM dials ORDER BY rowid",
            )
            .map_err(from_rusqlite)?;

        let dials = stmt
            .query_map([], |row| {
                Ok(Dial {
                    id: row.get(0)?,
                    dial: row.get(1)?,
                    dial_extension: row.get(2)?,
                    submenu: row.get(3)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(dials)
    }
}
