use crate::error::EtiquetteError;
use rusqlite::{params, Connection};
use tracing::info;

/// Identity fields (name, birth date, ...)
pub const CATEGORY_IDENTITY: i64 = 1;
/// Membership fields (status, dues, ...)
pub const CATEGORY_MEMBERSHIP: i64 = 2;
/// Contact fields (address, phone, ...)
pub const CATEGORY_CONTACT: i64 = 3;

/// One row of the field categories table. Categories group the member
/// form fields; `position` orders them on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCategory {
    pub id: i64,
    pub table_name: String,
    pub category: String,
    pub position: i64,
}

/// Repository over the `field_categories` table.
///
/// Writes go through explicit transactions: the transaction commits on
/// success and rolls back when dropped on any error path.
pub struct FieldCategories<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> FieldCategories<'conn> {
    pub fn new(conn: &'conn mut Connection) -> FieldCategories<'conn> {
        FieldCategories { conn }
    }

    /// Create the backing table if it does not exist yet
    pub fn create_table(&self) -> Result<(), EtiquetteError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS field_categories (
              id_field_category INTEGER PRIMARY KEY,
              table_name TEXT NOT NULL,
              category TEXT NOT NULL,
              position INTEGER NOT NULL
            );",
        )?;
        Ok(())
    }

    /// All categories, ordered by their configured position
    pub fn list(&self) -> Result<Vec<FieldCategory>, EtiquetteError> {
        let mut stmt = self.conn.prepare(
            "SELECT id_field_category, table_name, category, position
             FROM field_categories ORDER BY position",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(FieldCategory {
                id: row.get(0)?,
                table_name: row.get(1)?,
                category: row.get(2)?,
                position: row.get(3)?,
            })
        })?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }
        Ok(categories)
    }

    /// Store a new ordering: the category listed first gets position 0,
    /// the next position 1, and so on. Ids that match no row are ignored
    /// by SQLite (zero rows updated), as when a category was deleted
    /// between display and save.
    pub fn set_positions(&mut self, ordered_ids: &[i64]) -> Result<(), EtiquetteError> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "UPDATE field_categories SET position = ?1 WHERE id_field_category = ?2",
            )?;
            for (position, id) in ordered_ids.iter().enumerate() {
                stmt.execute(params![position as i64, id])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Reset the table to the given defaults, dropping whatever was
    /// there. Used at install time.
    pub fn install_defaults(&mut self, defaults: &[FieldCategory]) -> Result<(), EtiquetteError> {
        let tx = self.conn.transaction()?;
        {
            tx.execute("DELETE FROM field_categories", [])?;
            let mut stmt = tx.prepare(
                "INSERT INTO field_categories (id_field_category, table_name, category, position)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for category in defaults {
                stmt.execute(params![
                    category.id,
                    category.table_name,
                    category.category,
                    category.position
                ])?;
            }
        }
        tx.commit()?;
        info!("default field categories stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn defaults() -> Vec<FieldCategory> {
        vec![
            FieldCategory {
                id: CATEGORY_IDENTITY,
                table_name: "members".into(),
                category: "Identity".into(),
                position: 1,
            },
            FieldCategory {
                id: CATEGORY_MEMBERSHIP,
                table_name: "members".into(),
                category: "Membership".into(),
                position: 2,
            },
            FieldCategory {
                id: CATEGORY_CONTACT,
                table_name: "members".into(),
                category: "Contact".into(),
                position: 3,
            },
        ]
    }

    fn repository(conn: &mut Connection) -> FieldCategories<'_> {
        let mut repo = FieldCategories::new(conn);
        repo.create_table().unwrap();
        repo.install_defaults(&defaults()).unwrap();
        repo
    }

    #[test]
    fn list_is_ordered_by_position() {
        let mut conn = Connection::open_in_memory().unwrap();
        let repo = repository(&mut conn);
        let ids: Vec<i64> = repo.list().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![CATEGORY_IDENTITY, CATEGORY_MEMBERSHIP, CATEGORY_CONTACT]
        );
    }

    #[test]
    fn set_positions_reorders_the_list() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut repo = repository(&mut conn);
        repo.set_positions(&[CATEGORY_CONTACT, CATEGORY_IDENTITY, CATEGORY_MEMBERSHIP])
            .unwrap();

        let listed = repo.list().unwrap();
        let ids: Vec<i64> = listed.iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec![CATEGORY_CONTACT, CATEGORY_IDENTITY, CATEGORY_MEMBERSHIP]
        );
        let positions: Vec<i64> = listed.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn unknown_ids_are_ignored_on_reorder() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut repo = repository(&mut conn);
        repo.set_positions(&[99, CATEGORY_CONTACT]).unwrap();
        let listed = repo.list().unwrap();
        let contact = listed.iter().find(|c| c.id == CATEGORY_CONTACT).unwrap();
        assert_eq!(contact.position, 1);
    }

    #[test]
    fn failed_install_rolls_back_to_the_previous_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut repo = repository(&mut conn);

        // two rows sharing a primary key: the second insert fails after
        // the table has already been cleared and one row written
        let clashing = vec![
            FieldCategory {
                id: 7,
                table_name: "members".into(),
                category: "First".into(),
                position: 1,
            },
            FieldCategory {
                id: 7,
                table_name: "members".into(),
                category: "Second".into(),
                position: 2,
            },
        ];
        assert!(repo.install_defaults(&clashing).is_err());

        // the transaction rolled back: neither the delete nor the
        // partial insert is visible
        assert_eq!(repo.list().unwrap(), defaults());
    }

    #[test]
    fn install_replaces_existing_rows() {
        let mut conn = Connection::open_in_memory().unwrap();
        let mut repo = repository(&mut conn);
        let trimmed = vec![FieldCategory {
            id: CATEGORY_IDENTITY,
            table_name: "members".into(),
            category: "Identity".into(),
            position: 1,
        }];
        repo.install_defaults(&trimmed).unwrap();
        assert_eq!(repo.list().unwrap(), trimmed);
    }
}
