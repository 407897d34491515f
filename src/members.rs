use crate::error::EtiquetteError;
use crate::record::LabelRecord;
use rusqlite::{params_from_iter, Connection};
use tracing::debug;

/// Member retrieval for label runs.
///
/// Selection is an explicit list of member ids passed by the caller —
/// there is no ambient filter state. Results come back ordered by last
/// then first name, with the parent member joined in so the renderer can
/// fall back to the parent's address.
pub struct MemberStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> MemberStore<'conn> {
    pub fn new(conn: &'conn Connection) -> MemberStore<'conn> {
        MemberStore { conn }
    }

    /// Create the backing table if it does not exist yet
    pub fn create_table(&self) -> Result<(), EtiquetteError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS members (
              id INTEGER PRIMARY KEY,
              last_name TEXT NOT NULL,
              first_name TEXT NOT NULL,
              address TEXT NOT NULL DEFAULT '',
              address_continuation TEXT NOT NULL DEFAULT '',
              zipcode TEXT NOT NULL DEFAULT '',
              town TEXT NOT NULL DEFAULT '',
              country TEXT NOT NULL DEFAULT '',
              parent_id INTEGER REFERENCES members(id)
            );",
        )?;
        Ok(())
    }

    /// Fetch the label records for the selected member ids. Unknown ids
    /// are silently skipped; an empty selection yields an empty list.
    pub fn select_labels(&self, ids: &[i64]) -> Result<Vec<LabelRecord>, EtiquetteError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT m.last_name, m.first_name,
                    m.address, m.address_continuation, m.zipcode, m.town, m.country,
                    p.id, p.address, p.address_continuation, p.zipcode, p.town, p.country
             FROM members m
             LEFT JOIN members p ON p.id = m.parent_id
             WHERE m.id IN ({placeholders})
             ORDER BY m.last_name, m.first_name"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            let last_name: String = row.get(0)?;
            let first_name: String = row.get(1)?;
            let parent_id: Option<i64> = row.get(7)?;
            let parent = match parent_id {
                Some(_) => Some(Box::new(LabelRecord {
                    address: row.get(8)?,
                    address_continuation: row.get(9)?,
                    zipcode: row.get(10)?,
                    town: row.get(11)?,
                    country: row.get(12)?,
                    ..LabelRecord::default()
                })),
                None => None,
            };
            Ok(LabelRecord {
                full_name: format!("{last_name} {first_name}"),
                address: row.get(2)?,
                address_continuation: row.get(3)?,
                zipcode: row.get(4)?,
                town: row.get(5)?,
                country: row.get(6)?,
                parent,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        debug!(selected = ids.len(), found = records.len(), "members fetched for labels");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        MemberStore::new(&conn).create_table().unwrap();
        conn.execute_batch(
            "INSERT INTO members (id, last_name, first_name, address, address_continuation, zipcode, town, country, parent_id) VALUES
              (1, 'Durand', 'Anne', '5 Rue Haute', '', '75011', 'Paris', 'France', NULL),
              (2, 'Durand', 'Luc', '', '', '', '', 'France', 1),
              (3, 'Albert', 'Zoe', '8 Grand Place', 'Boite 4', '1000', 'Bruxelles', 'Belgique', NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn results_are_ordered_by_name() {
        let conn = seeded();
        let store = MemberStore::new(&conn);
        let records = store.select_labels(&[1, 2, 3]).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(names, vec!["Albert Zoe", "Durand Anne", "Durand Luc"]);
    }

    #[test]
    fn parent_is_joined_for_address_fallback() {
        let conn = seeded();
        let store = MemberStore::new(&conn);
        let records = store.select_labels(&[2]).unwrap();
        assert_eq!(records.len(), 1);
        let resolved = records[0].resolved_address();
        assert_eq!(resolved.address, "5 Rue Haute");
        assert_eq!(resolved.town, "Paris");
        // own country survives the fallback
        assert_eq!(records[0].country, "France");
    }

    #[test]
    fn unknown_ids_are_skipped() {
        let conn = seeded();
        let store = MemberStore::new(&conn);
        let records = store.select_labels(&[3, 42]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "Albert Zoe");
    }

    #[test]
    fn empty_selection_yields_empty_list() {
        let conn = seeded();
        let store = MemberStore::new(&conn);
        assert_eq!(store.select_labels(&[]).unwrap(), Vec::new());
    }
}
