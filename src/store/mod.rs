//! Customer store
//!
//! Owns the single SQLite connection held for the process lifetime and runs
//! the fixed customer query against it.

mod model;

pub use model::Customer;

use crate::error::StoreError;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::Mutex;

/// Only customers with an identifier strictly below this bound are returned
pub const CUSTOMER_ID_LIMIT: i64 = 8;

// No ORDER BY: rows come back in the storage engine's order.
const CUSTOMERS_QUERY: &str = "SELECT [Customers].[CustomerName], [Customers].[Address], [Customers].[CustomerID] \
     FROM [Customers] WHERE [Customers].[CustomerID] < ?1";

/// Read-only access to the customer database.
///
/// `rusqlite::Connection` is not `Sync`, so concurrent requests take turns on it.
pub struct CustomerStore {
    conn: Mutex<Connection>,
}

impl CustomerStore {
    /// Open an existing database file read-only. Never creates the file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Run the customer query and collect every matching row.
    ///
    /// Blocking; callers on the async runtime go through `spawn_blocking`.
    pub fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        let mut stmt = conn.prepare_cached(CUSTOMERS_QUERY)?;
        let rows = stmt.query_map([CUSTOMER_ID_LIMIT], Customer::from_row)?;
        let customers = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(customers)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory store with a `Customers` table holding the given ids
    pub(crate) fn seeded_store(ids: impl IntoIterator<Item = i64>) -> CustomerStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE Customers (
                CustomerID INTEGER PRIMARY KEY,
                CustomerName TEXT,
                ContactName TEXT,
                Address TEXT,
                City TEXT
            );",
        )
        .unwrap();
        for id in ids {
            conn.execute(
                "INSERT INTO Customers (CustomerID, CustomerName, ContactName, Address, City)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    id,
                    format!("Customer {id}"),
                    format!("Contact {id}"),
                    format!("{id} Main Street"),
                    "Berlin"
                ],
            )
            .unwrap();
        }
        CustomerStore::from_connection(conn)
    }

    /// Lock the store's connection from another thread for `hold`, returning
    /// once the lock is taken
    pub(crate) fn hold_connection(
        store: std::sync::Arc<CustomerStore>,
        hold: std::time::Duration,
    ) -> std::thread::JoinHandle<()> {
        let (locked_tx, locked_rx) = std::sync::mpsc::channel();
        let handle = std::thread::spawn(move || {
            let _guard = store.conn.lock().unwrap();
            locked_tx.send(()).unwrap();
            std::thread::sleep(hold);
        });
        locked_rx.recv().unwrap();
        handle
    }

    /// In-memory store without the `Customers` table
    pub(crate) fn empty_store() -> CustomerStore {
        CustomerStore::from_connection(Connection::open_in_memory().unwrap())
    }

    #[test]
    fn test_filters_ids_below_limit() {
        let store = seeded_store(1..=10);
        let mut ids: Vec<i64> = store
            .customers()
            .unwrap()
            .iter()
            .map(|c| c.customer_id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_projects_three_columns() {
        let store = seeded_store([3]);
        let rows = store.customers().unwrap();
        assert_eq!(
            rows,
            vec![Customer {
                customer_name: Some("Customer 3".to_string()),
                address: Some("3 Main Street".to_string()),
                customer_id: 3,
            }]
        );
    }

    #[test]
    fn test_no_matching_rows_is_empty() {
        let store = seeded_store(8..=12);
        assert!(store.customers().unwrap().is_empty());
    }

    #[test]
    fn test_repeated_queries_reuse_connection() {
        let store = seeded_store(1..=3);
        assert_eq!(store.customers().unwrap().len(), 3);
        assert_eq!(store.customers().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_table_reports_driver_message() {
        let store = empty_store();
        let err = store.customers().unwrap_err();
        assert!(matches!(err, StoreError::Sqlite(_)));
        assert!(
            err.to_string().contains("no such table"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn test_open_never_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        assert!(CustomerStore::open(&path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_open_existing_file_read_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Northwind.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE Customers (CustomerID INTEGER PRIMARY KEY, CustomerName TEXT, Address TEXT);
                 INSERT INTO Customers VALUES (1, 'Alfreds Futterkiste', 'Obere Str. 57');
                 INSERT INTO Customers VALUES (9, 'Blondel pere et fils', '24, place Kleber');",
            )
            .unwrap();
        }

        let store = CustomerStore::open(&path).unwrap();
        let rows = store.customers().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_name.as_deref(), Some("Alfreds Futterkiste"));

        let conn = store.conn.lock().unwrap();
        assert!(conn.execute("DELETE FROM Customers", []).is_err());
    }
}
