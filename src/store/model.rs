use serde::Serialize;

/// A row of the `Customers` table, serialized with the column names as keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub customer_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "CustomerID")]
    pub customer_id: i64,
}

impl Customer {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            customer_name: row.get(0)?,
            address: row.get(1)?,
            customer_id: row.get(2)?,
        })
    }
}
