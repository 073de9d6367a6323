//! Domain type representing a single recorded expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One user-entered expense. Wire field names follow the persisted blob
/// layout (`nombre`, `monto`, `categoria`, `fecha`) so data files written
/// by earlier versions of the tracker load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    /// Unique within the collection; derived from the creation timestamp.
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_blob_fields() {
        let raw = r#"{
            "id": 1700000000000,
            "nombre": "Groceries",
            "monto": 42.5,
            "categoria": "Food",
            "fecha": "2024-01-15"
        }"#;
        let expense: Expense = serde_json::from_str(raw).expect("valid expense");
        assert_eq!(expense.name, "Groceries");
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.category, "Food");
        assert_eq!(
            expense.date,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date")
        );
    }

    #[test]
    fn serializes_with_legacy_field_names() {
        let expense = Expense::new(
            1,
            "Bus ticket",
            2.75,
            "Transport",
            NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
        );
        let json = serde_json::to_value(&expense).expect("serializable");
        assert_eq!(json["nombre"], "Bus ticket");
        assert_eq!(json["monto"], 2.75);
        assert_eq!(json["categoria"], "Transport");
        assert_eq!(json["fecha"], "2024-03-01");
    }
}
