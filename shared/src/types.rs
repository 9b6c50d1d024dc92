//! Core contract types consumed by the presentation shell

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Header name of the person-name column, exact and case-sensitive
pub const COLUMN_NAME: &str = "NOME";

/// Header name of the national-id column, exact and case-sensitive
pub const COLUMN_NATIONAL_ID: &str = "CPF";

/// Header name of the team column, exact and case-sensitive
pub const COLUMN_TEAM: &str = "EQUIPE";

/// The three headers a spreadsheet must carry to be loadable
pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_NAME, COLUMN_NATIONAL_ID, COLUMN_TEAM];

/// Gender inferred from a person's given name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Indeterminate,
}

impl Gender {
    /// Label used by the gender aggregate and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Indeterminate => "Indeterminate",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the uploaded roster
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Free-text full name; the first whitespace token is the given name
    pub name: String,

    /// Digits only; every non-digit character is stripped at load time
    pub national_id: String,

    /// Grouping key, compared case-sensitively and untrimmed
    pub team: String,

    /// Values of the non-required columns, aligned with
    /// [`RecordStore::extra_columns`]
    #[serde(default)]
    pub extras: Vec<String>,
}

/// In-memory roster produced by one successful spreadsheet load
///
/// Row order is spreadsheet order. A store only exists when the load
/// succeeded with all required columns present; no partial store is ever
/// handed out.
#[derive(Clone, Debug, Serialize)]
pub struct RecordStore {
    records: Vec<PersonRecord>,
    extra_columns: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl RecordStore {
    /// Build a store from already-normalized records
    ///
    /// Normally only the loader calls this; tests use it to stage known
    /// rows directly.
    pub fn new(records: Vec<PersonRecord>, extra_columns: Vec<String>) -> Self {
        Self {
            records,
            extra_columns,
            loaded_at: Utc::now(),
        }
    }

    /// Number of person records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in spreadsheet row order
    pub fn records(&self) -> &[PersonRecord] {
        &self.records
    }

    /// Names of the tolerated extra columns, in sheet order
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// When this store was produced
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Iterate records in row order
    pub fn iter(&self) -> impl Iterator<Item = &PersonRecord> {
        self.records.iter()
    }
}

/// One labelled bucket of an aggregate output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub label: String,
    pub count: usize,
}

impl AggregateEntry {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Everything the shell needs to render the dashboard in one pass
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardData {
    /// Total person records in the current store
    pub row_count: usize,

    /// Team aggregate, largest buckets first
    pub teams: Vec<AggregateEntry>,

    /// Gender aggregate, largest buckets first
    pub genders: Vec<AggregateEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(Gender::Female.to_string(), "Female");
        assert_eq!(Gender::Indeterminate.to_string(), "Indeterminate");
    }

    #[test]
    fn test_record_store_accessors() {
        let store = RecordStore::new(
            vec![PersonRecord {
                name: "Maria Silva".to_string(),
                national_id: "12345678900".to_string(),
                team: "Vendas".to_string(),
                extras: vec![],
            }],
            vec!["CARGO".to_string()],
        );

        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.extra_columns(), ["CARGO".to_string()]);
        assert_eq!(store.iter().count(), 1);
    }

    #[test]
    fn test_dashboard_data_serializes() {
        let data = DashboardData {
            row_count: 2,
            teams: vec![AggregateEntry::new("Vendas", 2)],
            genders: vec![AggregateEntry::new("Female", 2)],
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["row_count"], 2);
        assert_eq!(json["teams"][0]["label"], "Vendas");
        assert_eq!(json["genders"][0]["count"], 2);
    }
}
