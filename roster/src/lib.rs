//! Roster dashboard core
//!
//! This library is the logical core behind a team-roster dashboard: it loads
//! an uploaded spreadsheet into a record store, infers gender from first
//! names, aggregates team and gender distributions for charting, and looks
//! records up by national id. The rendering shell (upload widget, table,
//! charts) lives outside this crate and consumes the `shared` contract.

pub mod core;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main operations
pub use self::core::aggregate::{gender_aggregate, team_aggregate};
pub use self::core::classifier::GenderClassifier;
pub use self::core::loader::{load_from_bytes, load_from_path, load_with_options};
pub use self::core::search::find_by_national_id;
pub use self::core::state::{DashboardSession, SessionRegistry};
pub use self::core::template::model_workbook;

// Re-export trait definitions and crate-local types
pub use services::BuiltinLexicon;
pub use traits::NameLexicon;
pub use types::{LexiconVerdict, LoadOptions};
