use serde::{Deserialize, Serialize};

/// An extracurricular activity with its roster.
///
/// Activities are keyed by name (the map key in API responses), so the name
/// is not repeated inside the struct. `participants` holds student emails in
/// signup order and never exceeds `max_participants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}
