use sqlx::FromRow;

/// A row from the `activities` table. Participants live in `signups`.
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRow {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
}

/// A row from the `signups` table (the `id` ordering column is only used
/// in `ORDER BY` clauses and is not fetched).
#[derive(Debug, Clone, FromRow)]
pub struct SignupRow {
    pub activity_name: String,
    pub email: String,
}
