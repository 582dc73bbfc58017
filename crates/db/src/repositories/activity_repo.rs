//! Repository for the `activities` and `signups` tables.

use std::collections::BTreeMap;

use mergington_core::{Activity, RosterError};

use crate::models::activity::{ActivityRow, SignupRow};
use crate::{DbPool, StoreError};

/// Column list for activities queries.
const COLUMNS: &str = "name, description, schedule, max_participants";

/// The roster store.
///
/// Signup and unregister are each atomic with respect to interleaved
/// operations on the same activity: the capacity check rides on the insert
/// statement itself and the duplicate check is backed by the
/// `uq_signups_activity_email` constraint, so no in-process lock is needed.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Snapshot of all activities keyed by name, participants in signup order.
    pub async fn list(pool: &DbPool) -> Result<BTreeMap<String, Activity>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM activities ORDER BY name ASC");
        let rows: Vec<ActivityRow> = sqlx::query_as(&query).fetch_all(pool).await?;

        let signups: Vec<SignupRow> =
            sqlx::query_as("SELECT activity_name, email FROM signups ORDER BY id ASC")
                .fetch_all(pool)
                .await?;

        let mut activities: BTreeMap<String, Activity> = rows
            .into_iter()
            .map(|row| {
                (
                    row.name,
                    Activity {
                        description: row.description,
                        schedule: row.schedule,
                        max_participants: row.max_participants,
                        participants: Vec::new(),
                    },
                )
            })
            .collect();

        for signup in signups {
            if let Some(activity) = activities.get_mut(&signup.activity_name) {
                activity.participants.push(signup.email);
            }
        }

        Ok(activities)
    }

    /// Look up a single activity by exact name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Activity>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE name = $1");
        let row: Option<ActivityRow> = sqlx::query_as(&query)
            .bind(name)
            .fetch_optional(pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let participants = Self::participants(pool, name).await?;

        Ok(Some(Activity {
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants,
        }))
    }

    /// Sign a student up for an activity.
    ///
    /// Checks run in contract order: existence, then duplicate, then
    /// capacity -- a student already enrolled in a full activity gets
    /// [`RosterError::AlreadySignedUp`], not [`RosterError::Full`].
    pub async fn signup(pool: &DbPool, name: &str, email: &str) -> Result<(), StoreError> {
        let capacity: Option<i64> =
            sqlx::query_scalar("SELECT max_participants FROM activities WHERE name = $1")
                .bind(name)
                .fetch_optional(pool)
                .await?;

        let Some(max_participants) = capacity else {
            return Err(RosterError::NotFound {
                name: name.to_string(),
            }
            .into());
        };

        let already_signed_up: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM signups WHERE activity_name = $1 AND email = $2)",
        )
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await?;

        if already_signed_up {
            return Err(RosterError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            }
            .into());
        }

        // Guarded insert: the capacity check and the append execute as one
        // statement, so two concurrent signups cannot jointly overflow
        // `max_participants`.
        let result = sqlx::query(
            "INSERT INTO signups (activity_name, email)
             SELECT $1, $2
             WHERE (SELECT COUNT(*) FROM signups WHERE activity_name = $1) < $3",
        )
        .bind(name)
        .bind(email)
        .bind(max_participants)
        .execute(pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => Err(RosterError::Full {
                name: name.to_string(),
            }
            .into()),
            Ok(_) => Ok(()),
            // A racing duplicate slips past the EXISTS check above and lands
            // on the unique constraint instead.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RosterError::AlreadySignedUp {
                    activity: name.to_string(),
                    email: email.to_string(),
                }
                .into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Remove a student from an activity's roster.
    pub async fn unregister(pool: &DbPool, name: &str, email: &str) -> Result<(), StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM activities WHERE name = $1)")
                .bind(name)
                .fetch_one(pool)
                .await?;

        if !exists {
            return Err(RosterError::NotFound {
                name: name.to_string(),
            }
            .into());
        }

        let done = sqlx::query("DELETE FROM signups WHERE activity_name = $1 AND email = $2")
            .bind(name)
            .bind(email)
            .execute(pool)
            .await?;

        if done.rows_affected() == 0 {
            return Err(RosterError::NotSignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            }
            .into());
        }

        Ok(())
    }

    async fn participants(pool: &DbPool, name: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT email FROM signups WHERE activity_name = $1 ORDER BY id ASC")
            .bind(name)
            .fetch_all(pool)
            .await
    }
}
