//! First-run seeding of the default activity catalog.

use crate::DbPool;

/// One entry of the default catalog.
pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: [&'static str; 2],
}

/// The catalog loaded into an empty store on first run.
pub const DEFAULT_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: ["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: ["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: ["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: ["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: ["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: ["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

/// Seed the default activities if the store is empty.
///
/// Idempotent: a store holding any activity at all is left untouched, so
/// re-running at every startup never duplicates or resets existing data.
/// All inserts commit in a single transaction. Returns whether seeding
/// happened.
pub async fn seed_defaults(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    for activity in DEFAULT_ACTIVITIES {
        sqlx::query(
            "INSERT INTO activities (name, description, schedule, max_participants)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .execute(&mut *tx)
        .await?;

        for email in activity.participants {
            sqlx::query("INSERT INTO signups (activity_name, email) VALUES ($1, $2)")
                .bind(activity.name)
                .bind(email)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    tracing::info!(
        activities = DEFAULT_ACTIVITIES.len(),
        "Seeded default activity catalog"
    );

    Ok(true)
}
