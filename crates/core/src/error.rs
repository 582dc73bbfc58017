/// Roster domain errors.
///
/// All four variants are expected, recoverable outcomes of signup and
/// unregister; the API layer maps them to HTTP statuses by exhaustive
/// matching. Storage failures are not represented here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity not found: {name}")]
    NotFound { name: String },

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Activity is full: {name}")]
    Full { name: String },

    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}
