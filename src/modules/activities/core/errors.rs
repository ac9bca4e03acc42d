use thiserror::Error;

/// Expected outcomes of user input. None of these are fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Participant not found: {email} is not signed up for {activity}")]
    ParticipantNotFound { activity: String, email: String },
}
