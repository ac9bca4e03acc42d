// The activity name is the stream; events only carry what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    ParticipantSignedUp { email: String },
    ParticipantRemoved { email: String },
}
