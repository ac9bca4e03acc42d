#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveParticipant {
    pub activity_name: String,
    pub email: String,
}
