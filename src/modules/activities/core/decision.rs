use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<RosterEvent> },
    Rejected { reason: RosterError },
}
