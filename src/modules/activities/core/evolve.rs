use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

pub fn evolve(mut activity: Activity, event: &RosterEvent) -> Activity {
    match event {
        RosterEvent::ParticipantSignedUp { email } => {
            if !activity.has_participant(email) {
                activity.participants.push(email.clone());
            }
        }
        RosterEvent::ParticipantRemoved { email } => {
            if let Some(position) = activity.participants.iter().position(|p| p == email) {
                activity.participants.remove(position);
            }
        }
    }
    activity
}
