use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;

pub fn decide_remove(activity: &Activity, command: RemoveParticipant) -> Decision {
    if !activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: RosterError::ParticipantNotFound {
                activity: command.activity_name,
                email: command.email,
            },
        };
    }

    Decision::Accepted {
        events: vec![RosterEvent::ParticipantRemoved {
            email: command.email,
        }],
    }
}
