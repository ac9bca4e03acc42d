use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::RosterError;
use crate::modules::activities::core::events::RosterEvent;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

// max_participants is advisory; a full activity still accepts signups.
pub fn decide_sign_up(activity: &Activity, command: SignUpForActivity) -> Decision {
    if activity.has_participant(&command.email) {
        return Decision::Rejected {
            reason: RosterError::AlreadySignedUp {
                activity: command.activity_name,
                email: command.email,
            },
        };
    }

    Decision::Accepted {
        events: vec![RosterEvent::ParticipantSignedUp {
            email: command.email,
        }],
    }
}
