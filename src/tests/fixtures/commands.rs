// Builders for roster commands. Defaults target the seeded Basketball roster.

use crate::modules::activities::use_cases::remove_participant::command::RemoveParticipant;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Basketball".to_string(),
                email: "newstudent@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}

pub struct RemoveParticipantBuilder {
    inner: RemoveParticipant,
}

impl Default for RemoveParticipantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveParticipantBuilder {
    pub fn new() -> Self {
        Self {
            inner: RemoveParticipant {
                activity_name: "Basketball".to_string(),
                email: "james@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> RemoveParticipant {
        self.inner
    }
}

#[cfg(test)]
mod command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(
            SignUpForActivityBuilder::default().build(),
            SignUpForActivityBuilder::new().build()
        );
        assert_eq!(
            RemoveParticipantBuilder::default().build(),
            RemoveParticipantBuilder::new().build()
        );
    }

    #[rstest]
    fn setters_override_all_fields() {
        let sign_up = SignUpForActivityBuilder::new()
            .activity_name("Gym Class")
            .email("tester@mergington.edu")
            .build();
        assert_eq!(sign_up.activity_name, "Gym Class");
        assert_eq!(sign_up.email, "tester@mergington.edu");

        let removal = RemoveParticipantBuilder::new()
            .activity_name("Gym Class")
            .email("john@mergington.edu")
            .build();
        assert_eq!(removal.activity_name, "Gym Class");
        assert_eq!(removal.email, "john@mergington.edu");
    }
}
