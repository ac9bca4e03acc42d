use crate::modules::activities::core::activity::{Activity, Roster};

/// The catalog every fresh store starts from.
pub fn seed_roster() -> Roster {
    [
        (
            "Basketball",
            Activity::new(
                "Team sport focusing on basketball skills and competitive play",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Soccer",
            Activity::new(
                "Outdoor soccer matches and training sessions",
                "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
                22,
                &["alex@mergington.edu", "marcus@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore various art mediums including painting, drawing, and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                16,
                &["sarah@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Perform in theatrical productions and develop acting skills",
                "Thursdays and Fridays, 4:00 PM - 5:30 PM",
                20,
                &["isabella@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Develop public speaking and critical thinking through competitive debate",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                14,
                &["noah@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            Activity::new(
                "Conduct experiments and explore scientific concepts through hands-on projects",
                "Fridays, 3:30 PM - 5:00 PM",
                18,
                &["rachel@mergington.edu", "andrew@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
