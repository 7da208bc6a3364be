use crate::domain::model::Activity;
use crate::utils::error::{Result, RosterError};
use std::collections::HashSet;

fn emails(list: &[&str]) -> Vec<String> {
    list.iter().map(|e| e.to_string()).collect()
}

/// Activities the service starts with when no catalog file is configured.
pub fn default_catalog() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            emails(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            emails(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            emails(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        Activity::new(
            "Basketball Team",
            "Competitive basketball team for all skill levels",
            "Mondays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            emails(&["alex@mergington.edu"]),
        ),
        Activity::new(
            "Tennis Club",
            "Learn tennis techniques and participate in matches",
            "Wednesdays and Saturdays, 10:00 AM - 11:30 AM",
            10,
            emails(&["grace@mergington.edu", "lucas@mergington.edu"]),
        ),
        Activity::new(
            "Drama Club",
            "Perform in theatrical productions and develop acting skills",
            "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
            25,
            emails(&["isabella@mergington.edu"]),
        ),
        Activity::new(
            "Art Studio",
            "Studio art including painting, drawing, and sculpture",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            16,
            emails(&["noah@mergington.edu", "ava@mergington.edu"]),
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and critical thinking skills",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
            emails(&["mason@mergington.edu"]),
        ),
        Activity::new(
            "Science Club",
            "Explore scientific concepts through experiments and projects",
            "Wednesdays, 3:30 PM - 4:30 PM",
            20,
            emails(&["harper@mergington.edu", "ethan@mergington.edu"]),
        ),
    ]
}

fn invalid(field: String, reason: impl Into<String>) -> RosterError {
    RosterError::InvalidCatalog {
        field,
        reason: reason.into(),
    }
}

/// Checks the seed invariants: unique non-empty names, positive capacity,
/// unique non-empty emails, and no roster above its capacity.
pub fn validate_catalog(activities: &[Activity]) -> Result<()> {
    let mut names = HashSet::new();

    for (i, activity) in activities.iter().enumerate() {
        if activity.name.trim().is_empty() {
            return Err(invalid(format!("activities[{}].name", i), "cannot be empty"));
        }
        if !names.insert(activity.name.as_str()) {
            return Err(invalid(
                format!("activities[{}].name", i),
                format!("duplicate activity name '{}'", activity.name),
            ));
        }
        if activity.max_participants == 0 {
            return Err(invalid(
                format!("{}.max_participants", activity.name),
                "must be at least 1",
            ));
        }

        let mut seen = HashSet::new();
        for email in &activity.participants {
            if email.trim().is_empty() {
                return Err(invalid(
                    format!("{}.participants", activity.name),
                    "participant email cannot be empty",
                ));
            }
            if !seen.insert(email.as_str()) {
                return Err(invalid(
                    format!("{}.participants", activity.name),
                    format!("duplicate participant '{}'", email),
                ));
            }
        }

        if activity.participants.len() > activity.max_participants as usize {
            return Err(invalid(
                format!("{}.participants", activity.name),
                format!(
                    "{} participants exceed max_participants {}",
                    activity.participants.len(),
                    activity.max_participants
                ),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 9);
        assert!(validate_catalog(&catalog).is_ok());

        let chess = &catalog[0];
        assert_eq!(chess.name, "Chess Club");
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let mut catalog = default_catalog();
        catalog.push(catalog[0].clone());
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate activity name"));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let catalog = vec![Activity::new("Empty", "d", "s", 0, vec![])];
        assert!(matches!(
            validate_catalog(&catalog),
            Err(RosterError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_participants() {
        let catalog = vec![Activity::new(
            "Chess Club",
            "d",
            "s",
            5,
            emails(&["a@x.com", "a@x.com"]),
        )];
        assert!(validate_catalog(&catalog).is_err());
    }

    #[test]
    fn test_case_variants_are_distinct_participants() {
        let catalog = vec![Activity::new(
            "Chess Club",
            "d",
            "s",
            5,
            emails(&["a@x.com", "A@x.com"]),
        )];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_rejects_roster_over_capacity() {
        let catalog = vec![Activity::new(
            "Tiny",
            "d",
            "s",
            1,
            emails(&["a@x.com", "b@x.com"]),
        )];
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("exceed max_participants"));
    }
}
