use crate::core::catalog::{default_catalog, validate_catalog};
use crate::domain::model::{Activity, Enrollment, RosterSnapshot};
use crate::domain::ports::RosterStore;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::require_input;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory roster guarded by a single lock.
///
/// Writers hold the lock for the whole check-then-mutate step, so an enroll
/// and a withdraw on the same activity can never interleave.
pub struct InMemoryRosterStore {
    activities: RwLock<Vec<Activity>>,
    enforce_capacity: bool,
}

impl InMemoryRosterStore {
    pub fn new(catalog: Vec<Activity>) -> Result<Self> {
        validate_catalog(&catalog)?;
        tracing::debug!("Roster store seeded with {} activities", catalog.len());
        Ok(Self {
            activities: RwLock::new(catalog),
            enforce_capacity: false,
        })
    }

    pub fn with_default_catalog() -> Self {
        Self {
            activities: RwLock::new(default_catalog()),
            enforce_capacity: false,
        }
    }

    /// Turns `max_participants` into a hard cap; signups past it fail with
    /// [`RosterError::CapacityExceeded`].
    pub fn with_capacity_enforcement(mut self, enabled: bool) -> Self {
        self.enforce_capacity = enabled;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    // Every mutation is a single push or remove, so a poisoned guard still
    // holds a consistent roster.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Activity>> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Activity>> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_mut<'a>(activities: &'a mut [Activity], name: &str) -> Result<&'a mut Activity> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or_else(|| RosterError::NotFound {
            activity: name.to_string(),
        })
}

impl RosterStore for InMemoryRosterStore {
    fn list(&self) -> RosterSnapshot {
        RosterSnapshot::new(self.read().clone())
    }

    fn get(&self, activity: &str) -> Result<Activity> {
        self.read()
            .iter()
            .find(|a| a.name == activity)
            .cloned()
            .ok_or_else(|| RosterError::NotFound {
                activity: activity.to_string(),
            })
    }

    fn enroll(&self, activity: &str, email: &str) -> Result<Enrollment> {
        require_input("activity_name", activity)?;
        require_input("email", email)?;

        let mut activities = self.write();
        let record = find_mut(&mut activities, activity)?;

        if record.is_enrolled(email) {
            return Err(RosterError::AlreadyEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        if self.enforce_capacity && record.is_full() {
            return Err(RosterError::CapacityExceeded {
                activity: activity.to_string(),
                max_participants: record.max_participants,
            });
        }

        record.participants.push(email.to_string());
        tracing::debug!(
            "{} enrolled in {} ({}/{})",
            email,
            activity,
            record.participants.len(),
            record.max_participants
        );

        Ok(Enrollment {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    fn withdraw(&self, activity: &str, email: &str) -> Result<Enrollment> {
        require_input("activity_name", activity)?;
        require_input("email", email)?;

        let mut activities = self.write();
        let record = find_mut(&mut activities, activity)?;

        let Some(position) = record.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };

        // Vec::remove keeps the relative order of the remaining participants
        record.participants.remove(position);
        tracing::debug!("{} withdrawn from {}", email, activity);

        Ok(Enrollment {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}
