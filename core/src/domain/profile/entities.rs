use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A user profile owning the allergy list and the allergy-mode flag.
/// Allergy names are free text; unrecognized entries are kept verbatim
/// and simply never match a dish profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub allergies: Vec<String>,
    pub allergy_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(email: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            email,
            allergies: Vec::new(),
            // warnings are on until the user opts out
            allergy_mode: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whole-list replacement, matching the editor's save semantics.
    pub fn replace_allergies(&mut self, allergies: Vec<String>) {
        let (now, _) = generate_timestamp();

        self.allergies = allergies;
        self.updated_at = now;
    }

    pub fn set_allergy_mode(&mut self, enabled: bool) {
        let (now, _) = generate_timestamp();

        self.allergy_mode = enabled;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_starts_with_allergy_mode_on() {
        let profile = UserProfile::new("eve@example.com".to_string());

        assert!(profile.allergy_mode);
        assert!(profile.allergies.is_empty());
    }

    #[test]
    fn replacing_allergies_overwrites_the_list() {
        let mut profile = UserProfile::new("eve@example.com".to_string());
        profile.replace_allergies(vec!["milk".to_string(), "peanut".to_string()]);
        profile.replace_allergies(vec!["fish".to_string()]);

        assert_eq!(profile.allergies, vec!["fish".to_string()]);
    }
}
