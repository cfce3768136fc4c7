use std::cmp::Ordering;

use crate::domain::allergen::{
    entities::{Allergen, AllergenProfile},
    value_objects::{SafetyVerdict, UnsafeAllergen},
};

/// Inclusive cutoff: a probability of exactly 0.5 already counts as
/// unsafe.
pub const UNSAFE_THRESHOLD: f64 = 0.5;

/// Evaluate one dish's allergen profile against a user's allergy list.
///
/// Fail-open by design: a dish with no profile, or a user with no
/// allergies, is reported safe. Unrecognized allergy names are skipped
/// rather than rejected since this is advisory information, not a
/// safety gate. The unsafe list is sorted by probability descending;
/// ties keep the user's list order.
pub fn check_dish_safety(
    profile: Option<&AllergenProfile>,
    user_allergies: &[String],
) -> SafetyVerdict {
    let Some(profile) = profile else {
        return SafetyVerdict::safe();
    };
    if user_allergies.is_empty() {
        return SafetyVerdict::safe();
    }

    let mut unsafe_allergens = Vec::new();

    for allergy in user_allergies {
        let Some(allergen) = Allergen::from_user_input(allergy) else {
            continue;
        };

        let probability = profile.probability(allergen);
        if probability >= UNSAFE_THRESHOLD {
            unsafe_allergens.push(UnsafeAllergen {
                name: allergy.clone(),
                probability,
            });
        }
    }

    // sort_by is stable, so equal probabilities keep list order
    unsafe_allergens.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });

    let highest_risk = unsafe_allergens.first().cloned();

    SafetyVerdict {
        is_safe: unsafe_allergens.is_empty(),
        unsafe_allergens,
        highest_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(milk: f64, wheat: f64, fish: f64) -> AllergenProfile {
        AllergenProfile {
            milk,
            wheat,
            fish,
            ..Default::default()
        }
    }

    fn allergies(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn missing_profile_is_safe() {
        let verdict = check_dish_safety(None, &allergies(&["milk", "fish"]));
        assert!(verdict.is_safe);
        assert!(verdict.unsafe_allergens.is_empty());
        assert!(verdict.highest_risk.is_none());
    }

    #[test]
    fn empty_allergy_list_is_safe() {
        let verdict = check_dish_safety(Some(&profile(0.95, 0.95, 0.95)), &[]);
        assert!(verdict.is_safe);
        assert!(verdict.unsafe_allergens.is_empty());
        assert!(verdict.highest_risk.is_none());
    }

    #[test]
    fn flags_only_allergens_at_or_above_threshold() {
        let verdict = check_dish_safety(
            Some(&profile(0.95, 0.1, 0.0)),
            &allergies(&["milk", "fish"]),
        );

        assert!(!verdict.is_safe);
        assert_eq!(
            verdict.unsafe_allergens,
            vec![UnsafeAllergen {
                name: "milk".to_string(),
                probability: 0.95,
            }]
        );
        let highest = verdict.highest_risk.unwrap();
        assert_eq!(highest.name, "milk");
        assert_eq!(highest.probability, 0.95);
    }

    #[test]
    fn threshold_is_inclusive() {
        let verdict = check_dish_safety(Some(&profile(0.5, 0.0, 0.0)), &allergies(&["milk"]));
        assert!(!verdict.is_safe);

        let verdict = check_dish_safety(Some(&profile(0.499999, 0.0, 0.0)), &allergies(&["milk"]));
        assert!(verdict.is_safe);
    }

    #[test]
    fn below_threshold_entries_are_excluded() {
        let dish = AllergenProfile {
            peanut: 0.95,
            sesame: 0.4,
            ..Default::default()
        };
        let verdict = check_dish_safety(Some(&dish), &allergies(&["peanut", "sesame"]));

        assert!(!verdict.is_safe);
        assert_eq!(verdict.unsafe_allergens.len(), 1);
        assert_eq!(verdict.unsafe_allergens[0].name, "peanut");
    }

    #[test]
    fn unrecognized_names_are_skipped() {
        let verdict = check_dish_safety(Some(&profile(0.2, 0.0, 0.0)), &allergies(&["dairy"]));
        assert!(verdict.is_safe);
        assert!(verdict.unsafe_allergens.is_empty());
    }

    #[test]
    fn unsafe_list_is_sorted_descending() {
        let dish = AllergenProfile {
            egg: 0.6,
            wheat: 0.95,
            soy: 0.8,
            ..Default::default()
        };
        let verdict = check_dish_safety(Some(&dish), &allergies(&["egg", "wheat", "soy"]));

        let probabilities: Vec<f64> = verdict
            .unsafe_allergens
            .iter()
            .map(|a| a.probability)
            .collect();
        assert_eq!(probabilities, vec![0.95, 0.8, 0.6]);
        assert_eq!(verdict.highest_risk.unwrap().name, "wheat");
    }

    #[test]
    fn ties_keep_user_list_order() {
        let dish = AllergenProfile {
            egg: 0.7,
            soy: 0.7,
            ..Default::default()
        };
        let verdict = check_dish_safety(Some(&dish), &allergies(&["soy", "egg"]));

        let names: Vec<&str> = verdict
            .unsafe_allergens
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["soy", "egg"]);
    }

    #[test]
    fn display_spelling_is_preserved() {
        let dish = AllergenProfile {
            tree_nut: 0.9,
            ..Default::default()
        };
        let verdict = check_dish_safety(Some(&dish), &allergies(&["Tree Nut"]));

        assert_eq!(verdict.unsafe_allergens[0].name, "Tree Nut");
    }
}
