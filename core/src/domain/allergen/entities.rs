use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fixed set of allergens tracked per dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Allergen {
    Egg,
    Soy,
    Fish,
    Milk,
    Wheat,
    Peanut,
    Sesame,
    TreeNut,
    Shellfish,
}

impl Allergen {
    pub const ALL: [Allergen; 9] = [
        Allergen::Egg,
        Allergen::Soy,
        Allergen::Fish,
        Allergen::Milk,
        Allergen::Wheat,
        Allergen::Peanut,
        Allergen::Sesame,
        Allergen::TreeNut,
        Allergen::Shellfish,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Allergen::Egg => "egg",
            Allergen::Soy => "soy",
            Allergen::Fish => "fish",
            Allergen::Milk => "milk",
            Allergen::Wheat => "wheat",
            Allergen::Peanut => "peanut",
            Allergen::Sesame => "sesame",
            Allergen::TreeNut => "tree_nut",
            Allergen::Shellfish => "shellfish",
        }
    }

    pub fn from_key(key: &str) -> Option<Allergen> {
        match key {
            "egg" => Some(Allergen::Egg),
            "soy" => Some(Allergen::Soy),
            "fish" => Some(Allergen::Fish),
            "milk" => Some(Allergen::Milk),
            "wheat" => Some(Allergen::Wheat),
            "peanut" => Some(Allergen::Peanut),
            "sesame" => Some(Allergen::Sesame),
            "tree_nut" => Some(Allergen::TreeNut),
            "shellfish" => Some(Allergen::Shellfish),
            _ => None,
        }
    }

    /// Total mapping from free-text user input to the fixed allergen
    /// set. Lower-cases and turns spaces into underscores, so "Tree Nut"
    /// and "tree_nut" both resolve. Anything else is unrecognized.
    pub fn from_user_input(name: &str) -> Option<Allergen> {
        let normalized = name.to_lowercase().replace(' ', "_");
        Allergen::from_key(&normalized)
    }
}

/// Model-estimated probability, in [0, 1], that a dish contains each
/// tracked allergen. Produced upstream and attached immutably to a
/// dish; a dish without a profile has no allergen data at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, Default)]
#[serde(default)]
pub struct AllergenProfile {
    pub egg: f64,
    pub soy: f64,
    pub fish: f64,
    pub milk: f64,
    pub wheat: f64,
    pub peanut: f64,
    pub sesame: f64,
    pub tree_nut: f64,
    pub shellfish: f64,
}

impl AllergenProfile {
    pub fn probability(&self, allergen: Allergen) -> f64 {
        match allergen {
            Allergen::Egg => self.egg,
            Allergen::Soy => self.soy,
            Allergen::Fish => self.fish,
            Allergen::Milk => self.milk,
            Allergen::Wheat => self.wheat,
            Allergen::Peanut => self.peanut,
            Allergen::Sesame => self.sesame,
            Allergen::TreeNut => self.tree_nut,
            Allergen::Shellfish => self.shellfish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allergen_round_trips_through_its_key() {
        for allergen in Allergen::ALL {
            assert_eq!(Allergen::from_key(allergen.key()), Some(allergen));
        }
    }

    #[test]
    fn user_input_is_normalized_before_matching() {
        assert_eq!(Allergen::from_user_input("Tree Nut"), Some(Allergen::TreeNut));
        assert_eq!(Allergen::from_user_input("MILK"), Some(Allergen::Milk));
        assert_eq!(Allergen::from_user_input("dairy"), None);
    }
}
