//! # Classification Lexicon
//!
//! Keyword tables driving node classification: pairing type, ingredient
//! category, allergens, and nutrition tags.
//!
//! The policy lives in data (sets of keywords per tag), not in control flow,
//! so it can be extended or substituted in tests without touching the
//! classification functions. The built-in lists are the fixed defaults; the
//! app may extend them from configuration.

use crate::types::{IngredientCategory, PairingType};
use std::collections::BTreeSet;

/// Allergen tags, in the fixed order they are checked and emitted.
const ALLERGEN_ORDER: &[&str] = &["dairy", "nuts", "shellfish", "soy", "egg", "wheat"];

fn word_set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// Keyword sets for node classification.
///
/// - Pairing-type and ingredient-category sets match whole names exactly.
/// - Allergen lists match by substring containment; multiple may apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    // Pairing types (exact match, checked in this order)
    pub herbs: BTreeSet<String>,
    pub spices: BTreeSet<String>,
    pub acids: BTreeSet<String>,
    pub fats: BTreeSet<String>,
    pub sauces: BTreeSet<String>,
    pub aromatics: BTreeSet<String>,
    pub textures: BTreeSet<String>,
    pub cheeses: BTreeSet<String>,

    // Ingredient categories (exact match, checked in this order)
    pub proteins: BTreeSet<String>,
    pub legumes: BTreeSet<String>,
    pub carbs: BTreeSet<String>,
    pub veg: BTreeSet<String>,

    // Allergens (substring containment)
    pub dairy_words: BTreeSet<String>,
    pub nut_words: BTreeSet<String>,
    pub shellfish_words: BTreeSet<String>,
    pub soy_words: BTreeSet<String>,
    pub egg_words: BTreeSet<String>,
    pub wheat_words: BTreeSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            herbs: word_set(&[
                "basil", "cilantro", "parsley", "mint", "dill", "oregano", "thyme", "rosemary",
                "chive", "tarragon", "sage",
            ]),
            spices: word_set(&[
                "cumin",
                "coriander",
                "paprika",
                "turmeric",
                "chili powder",
                "black pepper",
                "cinnamon",
                "clove",
                "nutmeg",
                "cardamom",
            ]),
            acids: word_set(&[
                "lemon",
                "lime",
                "vinegar",
                "balsamic vinegar",
                "red wine vinegar",
                "rice vinegar",
                "yuzu",
                "lemon juice",
                "lime juice",
            ]),
            fats: word_set(&[
                "olive oil",
                "butter",
                "cream",
                "yogurt",
                "ghee",
                "lard",
                "mayonnaise",
                "olive",
                "avocado oil",
                "sesame oil",
            ]),
            sauces: word_set(&[
                "soy sauce",
                "fish sauce",
                "hot sauce",
                "tahini",
                "salsa",
                "pesto",
                "teriyaki",
                "hoisin",
                "barbecue sauce",
            ]),
            aromatics: word_set(&[
                "onion", "garlic", "ginger", "shallot", "scallion", "leek", "celery", "carrot",
            ]),
            textures: word_set(&["croutons", "panko", "breadcrumbs", "nuts", "seeds"]),
            cheeses: word_set(&[
                "feta",
                "parmesan",
                "mozzarella",
                "cheddar",
                "goat cheese",
                "ricotta",
                "pecorino",
                "gruyere",
                "blue cheese",
            ]),
            proteins: word_set(&[
                "chicken", "beef", "pork", "lamb", "shrimp", "salmon", "tuna", "egg", "eggs",
                "turkey", "tofu", "tempeh",
            ]),
            legumes: word_set(&[
                "black beans",
                "kidney beans",
                "chickpea",
                "chickpeas",
                "lentil",
                "lentils",
                "peas",
                "edamame",
            ]),
            carbs: word_set(&[
                "rice", "quinoa", "bread", "pasta", "noodles", "tortilla", "potato", "potatoes",
                "couscous", "bulgur",
            ]),
            veg: word_set(&[
                "onion",
                "tomato",
                "garlic",
                "cucumber",
                "spinach",
                "kale",
                "lettuce",
                "arugula",
                "bell pepper",
                "mushroom",
                "zucchini",
                "eggplant",
                "broccoli",
                "cauliflower",
                "cabbage",
                "carrot",
                "celery",
                "basil",
                "cilantro",
                "parsley",
            ]),
            dairy_words: word_set(&[
                "yogurt",
                "butter",
                "cream",
                "cheese",
                "feta",
                "parmesan",
                "mozzarella",
                "cheddar",
                "milk",
            ]),
            nut_words: word_set(&[
                "almond",
                "walnut",
                "pecan",
                "hazelnut",
                "peanut",
                "cashew",
                "pistachio",
                "nuts",
            ]),
            shellfish_words: word_set(&[
                "shrimp", "prawn", "crab", "lobster", "oyster", "scallop", "mussel", "clam",
            ]),
            soy_words: word_set(&["soy", "soy sauce", "tofu", "edamame", "tamari"]),
            egg_words: word_set(&["egg", "eggs"]),
            wheat_words: word_set(&["flour", "bread", "panko", "breadcrumbs", "pasta"]),
        }
    }
}

impl Lexicon {
    /// Infer the pairing type of a node by exact name lookup.
    #[must_use]
    pub fn pairing_type(&self, name: &str) -> PairingType {
        let n = name.to_lowercase();
        if self.herbs.contains(&n) {
            PairingType::Herb
        } else if self.spices.contains(&n) {
            PairingType::Spice
        } else if self.acids.contains(&n) {
            PairingType::Acid
        } else if self.fats.contains(&n) {
            PairingType::Fat
        } else if self.sauces.contains(&n) {
            PairingType::Sauce
        } else if self.aromatics.contains(&n) {
            PairingType::Aromatic
        } else if self.textures.contains(&n) {
            PairingType::Texture
        } else if self.cheeses.contains(&n) {
            PairingType::Cheese
        } else {
            PairingType::Other
        }
    }

    /// Infer the grocery category of an ingredient by exact name lookup.
    #[must_use]
    pub fn ingredient_category(&self, name: &str) -> IngredientCategory {
        let n = name.to_lowercase();
        if self.proteins.contains(&n) {
            IngredientCategory::Protein
        } else if self.legumes.contains(&n) {
            IngredientCategory::Legume
        } else if self.carbs.contains(&n) {
            IngredientCategory::Carb
        } else if self.veg.contains(&n) {
            IngredientCategory::Veg
        } else {
            IngredientCategory::Other
        }
    }

    /// Infer allergen tags by substring containment.
    ///
    /// Unlike `pairing_type`, multiple allergens may apply; the result is
    /// emitted in the fixed tag order (dairy, nuts, shellfish, soy, egg,
    /// wheat).
    #[must_use]
    pub fn allergens(&self, name: &str) -> Vec<String> {
        let n = name.to_lowercase();
        let lists: &[&BTreeSet<String>] = &[
            &self.dairy_words,
            &self.nut_words,
            &self.shellfish_words,
            &self.soy_words,
            &self.egg_words,
            &self.wheat_words,
        ];
        ALLERGEN_ORDER
            .iter()
            .zip(lists)
            .filter(|(_, words)| words.iter().any(|w| n.contains(w.as_str())))
            .map(|(tag, _)| (*tag).to_string())
            .collect()
    }

    /// Nutrition tags for a pairing type: herb/spice/acid are plant-forward.
    #[must_use]
    pub fn nutrition_tags(&self, pairing_type: PairingType) -> Vec<String> {
        if pairing_type.is_plant_forward() {
            vec!["plant-forward".to_string()]
        } else {
            Vec::new()
        }
    }

    /// Extend a named keyword set with extra words (configuration hook).
    ///
    /// Unknown set names are reported back so the app can reject a typo in
    /// its config rather than silently ignoring it.
    pub fn extend_set(&mut self, set: &str, words: &[String]) -> Result<(), crate::FlavorError> {
        let target = match set {
            "herbs" => &mut self.herbs,
            "spices" => &mut self.spices,
            "acids" => &mut self.acids,
            "fats" => &mut self.fats,
            "sauces" => &mut self.sauces,
            "aromatics" => &mut self.aromatics,
            "textures" => &mut self.textures,
            "cheeses" => &mut self.cheeses,
            "proteins" => &mut self.proteins,
            "legumes" => &mut self.legumes,
            "carbs" => &mut self.carbs,
            "veg" => &mut self.veg,
            "dairy" => &mut self.dairy_words,
            "nuts" => &mut self.nut_words,
            "shellfish" => &mut self.shellfish_words,
            "soy" => &mut self.soy_words,
            "egg" => &mut self.egg_words,
            "wheat" => &mut self.wheat_words,
            other => {
                return Err(crate::FlavorError::Config(format!(
                    "unknown lexicon set: {other}"
                )));
            }
        };
        target.extend(words.iter().map(|w| w.to_lowercase()));
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
