//! Nutrient catalog
//!
//! The fixed, ordered list of nutrient definitions. Catalog order is report
//! column order and must stay stable. Every nutrient vector in the crate is a
//! dense array indexed by [`Nutrient`], so the enum, the slot index and the
//! definition table are generated from one list.

use serde::{Serialize, Serializer};

use super::units::{Unit, GRAM, KILOCALORIE, MICROGRAM, MILLIGRAM};

/// Category used to group nutrients in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Protein,
    AminoAcid,
    Carbohydrate,
    Fat,
    Mineral,
    Vitamin,
    Alkaloid,
    None,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::AminoAcid => "Amino Acids",
            Category::Carbohydrate => "Carbohydrates",
            Category::Fat => "Fats",
            Category::Mineral => "Minerals",
            Category::Vitamin => "Vitamins",
            Category::Alkaloid => "Alkaloids",
            Category::None => "General",
        }
    }
}

/// Static definition of a nutrient
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NutrientDef {
    pub nutrient: Nutrient,
    /// Stable data identifier used in food files and DRI files
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub category: Category,
}

impl NutrientDef {
    /// Column header such as `Cholesterol [mg]`
    pub fn header_label(&self) -> String {
        format!("{} [{}]", self.label, self.unit.symbol)
    }
}

macro_rules! nutrient_catalog {
    ($( $variant:ident => ($key:literal, $label:literal, $unit:ident, $category:ident) ),+ $(,)?) => {
        /// Catalog nutrient, usable as a slot index into nutrient vectors
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Nutrient {
            $( $variant ),+
        }

        /// Number of nutrients in the catalog
        pub const NUTRIENT_COUNT: usize = [$( Nutrient::$variant ),+].len();

        /// All nutrient definitions in catalog order
        pub static NUTRIENTS: [NutrientDef; NUTRIENT_COUNT] = [
            $(
                NutrientDef {
                    nutrient: Nutrient::$variant,
                    key: $key,
                    label: $label,
                    unit: $unit,
                    category: Category::$category,
                }
            ),+
        ];
    };
}

nutrient_catalog! {
    Energy => ("energy", "Energy", KILOCALORIE, None),
    Water => ("water", "Water", GRAM, None),
    Fat => ("fat", "Fat", GRAM, Fat),
    MonoUnsaturated => ("mono-unsaturated", "MonoUnsaturated", GRAM, Fat),
    PolyUnsaturated => ("poly-unsaturated", "PolyUnsaturated", GRAM, Fat),
    Saturated => ("saturated", "Saturated", GRAM, Fat),
    Trans => ("trans", "Trans", GRAM, Fat),
    Cholesterol => ("cholesterol", "Cholesterol", MILLIGRAM, Fat),
    Protein => ("protein", "Protein", GRAM, Protein),
    Carbohydrate => ("carbohydrate", "Carbohydrate", GRAM, Carbohydrate),
    Fiber => ("fiber", "Fiber", GRAM, Carbohydrate),
    Sugar => ("sugar", "Sugar", GRAM, Carbohydrate),
    Starch => ("starch", "Starch", GRAM, Carbohydrate),
    Sucrose => ("sucrose", "Sucrose", GRAM, Carbohydrate),
    Glucose => ("glucose", "Glucose", GRAM, Carbohydrate),
    Fructose => ("fructose", "Fructose", GRAM, Carbohydrate),
    Lactose => ("lactose", "Lactose", GRAM, Carbohydrate),
    Maltose => ("maltose", "Maltose", GRAM, Carbohydrate),
    Galactose => ("galactose", "Galactose", GRAM, Carbohydrate),
    // minerals
    Calcium => ("calcium", "Calcium", MILLIGRAM, Mineral),
    Copper => ("copper", "Copper", MICROGRAM, Mineral),
    Iron => ("iron", "Iron", MILLIGRAM, Mineral),
    Magnesium => ("magnesium", "Magnesium", MILLIGRAM, Mineral),
    Manganese => ("manganese", "Manganese", MILLIGRAM, Mineral),
    Molybdenum => ("molybdenum", "Molybdenum", MICROGRAM, Mineral),
    Phosphorus => ("phosphorus", "Phosphorus", MILLIGRAM, Mineral),
    Potassium => ("potassium", "Potassium", MILLIGRAM, Mineral),
    Selenium => ("selenium", "Selenium", MICROGRAM, Mineral),
    Sodium => ("sodium", "Sodium", MILLIGRAM, Mineral),
    Zinc => ("zinc", "Zinc", MILLIGRAM, Mineral),
    // vitamins
    VitaminA => ("vitamin-a", "Vitamin A", MICROGRAM, Vitamin),
    Retinol => ("retinol", "Retinol (A1)", MICROGRAM, Vitamin),
    Thiamin => ("thiamin", "Thiamin (B1)", MILLIGRAM, Vitamin),
    Riboflavin => ("riboflavin", "Riboflavin (B2)", MILLIGRAM, Vitamin),
    Niacin => ("niacin", "Niacin (B3)", MILLIGRAM, Vitamin),
    PantothenicAcid => ("pantothenic-acid", "Pantothenic Acid (B5)", MILLIGRAM, Vitamin),
    VitaminB6 => ("vitamin-b6", "Vitamin B6", MILLIGRAM, Vitamin),
    Biotin => ("biotin", "Biotin (B7)", MICROGRAM, Vitamin),
    Folate => ("folate", "Folate (B9)", MICROGRAM, Vitamin),
    FolicAcid => ("folic-acid", "Folic Acid", MICROGRAM, Vitamin),
    VitaminB12 => ("vitamin-b12", "Vitamin B12", MICROGRAM, Vitamin),
    Choline => ("choline", "Choline", MILLIGRAM, Vitamin),
    VitaminC => ("vitamin-c", "Vitamin C", MILLIGRAM, Vitamin),
    VitaminD => ("vitamin-d", "Vitamin D", MICROGRAM, Vitamin),
    VitaminE => ("vitamin-e", "Vitamin E", MILLIGRAM, Vitamin),
    Phylloquinone => ("phylloquinone", "Phylloquinone (K1)", MICROGRAM, Vitamin),
    Menaquinone => ("menaquinone", "Menaquinone (K2)", MICROGRAM, Vitamin),
    // essential amino acids
    Histidine => ("histidine", "Histidine", MILLIGRAM, AminoAcid),
    Isoleucine => ("isoleucine", "Isoleucine", MILLIGRAM, AminoAcid),
    Leucine => ("leucine", "Leucine", MILLIGRAM, AminoAcid),
    Lysine => ("lysine", "Lysine", MILLIGRAM, AminoAcid),
    Methionine => ("methionine", "Methionine", MILLIGRAM, AminoAcid),
    Phenylalanine => ("phenylalanine", "Phenylalanine", MILLIGRAM, AminoAcid),
    Threonine => ("threonine", "Threonine", MILLIGRAM, AminoAcid),
    Tryptophan => ("tryptophan", "Tryptophan", MILLIGRAM, AminoAcid),
    Valine => ("valine", "Valine", MILLIGRAM, AminoAcid),
    // non-essential amino acids
    Arginine => ("arginine", "Arginine", MILLIGRAM, AminoAcid),
    Cystine => ("cystine", "Cystine", MILLIGRAM, AminoAcid),
    Glycine => ("glycine", "Glycine", MILLIGRAM, AminoAcid),
    Proline => ("proline", "Proline", MILLIGRAM, AminoAcid),
    Tyrosine => ("tyrosine", "Tyrosine", MILLIGRAM, AminoAcid),
    Alanine => ("alanine", "Alanine", MILLIGRAM, AminoAcid),
    AsparticAcid => ("aspartic-acid", "Aspartic Acid", MILLIGRAM, AminoAcid),
    GlutamicAcid => ("glutamic-acid", "Glutamic Acid", MILLIGRAM, AminoAcid),
    Serine => ("serine", "Serine", MILLIGRAM, AminoAcid),
    Hydroxyproline => ("hydroxyproline", "Hydroxyproline", MILLIGRAM, AminoAcid),
    // alkaloids
    Caffeine => ("caffeine", "Caffeine", MILLIGRAM, Alkaloid),
    Theobromine => ("theobromine", "Theobromine", MILLIGRAM, Alkaloid),
}

impl Nutrient {
    /// Slot of this nutrient in a nutrient vector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn def(self) -> &'static NutrientDef {
        &NUTRIENTS[self.index()]
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn category(self) -> Category {
        self.def().category
    }

    /// Look up a nutrient by its data identifier
    pub fn from_key(key: &str) -> Option<Self> {
        NUTRIENTS
            .iter()
            .find(|def| def.key == key)
            .map(|def| def.nutrient)
    }

    /// Iterate every nutrient in catalog order
    pub fn all() -> impl Iterator<Item = Nutrient> {
        NUTRIENTS.iter().map(|def| def.nutrient)
    }
}

impl Serialize for Nutrient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}
