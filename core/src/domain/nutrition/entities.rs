use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalAnalysis {
    pub calories: f64,
    /// Grams.
    pub protein: f64,
    /// Grams.
    pub carbs: f64,
    /// Grams.
    pub fat: f64,
    /// Nutrient name to amount, units included (e.g. "Vitamin C" -> "8.4 mg").
    #[serde(deserialize_with = "deserialize_micronutrients")]
    pub micronutrients: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct MicronutrientEntry {
    name: String,
    amount: String,
}

/// The model is asked for a list of `{name, amount}` pairs because object
/// schemas need fixed properties; a plain map is accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MicronutrientsWire {
    Map(BTreeMap<String, String>),
    List(Vec<MicronutrientEntry>),
}

fn deserialize_micronutrients<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = MicronutrientsWire::deserialize(deserializer)?;
    Ok(match wire {
        MicronutrientsWire::Map(map) => map,
        MicronutrientsWire::List(entries) => entries
            .into_iter()
            .map(|entry| (entry.name, entry.amount))
            .collect(),
    })
}
