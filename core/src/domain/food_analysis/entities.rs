use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of one image-analysis call. The model may abstain on any numeric
/// estimate, so only the food items are guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    pub food_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Grams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_impact: Option<String>,
}

impl FoodAnalysis {
    /// Food items joined the way they are shown to the user.
    pub fn food_description(&self) -> String {
        self.food_items.join(", ")
    }

    /// One-line macro summary fed to the personalization prompt.
    pub fn nutrition_summary(&self) -> String {
        format!(
            "Calories: {}, Protein: {}g, Carbs: {}g, Fat: {}g",
            display_amount(self.calories),
            display_amount(self.protein),
            display_amount(self.carbs),
            display_amount(self.fat),
        )
    }
}

fn display_amount(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "undefined".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_with_only_food_items() {
        let analysis: FoodAnalysis =
            serde_json::from_str(r#"{"foodItems": ["Apple", "Banana"]}"#).unwrap();
        assert_eq!(analysis.food_items, vec!["Apple", "Banana"]);
        assert_eq!(analysis.calories, None);
        assert_eq!(analysis.mood_impact, None);
    }

    #[test]
    fn test_food_items_are_required() {
        let decoded = serde_json::from_str::<FoodAnalysis>(r#"{"calories": 120}"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn test_serializes_camel_case_and_skips_missing() {
        let analysis = FoodAnalysis {
            food_items: vec!["Oatmeal".to_string()],
            calories: Some(150.0),
            protein: None,
            carbs: None,
            fat: None,
            mood_impact: Some("Steady energy".to_string()),
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "foodItems": ["Oatmeal"],
                "calories": 150.0,
                "moodImpact": "Steady energy"
            })
        );
    }

    #[test]
    fn test_nutrition_summary() {
        let analysis = FoodAnalysis {
            food_items: vec!["Cheeseburger".to_string(), "Fries".to_string()],
            calories: Some(850.0),
            protein: Some(32.5),
            carbs: Some(90.0),
            fat: None,
            mood_impact: None,
        };
        assert_eq!(analysis.food_description(), "Cheeseburger, Fries");
        assert_eq!(
            analysis.nutrition_summary(),
            "Calories: 850, Protein: 32.5g, Carbs: 90g, Fat: undefinedg"
        );
    }
}
