use serde_json::json;

/// Returns the JSON schema for nutritional analysis LLM responses
pub fn get_nutritional_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "calories": {
                "type": "number",
                "description": "The total calories in the food item."
            },
            "protein": {
                "type": "number",
                "description": "The amount of protein in grams."
            },
            "carbs": {
                "type": "number",
                "description": "The amount of carbohydrates in grams."
            },
            "fat": {
                "type": "number",
                "description": "The amount of fat in grams."
            },
            "micronutrients": {
                "type": "array",
                "description": "Micronutrients, each with the nutrient name and the amount including units.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "amount": { "type": "string" }
                    },
                    "required": ["name", "amount"]
                }
            }
        },
        "required": ["calories", "protein", "carbs", "fat", "micronutrients"]
    })
}
