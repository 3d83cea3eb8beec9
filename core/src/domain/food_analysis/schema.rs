use serde_json::json;

/// Returns the JSON schema for food image analysis LLM responses
pub fn get_food_image_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "foodItems": {
                "type": "array",
                "description": "A list of identified food items in the image.",
                "items": { "type": "string" }
            },
            "calories": {
                "type": "number",
                "description": "The total estimated calories."
            },
            "protein": {
                "type": "number",
                "description": "The total protein in grams."
            },
            "carbs": {
                "type": "number",
                "description": "The total carbohydrates in grams."
            },
            "fat": {
                "type": "number",
                "description": "The total fat in grams."
            },
            "moodImpact": {
                "type": "string",
                "description": "A description of the likely effect of the food on the user's mood."
            }
        },
        "required": ["foodItems"]
    })
}
