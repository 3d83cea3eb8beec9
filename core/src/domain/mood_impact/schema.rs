use serde_json::json;

/// Returns the JSON schema for personalized mood impact LLM responses
pub fn get_personalized_mood_impact_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "personalizedMoodImpact": {
                "type": "string",
                "description": "Explanation of the food impact on the user mood, based on both nutritional data and mood score."
            }
        },
        "required": ["personalizedMoodImpact"]
    })
}
