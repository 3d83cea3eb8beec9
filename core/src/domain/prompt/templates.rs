use crate::domain::prompt::entities::PromptTemplate;

pub const FOOD_IMAGE_ANALYSIS_PROMPT: PromptTemplate = PromptTemplate::new(
    "analyzeFoodImagePrompt",
    "1",
    "You are an AI assistant specialized in analyzing food images and providing nutritional information.

Analyze the food in the image and identify the food items. Also provide estimated calories, protein, carbs and fat.
Analyze the probable impact on the user's mood.

The image is attached as {{mime_type}}.
",
);

pub const NUTRITIONAL_ANALYSIS_PROMPT: PromptTemplate = PromptTemplate::new(
    "nutritionalAnalysisPrompt",
    "1",
    "You are an expert nutritionist. Given the name of a food item, you will provide a detailed nutritional analysis, including calories, macronutrients (protein, carbs, fat), and micronutrients (vitamins and minerals if available).

Food Item: {{food_name}}

Provide the analysis in JSON format, strictly adhering to the output schema. Ensure all numeric values are numbers, not strings.
",
);

pub const PERSONALIZED_MOOD_IMPACT_PROMPT: PromptTemplate = PromptTemplate::new(
    "personalizedMoodImpactPrompt",
    "1",
    "You are an AI assistant that analyzes the relationship between food and mood.

You will receive a description of the food consumed, its nutritional data, and the user's self-reported mood score after eating the food.

Based on this information, determine the personalized mood impact of the food on the user, combining nutritional analysis with the user's subjective experience.

Food Description: {{food_description}}
Mood Score: {{mood_score}}
Nutrition Data: {{nutrition_data}}

Explain how the food likely affected the user's mood, considering both the nutritional content and the user-reported mood score.
",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_declare_expected_placeholders() {
        assert_eq!(FOOD_IMAGE_ANALYSIS_PROMPT.placeholders(), vec!["mime_type"]);
        assert_eq!(NUTRITIONAL_ANALYSIS_PROMPT.placeholders(), vec!["food_name"]);
        assert_eq!(
            PERSONALIZED_MOOD_IMPACT_PROMPT.placeholders(),
            vec!["food_description", "mood_score", "nutrition_data"]
        );
    }
}
