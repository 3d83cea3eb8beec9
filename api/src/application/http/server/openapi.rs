use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, health::HealthApiDoc,
    mood_impact::router::MoodImpactApiDoc, nutrition::router::NutritionApiDoc,
    profile::router::ProfileApiDoc, report::router::ReportApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriMood API"
    ),
    nest(
        (path = "/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/nutrition", api = NutritionApiDoc),
        (path = "/mood-impact", api = MoodImpactApiDoc),
        (path = "/reports", api = ReportApiDoc),
        (path = "/profile", api = ProfileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_nested_under_their_module() {
        let openapi = ApiDoc::openapi();
        let paths: Vec<&String> = openapi.paths.paths.keys().collect();

        for expected in [
            "/food-analysis/image",
            "/food-analysis/image/upload",
            "/nutrition/analyze",
            "/mood-impact/personalize",
            "/reports/weekly",
            "/reports/weekly/mood",
            "/profile/me",
            "/health/live",
            "/health/ready",
        ] {
            assert!(
                openapi.paths.paths.contains_key(expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
