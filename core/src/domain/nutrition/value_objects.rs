#[derive(Debug, Clone)]
pub struct NutritionalAnalysisInput {
    pub food_name: String,
}
