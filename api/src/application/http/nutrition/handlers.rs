pub mod analyze_nutrition;
