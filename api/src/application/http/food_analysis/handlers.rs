pub mod analyze_food_image;
pub mod upload_food_image;
