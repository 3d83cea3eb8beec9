pub mod personalize_mood_impact;
