use crate::domain::{
    action::ports::ActionService,
    common::entities::app_errors::CoreError,
    food_analysis::entities::FoodAnalysis,
    mood_impact::{
        entities::PersonalizedMoodImpact,
        value_objects::{DEFAULT_MOOD_SCORE, PersonalizedMoodImpactInput, clamp_mood_score},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Destructive,
}

/// Short message surfaced to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notice {
    pub const NO_IMAGE_SELECTED: Notice = Notice {
        kind: NoticeKind::Destructive,
        title: "No image selected",
        description: "Please select an image of your food first.",
    };

    pub const ANALYSIS_FAILED: Notice = Notice {
        kind: NoticeKind::Destructive,
        title: "Analysis Failed",
        description: "Could not analyze the food image. Please try again.",
    };

    pub const PERSONALIZATION_FAILED: Notice = Notice {
        kind: NoticeKind::Destructive,
        title: "Personalization Failed",
        description: "Could not generate personalized insight. Please try again.",
    };

    pub const PERSONALIZED_INSIGHT: Notice = Notice {
        kind: NoticeKind::Info,
        title: "Personalized Insight!",
        description: "We've analyzed your mood input.",
    };
}

/// Ephemeral state of one dashboard visit. Nothing here outlives the
/// session; the loading flags only guard against double submission.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSession {
    preview: Option<String>,
    analysis: Option<FoodAnalysis>,
    personalized_impact: Option<PersonalizedMoodImpact>,
    is_loading: bool,
    is_personalizing: bool,
    mood: i32,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self {
            preview: None,
            analysis: None,
            personalized_impact: None,
            is_loading: false,
            is_personalizing: false,
            mood: DEFAULT_MOOD_SCORE,
        }
    }
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn analysis(&self) -> Option<&FoodAnalysis> {
        self.analysis.as_ref()
    }

    pub fn personalized_impact(&self) -> Option<&PersonalizedMoodImpact> {
        self.personalized_impact.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_personalizing(&self) -> bool {
        self.is_personalizing
    }

    pub fn mood(&self) -> i32 {
        self.mood
    }

    /// The scan control is usable only with a preview and no scan in flight.
    pub fn can_scan(&self) -> bool {
        self.preview.is_some() && !self.is_loading
    }

    pub fn can_personalize(&self) -> bool {
        self.analysis.is_some() && !self.is_personalizing
    }

    pub fn select_image(&mut self, data_uri: String) {
        self.preview = Some(data_uri);
        self.analysis = None;
        self.personalized_impact = None;
    }

    pub fn set_mood(&mut self, score: i32) {
        self.mood = clamp_mood_score(score);
    }

    /// Start a scan and hand back the image to analyze. `Ok(None)` while a
    /// scan is already in flight; the running one keeps its state.
    pub fn begin_scan(&mut self) -> Result<Option<String>, Notice> {
        let preview = self.preview.clone().ok_or(Notice::NO_IMAGE_SELECTED)?;
        if self.is_loading {
            return Ok(None);
        }

        self.is_loading = true;
        self.analysis = None;
        self.personalized_impact = None;

        Ok(Some(preview))
    }

    pub fn complete_scan(&mut self, result: Result<FoodAnalysis, CoreError>) -> Option<Notice> {
        self.is_loading = false;

        match result {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                None
            }
            Err(e) => {
                tracing::error!("Food image analysis failed: {}", e);
                Some(Notice::ANALYSIS_FAILED)
            }
        }
    }

    /// Start personalization from the current analysis and mood. `None`
    /// when there is nothing to personalize yet or a call is in flight.
    pub fn begin_personalize(&mut self) -> Option<PersonalizedMoodImpactInput> {
        if self.is_personalizing {
            return None;
        }
        let analysis = self.analysis.as_ref()?;
        let input = PersonalizedMoodImpactInput::from_analysis(analysis, self.mood);

        self.is_personalizing = true;
        Some(input)
    }

    pub fn complete_personalize(
        &mut self,
        result: Result<PersonalizedMoodImpact, CoreError>,
    ) -> Notice {
        self.is_personalizing = false;

        match result {
            Ok(impact) => {
                self.personalized_impact = Some(impact);
                Notice::PERSONALIZED_INSIGHT
            }
            Err(e) => {
                tracing::error!("Personalized mood impact failed: {}", e);
                Notice::PERSONALIZATION_FAILED
            }
        }
    }

    pub async fn scan<A: ActionService>(&mut self, actions: &A) -> Option<Notice> {
        let data_uri = match self.begin_scan() {
            Ok(Some(data_uri)) => data_uri,
            Ok(None) => return None,
            Err(notice) => return Some(notice),
        };

        let result = actions.analyze_food_image_action(data_uri).await;
        self.complete_scan(result)
    }

    pub async fn personalize<A: ActionService>(&mut self, actions: &A) -> Option<Notice> {
        let input = self.begin_personalize()?;

        let result = actions.get_personalized_mood_impact_action(input).await;
        Some(self.complete_personalize(result))
    }
}
