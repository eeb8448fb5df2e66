use crate::core::{
    activity::activity_section,
    assessment::assess,
    development::development_section,
    exercise::exercise_section,
    nutrition::nutrition_section,
};
use crate::models::{Assessment, AssessmentThresholds, BabyProfile, Recommendations};

/// Advice generator - turns a baby profile into the four advice sections
///
/// # Pipeline
/// 1. Assessment (age stage, weight ratio, sleep band, health keywords)
/// 2. Section rendering (nutrition, activity, development, exercise)
#[derive(Debug, Clone)]
pub struct Advisor {
    thresholds: AssessmentThresholds,
}

impl Advisor {
    pub fn new(thresholds: AssessmentThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: AssessmentThresholds::default(),
        }
    }

    pub fn thresholds(&self) -> &AssessmentThresholds {
        &self.thresholds
    }

    pub fn assess(&self, profile: &BabyProfile) -> Assessment {
        assess(profile, &self.thresholds)
    }

    /// Generate recommendations from an existing assessment
    pub fn render(&self, profile: &BabyProfile, assessment: &Assessment) -> Recommendations {
        Recommendations {
            food: nutrition_section(profile, assessment),
            activity: activity_section(profile, assessment),
            development: development_section(profile, assessment),
            exercise: exercise_section(profile, assessment),
        }
    }

    /// Generate personalized recommendations for a profile
    pub fn recommend(&self, profile: &BabyProfile) -> Recommendations {
        let assessment = self.assess(profile);

        tracing::debug!(
            "Assessed {}-month profile: stage={:?}, weight={:?}, sleep={:?}",
            profile.age,
            assessment.age_stage,
            assessment.weight_status,
            assessment.sleep_status
        );

        self.render(profile, &assessment)
    }

    /// Generate recommendations when only the age is known
    pub fn recommend_for_age(&self, age: u8) -> Recommendations {
        self.recommend(&BabyProfile::for_age(age))
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
