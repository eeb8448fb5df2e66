use serde::{Deserialize, Serialize};

/// Baby gender as submitted by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// How the advice text addresses the child
    pub fn honorific(&self) -> &'static str {
        match self {
            Gender::Male => "小王子",
            Gender::Female => "小公主",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "男宝宝",
            Gender::Female => "女宝宝",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedingMethod {
    Breastfeeding,
    Formula,
    Mixed,
}

impl FeedingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            FeedingMethod::Breastfeeding => "母乳喂养",
            FeedingMethod::Formula => "配方奶喂养",
            FeedingMethod::Mixed => "混合喂养",
        }
    }
}

/// Flat input record describing one baby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyProfile {
    /// Age in months
    pub age: u8,
    pub gender: Gender,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    #[serde(rename = "feedingMethod")]
    pub feeding_method: FeedingMethod,
    #[serde(rename = "sleepHours")]
    pub sleep_hours: f64,
    #[serde(rename = "healthConditions", default)]
    pub health_conditions: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub notes: String,
}

impl BabyProfile {
    /// Profile used when only the age is known
    ///
    /// Weight follows the under-one-year growth line at every age, so the
    /// weight assessment is only normal below 12 and between 17 and 44 months.
    pub fn for_age(age: u8) -> Self {
        let months = age as f64;
        Self {
            age,
            gender: Gender::Male,
            weight: months * 0.5 + 3.5,
            height: months * 2.0 + 50.0,
            feeding_method: FeedingMethod::Mixed,
            sleep_hours: if age < 6 {
                16.0
            } else if age < 12 {
                14.0
            } else {
                13.0
            },
            health_conditions: String::new(),
            allergies: String::new(),
            notes: String::new(),
        }
    }
}

/// Developmental stage derived from age in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeStage {
    Infant,
    Early,
    Toddler,
    Preschool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightStatus {
    Underweight,
    Normal,
    Overweight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepStatus {
    Insufficient,
    Normal,
    Excessive,
}

/// Keyword findings from the free-text health and allergy fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFlags {
    #[serde(rename = "hasEczema")]
    pub has_eczema: bool,
    #[serde(rename = "hasDigestiveIssues")]
    pub has_digestive_issues: bool,
    pub allergens: Vec<String>,
    #[serde(rename = "needsSpecialCare")]
    pub needs_special_care: bool,
}

/// Everything the section templates branch on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(rename = "ageStage")]
    pub age_stage: AgeStage,
    #[serde(rename = "weightStatus")]
    pub weight_status: WeightStatus,
    #[serde(rename = "sleepStatus")]
    pub sleep_status: SleepStatus,
    pub health: HealthFlags,
}

/// Flat output record: one text block per advice category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub food: String,
    pub activity: String,
    pub development: String,
    pub exercise: String,
}

/// Canned answer returned by the keyword Q&A
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaAnswer {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub tips: Vec<String>,
    #[serde(rename = "relatedQuestions")]
    pub related_questions: Vec<String>,
}

/// Assessment thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentThresholds {
    pub underweight_ratio: f64,
    pub overweight_ratio: f64,
    pub sleep_deficit_hours: f64,
    pub sleep_excess_hours: f64,
}

impl Default for AssessmentThresholds {
    fn default() -> Self {
        Self {
            underweight_ratio: 0.85,
            overweight_ratio: 1.15,
            sleep_deficit_hours: 2.0,
            sleep_excess_hours: 3.0,
        }
    }
}
