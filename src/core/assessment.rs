use crate::models::{
    AgeStage, Assessment, AssessmentThresholds, BabyProfile, HealthFlags, SleepStatus,
    WeightStatus,
};

/// Allergens recognised in the allergy notes, in reporting order
pub const KNOWN_ALLERGENS: [&str; 4] = ["牛奶", "鸡蛋", "坚果", "海鲜"];

const DIGESTIVE_KEYWORDS: [&str; 3] = ["便秘", "腹泻", "消化"];
const ECZEMA_KEYWORD: &str = "湿疹";

/// Map age in months to a developmental stage
#[inline]
pub fn age_stage(age: u8) -> AgeStage {
    match age {
        0..=5 => AgeStage::Infant,
        6..=11 => AgeStage::Early,
        12..=23 => AgeStage::Toddler,
        _ => AgeStage::Preschool,
    }
}

/// Simplified reference weight (kg) for an age in months
#[inline]
pub fn expected_weight(age: u8) -> f64 {
    let months = age as f64;
    if age < 12 {
        months * 0.5 + 3.5
    } else {
        months * 0.3 + 9.0
    }
}

/// Classify weight by its ratio to the reference weight
///
/// Height is not part of the ratio.
#[inline]
pub fn weight_status(age: u8, weight: f64, thresholds: &AssessmentThresholds) -> WeightStatus {
    let ratio = weight / expected_weight(age);

    if ratio < thresholds.underweight_ratio {
        WeightStatus::Underweight
    } else if ratio > thresholds.overweight_ratio {
        WeightStatus::Overweight
    } else {
        WeightStatus::Normal
    }
}

/// Recommended daily sleep hours for an age in months
#[inline]
pub fn expected_sleep(age: u8) -> f64 {
    match age_stage(age) {
        AgeStage::Infant => 16.0,
        AgeStage::Early => 14.0,
        AgeStage::Toddler => 13.0,
        AgeStage::Preschool => 12.0,
    }
}

/// Classify daily sleep against the recommended band; both bounds are exclusive
#[inline]
pub fn sleep_status(sleep_hours: f64, age: u8, thresholds: &AssessmentThresholds) -> SleepStatus {
    let expected = expected_sleep(age);

    if sleep_hours < expected - thresholds.sleep_deficit_hours {
        SleepStatus::Insufficient
    } else if sleep_hours > expected + thresholds.sleep_excess_hours {
        SleepStatus::Excessive
    } else {
        SleepStatus::Normal
    }
}

/// Scan the free-text health and allergy fields for known keywords
pub fn health_flags(health: &str, allergies: &str) -> HealthFlags {
    let health_lower = health.to_lowercase();
    let allergies_lower = allergies.to_lowercase();

    HealthFlags {
        has_eczema: health_lower.contains(ECZEMA_KEYWORD)
            || allergies_lower.contains(ECZEMA_KEYWORD),
        has_digestive_issues: DIGESTIVE_KEYWORDS
            .iter()
            .any(|keyword| health_lower.contains(keyword)),
        allergens: KNOWN_ALLERGENS
            .iter()
            .filter(|allergen| allergies_lower.contains(*allergen))
            .map(|allergen| allergen.to_string())
            .collect(),
        needs_special_care: !health.trim().is_empty() || !allergies.trim().is_empty(),
    }
}

/// Run every classifier over a profile
pub fn assess(profile: &BabyProfile, thresholds: &AssessmentThresholds) -> Assessment {
    Assessment {
        age_stage: age_stage(profile.age),
        weight_status: weight_status(profile.age, profile.weight, thresholds),
        sleep_status: sleep_status(profile.sleep_hours, profile.age, thresholds),
        health: health_flags(&profile.health_conditions, &profile.allergies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_stage_boundaries() {
        assert_eq!(age_stage(1), AgeStage::Infant);
        assert_eq!(age_stage(5), AgeStage::Infant);
        assert_eq!(age_stage(6), AgeStage::Early);
        assert_eq!(age_stage(11), AgeStage::Early);
        assert_eq!(age_stage(12), AgeStage::Toddler);
        assert_eq!(age_stage(23), AgeStage::Toddler);
        assert_eq!(age_stage(24), AgeStage::Preschool);
        assert_eq!(age_stage(60), AgeStage::Preschool);
    }

    #[test]
    fn test_expected_weight_switches_formula_at_one_year() {
        assert_eq!(expected_weight(10), 8.5);
        assert!((expected_weight(20) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_weight_status() {
        let thresholds = AssessmentThresholds::default();

        // expected 8.5 kg at 10 months
        assert_eq!(weight_status(10, 8.5, &thresholds), WeightStatus::Normal);
        assert_eq!(weight_status(10, 7.0, &thresholds), WeightStatus::Underweight);
        assert_eq!(weight_status(10, 10.0, &thresholds), WeightStatus::Overweight);
    }

    #[test]
    fn test_sleep_status_bounds_are_exclusive() {
        let thresholds = AssessmentThresholds::default();

        // 14 hours expected between 6 and 11 months
        assert_eq!(sleep_status(12.0, 8, &thresholds), SleepStatus::Normal);
        assert_eq!(sleep_status(11.5, 8, &thresholds), SleepStatus::Insufficient);
        assert_eq!(sleep_status(17.0, 8, &thresholds), SleepStatus::Normal);
        assert_eq!(sleep_status(17.5, 8, &thresholds), SleepStatus::Excessive);
    }

    #[test]
    fn test_health_flags() {
        let flags = health_flags("最近有点便秘", "对牛奶和海鲜过敏，有湿疹");

        assert!(flags.has_eczema);
        assert!(flags.has_digestive_issues);
        assert_eq!(flags.allergens, vec!["牛奶", "海鲜"]);
        assert!(flags.needs_special_care);
    }

    #[test]
    fn test_blank_health_text_needs_no_special_care() {
        let flags = health_flags("  ", "");
        assert_eq!(flags, HealthFlags::default());
    }

    #[test]
    fn test_digestive_keywords_ignored_in_allergies() {
        let flags = health_flags("", "腹泻");
        assert!(!flags.has_digestive_issues);
        assert!(flags.needs_special_care);
    }
}
