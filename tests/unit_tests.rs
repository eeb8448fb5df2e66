// Unit tests for Babycare Advisor

use babycare_advisor::core::{
    age_stage, assess, health_flags, popular_questions, report_filename, share_text,
    sleep_status, weight_status, Advisor, QaEngine,
};
use babycare_advisor::models::{
    AgeStage, AssessmentThresholds, BabyProfile, FeedingMethod, Gender, SleepStatus,
    WeightStatus,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn create_profile(age: u8, gender: Gender, weight: f64, sleep_hours: f64) -> BabyProfile {
    BabyProfile {
        age,
        gender,
        weight,
        height: 70.0,
        feeding_method: FeedingMethod::Breastfeeding,
        sleep_hours,
        health_conditions: String::new(),
        allergies: String::new(),
        notes: String::new(),
    }
}

#[test]
fn test_age_stage_bands() {
    assert_eq!(age_stage(3), AgeStage::Infant);
    assert_eq!(age_stage(9), AgeStage::Early);
    assert_eq!(age_stage(18), AgeStage::Toddler);
    assert_eq!(age_stage(36), AgeStage::Preschool);
}

#[test]
fn test_weight_ratio_thresholds() {
    let thresholds = AssessmentThresholds::default();

    // expected 6.5 kg at 6 months; 85% = 5.525, 115% = 7.475
    assert_eq!(weight_status(6, 5.5, &thresholds), WeightStatus::Underweight);
    assert_eq!(weight_status(6, 5.6, &thresholds), WeightStatus::Normal);
    assert_eq!(weight_status(6, 7.4, &thresholds), WeightStatus::Normal);
    assert_eq!(weight_status(6, 7.5, &thresholds), WeightStatus::Overweight);
}

#[test]
fn test_sleep_bands_by_age() {
    let thresholds = AssessmentThresholds::default();

    // 12 hours expected from 24 months
    assert_eq!(sleep_status(9.5, 30, &thresholds), SleepStatus::Insufficient);
    assert_eq!(sleep_status(10.0, 30, &thresholds), SleepStatus::Normal);
    assert_eq!(sleep_status(15.0, 30, &thresholds), SleepStatus::Normal);
    assert_eq!(sleep_status(15.5, 30, &thresholds), SleepStatus::Excessive);
}

#[test]
fn test_health_flags_digestive_only() {
    let flags = health_flags("消化不好", "");
    assert!(flags.has_digestive_issues);
    assert!(!flags.has_eczema);
    assert!(flags.allergens.is_empty());
    assert!(flags.needs_special_care);
}

#[test]
fn test_assessment_combines_classifiers() {
    let profile = create_profile(4, Gender::Female, 4.0, 12.0);
    let assessment = assess(&profile, &AssessmentThresholds::default());

    assert_eq!(assessment.age_stage, AgeStage::Infant);
    assert_eq!(assessment.weight_status, WeightStatus::Underweight);
    assert_eq!(assessment.sleep_status, SleepStatus::Insufficient);
    assert!(!assessment.health.needs_special_care);
}

#[test]
fn test_breastfeeding_guidance_selected() {
    let profile = create_profile(8, Gender::Male, 7.5, 14.0);
    let recs = Advisor::default().recommend(&profile);

    assert!(recs.food.contains("• 母乳喂养：继续保持，是最佳营养来源"));
    assert!(!recs.food.contains("奶量控制"));
}

#[test]
fn test_special_care_block_lists_each_finding() {
    let mut profile = create_profile(10, Gender::Female, 8.5, 14.0);
    profile.health_conditions = "湿疹，偶尔腹泻".to_string();
    profile.allergies = "海鲜".to_string();

    let recs = Advisor::default().recommend(&profile);
    assert!(recs.food.contains("#特殊照护"));
    assert!(recs.food.contains("• 湿疹护理"));
    assert!(recs.food.contains("• 消化调理"));
    assert!(recs.food.contains("• 过敏管理：严格避免海鲜等过敏原"));
}

#[test]
fn test_qa_answer_shape() {
    let qa = QaEngine::new().unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let answer = qa.answer("2岁宝宝吃饭", &mut rng);
    assert_eq!(answer.category, "幼儿期");
    assert_eq!(answer.question, "2岁宝宝吃饭");
    assert!(!answer.tips.is_empty());
    assert!(!answer.related_questions.is_empty());
}

#[test]
fn test_qa_health_topic() {
    let qa = QaEngine::new().unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let answer = qa.answer("宝宝便秘怎么办", &mut rng);
    assert_eq!(answer.category, "健康管理");
}

#[test]
fn test_qa_development_topic() {
    let qa = QaEngine::new().unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let answer = qa.answer("怎样长牙齿", &mut rng);
    assert_eq!(answer.category, "发育指导");
}

#[test]
fn test_popular_questions_are_answerable() {
    let qa = QaEngine::new().unwrap();
    let mut rng = StdRng::seed_from_u64(9);

    for question in popular_questions() {
        let answer = qa.answer(&question, &mut rng);
        assert!(!answer.answer.is_empty(), "No answer for {}", question);
    }
}

#[test]
fn test_share_text_and_filename() {
    let recs = Advisor::default().recommend_for_age(3);
    let text = share_text(&recs);

    assert!(text.starts_with("宝宝个性化育儿建议\n\n🍼"));
    assert!(text.ends_with(&recs.exercise));

    let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    assert_eq!(report_filename(3, date), "宝宝育儿建议_3个月_2026-01-05.txt");
}

#[test]
fn test_session_store_round_trip_blocking() {
    use babycare_advisor::services::SessionStore;

    let store = SessionStore::new(10, 60);
    let profile = create_profile(14, Gender::Male, 12.0, 13.0);
    let recs = Advisor::default().recommend(&profile);
    let id = uuid::Uuid::new_v4();

    tokio_test::block_on(async {
        store.save(id, &profile, &recs).await.unwrap();
        let (stored_profile, stored_recs) = store.load(id).await.unwrap();
        assert_eq!(stored_profile, profile);
        assert_eq!(stored_recs, recs);
        assert_eq!(store.stats().await.entries, 2);
    });
}
