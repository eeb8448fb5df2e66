use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{BabyProfile, Recommendations};

pub const REPORT_TITLE: &str = "宝宝个性化育儿建议";
pub const DISCLAIMER: &str = "注意：本建议仅供参考，如有特殊情况请咨询专业医生。";

/// Text copied to the clipboard when sharing results
pub fn share_text(recs: &Recommendations) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n{}\n\n{}",
        REPORT_TITLE, recs.food, recs.activity, recs.development, recs.exercise
    )
}

/// Plain-text report offered as a download from the results view
///
/// Blank free-text fields are left out of the baby summary.
pub fn render_report(
    profile: &BabyProfile,
    recs: &Recommendations,
    generated_at: DateTime<Utc>,
) -> String {
    let mut text = format!(
        "{}\n生成时间：{} UTC\n\n宝宝信息：\n",
        REPORT_TITLE,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    text.push_str(&format!("- 年龄：{}个月\n", profile.age));
    text.push_str(&format!("- 性别：{}\n", profile.gender.label()));
    text.push_str(&format!("- 体重：{}kg\n", profile.weight));
    text.push_str(&format!("- 身高：{}cm\n", profile.height));
    text.push_str(&format!("- 喂养方式：{}\n", profile.feeding_method.label()));
    text.push_str(&format!("- 睡眠时间：{}小时/天\n", profile.sleep_hours));

    for (label, value) in [
        ("健康状况", &profile.health_conditions),
        ("过敏史", &profile.allergies),
        ("特殊说明", &profile.notes),
    ] {
        let value = value.trim();
        if !value.is_empty() {
            text.push_str(&format!("- {}：{}\n", label, value));
        }
    }

    for section in [&recs.food, &recs.activity, &recs.development, &recs.exercise] {
        text.push('\n');
        text.push_str(section);
        text.push('\n');
    }

    text.push('\n');
    text.push_str(DISCLAIMER);
    text
}

/// Download filename for a report
pub fn report_filename(age: u8, date: NaiveDate) -> String {
    format!("宝宝育儿建议_{}个月_{}.txt", age, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Advisor;
    use chrono::TimeZone;

    #[test]
    fn test_share_text_layout() {
        let recs = Recommendations {
            food: "A".to_string(),
            activity: "B".to_string(),
            development: "C".to_string(),
            exercise: "D".to_string(),
        };
        assert_eq!(share_text(&recs), "宝宝个性化育儿建议\n\nA\n\nB\n\nC\n\nD");
    }

    #[test]
    fn test_report_omits_blank_text_fields() {
        let mut profile = BabyProfile::for_age(8);
        profile.allergies = "牛奶".to_string();
        let recs = Advisor::default().recommend(&profile);
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();

        let report = render_report(&profile, &recs, at);
        assert!(report.contains("生成时间：2026-03-01 09:30:00 UTC\n"));
        assert!(report.contains("- 年龄：8个月"));
        assert!(report.contains("- 性别：男宝宝"));
        assert!(report.contains("- 喂养方式：混合喂养"));
        assert!(report.contains("- 睡眠时间：14小时/天"));
        assert!(report.contains("- 过敏史：牛奶"));
        assert!(!report.contains("健康状况"));
        assert!(!report.contains("特殊说明"));
        assert!(report.contains(&recs.exercise));
        assert!(report.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(report_filename(14, date), "宝宝育儿建议_14个月_2026-10-16.txt");
    }
}
