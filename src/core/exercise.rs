use crate::core::nutrition::push_bullets;
use crate::models::{AgeStage, Assessment, BabyProfile, Gender, WeightStatus};

const SAFETY_RULES: [&str; 4] = [
    "环境检查：确保活动区域安全无害",
    "适度原则：观察疲劳信号，及时休息",
    "循序渐进：从简单到复杂，逐步提升",
    "陪伴监护：始终有成人在旁保护",
];

/// Render the motor development plan
pub fn exercise_section(profile: &BabyProfile, assessment: &Assessment) -> String {
    let age = profile.age;
    let mut text = format!("🏃‍♀️ {}运动发展方案\n\n", profile.gender.honorific());

    match assessment.weight_status {
        WeightStatus::Underweight => {
            text.push_str("#体重管理运动\n⚠️ 体重偏轻，运动重点：\n");
            push_bullets(
                &mut text,
                &[
                    "适度运动：避免过度消耗体力",
                    "肌肉发展：重点进行力量性活动",
                    "食欲促进：适量活动刺激食欲",
                ],
            );
            text.push('\n');
        }
        WeightStatus::Overweight => {
            text.push_str("#体重管理运动\n⚠️ 体重偏重，运动重点：\n");
            push_bullets(
                &mut text,
                &[
                    "增加活动：每天至少1小时身体活动",
                    "有氧运动：爬行、走路、游戏等",
                    "家庭参与：全家一起运动增加趣味",
                ],
            );
            text.push('\n');
        }
        WeightStatus::Normal => {}
    }

    let (heading, bullets): (&str, [&str; 4]) = match assessment.age_stage {
        AgeStage::Infant => (
            "基础运动发展",
            [
                "颈部力量：俯卧抬头，每天累计30分钟",
                "核心肌群：支撑坐立，逐渐减少辅助",
                "四肢协调：蹬腿运动、抓握练习",
                "感觉统合：不同姿势体验、平衡刺激",
            ],
        ),
        AgeStage::Early => (
            "运动技能发展",
            [
                "爬行训练：创造动机、设置目标",
                "站立准备：扶站练习、腿部力量",
                "精细动作：拇指对指、双手协调",
                "平衡发展：坐位取物、姿势转换",
            ],
        ),
        AgeStage::Toddler => (
            "运动能力提升",
            [
                "步行练习：独立行走、变换方向",
                "跑跳动作：原地跳跃、小跑步",
                "球类游戏：滚球、踢球、投掷",
                "攀爬活动：安全爬高、钻爬游戏",
            ],
        ),
        AgeStage::Preschool => (
            "综合运动能力",
            [
                "复杂动作：单脚站立、倒退走",
                "技能组合：跑跳结合、多步骤动作",
                "器械运动：滑梯、秋千、平衡木",
                "团体游戏：追逐游戏、模仿操",
            ],
        ),
    };
    text.push_str(&format!("#{}（{}个月）\n", heading, age));
    push_bullets(&mut text, &bullets);
    text.push('\n');

    match profile.gender {
        Gender::Male => {
            text.push_str("#男宝运动特色\n");
            push_bullets(
                &mut text,
                &[
                    "力量训练：推拉玩具、攀爬活动",
                    "空间运动：投掷、踢球、跳跃",
                    "冒险精神：适度挑战、探索新环境",
                ],
            );
        }
        Gender::Female => {
            text.push_str("#女宝运动特色\n");
            push_bullets(
                &mut text,
                &[
                    "协调性：舞蹈动作、韵律活动",
                    "精确性：精细动作、平衡训练",
                    "美感训练：优美姿态、表达性动作",
                ],
            );
        }
    }
    text.push('\n');

    text.push_str("#运动安全\n");
    push_bullets(&mut text, &SAFETY_RULES);
    text.push('\n');

    text
}
