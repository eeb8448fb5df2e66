use crate::core::nutrition::push_bullets;
use crate::models::{AgeStage, Assessment, BabyProfile, Gender};

const DAILY_PLAN: [&str; 4] = [
    "上午（9-11点）：精细动作 + 认知游戏",
    "下午（3-5点）：语言交流 + 探索活动",
    "晚上（7-8点）：亲子阅读 + 音乐时光",
    "每次15-30分钟，观察宝宝兴趣和疲劳状态",
];

/// Render the cognitive development plan
pub fn development_section(profile: &BabyProfile, assessment: &Assessment) -> String {
    let age = profile.age;
    let mut text = format!("🧠 {}智力开发方案\n\n", profile.gender.honorific());

    let gender_development = match profile.gender {
        Gender::Male => {
            "男宝宝通常在空间认知和大动作方面发展较快，建议多进行积木、拼图和运动类活动"
        }
        Gender::Female => {
            "女宝宝通常在语言和精细动作方面发展较早，建议多进行对话、阅读和手工活动"
        }
    };
    text.push_str(&format!("#性别特点\n{}\n\n", gender_development));

    let (heading, bullets): (&str, [&str; 4]) = match assessment.age_stage {
        AgeStage::Infant => (
            "基础认知建立",
            [
                "注意力训练：追视移动物体、注视人脸",
                "记忆萌芽：重复游戏、熟悉的声音和图像",
                "因果认知：按压发声玩具、摇动产生声响",
                "空间感知：不同角度观察、远近距离体验",
            ],
        ),
        AgeStage::Early => (
            "认知能力发展",
            [
                "物体永久性：躲猫猫、寻找隐藏物品",
                "分类概念：大小不同的物品、颜色区分",
                "模仿学习：简单动作、声音、表情模仿",
                "解决问题：够取远处物品、移除障碍物",
            ],
        ),
        AgeStage::Toddler => (
            "逻辑思维萌芽",
            [
                "分类排序：按颜色、形状、大小分类",
                "数量概念：1-3的点数、多少比较",
                "时间概念：先后顺序、日常作息规律",
                "推理能力：简单的如果-那么关系",
            ],
        ),
        AgeStage::Preschool => (
            "复杂认知发展",
            [
                "抽象思维：符号认知、想象游戏",
                "逻辑推理：多步骤问题解决",
                "记忆策略：分类记忆、联想记忆",
                "创造性思维：开放性问题、多种解决方案",
            ],
        ),
    };
    text.push_str(&format!("#{}（{}个月）\n", heading, age));
    push_bullets(&mut text, &bullets);
    text.push('\n');

    text.push_str("#每日训练计划\n");
    push_bullets(&mut text, &DAILY_PLAN);
    text.push('\n');

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assessment::assess;
    use crate::models::AssessmentThresholds;

    #[test]
    fn test_development_stage_and_plan() {
        let mut profile = BabyProfile::for_age(9);
        profile.gender = Gender::Female;
        let assessment = assess(&profile, &AssessmentThresholds::default());

        let text = development_section(&profile, &assessment);
        assert!(text.starts_with("🧠 小公主智力开发方案"));
        assert!(text.contains("女宝宝通常在语言和精细动作方面发展较早"));
        assert!(text.contains("#认知能力发展（9个月）"));
        assert!(text.contains("#每日训练计划"));
        assert!(text.ends_with("疲劳状态\n\n"));
    }

    #[test]
    fn test_stage_headings_follow_age() {
        let thresholds = AssessmentThresholds::default();
        for (age, heading) in [
            (3, "#基础认知建立（3个月）"),
            (18, "#逻辑思维萌芽（18个月）"),
            (40, "#复杂认知发展（40个月）"),
        ] {
            let profile = BabyProfile::for_age(age);
            let text = development_section(&profile, &assess(&profile, &thresholds));
            assert!(text.contains(heading), "missing {} for {} months", heading, age);
            assert!(text.contains("男宝宝通常在空间认知和大动作方面发展较快"));
        }
    }
}
