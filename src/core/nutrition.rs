use crate::models::{AgeStage, Assessment, BabyProfile, FeedingMethod, Gender, WeightStatus};

/// Render the nutrition plan
pub fn nutrition_section(profile: &BabyProfile, assessment: &Assessment) -> String {
    let age = profile.age;
    let mut text = format!(
        "🍼 {}专属营养方案（{}个月）\n\n",
        profile.gender.honorific(),
        age
    );

    let gender_advice = match profile.gender {
        Gender::Male => "男宝宝新陈代谢较快，建议适当增加蛋白质和能量摄入，支持活跃的身体发育",
        Gender::Female => "女宝宝对铁质需求较高，建议多食用富含铁的食物，如强化米粉、瘦肉泥等",
    };
    text.push_str(&format!("#性别特点\n{}\n\n", gender_advice));

    let (heading, bullets): (&str, [&str; 4]) = match assessment.age_stage {
        AgeStage::Infant => (
            "初期辅食",
            [
                "首选强化铁米粉，每天1-2次",
                "单一蔬菜泥：胡萝卜、南瓜、红薯（轮换尝试）",
                "水果泥：苹果、香蕉、梨（少量开始）",
                "观察期：每种新食物试3-5天",
            ],
        ),
        AgeStage::Early => (
            "丰富辅食",
            [
                "蛋白质：蛋黄、鱼肉泥、豆腐泥",
                "谷物：软烂面条、小米粥、燕麦糊",
                "蔬菜：西兰花、菠菜、胡萝卜（剁碎）",
                "水果：香蕉块、蒸苹果、牛油果",
            ],
        ),
        AgeStage::Toddler => (
            "家庭饮食过渡",
            [
                "主食：软米饭、面条、小馄饨",
                "蛋白质：全蛋、鱼肉、瘦肉丁、豆制品",
                "蔬果：各种应季蔬菜水果，少盐少糖",
                "奶制品：配方奶或纯牛奶300-500ml",
            ],
        ),
        AgeStage::Preschool => (
            "均衡膳食",
            [
                "三餐规律：早中晚正餐+上下午加餐",
                "食物多样：谷类、蛋白质、蔬菜、水果均衡",
                "培养习惯：自主进食、细嚼慢咽",
                "健康零食：坚果、酸奶、水果",
            ],
        ),
    };
    text.push_str(&format!("#{}（{}个月）\n", heading, age));
    push_bullets(&mut text, &bullets);
    text.push('\n');

    match assessment.weight_status {
        WeightStatus::Underweight => {
            text.push_str("#增重方案\n⚠️ 当前体重偏轻，建议：\n");
            push_bullets(
                &mut text,
                &[
                    "增加餐次：每天5-6次，少量多餐",
                    "高能量食物：牛油果、坚果酱、全脂酸奶",
                    "优质蛋白：鸡蛋、鱼肉、豆制品每天都要有",
                    "健康脂肪：橄榄油、亚麻籽油适量添加",
                ],
            );
            text.push('\n');
        }
        WeightStatus::Overweight => {
            text.push_str("#控重方案\n⚠️ 当前体重偏重，建议：\n");
            push_bullets(
                &mut text,
                &[
                    "控制总量：适量减少每餐分量",
                    "增加蔬菜：每餐蔬菜占一半以上",
                    "减少油脂：少油少盐，清蒸水煮为主",
                    "避免高糖：果汁、糖果、甜点要限制",
                ],
            );
            text.push('\n');
        }
        WeightStatus::Normal => {}
    }

    text.push_str("#喂养指导\n");
    match profile.feeding_method {
        FeedingMethod::Breastfeeding => push_bullets(
            &mut text,
            &[
                "母乳喂养：继续保持，是最佳营养来源",
                "辅食搭配：母乳后1小时再喂辅食",
                "建议继续：世卫组织推荐母乳喂养至2岁",
            ],
        ),
        FeedingMethod::Formula => {
            let volume = if age < 12 { "每天600-800ml" } else { "每天400-600ml" };
            text.push_str("• 配方奶：选择适合月龄的配方，按说明冲调\n");
            text.push_str(&format!("• 奶量控制：{}\n", volume));
            text.push_str("• 辅食配合：先喂辅食再喂奶，培养食欲\n");
        }
        FeedingMethod::Mixed => push_bullets(
            &mut text,
            &[
                "混合喂养：优先母乳，配方奶补充",
                "规律安排：固定时间喂母乳和配方奶",
                "逐步调整：根据母乳量调整配方奶用量",
            ],
        ),
    }
    text.push('\n');

    let health = &assessment.health;
    if health.needs_special_care {
        text.push_str("#特殊照护\n");
        if health.has_eczema {
            text.push_str("• 湿疹护理：避免易致敏食物，选择低敏配方\n");
        }
        if health.has_digestive_issues {
            text.push_str("• 消化调理：选择易消化食物，少量多餐\n");
        }
        if !health.allergens.is_empty() {
            text.push_str(&format!(
                "• 过敏管理：严格避免{}等过敏原\n",
                health.allergens.join("、")
            ));
        }
        text.push_str("• 定期复查：及时咨询儿科医生调整方案\n\n");
    }

    text
}

/// Append one `•` line per bullet
pub(crate) fn push_bullets(text: &mut String, bullets: &[&str]) {
    for bullet in bullets {
        text.push_str("• ");
        text.push_str(bullet);
        text.push('\n');
    }
}
