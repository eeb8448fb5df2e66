use crate::core::nutrition::push_bullets;
use crate::models::{AgeStage, Assessment, BabyProfile, Gender, SleepStatus};

/// Render the daily routine and interaction plan
pub fn activity_section(profile: &BabyProfile, assessment: &Assessment) -> String {
    let age = profile.age;
    let sleep = profile.sleep_hours;
    let mut text = format!("🎮 {}成长互动方案\n\n", profile.gender.honorific());

    text.push_str("#作息管理\n");
    match assessment.sleep_status {
        SleepStatus::Insufficient => {
            text.push_str(&format!("⚠️ 睡眠不足（当前{}小时），建议：\n", sleep));
            push_bullets(
                &mut text,
                &[
                    "提前就寝：比现在早睡30-60分钟",
                    "睡前仪式：洗澡→按摩→读书→睡觉",
                    "环境优化：保持房间安静、昏暗、适温",
                ],
            );
            let naps = if age < 12 { "上下午各1次" } else { "下午1次" };
            text.push_str(&format!("• 白天小憩：{}小睡\n\n", naps));
        }
        SleepStatus::Excessive => {
            text.push_str(&format!("⚠️ 睡眠过多（当前{}小时），建议：\n", sleep));
            push_bullets(
                &mut text,
                &[
                    "增加活动：白天多互动，减少小睡时间",
                    "规律作息：固定起床和就寝时间",
                    "观察状态：如果精神好就是正常个体差异",
                ],
            );
            text.push('\n');
        }
        SleepStatus::Normal => {
            text.push_str(&format!("✅ 睡眠充足（{}小时），继续保持良好作息\n\n", sleep));
        }
    }

    let (heading, bullets): (&str, [&str; 4]) = match assessment.age_stage {
        AgeStage::Infant => (
            "感官启蒙",
            [
                "视觉刺激：黑白卡片、彩色玩具、镜子游戏",
                "听觉训练：轻柔音乐、妈妈歌声、摇铃声音",
                "触觉发展：不同材质玩具、温柔按摩",
                "情感联结：面对面交流、模仿表情、拥抱亲吻",
            ],
        ),
        AgeStage::Early => (
            "认知探索",
            [
                "手眼协调：抓握玩具、传递物品、指认游戏",
                "语言启蒙：重复词语、描述动作、简单指令",
                "社交技能：挥手再见、拍手游戏、模仿动作",
                "探索世界：安全爬行、触摸探索、因果游戏",
            ],
        ),
        AgeStage::Toddler => (
            "技能发展",
            [
                "精细动作：叠积木、画涂鸦、穿珠子",
                "语言表达：看图说话、简单对话、故事复述",
                "独立能力：自己吃饭、收拾玩具、穿脱衣物",
                "创造游戏：角色扮演、音乐舞蹈、想象游戏",
            ],
        ),
        AgeStage::Preschool => (
            "全面发展",
            [
                "逻辑思维：分类游戏、数数活动、解决问题",
                "社会技能：分享合作、情绪表达、规则意识",
                "学习准备：认字识数、专注力训练、记忆游戏",
                "兴趣培养：艺术创作、科学探索、体育运动",
            ],
        ),
    };
    text.push_str(&format!("#{}（{}个月）\n", heading, age));
    push_bullets(&mut text, &bullets);
    text.push('\n');

    match profile.gender {
        Gender::Male => {
            text.push_str("#男宝特色\n");
            push_bullets(
                &mut text,
                &[
                    "大运动：多爬行、攀爬、跑跳等活动",
                    "空间感：积木搭建、拼图、方向游戏",
                    "竞技性：简单比赛、挑战游戏",
                ],
            );
        }
        Gender::Female => {
            text.push_str("#女宝特色\n");
            push_bullets(
                &mut text,
                &[
                    "精细动作：串珠、画画、手工制作",
                    "语言发展：多对话、故事、歌曲",
                    "情感表达：角色扮演、情绪识别",
                ],
            );
        }
    }
    text.push('\n');

    if !profile.notes.is_empty() {
        text.push_str("#个性化关注\n");
        text.push_str(&format!("根据您的备注\"{}\"，建议：\n", profile.notes));
        push_bullets(
            &mut text,
            &[
                "针对性训练：重点关注相关发展领域",
                "耐心引导：每个宝宝发展节奏不同",
                "专业咨询：必要时寻求儿童发育专家建议",
            ],
        );
        text.push('\n');
    }

    text
}
