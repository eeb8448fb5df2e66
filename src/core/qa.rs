use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::core::knowledge::{AgeBracket, DEFAULT_RESPONSES, KEYWORD_RULES, POPULAR_QUESTIONS};
use crate::models::QaAnswer;

/// Keyword-matching Q&A over the fixed answer table
///
/// # Matching order
/// 1. An explicit age ("6个月", "2岁") selects the answer for that bracket
/// 2. The first topic with a keyword contained in the question
/// 3. A default answer
///
/// Steps 2 and 3 pick among several answers with the supplied RNG.
#[derive(Debug, Clone)]
pub struct QaEngine {
    age_pattern: Regex,
}

impl QaEngine {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            age_pattern: Regex::new(r"([0-9]+)\s*(个月|月|岁)")?,
        })
    }

    /// Find the age bracket mentioned in a question, if any
    pub fn age_bracket(&self, question: &str) -> Option<AgeBracket> {
        let caps = self.age_pattern.captures(question)?;
        // Digits too long for u32 are treated as a large age
        let value = caps[1].parse::<u32>().unwrap_or(u32::MAX);

        let bracket = if caps[2].contains('月') {
            if value < 6 {
                AgeBracket::UnderSixMonths
            } else if value < 12 {
                AgeBracket::SixToTwelveMonths
            } else {
                AgeBracket::OneToTwoYears
            }
        } else {
            AgeBracket::OneToTwoYears
        };

        Some(bracket)
    }

    /// Answer a question; the echoed question is the trimmed input
    pub fn answer<R: Rng + ?Sized>(&self, question: &str, rng: &mut R) -> QaAnswer {
        let question = question.trim();
        let lower = question.to_lowercase();

        if let Some(bracket) = self.age_bracket(&lower) {
            tracing::debug!("Q&A age match: {:?}", bracket);
            return bracket.answer().to_answer(question);
        }

        for rule in KEYWORD_RULES.iter() {
            let hit = rule.keywords.iter().find(|keyword| lower.contains(*keyword));
            if let Some(keyword) = hit {
                if let Some(canned) = rule.responses.choose(rng) {
                    tracing::debug!("Q&A keyword match: {:?} via {}", rule.topic, keyword);
                    return canned.to_answer(question);
                }
            }
        }

        tracing::debug!("Q&A fell back to default answer");
        let canned = DEFAULT_RESPONSES
            .choose(rng)
            .unwrap_or(&DEFAULT_RESPONSES[0]);
        canned.to_answer(question)
    }
}

/// Suggested questions shown next to the Q&A box
pub fn popular_questions() -> Vec<String> {
    POPULAR_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> QaEngine {
        QaEngine::new().unwrap()
    }

    #[test]
    fn test_month_brackets() {
        let qa = engine();
        assert_eq!(qa.age_bracket("3个月宝宝"), Some(AgeBracket::UnderSixMonths));
        assert_eq!(qa.age_bracket("6 个月"), Some(AgeBracket::SixToTwelveMonths));
        assert_eq!(qa.age_bracket("11月"), Some(AgeBracket::SixToTwelveMonths));
        assert_eq!(qa.age_bracket("18个月"), Some(AgeBracket::OneToTwoYears));
        assert_eq!(qa.age_bracket("3岁"), Some(AgeBracket::OneToTwoYears));
        assert_eq!(qa.age_bracket("几个月"), None);
    }

    #[test]
    fn test_huge_number_treated_as_large_age() {
        let qa = engine();
        assert_eq!(
            qa.age_bracket("99999999999个月"),
            Some(AgeBracket::OneToTwoYears)
        );
    }

    #[test]
    fn test_explicit_age_wins_over_keywords() {
        let qa = engine();
        let mut rng = StdRng::seed_from_u64(7);

        let answer = qa.answer("  6个月宝宝过敏吃什么？ ", &mut rng);
        assert_eq!(answer.question, "6个月宝宝过敏吃什么？");
        assert_eq!(answer.category, "辅食初期");
    }

    #[test]
    fn test_topic_order_food_before_health() {
        let qa = engine();
        let mut rng = StdRng::seed_from_u64(1);

        // contains both 辅食 (food) and 过敏 (health)
        let answer = qa.answer("过敏宝宝的辅食", &mut rng);
        assert_eq!(answer.category, "营养指导");
    }

    #[test]
    fn test_keyword_without_number_uses_age_topic() {
        let qa = engine();
        let mut rng = StdRng::seed_from_u64(3);

        let answer = qa.answer("新生儿要注意什么", &mut rng);
        assert!(["新生儿期", "辅食初期", "幼儿期"].contains(&answer.category.as_str()));
    }

    #[test]
    fn test_default_answer() {
        let qa = engine();
        let mut rng = StdRng::seed_from_u64(42);

        let answer = qa.answer("hello", &mut rng);
        assert!(["通用建议", "喂养指导"].contains(&answer.category.as_str()));
        assert_eq!(answer.tips.len(), 4);
        assert_eq!(answer.related_questions.len(), 3);
    }

    #[test]
    fn test_popular_questions() {
        let questions = popular_questions();
        assert_eq!(questions.len(), 8);
        assert_eq!(questions[0], "6个月宝宝可以吃什么辅食？");
    }
}
