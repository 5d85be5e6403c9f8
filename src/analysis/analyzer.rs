use crate::config::AnalysisConfig;
use crate::error::{ReplyError, Result};

use super::intent::{Intent, ResponseType, Sentiment};
use super::keywords::{
    FALLBACK_TOPIC, INTENT_RULES, NEGATIVE_WORDS, POSITIVE_WORDS, QUESTION_OPENERS,
    TOPIC_VOCABULARY,
};
use super::types::Analysis;

/// Keyword-table analyzer. Holds nothing but configuration, so one instance
/// is shared across all requests.
#[derive(Debug, Clone)]
pub struct PostAnalyzer {
    max_topics: usize,
}

impl PostAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            max_topics: config.max_topics.max(1),
        }
    }

    pub fn analyze(&self, text: &str, context: Option<&str>) -> Result<Analysis> {
        if text.trim().is_empty() {
            return Err(ReplyError::Validation("post_text must not be empty".to_string()));
        }

        let post = Normalized::new(text);
        let intent = detect_intent(text, &post);
        let sentiment = detect_sentiment(&post);
        let topics = self.extract_topics(&post, context.map(Normalized::new).as_ref());

        Ok(Analysis {
            intent,
            sentiment,
            topics,
            response_type: ResponseType::for_post(intent, sentiment),
        })
    }

    fn extract_topics(&self, post: &Normalized, context: Option<&Normalized>) -> Vec<String> {
        let mut topics: Vec<String> = Vec::new();
        let mut push = |topic: &str| {
            if topics.len() < self.max_topics && !topics.iter().any(|t| t == topic) {
                topics.push(topic.to_string());
            }
        };

        for (topic, keywords) in TOPIC_VOCABULARY {
            let hit = keywords
                .iter()
                .any(|k| post.contains(k) || context.is_some_and(|c| c.contains(k)));
            if hit {
                push(*topic);
            }
        }
        // Hashtags already covered by the vocabulary pass are not repeated.
        for tag in &post.hashtags {
            let known = TOPIC_VOCABULARY
                .iter()
                .any(|(_, keywords)| keywords.contains(&tag.as_str()));
            if !known {
                push(tag.as_str());
            }
        }

        if topics.is_empty() {
            topics.push(FALLBACK_TOPIC.to_string());
        }
        topics
    }
}

fn detect_intent(raw: &str, post: &Normalized) -> Intent {
    for (intent, keywords) in INTENT_RULES {
        let matched = match intent {
            Intent::Question => {
                raw.contains('?')
                    || post.first_word().is_some_and(|w| QUESTION_OPENERS.contains(&w))
                    || post.contains_any(keywords)
            }
            _ => post.contains_any(keywords),
        };
        if matched {
            return *intent;
        }
    }
    Intent::Statement
}

fn detect_sentiment(post: &Normalized) -> Sentiment {
    let positive = POSITIVE_WORDS.iter().filter(|w| post.contains(w)).count();
    let negative = NEGATIVE_WORDS.iter().filter(|w| post.contains(w)).count();
    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}

/// Lowercased text reduced to space-separated words, padded so that
/// `" {phrase} "` lookups only hit whole words.
struct Normalized {
    padded: String,
    hashtags: Vec<String>,
}

impl Normalized {
    fn new(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '#'))
            .filter(|t| !t.is_empty())
            .collect();

        let hashtags = tokens
            .iter()
            .filter(|t| t.starts_with('#'))
            .map(|t| t.trim_matches(|c| c == '#' || c == '\''))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let words: Vec<&str> = tokens
            .iter()
            .map(|t| t.trim_matches(|c| c == '#' || c == '\''))
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            padded: format!(" {} ", words.join(" ")),
            hashtags,
        }
    }

    fn contains(&self, phrase: &str) -> bool {
        self.padded.contains(&format!(" {} ", phrase))
    }

    fn contains_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.contains(p))
    }

    fn first_word(&self) -> Option<&str> {
        self.padded.split_whitespace().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> PostAnalyzer {
        PostAnalyzer::new(&AnalysisConfig::default())
    }

    #[test]
    fn question_about_python() {
        let analysis = analyzer()
            .analyze("What are the best practices for Python development?", None)
            .expect("analysis");

        assert_eq!(analysis.intent, Intent::Question);
        assert_eq!(analysis.sentiment, Sentiment::Positive);
        assert_eq!(analysis.response_type, ResponseType::Information);
        assert_eq!(analysis.topics, vec!["python", "software development"]);
    }

    #[test]
    fn leading_question_word_without_mark() {
        let analysis = analyzer().analyze("how do people keep their focus at work", None).unwrap();
        assert_eq!(analysis.intent, Intent::Question);
        assert_eq!(analysis.topics, vec!["productivity"]);
    }

    #[test]
    fn complaint_is_negative_and_gets_sympathy() {
        let analysis = analyzer()
            .analyze(
                "Worst delivery experience ever. \
                 Still waiting for my refund, totally unacceptable.",
                None,
            )
            .unwrap();

        assert_eq!(analysis.intent, Intent::Complaint);
        assert_eq!(analysis.sentiment, Sentiment::Negative);
        assert_eq!(analysis.response_type, ResponseType::Sympathy);
        assert_eq!(analysis.topics, vec!["customer service"]);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Both a request ("please") and praise ("thanks") match; request comes first.
        let analysis = analyzer()
            .analyze("Thanks for the talk, please share the slides", None)
            .unwrap();
        assert_eq!(analysis.intent, Intent::Request);
    }

    #[test]
    fn announcement_and_greeting() {
        let a = analyzer()
            .analyze("Excited to announce that I'm starting a new job at a startup", None)
            .unwrap();
        assert_eq!(a.intent, Intent::Announcement);
        assert_eq!(a.response_type, ResponseType::Celebration);
        assert_eq!(a.topics, vec!["careers", "business"]);

        let g = analyzer().analyze("Hey everyone", None).unwrap();
        assert_eq!(g.intent, Intent::Greeting);
        assert_eq!(g.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn words_match_on_boundaries_only() {
        // "this" must not trigger the greeting rule through "hi".
        let analysis = analyzer().analyze("Shipping this today", None).unwrap();
        assert_eq!(analysis.intent, Intent::Statement);
        assert_eq!(analysis.topics, vec!["customer service"]);
    }

    #[test]
    fn hashtags_become_topics_after_vocabulary() {
        let analysis = analyzer()
            .analyze("Morning run done #Fitness #sunrise #sunrise", None)
            .unwrap();
        assert_eq!(analysis.topics, vec!["health", "sunrise"]);
    }

    #[test]
    fn topics_are_capped() {
        let config = AnalysisConfig { max_topics: 2 };
        let analysis = PostAnalyzer::new(&config)
            .analyze("python rust javascript travel food", None)
            .unwrap();
        assert_eq!(analysis.topics, vec!["python", "rust"]);
    }

    #[test]
    fn context_contributes_topics() {
        let analysis = analyzer()
            .analyze("Just finished reading this", Some("thread about investing"))
            .unwrap();
        assert_eq!(analysis.topics, vec!["finance"]);
    }

    #[test]
    fn falls_back_to_general_topic() {
        let analysis = analyzer().analyze("Nice view", None).unwrap();
        assert_eq!(analysis.intent, Intent::Statement);
        assert_eq!(analysis.topics, vec!["general"]);
        assert_eq!(analysis.response_type, ResponseType::Engagement);
    }

    #[test]
    fn empty_text_is_rejected() {
        for text in ["", "   ", "\n\t"] {
            let err = analyzer().analyze(text, None).unwrap_err();
            assert!(matches!(err, ReplyError::Validation(_)));
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Does anyone know a good recipe for cold brew coffee? #coffee";
        let first = analyzer().analyze(text, Some("food thread")).unwrap();
        for _ in 0..5 {
            assert_eq!(analyzer().analyze(text, Some("food thread")).unwrap(), first);
        }
    }
}
