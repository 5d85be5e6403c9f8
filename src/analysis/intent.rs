use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse communicative purpose of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Asks something: `?`, a leading question word, or an explicit ask
    Question,
    /// Looks for help, recommendations or feedback
    Request,
    /// Expresses dissatisfaction with a product, service or situation
    Complaint,
    /// Thanks or compliments someone
    Praise,
    /// Shares news: a launch, a new job, a milestone
    Announcement,
    /// Says hello
    Greeting,
    /// Anything else
    Statement,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Request => "request",
            Intent::Complaint => "complaint",
            Intent::Praise => "praise",
            Intent::Announcement => "announcement",
            Intent::Greeting => "greeting",
            Intent::Statement => "statement",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category used to pick a reply template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Information,
    Assistance,
    Sympathy,
    Gratitude,
    Celebration,
    Engagement,
}

impl ResponseType {
    pub fn for_post(intent: Intent, sentiment: Sentiment) -> Self {
        match intent {
            Intent::Question => ResponseType::Information,
            Intent::Request => ResponseType::Assistance,
            Intent::Complaint => ResponseType::Sympathy,
            Intent::Praise => ResponseType::Gratitude,
            Intent::Announcement => ResponseType::Celebration,
            Intent::Greeting => ResponseType::Engagement,
            Intent::Statement if sentiment == Sentiment::Negative => ResponseType::Sympathy,
            Intent::Statement => ResponseType::Engagement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResponseType::Information => "information",
            ResponseType::Assistance => "assistance",
            ResponseType::Sympathy => "sympathy",
            ResponseType::Gratitude => "gratitude",
            ResponseType::Celebration => "celebration",
            ResponseType::Engagement => "engagement",
        }
    }

    /// One-line reply strategy, recorded in reply metadata.
    pub fn strategy(&self) -> &'static str {
        match self {
            ResponseType::Information => "Answer the question with a practical pointer.",
            ResponseType::Assistance => "Offer concrete help and invite follow-up.",
            ResponseType::Sympathy => "Acknowledge the frustration before anything else.",
            ResponseType::Gratitude => "Return the appreciation warmly.",
            ResponseType::Celebration => "Congratulate and show interest in what comes next.",
            ResponseType::Engagement => "Respond naturally to the post.",
        }
    }

    pub fn all() -> &'static [ResponseType] {
        &[
            ResponseType::Information,
            ResponseType::Assistance,
            ResponseType::Sympathy,
            ResponseType::Gratitude,
            ResponseType::Celebration,
            ResponseType::Engagement,
        ]
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_response_depends_on_tone() {
        assert_eq!(
            ResponseType::for_post(Intent::Statement, Sentiment::Negative),
            ResponseType::Sympathy
        );
        assert_eq!(
            ResponseType::for_post(Intent::Statement, Sentiment::Positive),
            ResponseType::Engagement
        );
    }

    #[test]
    fn serde_names_match_labels() {
        for response_type in ResponseType::all() {
            let json = serde_json::to_string(response_type).expect("serialize");
            assert_eq!(json, format!("\"{}\"", response_type.label()));
        }
        assert_eq!(serde_json::to_string(&Intent::Question).unwrap(), "\"question\"");
    }
}
