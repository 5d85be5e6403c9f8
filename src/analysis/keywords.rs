//! Static keyword tables.
//!
//! Every entry is matched on word boundaries against normalized text, so
//! multi-word phrases are written with single spaces. Table order matters:
//! the first matching intent rule wins and topics come out in table order.

use super::intent::Intent;

/// Words that turn a post into a question when they open it.
pub const QUESTION_OPENERS: &[&str] = &[
    "what", "what's", "why", "how", "when", "where", "who", "which", "whose", "can", "could",
    "should", "would", "is", "are", "does", "anyone",
];

pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Question,
        &[
            "does anyone know",
            "can anyone tell",
            "any idea",
            "any ideas",
            "i wonder",
            "wondering if",
            "what do you think",
            "thoughts on",
        ],
    ),
    (
        Intent::Request,
        &[
            "please",
            "recommend",
            "recommendations",
            "suggest",
            "suggestions",
            "need help",
            "help me",
            "looking for",
            "any tips",
            "advice",
            "feedback",
        ],
    ),
    (
        Intent::Complaint,
        &[
            "worst",
            "terrible",
            "awful",
            "disappointed",
            "disappointing",
            "frustrated",
            "frustrating",
            "unacceptable",
            "refund",
            "not working",
            "doesn't work",
            "still waiting",
            "never again",
            "waste of",
            "fed up",
        ],
    ),
    (
        Intent::Praise,
        &[
            "thank you",
            "thanks",
            "grateful",
            "kudos",
            "shoutout",
            "great job",
            "well done",
            "love this",
            "love it",
            "loved",
            "amazing",
            "awesome",
            "brilliant",
            "fantastic",
        ],
    ),
    (
        Intent::Announcement,
        &[
            "excited to announce",
            "happy to announce",
            "excited to share",
            "thrilled to",
            "proud to",
            "announcing",
            "introducing",
            "just launched",
            "we launched",
            "launching",
            "new job",
            "milestone",
        ],
    ),
    (
        Intent::Greeting,
        &["hello", "hi", "hey", "good morning", "good evening", "greetings"],
    ),
];

pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "love",
    "loved",
    "amazing",
    "awesome",
    "excellent",
    "happy",
    "excited",
    "thrilled",
    "best",
    "fantastic",
    "wonderful",
    "thanks",
    "thank you",
    "grateful",
    "proud",
    "brilliant",
    "enjoy",
    "enjoyed",
    "beautiful",
    "helpful",
    "perfect",
    "success",
    "win",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "worst",
    "terrible",
    "awful",
    "hate",
    "hated",
    "disappointed",
    "disappointing",
    "frustrated",
    "frustrating",
    "angry",
    "sad",
    "broken",
    "annoying",
    "poor",
    "horrible",
    "fail",
    "failed",
    "useless",
    "scam",
    "stuck",
    "complaining",
    "unacceptable",
    "not working",
];

pub const TOPIC_VOCABULARY: &[(&str, &[&str])] = &[
    ("python", &["python", "django", "flask", "pandas"]),
    ("rust", &["rust", "rustlang", "cargo"]),
    ("javascript", &["javascript", "typescript", "react", "nodejs"]),
    (
        "software development",
        &[
            "development",
            "developer",
            "developers",
            "programming",
            "coding",
            "code",
            "software",
            "best practices",
            "debugging",
        ],
    ),
    (
        "ai",
        &["ai", "machine learning", "artificial intelligence", "llm", "chatgpt", "gemini"],
    ),
    (
        "careers",
        &["job", "career", "hiring", "interview", "promotion", "resume", "new role"],
    ),
    (
        "social media growth",
        &["followers", "engagement", "reach", "growth", "viral", "algorithm", "insights"],
    ),
    ("marketing", &["marketing", "brand", "branding", "seo", "campaign", "audience"]),
    (
        "business",
        &["startup", "business", "founder", "revenue", "customers", "sales"],
    ),
    (
        "customer service",
        &["support", "customer service", "refund", "order", "delivery", "shipping"],
    ),
    ("productivity", &["productivity", "habits", "routine", "focus", "time management"]),
    ("health", &["health", "fitness", "workout", "gym", "diet", "sleep"]),
    ("travel", &["travel", "trip", "flight", "vacation", "hotel"]),
    ("food", &["food", "recipe", "restaurant", "cooking", "coffee"]),
    ("finance", &["money", "invest", "investing", "stocks", "crypto", "budget", "savings"]),
    ("education", &["learn", "learning", "course", "study", "students", "tutorial"]),
    ("gaming", &["game", "gaming", "playstation", "xbox", "nintendo"]),
];

pub const FALLBACK_TOPIC: &str = "general";
