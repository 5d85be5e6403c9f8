//! Built-in reply templates.
//!
//! Placeholders: `{topic}`, `{topics}`, `{platform}`, `{excerpt}`,
//! `{intent}`, `{sentiment}`, `{context_note}`.

use crate::analysis::ResponseType;

pub const PLATFORM_TEMPLATES: &[(&str, ResponseType, &str)] = &[
    // twitter: short, casual
    (
        "twitter",
        ResponseType::Information,
        "Good q! For {topic}, start small and keep it simple. Happy to share what worked for \
        me{context_note}.",
    ),
    (
        "twitter",
        ResponseType::Assistance,
        "Happy to help with {topic}! DM me and I'll send over what I've got.",
    ),
    (
        "twitter",
        ResponseType::Sympathy,
        "Ugh, that sounds rough. Hope the {topic} situation gets sorted fast.",
    ),
    (
        "twitter",
        ResponseType::Gratitude,
        "Appreciate this a lot, thank you! Means a ton.",
    ),
    (
        "twitter",
        ResponseType::Celebration,
        "Huge congrats!! Can't wait to see where the {topic} journey goes next.",
    ),
    (
        "twitter",
        ResponseType::Engagement,
        "This! Been thinking about {topic} a lot lately too.",
    ),
    // linkedin: professional, personable
    (
        "linkedin",
        ResponseType::Information,
        "Great question. In my experience with {topics}, the teams that do well keep their \
        approach simple and revisit it often{context_note}. Happy to compare notes.",
    ),
    (
        "linkedin",
        ResponseType::Assistance,
        "Glad to help here. I've worked on {topic} for a while, so feel free to reach out and \
        we can set up a quick call.",
    ),
    (
        "linkedin",
        ResponseType::Sympathy,
        "Sorry to hear this. Situations like this around {topic} are frustrating, and it's good \
        that you're raising it openly.",
    ),
    (
        "linkedin",
        ResponseType::Gratitude,
        "Thank you for the kind words. It's been a pleasure working on {topic} with people like \
        you.",
    ),
    (
        "linkedin",
        ResponseType::Celebration,
        "Congratulations, well deserved! Looking forward to following your next chapter in \
        {topic}.",
    ),
    (
        "linkedin",
        ResponseType::Engagement,
        "Thanks for sharing this perspective on {topics}. It resonates with what I've been \
        seeing as well.",
    ),
    // instagram: upbeat, emoji
    (
        "instagram",
        ResponseType::Information,
        "Love this question! 🙌 For {topic}, consistency is everything ✨",
    ),
    (
        "instagram",
        ResponseType::Sympathy,
        "Sending good vibes your way 💛 hope it gets better soon!",
    ),
    (
        "instagram",
        ResponseType::Celebration,
        "Yesss congrats!! 🎉🔥 so happy for you!",
    ),
    (
        "instagram",
        ResponseType::Engagement,
        "Obsessed with this 😍 more {topic} content please!",
    ),
    // facebook: personal, community
    (
        "facebook",
        ResponseType::Information,
        "Good question! A friend of mine went through the same thing with {topic}. I'll ask \
        what helped and get back to you{context_note}.",
    ),
    (
        "facebook",
        ResponseType::Sympathy,
        "So sorry you're dealing with this. Let us know if there's anything we can do.",
    ),
    (
        "facebook",
        ResponseType::Celebration,
        "Congratulations!! So proud of you, this is wonderful news.",
    ),
    // reddit: topic-focused
    (
        "reddit",
        ResponseType::Information,
        "Not an expert, but I've spent a fair amount of time on {topic}. Short version: start \
        simple, read the docs, and iterate{context_note}.",
    ),
    (
        "reddit",
        ResponseType::Assistance,
        "If you post a bit more detail about your {topic} setup, people here can probably point \
        you in the right direction.",
    ),
    (
        "reddit",
        ResponseType::Sympathy,
        "Had almost the exact same experience. It's infuriating, you're not alone on this one.",
    ),
    (
        "reddit",
        ResponseType::Engagement,
        "Solid post. The {topic} discussion on this sub has been great lately.",
    ),
];

pub const GENERIC_TEMPLATES: &[(ResponseType, &str)] = &[
    (
        ResponseType::Information,
        "Good question about {topic}! Here's what has worked for me: keep it simple and build \
        from there{context_note}.",
    ),
    (
        ResponseType::Assistance,
        "Happy to help with {topic}. Let me know a bit more and I'll point you in the right \
        direction.",
    ),
    (
        ResponseType::Sympathy,
        "Sorry you're dealing with this. Hope things around {topic} turn around soon.",
    ),
    (
        ResponseType::Gratitude,
        "Thank you so much, that really means a lot!",
    ),
    (
        ResponseType::Celebration,
        "Congratulations! Excited to see what comes next.",
    ),
    (
        ResponseType::Engagement,
        "Really enjoyed reading this. Thanks for sharing your thoughts on {topics}.",
    ),
];

/// Used when there is no analysis to pick a template with.
pub const FALLBACK_TEMPLATE: &str = "Thanks for sharing \"{excerpt}\". Interesting take!";
