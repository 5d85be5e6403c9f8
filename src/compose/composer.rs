use std::collections::HashMap;

use tracing::debug;

use crate::analysis::{Analysis, Post, ResponseType};
use crate::config::ComposerConfig;
use crate::error::{ReplyError, Result};

use super::templates::{FALLBACK_TEMPLATE, GENERIC_TEMPLATES, PLATFORM_TEMPLATES};

const EXCERPT_WORDS: usize = 8;

/// Template-based reply writer. Stateless apart from its configuration.
#[derive(Debug, Clone)]
pub struct ReplyComposer {
    supported: Vec<String>,
    overrides: HashMap<(String, ResponseType), String>,
    char_limits: HashMap<String, usize>,
}

impl ReplyComposer {
    pub fn new(config: &ComposerConfig) -> Self {
        let overrides = config
            .templates
            .iter()
            .map(|t| ((t.platform.clone(), t.response_type), t.template.clone()))
            .collect();

        let composer = Self {
            supported: config.supported_platforms.clone(),
            overrides,
            char_limits: config.char_limits.clone(),
        };
        for platform in &composer.supported {
            let generic = composer.generic_fallbacks(platform);
            if !generic.is_empty() {
                let labels: Vec<&str> = generic.iter().map(|rt| rt.label()).collect();
                debug!("{} uses generic templates for: {}", platform, labels.join(", "));
            }
        }
        composer
    }

    /// Response types that have neither an override nor a built-in template
    /// for `platform`, so they render from the generic set.
    pub fn generic_fallbacks(&self, platform: &str) -> Vec<ResponseType> {
        ResponseType::all()
            .iter()
            .copied()
            .filter(|&rt| self.platform_template(platform, rt).is_none())
            .collect()
    }

    pub fn supported_platforms(&self) -> &[String] {
        &self.supported
    }

    /// Lowercases `platform` and checks it against the configured set.
    pub fn resolve_platform(&self, platform: &str) -> Result<String> {
        let normalized = platform.trim().to_lowercase();
        if self.supported.contains(&normalized) {
            Ok(normalized)
        } else {
            Err(ReplyError::UnsupportedPlatform {
                platform: platform.to_string(),
                supported: self.supported.clone(),
            })
        }
    }

    pub fn compose(&self, post: &Post, analysis: Option<&Analysis>) -> Result<String> {
        let platform = self.resolve_platform(&post.platform)?;

        let template = match analysis {
            Some(analysis) => self.template_for(&platform, analysis.response_type),
            None => FALLBACK_TEMPLATE,
        };

        let rendered = render(template, |name| placeholder(name, &platform, post, analysis));
        let reply = collapse_whitespace(&rendered);

        Ok(match self.char_limits.get(&platform) {
            Some(&limit) => truncate_chars(&reply, limit),
            None => reply,
        })
    }

    fn platform_template(&self, platform: &str, response_type: ResponseType) -> Option<&str> {
        if let Some(template) = self.overrides.get(&(platform.to_string(), response_type)) {
            return Some(template);
        }
        PLATFORM_TEMPLATES
            .iter()
            .find(|(p, rt, _)| *p == platform && *rt == response_type)
            .map(|(_, _, t)| *t)
    }

    fn template_for(&self, platform: &str, response_type: ResponseType) -> &str {
        self.platform_template(platform, response_type)
            .or_else(|| {
                GENERIC_TEMPLATES
                    .iter()
                    .find(|(rt, _)| *rt == response_type)
                    .map(|(_, t)| *t)
            })
            .unwrap_or(FALLBACK_TEMPLATE)
    }
}

fn placeholder(
    name: &str,
    platform: &str,
    post: &Post,
    analysis: Option<&Analysis>,
) -> Option<String> {
    let topics: &[String] = analysis.map(|a| a.topics.as_slice()).unwrap_or_default();
    match name {
        "topic" => Some(topics.first().cloned().unwrap_or_else(|| "this".to_string())),
        "topics" => Some(if topics.is_empty() {
            "this".to_string()
        } else {
            join_topics(topics)
        }),
        "platform" => Some(platform.to_string()),
        "excerpt" => Some(excerpt(&post.text)),
        "intent" => analysis.map(|a| a.intent.to_string()),
        "sentiment" => analysis.map(|a| a.sentiment.to_string()),
        "context_note" => Some(
            post.context
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| format!(" (re: {})", c))
                .unwrap_or_default(),
        ),
        _ => None,
    }
}

/// Single pass over the template so substituted values are never expanded again.
/// Unknown placeholders are kept verbatim.
fn render<F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn join_topics(topics: &[String]) -> String {
    match topics {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn excerpt(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > EXCERPT_WORDS {
        format!("{}…", words[..EXCERPT_WORDS].join(" "))
    } else {
        words.join(" ")
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, limit: usize) -> String {
    if limit == 0 || text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}
