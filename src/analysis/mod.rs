pub mod analyzer;
pub mod intent;
pub mod keywords;
pub mod types;

pub use analyzer::PostAnalyzer;
pub use intent::{Intent, ResponseType, Sentiment};
pub use types::{Analysis, Post};
