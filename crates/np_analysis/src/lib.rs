pub mod aggregate;
pub mod sentiment;
pub mod topics;

pub use aggregate::{AnalyzedBatch, Analyzer};
pub use sentiment::SentimentAnalyzer;
pub use topics::{extract_topics, DEFAULT_TOPIC_LIMIT};

pub mod prelude {
    pub use super::{extract_topics, AnalyzedBatch, Analyzer, SentimentAnalyzer};
    pub use np_core::{AggregateAnalysis, AnalyzedArticle, Article, Result, SentimentScore};
}
