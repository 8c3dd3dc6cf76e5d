pub mod error;
pub mod types;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use types::{AggregateAnalysis, AnalyzedArticle, Article, Report, SentimentScore, TopicSet};

pub mod prelude {
    pub use crate::types::{
        AggregateAnalysis, AnalyzedArticle, Article, Report, SentimentScore, TopicSet,
    };
    pub use crate::{Error, Result};
}
