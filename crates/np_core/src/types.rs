use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One normalized news article. Every field is always present; a field the
/// backend did not report is empty text rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub date: String,
}

/// Polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Token -> frequency association for the most frequent non-stopword tokens
/// of one article description.
pub type TopicSet = BTreeMap<String, u64>;

/// An article plus its per-article analysis, as it appears in a report row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub sentiment: SentimentScore,
    pub topics: TopicSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateAnalysis {
    pub average_polarity: f64,
    pub average_subjectivity: f64,
    pub article_count: usize,
}

impl AggregateAnalysis {
    /// The zero-article aggregate: both averages are exactly 0.0.
    pub fn empty() -> Self {
        Self {
            average_polarity: 0.0,
            average_subjectivity: 0.0,
            article_count: 0,
        }
    }
}

/// The full response payload of one analysis request. Built once per request
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub keyword: String,
    pub time_period: String,
    pub analysis: AggregateAnalysis,
    pub articles: Vec<AnalyzedArticle>,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_defaults_missing_fields_to_empty_text() {
        let article: Article = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(article.title, "Hello");
        assert_eq!(article.description, "");
        assert_eq!(article.media, "");
        assert_eq!(article.date, "");
    }

    #[test]
    fn analyzed_article_flattens_article_fields() {
        let row = AnalyzedArticle {
            article: Article {
                title: "Title".to_string(),
                description: "Body".to_string(),
                media: "Wire".to_string(),
                date: "Today".to_string(),
            },
            sentiment: SentimentScore::neutral(),
            topics: TopicSet::new(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["title"], "Title");
        assert_eq!(value["desc"], "Body");
        assert_eq!(value["sentiment"]["polarity"], 0.0);
    }

    #[test]
    fn empty_aggregate_is_all_zeroes() {
        let analysis = AggregateAnalysis::empty();
        assert_eq!(analysis.average_polarity, 0.0);
        assert_eq!(analysis.average_subjectivity, 0.0);
        assert_eq!(analysis.article_count, 0);
    }
}
