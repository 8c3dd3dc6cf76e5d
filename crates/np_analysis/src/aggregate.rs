use np_core::{AggregateAnalysis, AnalyzedArticle, Article};
use tracing::debug;

use crate::sentiment::SentimentAnalyzer;
use crate::topics::{extract_topics, DEFAULT_TOPIC_LIMIT};

/// Per-article rows plus the rolled-up averages.
#[derive(Debug, Clone)]
pub struct AnalyzedBatch {
    pub articles: Vec<AnalyzedArticle>,
    pub analysis: AggregateAnalysis,
}

/// Runs sentiment scoring and topic extraction over a set of articles and
/// averages the results.
pub struct Analyzer {
    sentiment: SentimentAnalyzer,
    topic_limit: usize,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            sentiment: SentimentAnalyzer::new(),
            topic_limit: DEFAULT_TOPIC_LIMIT,
        }
    }

    /// Scores every article's description and computes the unweighted mean
    /// polarity and subjectivity. Zero articles yield the all-zero aggregate.
    pub fn analyze(&self, articles: Vec<Article>) -> AnalyzedBatch {
        if articles.is_empty() {
            return AnalyzedBatch {
                articles: Vec::new(),
                analysis: AggregateAnalysis::empty(),
            };
        }

        let mut analyzed = Vec::with_capacity(articles.len());
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;

        for article in articles {
            // Scoring runs over the description only, never the title
            let sentiment = self.sentiment.score(&article.description);
            let topics = extract_topics(&article.description, self.topic_limit);

            polarity_sum += sentiment.polarity;
            subjectivity_sum += sentiment.subjectivity;
            analyzed.push(AnalyzedArticle {
                article,
                sentiment,
                topics,
            });
        }

        let count = analyzed.len();
        debug!("Analyzed {} articles", count);

        AnalyzedBatch {
            articles: analyzed,
            analysis: AggregateAnalysis {
                average_polarity: polarity_sum / count as f64,
                average_subjectivity: subjectivity_sum / count as f64,
                article_count: count,
            },
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn article(description: &str) -> Article {
        Article {
            title: "Title".to_string(),
            description: description.to_string(),
            media: "Wire".to_string(),
            date: "Mon, 12 Aug 2024 10:00:00 GMT".to_string(),
        }
    }

    #[test]
    fn test_no_articles_yield_zero_aggregate() {
        let batch = Analyzer::new().analyze(Vec::new());
        assert!(batch.articles.is_empty());
        assert_eq!(batch.analysis, AggregateAnalysis::empty());
    }

    #[test]
    fn test_identical_descriptions_average_to_single_score() {
        let analyzer = Analyzer::new();
        let text = "The company reported surprisingly strong growth this quarter.";
        let single = analyzer.sentiment.score(text);

        let batch = analyzer.analyze(vec![article(text), article(text), article(text)]);
        assert_eq!(batch.analysis.article_count, 3);
        assert!((batch.analysis.average_polarity - single.polarity).abs() < TOLERANCE);
        assert!((batch.analysis.average_subjectivity - single.subjectivity).abs() < TOLERANCE);
    }

    #[test]
    fn test_averages_are_arithmetic_means() {
        let analyzer = Analyzer::new();
        let texts = [
            "Investors cheered the excellent results.",
            "The outlook remains deeply uncertain and worrying.",
            "The board met on Thursday.",
        ];

        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        for text in texts {
            let score = analyzer.sentiment.score(text);
            polarity_sum += score.polarity;
            subjectivity_sum += score.subjectivity;
        }

        let batch = analyzer.analyze(texts.iter().map(|t| article(t)).collect());
        assert_eq!(batch.analysis.article_count, 3);
        assert!((batch.analysis.average_polarity - polarity_sum / 3.0).abs() < TOLERANCE);
        assert!((batch.analysis.average_subjectivity - subjectivity_sum / 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_rows_carry_sentiment_and_topics() {
        let batch = Analyzer::new().analyze(vec![article("I love this! I love this!")]);
        let row = &batch.articles[0];
        assert!(row.sentiment.polarity > 0.0);
        assert_eq!(row.topics["love"], 2);
    }

    #[test]
    fn test_scoring_ignores_title() {
        let analyzer = Analyzer::new();
        let mut positive_title = article("");
        positive_title.title = "Wonderful fantastic amazing news".to_string();

        let batch = analyzer.analyze(vec![positive_title]);
        // Empty description means a neutral row regardless of the title
        assert_eq!(batch.analysis.average_polarity, 0.0);
        assert_eq!(batch.analysis.average_subjectivity, 0.0);
    }
}
