use np_core::SentimentScore;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Lexicon-based polarity/subjectivity scorer.
///
/// Polarity is VADER's compound score. Subjectivity is the proportion of the
/// text VADER rates as sentiment-bearing (1 minus the neutral proportion).
pub struct SentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Scores one text. Empty or whitespace-only text is neutral.
    pub fn score(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let scores = self.analyzer.polarity_scores(text);
        let polarity = scores["compound"].clamp(-1.0, 1.0);
        let subjectivity = (1.0 - scores["neu"]).clamp(0.0, 1.0);

        SentimentScore {
            polarity,
            subjectivity,
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
