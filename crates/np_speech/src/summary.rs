use np_core::AggregateAnalysis;

/// Renders the one-sentence spoken summary for a report in the target
/// language. Numbers are formatted to two decimals.
pub fn summary_sentence(keyword: &str, analysis: &AggregateAnalysis, lang: &str) -> String {
    match lang {
        "hi" => format!(
            "कंपनी {} के लिए {} समाचार मिले हैं। औसत पोलैरिटी {:.2}, औसत सब्जेक्टिविटी {:.2}",
            keyword,
            analysis.article_count,
            analysis.average_polarity,
            analysis.average_subjectivity
        ),
        _ => format!(
            "Found {} news articles for {}. Average polarity {:.2}, average subjectivity {:.2}.",
            analysis.article_count,
            keyword,
            analysis.average_polarity,
            analysis.average_subjectivity
        ),
    }
}
