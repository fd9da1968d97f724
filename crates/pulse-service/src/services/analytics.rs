//! Feedback analytics - reaction breakdown, sentiment buckets, and keyword cloud

use std::collections::HashMap;

use pulse_core::entities::FeedbackItem;
use pulse_core::value_objects::{Reaction, Sentiment};

/// Words must be longer than this to count as keywords
const MIN_KEYWORD_CHARS: usize = 3;
/// Keywords kept in the cloud
const MAX_KEYWORDS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Aggregate view over a set of feedback items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackAnalytics {
    pub total: usize,
    /// Non-zero counts in canonical reaction order
    pub reaction_breakdown: Vec<(Reaction, usize)>,
    pub sentiment: SentimentBreakdown,
    pub keywords: Vec<KeywordCount>,
}

impl FeedbackAnalytics {
    pub fn from_items(items: &[FeedbackItem]) -> Self {
        let mut counts: HashMap<Reaction, usize> = HashMap::new();
        let mut sentiment = SentimentBreakdown::default();

        for item in items {
            *counts.entry(item.reaction).or_insert(0) += 1;
            match item.reaction.sentiment() {
                Some(Sentiment::Positive) => sentiment.positive += 1,
                Some(Sentiment::Negative) => sentiment.negative += 1,
                Some(Sentiment::Neutral) => sentiment.neutral += 1,
                None => {}
            }
        }

        let reaction_breakdown = Reaction::ALL
            .iter()
            .filter_map(|r| counts.get(r).map(|&n| (*r, n)))
            .collect();

        Self {
            total: items.len(),
            reaction_breakdown,
            sentiment,
            keywords: keywords(items),
        }
    }

    /// Percentage of checked-in attendees who left feedback
    pub fn feedback_rate(&self, checked_in: u32) -> Option<f64> {
        percentage(self.total, checked_in as usize)
    }

    /// Share of all feedback in the given sentiment bucket, as a percentage
    pub fn sentiment_rate(&self, bucket: Sentiment) -> Option<f64> {
        let count = match bucket {
            Sentiment::Positive => self.sentiment.positive,
            Sentiment::Negative => self.sentiment.negative,
            Sentiment::Neutral => self.sentiment.neutral,
        };
        percentage(count, self.total)
    }
}

/// `part / whole` as a percentage; `None` when `whole` is zero
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64 * 100.0)
}

fn keywords(items: &[FeedbackItem]) -> Vec<KeywordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        for word in item.content.to_lowercase().split_whitespace() {
            if word.chars().count() > MIN_KEYWORD_CHARS {
                *counts.entry(word.to_string()).or_insert(0) += 1;
            }
        }
    }

    let mut keywords: Vec<KeywordCount> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(word, count)| KeywordCount { word, count })
        .collect();

    keywords.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}
