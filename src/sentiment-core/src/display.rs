//! Sentiment label parsing and display attributes.

/// Categorical sentiment produced by the remote service.
///
/// Parsing is fail-open: any value other than `"positive"` or `"negative"`
/// lands in [`SentimentLabel::Neutral`], so an unexpected label degrades to
/// neutral styling instead of an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// Parse a raw label string from the service.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

/// Derived presentation data for a sentiment label.
///
/// Never stored; always recomputed from the raw label via [`display_of`].
/// The UI maps [`DisplayAttributes::label`] to its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAttributes {
    pub label: SentimentLabel,
    pub emoji: &'static str,
    pub caption: &'static str,
}

/// Map a raw sentiment string to its display attributes.
///
/// Total over all string inputs; unrecognized values fall into the neutral
/// bucket.
pub fn display_of(raw: &str) -> DisplayAttributes {
    match SentimentLabel::parse(raw) {
        SentimentLabel::Positive => DisplayAttributes {
            label: SentimentLabel::Positive,
            emoji: "😊",
            caption: "This text expresses positive emotions",
        },
        SentimentLabel::Negative => DisplayAttributes {
            label: SentimentLabel::Negative,
            emoji: "😔",
            caption: "This text expresses negative emotions",
        },
        SentimentLabel::Neutral => DisplayAttributes {
            label: SentimentLabel::Neutral,
            emoji: "😐",
            caption: "This text has a neutral tone",
        },
    }
}
