//! Mock variation generator — deterministic, template-based headlines used
//! whenever the live provider is unavailable or returns too little.

use serde::Deserialize;

/// Requested headline length. Anything unrecognized falls through to `Long`,
/// the widest word ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Length {
    /// Maximum number of words a variation of this length may contain.
    pub fn word_ceiling(self) -> usize {
        match self {
            Length::Short => 5,
            Length::Medium => 8,
            Length::Long => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Length::Short => "short",
            Length::Medium => "medium",
            Length::Long => "long",
        }
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        match value.as_str() {
            "short" => Length::Short,
            "medium" => Length::Medium,
            _ => Length::Long,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Long
    }
}

/// Produces exactly 3 deterministic template-based variations.
///
/// The tone→template table is a plain lookup: the four recognized tones get
/// their own sets, anything else takes the generic set. The raw input is
/// embedded verbatim, then each string is cut down to the length's word
/// ceiling (leading words kept, never padded).
pub fn mock_variations(input: &str, tone: &str, length: Length) -> Vec<String> {
    let templates = match tone {
        "Friendly" => [
            format!("✨ {input} - Made Simple & Easy"),
            format!("😊 Discover {input} That Actually Works"),
            format!("🎉 Transform Your Life with {input}"),
        ],
        "Professional" => [
            format!("• {input} - Industry-Leading Solutions"),
            format!("→ Professional {input} Services"),
            format!("✓ Trusted {input} for Business Growth"),
        ],
        "Playful" => [
            format!("🚀 {input} Just Got a Whole Lot Better!"),
            format!("💡 The Fun Way to {input}"),
            format!("🌟 {input} That'll Make You Smile"),
        ],
        "Urgent" => [
            format!("⚡ {input} - Limited Time Only!"),
            format!("🔥 Don't Miss Out on {input}"),
            format!("⏰ {input} - Act Now Before It's Gone"),
        ],
        _ => [
            format!("{input} - Get Started Today"),
            format!("Try {input} Risk-Free"),
            format!("{input} - Simple. Effective. Proven."),
        ],
    };

    templates
        .into_iter()
        .map(|template| truncate_words(&template, length.word_ceiling()))
        .collect()
}

/// Keeps the leading `max_words` words of `text`.
fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONES: &[&str] = &["Friendly", "Professional", "Playful", "Urgent", "Sarcastic", ""];

    #[test]
    fn test_always_exactly_three_variations() {
        for tone in TONES {
            for length in [Length::Short, Length::Medium, Length::Long] {
                assert_eq!(mock_variations("My product", tone, length).len(), 3);
            }
        }
    }

    #[test]
    fn test_word_ceilings_hold_for_every_tone() {
        let input = "an unusually wordy product description that keeps going on";
        for tone in TONES {
            for (length, ceiling) in [
                (Length::Short, 5),
                (Length::Medium, 8),
                (Length::Long, 12),
            ] {
                for variation in mock_variations(input, tone, length) {
                    assert!(
                        variation.split_whitespace().count() <= ceiling,
                        "{variation:?} exceeds {ceiling} words for tone {tone:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_unrecognized_tone_falls_back_to_generic_set() {
        let variations = mock_variations("Widgets", "Sarcastic", Length::Long);
        assert_eq!(variations[0], "Widgets - Get Started Today");
        assert_eq!(variations[1], "Try Widgets Risk-Free");
        assert_eq!(variations[2], "Widgets - Simple. Effective. Proven.");
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let first = mock_variations("CRM software", "Urgent", Length::Medium);
        let second = mock_variations("CRM software", "Urgent", Length::Medium);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_embedded_verbatim_within_ceiling() {
        // A one-word input survives truncation in every Professional template.
        for variation in mock_variations("Widgets", "Professional", Length::Medium) {
            assert!(variation.contains("Widgets"), "missing input in {variation:?}");
        }
    }

    #[test]
    fn test_short_templates_are_not_padded() {
        // Generic second template is 3 words; long ceiling (12) leaves it alone.
        let variations = mock_variations("Widgets", "Other", Length::Long);
        assert_eq!(variations[1], "Try Widgets Risk-Free");
    }

    #[test]
    fn test_unrecognized_length_string_maps_to_long() {
        assert_eq!(Length::from("extra-long".to_string()), Length::Long);
        assert_eq!(Length::from("short".to_string()), Length::Short);
        assert_eq!(Length::from("medium".to_string()), Length::Medium);
    }
}
