//! Scoring policy: the phrase lists, point values, and threshold tables
//! the scorers read. Everything here is fixed configuration, so the
//! policy can be audited and tested without running an evaluation.

/// Openers that earn the top salutation tier.
pub const EXCELLENT_OPENERS: &[&str] = &[
    "i am excited to introduce",
    "feeling great",
    "i'm excited to introduce",
    "feeling very great",
    "i feel great to introduce",
];

/// Full greetings worth the second salutation tier.
pub const GOOD_SALUTATIONS: &[&str] = &[
    "good morning",
    "good afternoon",
    "good evening",
    "good day",
    "hello everyone",
];

/// Bare greetings worth a couple of points on their own.
pub const SHORT_GREETINGS: &[&str] = &["hi", "hello"];

pub const SALUTATION_EXCELLENT_POINTS: u32 = 5;
pub const SALUTATION_GOOD_POINTS: u32 = 4;
pub const SALUTATION_SHORT_POINTS: u32 = 2;

/// Concepts every introduction should touch. Detected semantically, not
/// by literal substring.
pub const ESSENTIAL_CONCEPTS: &[&str] = &["name", "age", "family", "hobbies", "goals"];

/// Nice-to-have concepts, also detected semantically but held to a
/// higher similarity bar.
pub const SECONDARY_CONCEPTS: &[&str] =
    &["interest", "passion", "experience", "skills", "background"];

/// Literal mentions that earn bonus points on top of the semantic checks.
pub const SCHOOL_KEYWORDS: &[&str] = &["school", "class"];
pub const FAMILY_MEMBERS: &[&str] = &["mother", "father", "sister", "brother", "parent"];

pub const ESSENTIAL_CONCEPT_POINTS: u32 = 4;
pub const SECONDARY_CONCEPT_POINTS: u32 = 2;
pub const SCHOOL_POINTS: u32 = 4;
pub const FAMILY_POINTS: u32 = 2;

/// Similarity a transcript must strictly exceed for an essential concept
/// to count as covered.
pub const ESSENTIAL_SIMILARITY: f32 = 0.7;
/// Stricter bar for the secondary concepts.
pub const SECONDARY_SIMILARITY: f32 = 0.8;

/// Greeting markers for the flow check, looser than the salutation tiers.
pub const FLOW_SALUTATIONS: &[&str] = &[
    "hello",
    "hi",
    "good morning",
    "good afternoon",
    "good evening",
    "greetings",
    "hey",
];

/// Markers for the who-am-I stage of an introduction.
pub const BASIC_DETAIL_KEYWORDS: &[&str] = &["name", "age", "class", "school", "place"];

/// Markers for the personal-details stage. "love" and "enjoy" cover the
/// common hobby phrasing ("I love painting") the noun keywords miss.
pub const ADDITIONAL_DETAIL_KEYWORDS: &[&str] = &[
    "hobbies",
    "family",
    "friends",
    "interests",
    "activities",
    "love",
    "enjoy",
];

/// Closing markers.
pub const CLOSING_PHRASES: &[&str] = &[
    "thank you",
    "goodbye",
    "thanks for listening",
    "thank you for listening",
    "that’s all",
];

pub const FLOW_POINTS: u32 = 5;

/// Tokens counted as fillers. Matched by exact token equality, so the
/// multi-word entries only ever match if they survive as one token.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "so", "actually", "basically", "right", "i mean", "well",
    "kinda", "sort of", "okay", "hmm", "ah",
];

/// One row of a descending cutoff table. The first row whose bound the
/// value passes supplies the score and feedback.
#[derive(Debug)]
pub struct Cutoff {
    pub min: f64,
    /// Whether hitting `min` exactly is enough, or the value must exceed it.
    pub inclusive: bool,
    pub score: u32,
    pub feedback: &'static str,
}

/// One row of an ascending ceiling table. The first row with
/// `value <= max` wins.
#[derive(Debug)]
pub struct Ceiling {
    pub max: f64,
    pub score: u32,
    pub feedback: &'static str,
}

/// A closed words-per-minute band.
#[derive(Debug)]
pub struct WpmBand {
    pub min: f64,
    pub max: f64,
    pub score: u32,
    pub feedback: &'static str,
}

/// Grammar quality bands. The top band is strict: a quality of exactly
/// 0.9 lands in the second band.
pub const GRAMMAR_BANDS: &[Cutoff] = &[
    Cutoff {
        min: 0.9,
        inclusive: false,
        score: 10,
        feedback: "Nearly flawless grammar.",
    },
    Cutoff {
        min: 0.7,
        inclusive: true,
        score: 8,
        feedback: "Good grammar with only minor slips.",
    },
    Cutoff {
        min: 0.5,
        inclusive: true,
        score: 6,
        feedback: "Understandable, but grammar errors are frequent enough to notice.",
    },
    Cutoff {
        min: 0.3,
        inclusive: true,
        score: 4,
        feedback: "Grammar errors get in the way. Practicing simple sentence forms would help.",
    },
    Cutoff {
        min: f64::NEG_INFINITY,
        inclusive: true,
        score: 2,
        feedback: "Grammar needs serious attention. Keep sentences short and simple for now.",
    },
];

/// Type-token-ratio bands.
pub const VOCABULARY_BANDS: &[Cutoff] = &[
    Cutoff {
        min: 0.9,
        inclusive: true,
        score: 10,
        feedback: "Very varied vocabulary. Almost every word is fresh.",
    },
    Cutoff {
        min: 0.7,
        inclusive: true,
        score: 8,
        feedback: "Good range of words with little repetition.",
    },
    Cutoff {
        min: 0.5,
        inclusive: true,
        score: 6,
        feedback: "Reasonable variety, though some words repeat.",
    },
    Cutoff {
        min: 0.3,
        inclusive: true,
        score: 4,
        feedback: "Noticeable repetition. Try swapping repeated words for synonyms.",
    },
    Cutoff {
        min: f64::NEG_INFINITY,
        inclusive: true,
        score: 2,
        feedback: "Heavy repetition. The same few words carry most of the speech.",
    },
];

/// Compound-polarity bands.
pub const SENTIMENT_BANDS: &[Cutoff] = &[
    Cutoff {
        min: 0.9,
        inclusive: true,
        score: 15,
        feedback: "Wonderfully positive and enthusiastic tone.",
    },
    Cutoff {
        min: 0.7,
        inclusive: true,
        score: 12,
        feedback: "Warm, positive tone throughout.",
    },
    Cutoff {
        min: 0.5,
        inclusive: true,
        score: 9,
        feedback: "Generally positive. A little more enthusiasm would lift it.",
    },
    Cutoff {
        min: 0.3,
        inclusive: true,
        score: 6,
        feedback: "Fairly neutral tone. Let some enthusiasm show.",
    },
    Cutoff {
        min: f64::NEG_INFINITY,
        inclusive: true,
        score: 3,
        feedback: "The tone comes across flat or negative. Aim for an upbeat delivery.",
    },
];

/// Filler-rate bands, keyed by fillers as a percentage of all words.
pub const FILLER_BANDS: &[Ceiling] = &[
    Ceiling {
        max: 3.0,
        score: 15,
        feedback: "Clean delivery with hardly any filler.",
    },
    Ceiling {
        max: 6.0,
        score: 12,
        feedback: "A few fillers slip in. A silent pause would sound more polished.",
    },
    Ceiling {
        max: 9.0,
        score: 9,
        feedback: "Fillers are starting to distract. Practice pausing instead of filling.",
    },
    Ceiling {
        max: 12.0,
        score: 6,
        feedback: "Frequent fillers interrupt the message. Slow down and pause between thoughts.",
    },
    Ceiling {
        max: f64::INFINITY,
        score: 3,
        feedback: "Filler words dominate the delivery. Rehearse until the phrases come out clean.",
    },
];

/// Rates strictly above this are scored before the bands are scanned.
pub const WPM_FAST_CUTOFF: f64 = 161.0;

pub const WPM_TOO_FAST: (u32, &str) = (2, "Too fast. Slow down so every word can land.");

pub const WPM_BANDS: &[WpmBand] = &[
    WpmBand {
        min: 141.0,
        max: 160.0,
        score: 6,
        feedback: "A touch quick. Easing off slightly would help clarity.",
    },
    WpmBand {
        min: 111.0,
        max: 140.0,
        score: 10,
        feedback: "Ideal pace. Comfortable to follow throughout.",
    },
    WpmBand {
        min: 81.0,
        max: 110.0,
        score: 6,
        feedback: "A little slow. Picking up the pace would hold attention better.",
    },
];

/// Rates matching no band: slow extremes and the gaps between bands.
pub const WPM_DEFAULT: (u32, &str) = (
    2,
    "Well outside a comfortable speaking pace. Aim for roughly 110 to 140 words per minute.",
);

/// Walk a descending cutoff table and return the first matching row.
pub fn pick_cutoff(bands: &[Cutoff], value: f64) -> &Cutoff {
    bands
        .iter()
        .find(|band| {
            if band.inclusive {
                value >= band.min
            } else {
                value > band.min
            }
        })
        .expect("cutoff tables end with an always-matching row")
}

/// Walk an ascending ceiling table and return the first matching row.
pub fn pick_ceiling(bands: &[Ceiling], value: f64) -> &Ceiling {
    bands
        .iter()
        .find(|band| value <= band.max)
        .expect("ceiling tables end with an always-matching row")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_top_band_is_strict() {
        assert_eq!(pick_cutoff(GRAMMAR_BANDS, 0.9).score, 8);
        assert_eq!(pick_cutoff(GRAMMAR_BANDS, 0.91).score, 10);
        assert_eq!(pick_cutoff(GRAMMAR_BANDS, 1.0).score, 10);
    }

    #[test]
    fn vocabulary_top_band_is_inclusive() {
        assert_eq!(pick_cutoff(VOCABULARY_BANDS, 0.9).score, 10);
        assert_eq!(pick_cutoff(VOCABULARY_BANDS, 0.89).score, 8);
    }

    #[test]
    fn cutoff_tables_bottom_out() {
        assert_eq!(pick_cutoff(VOCABULARY_BANDS, 0.0).score, 2);
        assert_eq!(pick_cutoff(GRAMMAR_BANDS, -1.0).score, 2);
        assert_eq!(pick_cutoff(SENTIMENT_BANDS, -0.99).score, 3);
    }

    #[test]
    fn sentiment_bands_cover_the_compound_range() {
        assert_eq!(pick_cutoff(SENTIMENT_BANDS, 0.95).score, 15);
        assert_eq!(pick_cutoff(SENTIMENT_BANDS, 0.7).score, 12);
        assert_eq!(pick_cutoff(SENTIMENT_BANDS, 0.5).score, 9);
        assert_eq!(pick_cutoff(SENTIMENT_BANDS, 0.3).score, 6);
        assert_eq!(pick_cutoff(SENTIMENT_BANDS, 0.0).score, 3);
    }

    #[test]
    fn filler_ceilings_are_inclusive() {
        assert_eq!(pick_ceiling(FILLER_BANDS, 0.0).score, 15);
        assert_eq!(pick_ceiling(FILLER_BANDS, 3.0).score, 15);
        assert_eq!(pick_ceiling(FILLER_BANDS, 3.01).score, 12);
        assert_eq!(pick_ceiling(FILLER_BANDS, 12.0).score, 6);
        assert_eq!(pick_ceiling(FILLER_BANDS, 55.0).score, 3);
    }

    #[test]
    fn wpm_bands_leave_gaps_between_them() {
        // 160.5 and 161.0 fall between rows and take the default score.
        let in_gap = |wpm: f64| {
            wpm <= WPM_FAST_CUTOFF
                && !WPM_BANDS
                    .iter()
                    .any(|band| wpm >= band.min && wpm <= band.max)
        };
        assert!(in_gap(160.5));
        assert!(in_gap(161.0));
        assert!(in_gap(110.5));
        assert!(!in_gap(140.0));
    }
}
