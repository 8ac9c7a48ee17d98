//! Content-type classification from structural signals.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::{EDUCATIONAL_KEYWORDS, NARRATIVE_WORDS};
use super::{ContentAnalysis, ContentCharacteristics, ContentType};

// Speaker labels ("Alice:"), quoted lines ("> ..."), or quoted attribution.
static DIALOGUE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*[A-Z][a-z]+\s*[:\-]|^>\s+|^"[^"]*"\s*(said|asked|replied)"#).unwrap()
});

static IMPERATIVE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(Add|Remove|Create|Delete|Update|Copy|Paste|First|Next|Then|Finally|Step)\b")
        .unwrap()
});

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

pub(super) fn analyze_content_type(text: &str, text_lower: &str) -> ContentAnalysis {
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let educational_markers = EDUCATIONAL_KEYWORDS
        .iter()
        .filter(|(word, _)| text_lower.contains(word))
        .count();

    let dialogue_lines = lines
        .iter()
        .filter(|line| DIALOGUE_LINE.is_match(line))
        .count();
    let dialogue_ratio = dialogue_lines as f64 / lines.len().max(1) as f64;

    let sentence_count = SENTENCE_END
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let question_count = text.matches('?').count();
    let question_ratio = question_count as f64 / sentence_count.max(1) as f64;

    let imperative_count = IMPERATIVE_LINE.find_iter(text).count();

    // Many short lines read as verse.
    let avg_line_length =
        lines.iter().map(|l| l.chars().count()).sum::<usize>() as f64 / lines.len().max(1) as f64;
    let poetry_score = if avg_line_length < 50.0 && lines.len() > 3 {
        1.0
    } else {
        0.0
    };

    let narrative_markers = NARRATIVE_WORDS
        .iter()
        .filter(|word| text_lower.contains(*word))
        .count();

    let scores: [(ContentType, f64); 5] = [
        (ContentType::Educational, educational_markers as f64 * 2.0),
        (ContentType::Dialogue, dialogue_ratio * 10.0),
        (ContentType::Instructions, imperative_count as f64 * 3.0),
        (ContentType::Narrative, narrative_markers as f64 * 2.0),
        (ContentType::Poetry, poetry_score * 5.0),
    ];

    // First maximal score wins, in declaration order.
    let (primary_type, confidence) = {
        let (best_type, best_score) = scores
            .iter()
            .fold(None::<(ContentType, f64)>, |best, &(ty, score)| match best {
                Some((_, s)) if s >= score => best,
                _ => Some((ty, score)),
            })
            .unwrap_or((ContentType::Other, 0.0));
        if best_score == 0.0 {
            (ContentType::Other, 0.3)
        } else {
            (best_type, (best_score / 10.0).min(1.0))
        }
    };

    ContentAnalysis {
        primary_type,
        confidence,
        characteristics: ContentCharacteristics {
            educational_markers,
            dialogue_ratio,
            question_ratio,
            imperative_count,
            narrative_markers,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> ContentAnalysis {
        analyze_content_type(text, &text.to_lowercase())
    }

    #[test]
    fn study_material_classifies_as_educational() {
        let c = classify(
            "In this lesson we explain the concept of recursion. \
             Students should study the definition and practice the exercise.",
        );
        assert_eq!(c.primary_type, ContentType::Educational);
        assert!(c.confidence > 0.3);
    }

    #[test]
    fn speaker_lines_classify_as_dialogue() {
        let c = classify("Alice: where were you?\nBob: out walking.\nAlice: all night?");
        assert_eq!(c.primary_type, ContentType::Dialogue);
        assert!(c.characteristics.dialogue_ratio > 0.9);
    }

    #[test]
    fn step_lists_classify_as_instructions() {
        let c = classify("First, open the panel.\nThen remove the cover.\nFinally, replace the filter.");
        assert_eq!(c.primary_type, ContentType::Instructions);
        assert_eq!(c.characteristics.imperative_count, 3);
    }

    #[test]
    fn unmarked_prose_is_other_with_floor_confidence() {
        let c = classify("The weather held for most of the afternoon across the valley and it stayed dry until well after dark, which nobody in the village had expected at all given the forecast.");
        assert_eq!(c.primary_type, ContentType::Other);
        assert_eq!(c.confidence, 0.3);
    }
}
