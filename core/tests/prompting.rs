use lectern_core::analysis::{analyze, ContentType, Sentiment};
use lectern_core::{derive_adjustments, generate_prompt};

const EDUCATIONAL_POSITIVE: &str = "You're an enthusiastic and engaging teacher reading study material to students. \
Use a warm, encouraging, and energetic tone. Speak with clear articulation and natural pauses \
between concepts. Emphasize important points with appropriate inflection. Make the material \
interesting and help students feel excited about learning. Include slight emphasis on key terms.";

const BALANCED: &str = "You're a teacher reading study material aloud to help students learn. \
Speak clearly and naturally with good pacing. Emphasize important terms and concepts. \
Use natural pauses to allow students time to absorb information. \
Maintain an engaging but professional tone throughout.";

#[test]
fn missing_analysis_falls_back_to_balanced() {
    assert_eq!(generate_prompt(None), BALANCED);
    assert_eq!(generate_prompt(analyze("").as_ref()), BALANCED);
}

#[test]
fn confident_educational_positive_selects_that_template_exactly() {
    let text = "This is an amazing lesson! Students will love to learn this wonderful \
                concept, and the example makes the theory a joy to study.";
    let analysis = analyze(text).unwrap();
    assert_eq!(analysis.content_type.primary_type, ContentType::Educational);
    assert!(analysis.content_type.confidence > 0.3);
    assert_eq!(analysis.sentiment.dominant_sentiment, Sentiment::Positive);

    assert_eq!(generate_prompt(Some(&analysis)), EDUCATIONAL_POSITIVE);
}

#[test]
fn uncertain_classification_defaults_to_educational() {
    // No structural or keyword signals at all: confidence floors at 0.3.
    let analysis =
        analyze("The weather held for most of the afternoon across the valley.").unwrap();
    assert_eq!(analysis.content_type.primary_type, ContentType::Other);
    assert!(analysis.content_type.confidence <= 0.3);

    let prompt = generate_prompt(Some(&analysis));
    assert!(prompt.contains("teacher reading study material"));
}

#[test]
fn dialogue_text_selects_dialogue_template() {
    let analysis = analyze(
        "Alice: where were you?\nBob: out walking.\nAlice: all night?\nBob: most of it.",
    )
    .unwrap();
    assert_eq!(analysis.content_type.primary_type, ContentType::Dialogue);
    assert!(analysis.content_type.confidence > 0.3);
    let prompt = generate_prompt(Some(&analysis));
    assert!(prompt.contains("narrating dialogue"));
}

#[test]
fn narrative_text_selects_narrative_template() {
    let analysis = analyze(
        "Once upon a time, in a faraway kingdom, a tale was told of a curious \
         character. Suddenly the story took a turn nobody had expected, and \
         everything that happened next changed the scene entirely.",
    )
    .unwrap();
    assert_eq!(analysis.content_type.primary_type, ContentType::Narrative);
    assert!(analysis.content_type.confidence > 0.3);
    let prompt = generate_prompt(Some(&analysis));
    assert!(prompt.contains("storyteller"));
}

#[test]
fn prompt_is_never_empty() {
    for text in [
        "",
        "hey gonna wanna",
        "First, do this. Then, do that.",
        "terrible awful horrible",
        "algorithm database protocol api server",
    ] {
        assert!(!generate_prompt(analyze(text).as_ref()).is_empty());
    }
}

#[test]
fn adjustments_track_sentiment_and_pace() {
    let negative = analyze("This terrible, awful failure was a horrible crisis.").unwrap();
    assert_eq!(negative.sentiment.dominant_sentiment, Sentiment::Negative);
    let adj = derive_adjustments(Some(&negative));
    assert_eq!(adj.pitch, -3.0);
    assert_eq!(adj.volume, -3.0);
    assert_eq!(adj.speaking_rate, negative.pace.suggested_rate);
}
