//! Style-directive generation from analysis results
//!
//! Maps an [`AnalysisResult`] onto a fixed catalogue of delivery directives
//! by strict priority. The catalogue is biased toward study material: when
//! classification is uncertain the educational templates are used, since
//! unclassified text is most often lecture notes or reading assignments.

use crate::analysis::{AnalysisResult, ContentType, Sentiment, ToneType};

pub(crate) const EDUCATIONAL_POSITIVE: &str = "You're an enthusiastic and engaging teacher reading study material to students. \
Use a warm, encouraging, and energetic tone. Speak with clear articulation and natural pauses \
between concepts. Emphasize important points with appropriate inflection. Make the material \
interesting and help students feel excited about learning. Include slight emphasis on key terms.";

pub(crate) const EDUCATIONAL_NEUTRAL: &str = "You're a clear, professional teacher reading study material to students. \
Maintain a calm, patient, and authoritative tone. Speak at a steady, easy-to-follow pace. \
Use natural pauses after important concepts to allow comprehension. Articulate clearly \
and emphasize definitions and key concepts slightly. Help students understand and retain the material.";

pub(crate) const EDUCATIONAL_NEGATIVE: &str = "You're a compassionate, supportive teacher reading difficult or complex study material. \
Use a reassuring, calm tone despite any challenging content. Speak slowly and deliberately \
to ensure clarity and understanding. Include thoughtful pauses for students to absorb information. \
Make the material feel approachable and less intimidating.";

const NARRATIVE_POSITIVE: &str = "You're a skilled storyteller sharing an engaging narrative. \
Use a warm, expressive voice with natural emotional variation. \
Bring the story to life with enthusiasm and good pacing.";

const NARRATIVE_NEGATIVE: &str = "You're a thoughtful storyteller sharing a poignant narrative. \
Use an expressive, emotionally aware voice. Slow your pace slightly \
for dramatic moments. Convey the gravity of the story.";

const NARRATIVE_NEUTRAL: &str = "You're a clear, engaging storyteller. Speak with natural variation \
in tone and pacing. Maintain listener engagement throughout. \
Use pauses for dramatic effect where appropriate.";

const DIALOGUE: &str = "You're narrating dialogue between multiple speakers. \
Use distinct vocal characteristics for different characters. \
Pause between speaker changes. Maintain clear, engaging delivery.";

const INSTRUCTIONS_URGENT: &str = "You're clearly delivering important step-by-step instructions. \
Speak with authority and clarity. Use emphasis on critical steps. \
Maintain a slightly elevated pace to convey importance. Pause after each step.";

const INSTRUCTIONS_NORMAL: &str = "You're clearly explaining step-by-step instructions. \
Speak at a steady, easy-to-follow pace. Pause between steps. \
Maintain clear articulation and professional tone.";

const TECHNICAL: &str = "You're an expert explaining technical material with precision. \
Speak clearly and deliberately at a measured pace. Use proper \
pronunciation for technical terms. Maintain professional authority.";

const CONVERSATIONAL_FRIENDLY: &str = "Speak like a warm, approachable friend sharing thoughts. \
Be conversational and genuine. Use a natural, relaxed pace. \
Sound personable and easy to connect with.";

const CONVERSATIONAL_PROFESSIONAL: &str = "Maintain a professional but friendly conversational tone. \
Use clear articulation and measured pace. Sound businesslike yet personable. \
Create a sense of trust and reliability.";

const URGENT: &str = "Convey urgency and importance. Speak with elevated energy and slightly \
faster pace, but maintain clarity. Use appropriate emphasis. Make it clear this matters.";

const CALM: &str = "Speak in a calm, soothing voice with a slower pace. \
Use soft volume and gentle delivery. Create a peaceful, safe atmosphere. \
Include thoughtful pauses for reflection.";

pub(crate) const BALANCED: &str = "You're a teacher reading study material aloud to help students learn. \
Speak clearly and naturally with good pacing. Emphasize important terms and concepts. \
Use natural pauses to allow students time to absorb information. \
Maintain an engaging but professional tone throughout.";

static ALL_TEMPLATES: &[&str] = &[
    EDUCATIONAL_POSITIVE,
    EDUCATIONAL_NEUTRAL,
    EDUCATIONAL_NEGATIVE,
    NARRATIVE_POSITIVE,
    NARRATIVE_NEGATIVE,
    NARRATIVE_NEUTRAL,
    DIALOGUE,
    INSTRUCTIONS_URGENT,
    INSTRUCTIONS_NORMAL,
    TECHNICAL,
    CONVERSATIONAL_FRIENDLY,
    CONVERSATIONAL_PROFESSIONAL,
    URGENT,
    CALM,
    BALANCED,
];

/// Byte length of the largest directive the generator can emit, used by the
/// segmenter to reserve headroom inside the chunk budget.
pub fn max_directive_bytes() -> usize {
    ALL_TEMPLATES.iter().map(|t| t.len()).max().unwrap_or(0)
}

fn educational_by_sentiment(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => EDUCATIONAL_POSITIVE,
        Sentiment::Negative => EDUCATIONAL_NEGATIVE,
        Sentiment::Neutral => EDUCATIONAL_NEUTRAL,
    }
}

/// Select the delivery directive for an analyzed chunk. Never empty;
/// missing analysis falls back to the balanced template.
pub fn generate_prompt(analysis: Option<&AnalysisResult>) -> &'static str {
    let Some(analysis) = analysis else {
        return BALANCED;
    };

    let sentiment = analysis.sentiment.dominant_sentiment;
    let content_type = analysis.content_type.primary_type;
    let confidence = analysis.content_type.confidence;
    let has_urgent_marker = analysis.sentiment.emotion_markers.contains(&"urgent");

    if content_type == ContentType::Educational && confidence > 0.3 {
        educational_by_sentiment(sentiment)
    } else if confidence <= 0.3 {
        // Uncertain classification defaults to study-material delivery.
        educational_by_sentiment(sentiment)
    } else if content_type == ContentType::Narrative {
        match sentiment {
            Sentiment::Positive => NARRATIVE_POSITIVE,
            Sentiment::Negative => NARRATIVE_NEGATIVE,
            Sentiment::Neutral => NARRATIVE_NEUTRAL,
        }
    } else if content_type == ContentType::Dialogue {
        DIALOGUE
    } else if content_type == ContentType::Instructions {
        if has_urgent_marker {
            INSTRUCTIONS_URGENT
        } else {
            INSTRUCTIONS_NORMAL
        }
    } else if analysis.tone.technical_level > 0.6 {
        TECHNICAL
    } else if analysis.tone.tone_type == ToneType::Formal {
        CONVERSATIONAL_PROFESSIONAL
    } else if analysis.tone.tone_type == ToneType::Casual {
        CONVERSATIONAL_FRIENDLY
    } else if analysis.tone.tone_type == ToneType::Technical {
        TECHNICAL
    } else if sentiment == Sentiment::Negative {
        CALM
    } else if sentiment == Sentiment::Positive {
        if has_urgent_marker {
            URGENT
        } else {
            CONVERSATIONAL_FRIENDLY
        }
    } else {
        BALANCED
    }
}
