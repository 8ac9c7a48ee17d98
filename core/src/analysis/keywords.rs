//! Static weighted-keyword tables driving the rule-based analyzer.
//!
//! Immutable, loaded into the binary at compile time. Matching is substring
//! containment over a lowercased copy of the input; emotion markers are
//! reported in table definition order.

pub(crate) static POSITIVE_KEYWORDS: &[(&str, f64)] = &[
    ("amazing", 0.9),
    ("fantastic", 0.9),
    ("wonderful", 0.9),
    ("excellent", 0.9),
    ("great", 0.8),
    ("good", 0.7),
    ("happy", 0.9),
    ("joy", 0.9),
    ("thrilled", 0.95),
    ("excited", 0.9),
    ("love", 0.85),
    ("awesome", 0.85),
    ("beautiful", 0.8),
    ("perfect", 0.85),
    ("brilliant", 0.9),
    ("incredible", 0.9),
    ("outstanding", 0.9),
    ("superb", 0.85),
    ("delighted", 0.9),
    ("pleased", 0.75),
    ("grateful", 0.8),
    ("blessed", 0.85),
    ("accomplished", 0.75),
    ("successful", 0.8),
    ("triumph", 0.85),
];

pub(crate) static NEGATIVE_KEYWORDS: &[(&str, f64)] = &[
    ("terrible", 0.95),
    ("awful", 0.95),
    ("horrible", 0.95),
    ("hate", 0.9),
    ("angry", 0.9),
    ("upset", 0.85),
    ("sad", 0.85),
    ("depressed", 0.9),
    ("disappointed", 0.8),
    ("frustrated", 0.8),
    ("annoyed", 0.75),
    ("scared", 0.85),
    ("afraid", 0.85),
    ("worried", 0.8),
    ("anxious", 0.8),
    ("stressed", 0.75),
    ("disgusted", 0.9),
    ("bad", 0.7),
    ("poor", 0.7),
    ("failed", 0.8),
    ("crisis", 0.9),
    ("emergency", 0.85),
    ("dangerous", 0.85),
    ("wrong", 0.7),
    ("mistake", 0.6),
    ("problem", 0.65),
    ("issue", 0.55),
    ("difficult", 0.6),
];

pub(crate) static URGENT_KEYWORDS: &[(&str, f64)] = &[
    ("urgent", 0.95),
    ("critical", 0.95),
    ("must", 0.85),
    ("immediately", 0.9),
    ("now", 0.75),
    ("important", 0.8),
    ("essential", 0.8),
    ("crucial", 0.9),
    ("emergency", 0.9),
    ("asap", 0.95),
    ("alert", 0.9),
    ("warning", 0.85),
    ("immediate", 0.9),
    ("imperative", 0.85),
    ("required", 0.75),
    ("mandatory", 0.8),
];

pub(crate) static FORMAL_KEYWORDS: &[(&str, f64)] = &[
    ("furthermore", 0.9),
    ("notwithstanding", 0.95),
    ("subsequently", 0.9),
    ("hence", 0.85),
    ("thus", 0.85),
    ("moreover", 0.85),
    ("however", 0.75),
    ("therefore", 0.8),
    ("whereas", 0.85),
    ("accordingly", 0.85),
    ("hereby", 0.9),
    ("thereby", 0.85),
    ("thereof", 0.85),
    ("concerning", 0.8),
    ("regarding", 0.75),
    ("pertaining", 0.85),
    ("established", 0.8),
    ("protocol", 0.9),
    ("procedure", 0.85),
];

pub(crate) static CASUAL_KEYWORDS: &[(&str, f64)] = &[
    ("gonna", 0.95),
    ("wanna", 0.95),
    ("kinda", 0.9),
    ("sorta", 0.9),
    ("awesome", 0.85),
    ("cool", 0.8),
    ("hey", 0.95),
    ("yeah", 0.95),
    ("nope", 0.95),
    ("yep", 0.95),
    ("gotta", 0.9),
    ("dunno", 0.95),
    ("lemme", 0.95),
    ("gimme", 0.95),
    ("ain't", 0.95),
    ("stuff", 0.8),
    ("thing", 0.75),
    ("like", 0.7),
];

pub(crate) static TECHNICAL_KEYWORDS: &[(&str, f64)] = &[
    ("algorithm", 0.9),
    ("database", 0.9),
    ("configuration", 0.9),
    ("parameter", 0.85),
    ("implementation", 0.85),
    ("protocol", 0.85),
    ("system", 0.75),
    ("network", 0.8),
    ("server", 0.8),
    ("client", 0.8),
    ("api", 0.9),
    ("integration", 0.85),
    ("optimization", 0.85),
    ("cache", 0.85),
    ("encryption", 0.9),
    ("authentication", 0.85),
    ("framework", 0.8),
    ("library", 0.75),
    ("module", 0.75),
    ("function", 0.75),
    ("variable", 0.8),
    ("iteration", 0.8),
    ("recursion", 0.85),
    ("synchronous", 0.9),
];

pub(crate) static EDUCATIONAL_KEYWORDS: &[(&str, f64)] = &[
    ("explain", 0.85),
    ("understand", 0.8),
    ("learn", 0.85),
    ("teach", 0.85),
    ("student", 0.8),
    ("teacher", 0.8),
    ("lesson", 0.8),
    ("course", 0.8),
    ("chapter", 0.8),
    ("definition", 0.85),
    ("concept", 0.8),
    ("theory", 0.8),
    ("principle", 0.8),
    ("example", 0.75),
    ("exercise", 0.75),
    ("assignment", 0.75),
    ("knowledge", 0.8),
    ("skill", 0.75),
    ("practice", 0.75),
    ("study", 0.75),
    ("education", 0.85),
    ("academic", 0.85),
    ("scholarly", 0.85),
    ("pedagogy", 0.9),
];

/// Storytelling markers for narrative content detection (unweighted).
pub(crate) static NARRATIVE_WORDS: &[&str] = &[
    "once",
    "upon",
    "time",
    "kingdom",
    "tale",
    "story",
    "character",
    "scene",
    "happened",
    "suddenly",
];
