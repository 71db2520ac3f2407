//! Built-in template catalog and keyword-based template suggestions.

use std::collections::BTreeMap;

/// Template suggested when no context keyword matches.
pub const DEFAULT_TEMPLATE: &str = "buzz";

/// Popular templates and what they are good for.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("buzz", "X, X everywhere (Buzz Lightyear)"),
    ("drake", "Comparing two options (Drake Hotline Bling)"),
    ("success", "Celebrating wins (Success Kid)"),
    ("fine", "Things going wrong (This is Fine Dog)"),
    ("fry", "Uncertainty (Futurama Fry)"),
    ("changemind", "Controversial opinions (Change My Mind)"),
    ("distracted", "Priorities/distractions (Distracted Boyfriend)"),
    ("yodawg", "Yo dawg, I heard you like X (Xzibit)"),
    ("interesting", "I don't always X (Most Interesting Man)"),
    ("mordor", "One does not simply X (Boromir)"),
    ("yuno", "Y U NO (Y U NO Guy)"),
    ("doge", "Much X, very Y (Doge)"),
    ("wonka", "Condescending statements (Wonka)"),
    ("ancient", "Aliens/conspiracy (Ancient Aliens Guy)"),
    ("skeptical", "Skeptical reactions (Third World Skeptical Kid)"),
    ("awesome", "Good/bad situations (Awesome/Awkward Penguin)"),
    ("rollsafe", "Can't X if Y (Roll Safe)"),
    ("surprised", "Surprised reactions (Surprised Pikachu)"),
    ("thinking", "Thinking/pondering (Thinking Guy)"),
    ("boardroom", "Bad suggestions (Boardroom Meeting)"),
];

/// Context keywords and their candidate templates.
///
/// Order matters: [`suggest`] returns on the first keyword found, so a
/// keyword listed earlier wins over a later one even if the later one is a
/// better fit.
pub const CONTEXT_MAP: &[(&str, &[&str])] = &[
    ("success", &["success", "awesome"]),
    ("failure", &["fine", "yuno"]),
    ("comparison", &["drake", "awesome", "distracted"]),
    ("uncertainty", &["fry", "suspicious"]),
    (
        "statement",
        &["buzz", "yodawg", "interesting", "mordor", "changemind"],
    ),
    ("reaction", &["success", "fine", "surprised", "thinking"]),
    ("humor", &["doge", "wonka", "ancient", "rollsafe"]),
    ("deployment", &["success", "fine", "interesting"]),
    ("testing", &["success", "fry", "interesting"]),
    ("debugging", &["fine", "fry", "buzz"]),
    ("documentation", &["yodawg", "buzz", "wonka"]),
];

/// All catalog templates keyed by id.
pub fn list_templates() -> BTreeMap<&'static str, &'static str> {
    TEMPLATES.iter().copied().collect()
}

/// Description of a catalog template.
pub fn describe_template(id: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, description)| *description)
}

pub fn is_known_template(id: &str) -> bool {
    describe_template(id).is_some()
}

/// Suggest a template for a free-text context, falling back to
/// [`DEFAULT_TEMPLATE`].
pub fn suggest(context: &str) -> &'static str {
    suggest_or(context, DEFAULT_TEMPLATE)
}

/// Suggest a template for a free-text context, returning `fallback` when no
/// keyword matches.
///
/// Keywords are checked as case-insensitive substrings in [`CONTEXT_MAP`]
/// order; the first candidate of the first match is returned.
pub fn suggest_or<'a>(context: &str, fallback: &'a str) -> &'a str {
    let context = context.to_lowercase();

    CONTEXT_MAP
        .iter()
        .find(|(keyword, _)| context.contains(keyword))
        .and_then(|(_, templates)| templates.first().copied())
        .unwrap_or(fallback)
}

/// Every candidate template for a context, in keyword order.
///
/// Duplicates keep their first position. Empty when nothing matches.
pub fn suggest_all(context: &str) -> Vec<&'static str> {
    let context = context.to_lowercase();
    let mut candidates: Vec<&'static str> = Vec::new();

    for (_, templates) in CONTEXT_MAP
        .iter()
        .filter(|(keyword, _)| context.contains(keyword))
    {
        for template in templates.iter() {
            if !candidates.contains(template) {
                candidates.push(*template);
            }
        }
    }

    candidates
}
