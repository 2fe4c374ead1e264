use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::model::InstructionStep;

// Step boundaries, tried as alternatives at every position:
//   "12."            numbered-list marker (also fires on "2.5", kept as is)
//   "\n"             line break
//   ".  A" / "! A"   whitespace between sentence punctuation and a capital;
//                    only the captured whitespace is removed
const STEP_BOUNDARY_PATTERN: &str = r"[0-9]+\.|\n|[.!?](\s+)[A-Z]";

lazy_static! {
    static ref STEP_BOUNDARY: Regex =
        Regex::new(STEP_BOUNDARY_PATTERN).expect("Step boundary pattern should be valid");
}

/// Split a free-text instructions blob into steps for numbered display
///
/// Handles numbered lines, newline-separated lines and run-on paragraphs in
/// a single pass. Every fragment is trimmed and blank fragments are dropped.
pub fn segment_instructions(text: Option<&str>) -> Vec<InstructionStep> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Vec::new(),
    };

    let mut fragments = Vec::new();
    let mut last = 0;
    for caps in STEP_BOUNDARY.captures_iter(text) {
        // Sentence boundaries keep their punctuation and capital letter
        let cut = caps.get(1).or_else(|| caps.get(0));
        if let Some(cut) = cut {
            fragments.push(&text[last..cut.start()]);
            last = cut.end();
        }
    }
    fragments.push(&text[last..]);

    let steps: Vec<InstructionStep> = fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| InstructionStep {
            text: fragment.to_string(),
        })
        .collect();

    trace!("Segmented instructions into {} steps", steps.len());
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        segment_instructions(Some(input))
            .into_iter()
            .map(|step| step.text)
            .collect()
    }

    #[test]
    fn test_absent_and_empty() {
        assert!(segment_instructions(None).is_empty());
        assert!(segment_instructions(Some("")).is_empty());
        assert!(segment_instructions(Some("  \n\t ")).is_empty());
    }

    #[test]
    fn test_numbered_lines() {
        assert_eq!(
            texts("1. Boil water.\n2. Add pasta."),
            vec!["Boil water.", "Add pasta."]
        );
    }

    #[test]
    fn test_sentence_boundaries() {
        assert_eq!(
            texts("Boil the water. Add the pasta and stir well."),
            vec!["Boil the water.", "Add the pasta and stir well."]
        );
        assert_eq!(
            texts("Taste it! Is it salty? Season accordingly."),
            vec!["Taste it!", "Is it salty?", "Season accordingly."]
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert_eq!(
            texts("Step one\nStep two\n\nStep three"),
            vec!["Step one", "Step two", "Step three"]
        );
        assert_eq!(texts("Mix well.\r\n\r\nServe hot."), vec!["Mix well.", "Serve hot."]);
    }

    #[test]
    fn test_lowercase_after_period_does_not_split() {
        assert_eq!(
            texts("Add 1 tsp. salt and stir."),
            vec!["Add 1 tsp. salt and stir."]
        );
        assert_eq!(texts("Cook, e.g. in a pan."), vec!["Cook, e.g. in a pan."]);
    }

    #[test]
    fn test_decimal_numbers_split() {
        // Numbers followed by a period are treated as step markers
        assert_eq!(texts("mix for 2.5 minutes"), vec!["mix for", "5 minutes"]);
    }

    #[test]
    fn test_step_markers_inside_paragraph() {
        assert_eq!(
            texts("STEP 1. Heat oil. STEP 2. Fry onions until golden."),
            vec!["STEP", "Heat oil.", "STEP", "Fry onions until golden."]
        );
    }

    #[test]
    fn test_single_step_without_delimiters() {
        assert_eq!(texts("  Serve immediately  "), vec!["Serve immediately"]);
    }

    #[test]
    fn test_repeatable() {
        let input = "Preheat the oven. 2. Bake for 20 minutes.\nServe.";
        assert_eq!(texts(input), texts(input));
        assert_eq!(
            texts(input),
            vec!["Preheat the oven.", "Bake for 20 minutes.", "Serve."]
        );
    }
}
