//! Candidate extraction from a raw model response.

/// Separators treated as line boundaries, `\r\n` included via `\r` and `\n`.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}',
    '\u{2029}',
];

/// Characters stripped from both ends of every response line.
const DECORATION_CHARS: &[char] = &['•', '*', '-', ' ', '\t'];

/// Splits a raw response into candidate prompts.
///
/// Empty lines are dropped, bullet/dash decoration is stripped from both ends
/// and trailing whitespace removed. Source order is preserved.
///
/// # Example
///
/// ```
/// use mcbench_prompts::quality::extract_candidates;
///
/// let raw = "• Build a lighthouse (Arch)\n\n- Carve a sphinx (Myth)  ";
/// assert_eq!(
///     extract_candidates(raw),
///     vec!["Build a lighthouse (Arch)", "Carve a sphinx (Myth)"]
/// );
/// ```
pub fn extract_candidates(raw: &str) -> Vec<String> {
    raw.split(LINE_BREAKS)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim_matches(DECORATION_CHARS).trim_end())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order_and_skips_blank_lines() {
        let raw = "First prompt (Myth)\n\n   \nSecond prompt (Pop)\nThird prompt (Tech)";
        let candidates = extract_candidates(raw);
        assert_eq!(
            candidates,
            vec![
                "First prompt (Myth)",
                "Second prompt (Pop)",
                "Third prompt (Tech)"
            ]
        );
    }

    #[test]
    fn test_strips_decoration() {
        let raw = "* Starred (Arch)\n- Dashed (Nature)\n\t•  Bulleted (Pop)\t\n** Double (Tech) ";
        let candidates = extract_candidates(raw);
        assert_eq!(
            candidates,
            vec![
                "Starred (Arch)",
                "Dashed (Nature)",
                "Bulleted (Pop)",
                "Double (Tech)"
            ]
        );
    }

    #[test]
    fn test_windows_line_endings() {
        let raw = "Build a windmill (Tech)\r\nRaise a ziggurat (History)\r\n";
        let candidates = extract_candidates(raw);
        assert_eq!(
            candidates,
            vec!["Build a windmill (Tech)", "Raise a ziggurat (History)"]
        );
    }

    #[test]
    fn test_other_line_separators() {
        for sep in ["\r", "\u{0b}", "\u{0c}", "\u{1e}", "\u{85}", "\u{2028}", "\u{2029}"] {
            let raw = format!(
                "Carve a giant sphinx (Myth){}Sculpt a retro arcade cabinet (Pop)",
                sep
            );
            assert_eq!(
                extract_candidates(&raw),
                vec![
                    "Carve a giant sphinx (Myth)",
                    "Sculpt a retro arcade cabinet (Pop)"
                ],
                "separator {:?}",
                sep
            );
        }
    }

    #[test]
    fn test_decoration_only_lines_are_dropped() {
        let raw = "---\n***\nBuild a pagoda (Arch)\n • ";
        assert_eq!(extract_candidates(raw), vec!["Build a pagoda (Arch)"]);
    }

    #[test]
    fn test_inner_hyphens_are_kept() {
        let raw = "- Build a sci-fi hangar (Tech)";
        assert_eq!(extract_candidates(raw), vec!["Build a sci-fi hangar (Tech)"]);
    }

    #[test]
    fn test_empty_response() {
        assert!(extract_candidates("").is_empty());
        assert!(extract_candidates("\n\n  \n").is_empty());
    }
}
