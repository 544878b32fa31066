//! Local text normalization for the `clean_text` step

/// Collapse whitespace: CRLF to LF, tabs to spaces, runs of whitespace
/// to a single space, then trim.
pub fn normalize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_whitespace = false;

    for ch in input.replace("\r\n", "\n").replace('\t', " ").chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(normalize_text("Hello   \t\nWorld"), "Hello World");
    }

    #[test]
    fn test_crlf_and_tabs() {
        assert_eq!(normalize_text("a\r\nb\tc"), "a b c");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(normalize_text("  padded  "), "padded");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(normalize_text(" \t\r\n "), "");
    }

    #[test]
    fn test_already_clean_text_unchanged() {
        assert_eq!(normalize_text("already clean"), "already clean");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = [
            "Hello   \t\nWorld",
            "a\r\nb\tc",
            "  padded  ",
            " \t\r\n ",
            "mixed\u{a0}unicode\u{2003}spaces",
            "line one\r\n\r\nline two",
        ];

        for input in inputs {
            let once = normalize_text(input);
            assert_eq!(normalize_text(&once), once, "not a fixed point for {input:?}");
        }
    }

    #[test]
    fn test_output_has_no_residual_whitespace_runs() {
        let inputs = ["col1\tcol2\t\tcol3", "a\r\nb\r\nc", "x  y   z", "\t lead \r\n trail \t"];

        for input in inputs {
            let output = normalize_text(input);

            assert!(!output.contains('\t'), "tab survived in {output:?}");
            assert!(!output.contains('\r'), "carriage return survived in {output:?}");
            assert!(!output.contains('\n'), "newline survived in {output:?}");
            assert!(!output.contains("  "), "doubled space survived in {output:?}");
            assert_eq!(output, output.trim());
        }
    }
}
