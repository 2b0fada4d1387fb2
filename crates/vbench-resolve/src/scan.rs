//! Module-instantiation scanner.
//!
//! Matches the syntactic shape of a Verilog module instantiation,
//! `module_type instance_name (`, anchored at the start of each line
//! (leading whitespace ignored). The first identifier is the candidate
//! module name; candidates that are reserved words are rejected.
//!
//! This is a single-pass pattern match over raw text, not a parser: there is
//! no tokenization, no preprocessor handling, and no comment stripping. An
//! instantiation inside a comment is indistinguishable from a real one, so
//! the scan can over-detect; unusual formatting (type and instance on
//! separate lines) makes it under-detect. Callers treat the output as a
//! best-effort proposal and deduplicate — the same candidate is yielded once
//! per matching line.

use std::sync::LazyLock;

use regex::Regex;

/// Two whitespace-separated identifiers followed by `(`, at line start.
static INSTANTIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(\w+)\s+\w+\s*\(").expect("instantiation pattern is valid")
});

/// Verilog reserved words that can lead a structurally matching line
/// (`if cond (`, `and g0 (`, ...) but never name a user module.
const RESERVED_WORDS: &[&str] = &[
    "module", "endmodule", "initial", "always", "assign", "wire", "reg", "integer", "input",
    "output", "inout", "parameter", "localparam", "begin", "end", "if", "else", "case", "casex",
    "casez", "default", "for", "while", "repeat", "forever", "task", "function", "and", "or",
    "not", "nand", "nor", "xor", "xnor", "buf", "bufif0", "bufif1", "notif0", "notif1", "posedge",
    "negedge",
];

/// Whether `name` is a Verilog reserved word (case-insensitive).
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}

/// Scan `text` for module-instantiation candidates.
///
/// Yields the module-type identifier of every line shaped like an
/// instantiation, in scan order, reserved words filtered out. The iterator
/// is lazy and restartable; duplicates are possible and left to the caller.
/// Malformed text never fails — every line either matches or does not.
pub fn scan_instantiations(text: &str) -> impl Iterator<Item = &str> {
    INSTANTIATION
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|name| !is_reserved(name))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{is_reserved, scan_instantiations};

    #[test]
    fn yields_candidate_once_per_matching_line() {
        let text = "\
module adder_tb;
    adder dut (
        .a(a), .b(b), .sum(sum)
    );
endmodule
";
        let candidates: Vec<&str> = scan_instantiations(text).collect();
        assert_eq!(candidates, vec!["adder"]);
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        let text = "\t  counter c0 (clk, rst, q);\n";
        let candidates: Vec<&str> = scan_instantiations(text).collect();
        assert_eq!(candidates, vec!["counter"]);
    }

    #[test]
    fn mid_line_instantiations_do_not_match() {
        // The pattern is anchored at line start; a shape appearing after
        // other tokens on the same line is not an instantiation.
        let text = "assign x = foo bar (baz);\n";
        assert_eq!(scan_instantiations(text).count(), 0);
    }

    #[test]
    fn reserved_word_led_lines_yield_nothing() {
        let text = "\
module counter_tb;
reg clk (
wire q (
always @(posedge clk)
and g0 (y, a, b);
endmodule
";
        assert_eq!(scan_instantiations(text).count(), 0);
    }

    #[test]
    fn duplicates_are_yielded_per_line() {
        let text = "adder a0 (x);\nadder a1 (y);\n";
        let candidates: Vec<&str> = scan_instantiations(text).collect();
        assert_eq!(candidates, vec!["adder", "adder"]);
    }

    #[test]
    fn comments_are_not_excluded() {
        // Documented false-positive source: the scanner has no comment
        // awareness, so a commented-out instantiation still matches when the
        // comment marker is not at line start. This pins the behavior.
        let text = "    adder old_dut ( // disabled\n";
        let candidates: Vec<&str> = scan_instantiations(text).collect();
        assert_eq!(candidates, vec!["adder"]);
    }

    #[test]
    fn iterator_is_restartable() {
        let text = "adder dut (x);\n";
        assert_eq!(scan_instantiations(text).count(), 1);
        assert_eq!(scan_instantiations(text).count(), 1);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(scan_instantiations("").count(), 0);
    }

    #[rstest]
    #[case("module")]
    #[case("endmodule")]
    #[case("posedge")]
    #[case("bufif0")]
    #[case("MODULE")]
    #[case("Always")]
    fn reserved_words_are_case_insensitive(#[case] word: &str) {
        assert!(is_reserved(word));
    }

    #[rstest]
    #[case("adder")]
    #[case("counter")]
    #[case("module2")]
    #[case("my_and")]
    fn non_reserved_identifiers_pass(#[case] word: &str) {
        assert!(!is_reserved(word));
    }
}
