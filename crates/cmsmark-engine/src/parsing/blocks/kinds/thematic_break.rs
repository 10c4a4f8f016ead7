/// Horizontal rule: three or more of the same `-`, `*` or `_`.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'-', b'*', b'_'];

    pub fn matches(line: &str) -> bool {
        let t = line.trim().as_bytes();
        match t.first() {
            Some(&c) if Self::CHARS.contains(&c) => t.len() >= 3 && t.iter().all(|&b| b == c),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("---", true)]
    #[case("  *****  ", true)]
    #[case("___", true)]
    #[case("--", false)]
    #[case("-*-", false)]
    #[case("- - -", false)]
    #[case("--- x", false)]
    #[case("", false)]
    fn rule_lines(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(line), expected);
    }
}
