//! Normalisation helpers applied to raw token text.

const BLANKS: [char; 2] = [' ', '\t'];

/// Strip leading blanks and trailing blanks and colons from a keyword.
///
/// Internal spaces are preserved, so `Scenario Outline:` becomes
/// `Scenario Outline`. Applying the function twice yields the same result as
/// applying it once.
///
/// # Examples
/// ```
/// use zuchini_parser::trim::trim_keyword;
/// assert_eq!(trim_keyword("  Scenario Outline: "), "Scenario Outline");
/// ```
#[must_use]
pub fn trim_keyword(raw: &str) -> &str {
    raw.trim_start_matches(BLANKS)
        .trim_end_matches([' ', '\t', ':'])
}

/// Strip the comment marker and surrounding blanks from a comment line.
///
/// Leading runs of `#`, spaces and tabs are removed; trailing whitespace is
/// trimmed.
///
/// # Examples
/// ```
/// use zuchini_parser::trim::trim_comment;
/// assert_eq!(trim_comment("  ## language: en  "), "language: en");
/// ```
#[must_use]
pub fn trim_comment(raw: &str) -> &str {
    raw.trim_start_matches([' ', '\t', '#']).trim_end()
}

/// Strip a single leading `@` from a tag token.
///
/// # Examples
/// ```
/// use zuchini_parser::trim::trim_tag;
/// assert_eq!(trim_tag("@wip"), "wip");
/// ```
#[must_use]
pub fn trim_tag(raw: &str) -> &str {
    raw.strip_prefix('@').unwrap_or(raw)
}

/// Strip leading and trailing spaces and tabs only.
pub(crate) fn trim_blanks(raw: &str) -> &str {
    raw.trim_matches(BLANKS)
}

/// Count the leading spaces and tabs of a line.
pub(crate) fn indentation(raw: &str) -> usize {
    raw.len() - raw.trim_start_matches(BLANKS).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Feature:", "Feature")]
    #[case("\t Scenario Outline : ", "Scenario Outline")]
    #[case("Given ", "Given")]
    #[case("::", "")]
    #[case("Examples:\t", "Examples")]
    fn trims_keywords(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(trim_keyword(raw), expected);
    }

    #[rstest]
    #[case("  Scenario Outline: ")]
    #[case("Feature::")]
    #[case(" : ")]
    #[case("Szenariogrundriss :\t")]
    fn keyword_trimming_is_idempotent(#[case] raw: &str) {
        let once = trim_keyword(raw);
        assert_eq!(trim_keyword(once), once);
    }

    #[rstest]
    #[case("# a comment", "a comment")]
    #[case("\t#\tindented  ", "indented")]
    #[case("#", "")]
    #[case("#no space", "no space")]
    fn trims_comments(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(trim_comment(raw), expected);
    }

    #[rstest]
    #[case("@smoke", "smoke")]
    #[case("@@double", "@double")]
    #[case("bare", "bare")]
    fn trims_tags(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(trim_tag(raw), expected);
    }

    #[test]
    fn measures_indentation() {
        assert_eq!(indentation("    \"\"\""), 4);
        assert_eq!(indentation("\t x"), 2);
        assert_eq!(indentation("x"), 0);
    }
}
