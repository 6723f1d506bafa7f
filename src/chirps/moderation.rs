const DENYLIST: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const MASK: &str = "****";

/// Mask denylisted words in display text. Matching is case-insensitive
/// and token-exact: "kerfuffle!" stays untouched. Tokens are split and
/// rejoined on single spaces; runs of spaces survive the round trip as
/// empty tokens, other whitespace passes through inside tokens.
pub fn censor(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if DENYLIST.contains(&word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_every_denylisted_word() {
        assert_eq!(
            censor("I had a kerfuffle with sharbert over fornax"),
            "I had a **** with **** over ****"
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(censor("KERFUFFLE"), "****");
        assert_eq!(censor("Sharbert"), "****");
        assert_eq!(censor("KERFUFFLE"), censor("kerfuffle"));
    }

    #[test]
    fn punctuation_attached_tokens_are_not_masked() {
        assert_eq!(censor("what a kerfuffle!"), "what a kerfuffle!");
        assert_eq!(censor("fornax."), "fornax.");
    }

    #[test]
    fn clean_text_passes_through_unchanged() {
        let text = "this is a perfectly fine chirp";
        assert_eq!(censor(text), text);
    }

    #[test]
    fn censoring_is_idempotent() {
        let inputs = [
            "a kerfuffle here",
            "SHARBERT sharbert",
            "nothing bad",
            "",
            "fornax!  fornax",
        ];
        for input in inputs {
            let once = censor(input);
            assert_eq!(censor(&once), once);
        }
    }

    #[test]
    fn runs_of_spaces_survive() {
        assert_eq!(censor("a  kerfuffle"), "a  ****");
        assert_eq!(censor("  "), "  ");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(censor(""), "");
    }
}
