//! Splits tweet text into words.

/// Returns the words in `text`, lowercased, without punctuation.
///
/// A word is a maximal run of ASCII letters; every other character
/// (digits, punctuation, apostrophes, `#`, whitespace) separates words.
#[must_use]
pub fn extract_words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_runs_of_punctuation() {
        assert_eq!(
            extract_words("anything else.....not my job"),
            ["anything", "else", "not", "my", "job"]
        );
    }

    #[test]
    fn strips_hashtag_markers() {
        assert_eq!(
            extract_words("i love my job. #winning"),
            ["i", "love", "my", "job", "winning"]
        );
        assert_eq!(
            extract_words("make justin # 1 by tweeting #vma #justinbieber :)"),
            ["make", "justin", "by", "tweeting", "vma", "justinbieber"]
        );
    }

    #[test]
    fn splits_contractions() {
        assert_eq!(
            extract_words("paperclips! they're so awesome, cool, & useful!"),
            ["paperclips", "they", "re", "so", "awesome", "cool", "useful"]
        );
    }

    #[test]
    fn lowercases_and_drops_non_ascii() {
        assert_eq!(extract_words("Go Bears!"), ["go", "bears"]);
        assert_eq!(extract_words("caf\u{e9} ol\u{e9}"), ["caf", "ol"]);
    }

    #[test]
    fn empty_and_symbol_only_text() {
        assert!(extract_words("").is_empty());
        assert!(extract_words("123 :) !!!").is_empty());
    }
}
