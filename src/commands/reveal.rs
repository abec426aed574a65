//! Reveal command
//!
//! Lists every word attainable from a root word.

use crate::core::normalize;
use crate::dictionary::WordSet;
use crate::solver::{Solution, solve};

/// Solve `root` against every word in `dictionary`
///
/// # Errors
///
/// Returns an error if `root` is blank.
pub fn reveal_root(root: &str, dictionary: &WordSet) -> Result<Solution, String> {
    if normalize(root).is_empty() {
        return Err("Root word must not be blank".to_string());
    }

    let words: Vec<&str> = dictionary.iter().collect();
    Ok(solve(root, &words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::ENGLISH;

    #[test]
    fn reveal_lists_attainable_words() {
        let dictionary = WordSet::from_words(["silk", "worm", "silky", "silkworm"], ENGLISH);
        let solution = reveal_root("Silkworm", &dictionary).unwrap();
        assert_eq!(solution.root, "silkworm");
        assert_eq!(solution.words, vec!["silk", "worm"]);
    }

    #[test]
    fn reveal_rejects_blank_root() {
        let dictionary = WordSet::from_words(["silk"], ENGLISH);
        assert!(reveal_root("  ", &dictionary).is_err());
    }

    #[test]
    fn reveal_default_root_against_bundled_dictionary() {
        let dictionary = crate::wordlists::dictionary(&crate::wordlists::ListSource::Builtin);
        let solution = reveal_root("silkworm", &dictionary).unwrap();
        assert!(solution.contains("silk"));
        assert!(solution.contains("worm"));
        assert!(!solution.contains("silky"));
        assert!(!solution.contains("silkworm"));
    }
}
