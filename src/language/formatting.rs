use super::core::Language;
use crate::language::formatter::TextFormatter;
// Deprecated: logic moved to formatter strategies; keep tests redirected

impl Language {
    /// Apply capitalization, punctuation, commas, and optionally symbols to words for realistic typing practice.
    /// Redirects to the formatter strategy implementation to keep a single source of truth.
    pub fn apply_advanced_formatting(
        &self,
        words: Vec<String>,
        include_capitalize: bool,
        include_symbols: bool,
    ) -> String {
        use super::formatter::CompositeFormatter;
        if !include_capitalize && !include_symbols {
            // Preserve historical behavior: basic join plus terminal punctuation
            if words.is_empty() {
                return String::new();
            }
            let mut text = super::formatter::BasicFormatter.format(words);
            let rng = &mut rand::thread_rng();
            let final_punct = match rand::Rng::gen_range(rng, 0..100) {
                0..=79 => '.',
                80..=94 => '!',
                _ => '?',
            };
            text.push(final_punct);
            return text;
        }
        let formatter = CompositeFormatter::build_from_flags(include_capitalize, include_symbols);
        formatter.format(words)
    }

    /// Helper function to capitalize the first letter of a word
    #[allow(dead_code)]
    fn capitalize_first_letter(word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        if !chars.is_empty() && chars[0].is_alphabetic() {
            chars[0] = chars[0].to_uppercase().next().unwrap_or(chars[0]);
        }
        chars.into_iter().collect()
    }
}
