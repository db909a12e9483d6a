use super::{core::Language, difficulty::CharacterDifficulty};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Trait for different word selection strategies
pub trait WordSelector {
    /// Select words from the language based on the strategy
    fn select_words(
        &self,
        language: &Language,
        count: usize,
        char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> Vec<String>;
}

/// Random word selection (legacy behavior)
pub struct RandomSelector;

impl WordSelector for RandomSelector {
    fn select_words(
        &self,
        language: &Language,
        count: usize,
        _char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> Vec<String> {
        let mut rng = &mut rand::thread_rng();
        language
            .words
            .choose_multiple(&mut rng, count)
            .cloned()
            .collect()
    }
}

/// Intelligent word selection based on character difficulty
pub struct IntelligentSelector;

impl WordSelector for IntelligentSelector {
    fn select_words(
        &self,
        language: &Language,
        count: usize,
        char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> Vec<String> {
        if char_stats.is_empty() {
            // Fall back to random selection if no statistics available
            return RandomSelector.select_words(language, count, char_stats);
        }

        // Score each word based on the difficulty of characters it contains
        let mut word_scores: Vec<(String, f64)> = language
            .words
            .iter()
            .map(|word| {
                let score = calculate_word_difficulty_score(word, char_stats);
                (word.clone(), score)
            })
            .collect();

        // Sort by score (highest difficulty first for more practice)
        word_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        // Select from top 30% of difficult words to avoid repetition while still targeting weak areas
        let selection_pool_size = (word_scores.len() as f64 * 0.3)
            .max(count as f64)
            .min(word_scores.len() as f64) as usize;
        let selection_pool = &word_scores[0..selection_pool_size];

        // Randomly select from the high-difficulty pool
        let mut rng = &mut rand::thread_rng();
        selection_pool
            .choose_multiple(&mut rng, count)
            .map(|(word, _score)| word.clone())
            .collect()
    }
}

/// Character substitution selector
pub struct SubstitutionSelector;

impl WordSelector for SubstitutionSelector {
    fn select_words(
        &self,
        language: &Language,
        count: usize,
        char_stats: &HashMap<char, CharacterDifficulty>,
    ) -> Vec<String> {
        if char_stats.is_empty() {
            // Fall back to random selection if no statistics available
            return RandomSelector.select_words(language, count, char_stats);
        }

        // Get regular words first
        let base_words = RandomSelector.select_words(language, count, char_stats);

        // Find the most difficult characters to practice
        let weak_chars = get_weakest_characters(char_stats, 10);

        // For each word, substitute some characters with weak ones
        base_words
            .into_iter()
            .map(|word| substitute_characters_in_word(&word, &weak_chars))
            .collect()
    }
}

/// Calculate difficulty score for a word based on character statistics
fn calculate_word_difficulty_score(
    word: &str,
    char_stats: &HashMap<char, CharacterDifficulty>,
) -> f64 {
    let chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return 0.0;
    }

    let mut total_score = 0.0;
    let mut char_count = 0;

    for ch in chars {
        let base_char = ch.to_lowercase().next().unwrap_or(ch);
        let is_uppercase = ch != base_char;

        if let Some(difficulty) = char_stats.get(&base_char) {
            // Base difficulty calculation
            let miss_penalty = difficulty.miss_rate * 2.0; // Miss rate has higher weight
            let timing_penalty = if difficulty.avg_time_ms > 200.0 {
                (difficulty.avg_time_ms - 200.0) / 100.0 // Normalize timing penalty
            } else {
                0.0
            };

            let mut char_score = miss_penalty + timing_penalty;

            // Apply uppercase penalty if applicable
            if is_uppercase && ch.is_alphabetic() {
                let uppercase_multiplier = 1.0 + difficulty.uppercase_penalty;
                char_score *= uppercase_multiplier;

                // Additional penalty based on uppercase-specific performance
                if difficulty.uppercase_attempts > 0 {
                    let uppercase_miss_penalty = difficulty.uppercase_miss_rate * 1.5;
                    let uppercase_timing_penalty = if difficulty.uppercase_avg_time > 200.0 {
                        (difficulty.uppercase_avg_time - 200.0) / 100.0
                    } else {
                        0.0
                    };
                    char_score += (uppercase_miss_penalty + uppercase_timing_penalty) * 0.5;
                }
            }

            total_score += char_score;
            char_count += 1;
        } else if ch.is_alphabetic() {
            // Unknown alphabetic characters get higher priority if uppercase
            let base_score = 5.0;
            total_score += if is_uppercase {
                base_score * 1.5
            } else {
                base_score
            };
            char_count += 1;
        } else {
            // Punctuation gets medium difficulty score
            total_score += 3.0;
            char_count += 1;
        }
    }

    if char_count == 0 {
        0.0
    } else {
        total_score / char_count as f64
    }
}

/// Get the weakest characters (those that need most practice) from character statistics
fn get_weakest_characters(
    char_stats: &HashMap<char, CharacterDifficulty>,
    count: usize,
) -> Vec<char> {
    let mut char_difficulties: Vec<(char, f64)> = char_stats
        .iter()
        .map(|(ch, difficulty)| {
            // Calculate combined difficulty score (higher = more practice needed)
            let miss_penalty = difficulty.miss_rate * 2.0;
            let timing_penalty = if difficulty.avg_time_ms > 200.0 {
                (difficulty.avg_time_ms - 200.0) / 100.0
            } else {
                0.0
            };
            let combined_difficulty = miss_penalty + timing_penalty;
            (*ch, combined_difficulty)
        })
        .collect();

    // Sort by difficulty (highest first)
    char_difficulties.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    // Return the weakest characters, limited by count
    char_difficulties
        .into_iter()
        .take(count)
        .map(|(ch, _)| ch)
        .collect()
}

/// Substitute some characters in a word with weaker characters for practice
fn substitute_characters_in_word(word: &str, weak_chars: &[char]) -> String {
    if weak_chars.is_empty() || word.is_empty() {
        return word.to_string();
    }

    let rng = &mut rand::thread_rng();
    let chars: Vec<char> = word.chars().collect();
    let mut result: Vec<char> = Vec::with_capacity(chars.len());

    for ch in chars {
        // Only substitute alphabetic characters, preserve punctuation/spaces
        if ch.is_alphabetic() && rng.gen_bool(0.3) {
            // 30% chance to substitute each character
            if let Some(&weak_char) = weak_chars.choose(rng) {
                // Preserve case: if original was uppercase, make weak char uppercase too
                if ch.is_uppercase() {
                    result.push(weak_char.to_uppercase().next().unwrap_or(weak_char));
                } else {
                    result.push(weak_char);
                }
            } else {
                result.push(ch);
            }
        } else {
            result.push(ch);
        }
    }

    result.into_iter().collect()
}
