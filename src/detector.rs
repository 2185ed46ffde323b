/*
 * Copyright © 2020-present Peter M. Stahl pemistahl@gmail.com
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either expressed or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use crate::alphabet::Alphabet;
use crate::cache::ModelCache;
use crate::constant::{
    ABSENT_NGRAM_FREQUENCY, CHARS_TO_LANGUAGES_MAPPING, JAPANESE_CHARACTER_SET,
    LONG_TEXT_MIN_CHARS, NON_LETTERS,
};
use crate::error::{DetectorError, ModelError};
use crate::executor::ScoringExecutor;
use crate::language::Language;
use crate::language::Language::*;
use crate::map::{LanguageIndexer, LanguageValueMap};
use crate::model::create_ngrams;
use crate::ngram::{NgramRef, PrimitiveNgram, MAX_NGRAM_LENGTH};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

/// This struct detects the language of text.
///
/// A detector is created with a [`LanguageDetectorBuilder`](crate::LanguageDetectorBuilder).
/// It is cheap to use from multiple threads, and clones share the
/// loaded language models with the original detector.
#[derive(Clone)]
pub struct LanguageDetector {
    languages: HashSet<Language>,
    minimum_relative_distance: f64,
    is_low_accuracy_mode_enabled: bool,
    languages_with_unique_characters: HashSet<Language>,
    one_language_alphabets: HashMap<Alphabet, Language>,
    model_cache: Arc<ModelCache>,
    executor: ScoringExecutor,
}

struct TextNgram<'a> {
    value: &'a str,
    primitive: Option<PrimitiveNgram>,
}

impl<'a> From<NgramRef<'a>> for TextNgram<'a> {
    fn from(ngram: NgramRef<'a>) -> Self {
        Self {
            value: ngram.value,
            primitive: PrimitiveNgram::encode(ngram.value),
        }
    }
}

impl LanguageDetector {
    pub(crate) fn from(
        languages: HashSet<Language>,
        minimum_relative_distance: f64,
        is_low_accuracy_mode_enabled: bool,
        model_cache: Arc<ModelCache>,
        executor: ScoringExecutor,
    ) -> Self {
        let languages_with_unique_characters = languages
            .iter()
            .filter(|it| it.unique_characters().is_some())
            .copied()
            .collect();
        let one_language_alphabets = Alphabet::all_supporting_single_language()
            .into_iter()
            .filter(|(_, language)| languages.contains(language))
            .collect();
        Self {
            languages,
            minimum_relative_distance,
            is_low_accuracy_mode_enabled,
            languages_with_unique_characters,
            one_language_alphabets,
            model_cache,
            executor,
        }
    }

    /// Detects the language of `text`.
    ///
    /// `None` is returned if the language cannot be reliably detected,
    /// either because the text contains no linguistic information or
    /// because the two most likely languages are closer to each other
    /// than the configured minimum relative distance.
    pub fn detect_language_of<T: Into<String>>(
        &self,
        text: T,
    ) -> Result<Option<Language>, DetectorError> {
        let confidence_values = self.compute_language_confidence_values(text)?;

        let (most_likely_language, most_likely_probability) = match confidence_values.first() {
            Some(&entry) => entry,
            None => return Ok(None),
        };
        if confidence_values.len() == 1 {
            return Ok(Some(most_likely_language));
        }

        let (_, second_most_likely_probability) = confidence_values[1];

        if most_likely_probability == second_most_likely_probability {
            return Ok(None);
        }
        if (most_likely_probability - second_most_likely_probability)
            < self.minimum_relative_distance
        {
            return Ok(None);
        }

        Ok(Some(most_likely_language))
    }

    /// Computes the confidence values of every configured language for
    /// `text`, sorted in descending order.
    ///
    /// All values lie in `(0.0, 1.0]` and the most likely language
    /// always has the value 1.0. Languages that could not have produced
    /// the text at all are omitted; for text without any linguistic
    /// information the result is empty.
    pub fn compute_language_confidence_values<T: Into<String>>(
        &self,
        text: T,
    ) -> Result<Vec<(Language, f64)>, DetectorError> {
        let text = text.into();
        let cleaned_up_text = clean_up_input_text(&text);

        if cleaned_up_text.is_empty() {
            return Ok(vec![]);
        }

        let words = split_text_into_words(&cleaned_up_text);

        if let Some(language) = self.detect_language_with_rules(&words) {
            return Ok(vec![(language, 1.0)]);
        }

        let candidates = self.filter_languages_by_rules(&words);
        if candidates.is_empty() {
            return Ok(vec![]);
        }
        if candidates.len() == 1 {
            let language = candidates.into_iter().next().unwrap();
            return Ok(vec![(language, 1.0)]);
        }

        let character_count = cleaned_up_text
            .chars()
            .filter(|char| *char != ' ')
            .count();
        let max_ngram_length =
            if self.is_low_accuracy_mode_enabled || character_count < LONG_TEXT_MIN_CHARS {
                3
            } else {
                MAX_NGRAM_LENGTH
            };
        let test_data = (1..=max_ngram_length)
            .map(|ngram_length| {
                let ngrams = create_ngrams(&words, ngram_length)
                    .into_iter()
                    .map(TextNgram::from)
                    .collect_vec();
                (ngram_length, ngrams)
            })
            .collect_vec();

        let mut sorted_candidates = candidates.into_iter().collect_vec();
        sorted_candidates.sort_unstable();

        let scores = self.executor.map_collect(&sorted_candidates, |&language| {
            self.compute_language_score(language, &test_data)
        });

        let indexer = LanguageIndexer::over(&sorted_candidates.iter().copied().collect());
        let mut summed_log_probabilities = LanguageValueMap::new(&indexer);
        for (language, score) in sorted_candidates.iter().zip(scores) {
            let (log_probability_sum, hit_count) = score?;
            if hit_count > 0 {
                summed_log_probabilities.add(*language, log_probability_sum);
            }
        }

        match summed_log_probabilities.count_present() {
            0 => return Ok(vec![]),
            1 => {
                let language = summed_log_probabilities.first_present().unwrap();
                return Ok(vec![(language, 1.0)]);
            }
            _ => {}
        }

        let maximum_log_probability = summed_log_probabilities.max_value().unwrap();
        let confidence_values = summed_log_probabilities.map_values(|log_probability_sum| {
            (log_probability_sum - maximum_log_probability)
                .exp()
                .max(f64::MIN_POSITIVE)
        });

        Ok(confidence_values.iter_descending().collect())
    }

    /// Computes the confidence value of `language` for `text`.
    ///
    /// The value is 0.0 if the language cannot have produced the text.
    /// Requesting a language that is not part of the configured set is
    /// an invalid argument.
    pub fn compute_language_confidence<T: Into<String>>(
        &self,
        text: T,
        language: Language,
    ) -> Result<f64, DetectorError> {
        if !self.languages.contains(&language) {
            return Err(DetectorError::UnknownLanguage(language));
        }
        let confidence = self
            .compute_language_confidence_values(text)?
            .into_iter()
            .find(|(it, _)| *it == language)
            .map(|(_, confidence)| confidence)
            .unwrap_or(0.0);
        Ok(confidence)
    }

    /// Loads every language model of the configured languages eagerly.
    ///
    /// Without preloading, each model is loaded lazily by the first
    /// detection that needs it.
    pub fn preload_language_models(&self) -> Result<(), ModelError> {
        let mut sorted_languages = self.languages.iter().copied().collect_vec();
        sorted_languages.sort_unstable();
        for language in sorted_languages {
            self.model_cache.uni_bi_trigram_lookup(language)?;
            if !self.is_low_accuracy_mode_enabled {
                self.model_cache.quadri_fivegram_lookup(language)?;
            }
        }
        Ok(())
    }

    fn compute_language_score(
        &self,
        language: Language,
        test_data: &[(usize, Vec<TextNgram<'_>>)],
    ) -> Result<(f64, u32), ModelError> {
        let absent_ngram_penalty = ABSENT_NGRAM_FREQUENCY.ln();
        let mut log_probability_sum = 0.0;
        let mut hit_count = 0u32;

        for (ngram_length, ngrams) in test_data {
            if ngrams.is_empty() {
                continue;
            }
            if *ngram_length <= 3 {
                let lookup = self.model_cache.uni_bi_trigram_lookup(language)?;
                for ngram in ngrams {
                    let frequency = ngram
                        .primitive
                        .map_or(0.0, |primitive| lookup.frequency(primitive));
                    if frequency > 0.0 {
                        log_probability_sum += (frequency as f64).ln();
                        hit_count += 1;
                    } else {
                        log_probability_sum += absent_ngram_penalty;
                    }
                }
            } else {
                let lookup = self.model_cache.quadri_fivegram_lookup(language)?;
                for ngram in ngrams {
                    let frequency = lookup.frequency(ngram.primitive, ngram.value, *ngram_length);
                    if frequency > 0.0 {
                        log_probability_sum += (frequency as f64).ln();
                        hit_count += 1;
                    } else {
                        log_probability_sum += absent_ngram_penalty;
                    }
                }
            }
        }

        Ok((log_probability_sum, hit_count))
    }

    fn detect_language_with_rules(&self, words: &[&str]) -> Option<Language> {
        let mut total_language_counts = HashMap::<Option<Language>, u32>::new();
        let half_word_count = (words.len() as f64) * 0.5;

        for word in words {
            let mut word_language_counts = HashMap::<Language, u32>::new();

            for character in word.chars() {
                let mut is_match = false;

                for (alphabet, language) in self.one_language_alphabets.iter() {
                    if alphabet.matches_char(character) {
                        increment_counter(&mut word_language_counts, *language);
                        is_match = true;
                    }
                }

                if !is_match {
                    let mut buffer = [0; 4];
                    let char_str = character.encode_utf8(&mut buffer);

                    if Alphabet::Han.matches(char_str) {
                        increment_counter(&mut word_language_counts, Chinese);
                    } else if JAPANESE_CHARACTER_SET.is_match(char_str) {
                        increment_counter(&mut word_language_counts, Japanese);
                    } else if Alphabet::Latin.matches(char_str)
                        || Alphabet::Cyrillic.matches(char_str)
                        || Alphabet::Devanagari.matches(char_str)
                    {
                        self.languages_with_unique_characters
                            .iter()
                            .filter(|it| it.unique_characters().unwrap().contains(character))
                            .for_each(|it| increment_counter(&mut word_language_counts, *it));
                    }
                }
            }

            if word_language_counts.is_empty() {
                increment_counter(&mut total_language_counts, None);
            } else if word_language_counts.len() == 1 {
                let language = *word_language_counts.keys().next().unwrap();
                if self.languages.contains(&language) {
                    increment_counter(&mut total_language_counts, Some(language));
                } else {
                    increment_counter(&mut total_language_counts, None);
                }
            } else if word_language_counts.contains_key(&Chinese)
                && word_language_counts.contains_key(&Japanese)
            {
                increment_counter(&mut total_language_counts, Some(Japanese));
            } else {
                let sorted_word_language_counts = word_language_counts
                    .into_iter()
                    .sorted_by(|(_, first_count), (_, second_count)| second_count.cmp(first_count))
                    .collect_vec();
                let (most_frequent_language, first_count) = sorted_word_language_counts[0];
                let (_, second_count) = sorted_word_language_counts[1];

                if first_count > second_count && self.languages.contains(&most_frequent_language) {
                    increment_counter(&mut total_language_counts, Some(most_frequent_language));
                } else {
                    increment_counter(&mut total_language_counts, None);
                }
            }
        }

        let unknown_language_count = *total_language_counts.get(&None).unwrap_or(&0) as f64;

        if unknown_language_count < half_word_count {
            total_language_counts.remove(&None);
        }

        if total_language_counts.is_empty() {
            return None;
        }
        if total_language_counts.len() == 1 {
            return *total_language_counts.keys().next().unwrap();
        }

        let sorted_total_language_counts = total_language_counts
            .into_iter()
            .sorted_by(|(_, first_count), (_, second_count)| second_count.cmp(first_count))
            .collect_vec();
        let (most_frequent_language, first_count) = sorted_total_language_counts[0];
        let (_, second_count) = sorted_total_language_counts[1];

        if first_count == second_count {
            return None;
        }

        most_frequent_language
    }

    fn filter_languages_by_rules(&self, words: &[&str]) -> HashSet<Language> {
        let alphabets = [
            Alphabet::Arabic,
            Alphabet::Cyrillic,
            Alphabet::Devanagari,
            Alphabet::Han,
            Alphabet::Latin,
        ];
        let mut detected_alphabets = HashMap::<Alphabet, u32>::new();
        let half_word_count = (words.len() as f64) * 0.5;

        for word in words.iter() {
            for alphabet in alphabets.iter() {
                if alphabet.matches(word) {
                    increment_counter(&mut detected_alphabets, *alphabet);
                    break;
                }
            }
        }

        if detected_alphabets.is_empty() {
            return self.languages.clone();
        }

        let most_frequent_alphabet = detected_alphabets
            .into_iter()
            .sorted_by(|(_, first_count), (_, second_count)| second_count.cmp(first_count))
            .map(|(alphabet, _)| alphabet)
            .next()
            .unwrap();

        let filtered_languages = self
            .languages
            .iter()
            .copied()
            .filter(|it| it.alphabets().contains(&most_frequent_alphabet))
            .collect::<HashSet<_>>();

        let mut language_counts = HashMap::<Language, u32>::new();

        for word in words.iter() {
            for (characters, languages) in CHARS_TO_LANGUAGES_MAPPING.iter() {
                for character in characters.chars() {
                    if word.contains(character) {
                        for language in languages.iter() {
                            increment_counter(&mut language_counts, *language);
                        }
                        break;
                    }
                }
            }
        }

        let languages_subset = language_counts
            .into_iter()
            .filter(|(_, count)| (*count as f64) >= half_word_count)
            .map(|(language, _)| language)
            .collect::<HashSet<_>>();

        if !languages_subset.is_empty() {
            filtered_languages
                .into_iter()
                .filter(|it| languages_subset.contains(it))
                .collect::<HashSet<_>>()
        } else {
            filtered_languages
        }
    }
}

pub(crate) fn clean_up_input_text(text: &str) -> String {
    let lowercased = text.trim().to_lowercase();
    NON_LETTERS.replace_all(&lowercased, " ").trim().to_string()
}

pub(crate) fn split_text_into_words(text: &str) -> Vec<&str> {
    if text.contains(' ') {
        text.split(' ').collect_vec()
    } else {
        vec![text]
    }
}

fn increment_counter<T: Eq + Hash>(counts: &mut HashMap<T, u32>, key: T) {
    let counter = counts.entry(key).or_insert(0);
    *counter += 1;
}
