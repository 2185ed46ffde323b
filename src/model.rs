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

use crate::error::ModelError;
use crate::map::{ByteReader, FrequencyTable, StringFrequencyTable};
use crate::ngram::{NgramRef, PrimitiveNgram};
use ahash::AHashSet;
use compact_str::CompactString;
use itertools::Itertools;
use regex::Regex;
use std::collections::HashMap;

/// The per-language frequency model for uni-, bi- and trigrams.
///
/// All entries are primitively keyed; ngrams of these lengths whose
/// characters exceed the primitive bit budget are dropped when the
/// model is built. The serialized form consists of the three table
/// sections in ascending ngram length order.
#[derive(Debug, PartialEq)]
pub(crate) struct UniBiTrigramLookup {
    tables: [FrequencyTable<u32>; 3],
}

impl UniBiTrigramLookup {
    pub(crate) fn empty() -> Self {
        Self {
            tables: [
                FrequencyTable::empty(),
                FrequencyTable::empty(),
                FrequencyTable::empty(),
            ],
        }
    }

    pub(crate) fn from_models(models: &[TrainingDataLanguageModel; 3]) -> Self {
        let tables = [0, 1, 2].map(|index| {
            let entries = models[index]
                .relative_frequencies
                .iter()
                .filter_map(|(ngram, &frequency)| {
                    PrimitiveNgram::encode(ngram).map(|key| (key.key32(), frequency as f32))
                })
                .collect_vec();
            FrequencyTable::from_entries(entries)
        });
        Self { tables }
    }

    /// The relative frequency of the encoded ngram, or `0.0` if the
    /// model does not contain it.
    pub(crate) fn frequency(&self, ngram: PrimitiveNgram) -> f32 {
        let length = ngram.length();
        debug_assert!((1..=3).contains(&length));
        self.tables[length - 1].get(ngram.key32())
    }

    pub(crate) fn from_binary(data: &[u8]) -> Result<Self, ModelError> {
        let mut reader = ByteReader::new(data);
        let tables = [
            FrequencyTable::from_binary(&mut reader)?,
            FrequencyTable::from_binary(&mut reader)?,
            FrequencyTable::from_binary(&mut reader)?,
        ];
        reader.finish()?;
        Ok(Self { tables })
    }

    pub(crate) fn write_binary(&self) -> Vec<u8> {
        let mut buffer = vec![];
        for table in self.tables.iter() {
            table.write_binary(&mut buffer);
        }
        buffer
    }
}

/// The per-language frequency model for quadri- and fivegrams.
///
/// Each length holds a primitively keyed table and a string-keyed
/// table for ngrams outside the primitive bit budget; a ngram lives in
/// exactly one of the two. The serialized form interleaves the
/// sections as primitive-4, string-4, primitive-5, string-5.
#[derive(Debug, PartialEq)]
pub(crate) struct QuadriFivegramLookup {
    primitive_tables: [FrequencyTable<u64>; 2],
    string_tables: [StringFrequencyTable; 2],
}

impl QuadriFivegramLookup {
    pub(crate) fn empty() -> Self {
        Self {
            primitive_tables: [FrequencyTable::empty(), FrequencyTable::empty()],
            string_tables: [StringFrequencyTable::empty(), StringFrequencyTable::empty()],
        }
    }

    pub(crate) fn from_models(models: &[TrainingDataLanguageModel; 2]) -> Self {
        let mut primitive_entries = [vec![], vec![]];
        let mut string_entries = [vec![], vec![]];
        for (index, model) in models.iter().enumerate() {
            for (ngram, &frequency) in model.relative_frequencies.iter() {
                match PrimitiveNgram::encode(ngram) {
                    Some(key) => primitive_entries[index].push((key.key64(), frequency as f32)),
                    None => string_entries[index]
                        .push((CompactString::from(ngram.as_str()), frequency as f32)),
                }
            }
        }
        let [primitive_quadrigrams, primitive_fivegrams] = primitive_entries;
        let [string_quadrigrams, string_fivegrams] = string_entries;
        Self {
            primitive_tables: [
                FrequencyTable::from_entries(primitive_quadrigrams),
                FrequencyTable::from_entries(primitive_fivegrams),
            ],
            string_tables: [
                StringFrequencyTable::from_entries(string_quadrigrams),
                StringFrequencyTable::from_entries(string_fivegrams),
            ],
        }
    }

    /// The relative frequency of the given ngram, probing the
    /// primitive table first and falling back to the string table.
    pub(crate) fn frequency(
        &self,
        primitive: Option<PrimitiveNgram>,
        value: &str,
        ngram_length: usize,
    ) -> f32 {
        debug_assert!((4..=5).contains(&ngram_length));
        let bucket = ngram_length - 4;
        if let Some(key) = primitive {
            let frequency = self.primitive_tables[bucket].get(key.key64());
            if frequency > 0.0 {
                return frequency;
            }
        }
        self.string_tables[bucket].get(value)
    }

    pub(crate) fn from_binary(data: &[u8]) -> Result<Self, ModelError> {
        let mut reader = ByteReader::new(data);
        let primitive_quadrigrams = FrequencyTable::from_binary(&mut reader)?;
        let string_quadrigrams = StringFrequencyTable::from_binary(&mut reader)?;
        let primitive_fivegrams = FrequencyTable::from_binary(&mut reader)?;
        let string_fivegrams = StringFrequencyTable::from_binary(&mut reader)?;
        reader.finish()?;
        Ok(Self {
            primitive_tables: [primitive_quadrigrams, primitive_fivegrams],
            string_tables: [string_quadrigrams, string_fivegrams],
        })
    }

    pub(crate) fn write_binary(&self) -> Vec<u8> {
        let mut buffer = vec![];
        for index in 0..2 {
            self.primitive_tables[index].write_binary(&mut buffer);
            self.string_tables[index].write_binary(&mut buffer);
        }
        buffer
    }
}

/// The frequency statistics of one ngram length, computed from
/// training data.
///
/// Relative frequencies of length `n` are conditional on the
/// containing ngram of length `n − 1`; unigrams are relative to the
/// total unigram count.
pub(crate) struct TrainingDataLanguageModel {
    pub(crate) absolute_frequencies: HashMap<String, u32>,
    pub(crate) relative_frequencies: HashMap<String, f64>,
}

impl TrainingDataLanguageModel {
    pub(crate) fn from_text(
        text: &[&str],
        ngram_length: usize,
        char_class: &str,
        lower_ngram_absolute_frequencies: &HashMap<String, u32>,
    ) -> Self {
        let absolute_frequencies =
            Self::compute_absolute_frequencies(text, ngram_length, char_class);

        let relative_frequencies = Self::compute_relative_frequencies(
            ngram_length,
            &absolute_frequencies,
            lower_ngram_absolute_frequencies,
        );

        TrainingDataLanguageModel {
            absolute_frequencies,
            relative_frequencies,
        }
    }

    fn compute_absolute_frequencies(
        text: &[&str],
        ngram_length: usize,
        char_class: &str,
    ) -> HashMap<String, u32> {
        let mut absolute_frequencies = hashmap!();
        let regex = Regex::new(&format!("^[{char_class}]+$")).unwrap_or_else(|_| {
            panic!(
                "The character class '{char_class}' cannot be compiled to a valid regular expression"
            )
        });

        for line in text.iter() {
            let chars = line.to_lowercase().chars().collect_vec();
            if chars.len() < ngram_length {
                continue;
            }

            for i in 0..=chars.len() - ngram_length {
                let slice = &chars[i..i + ngram_length].iter().collect::<String>();

                if regex.is_match(slice) {
                    let counter = absolute_frequencies.entry(slice.clone()).or_insert(0);
                    *counter += 1;
                }
            }
        }

        absolute_frequencies
    }

    fn compute_relative_frequencies(
        ngram_length: usize,
        absolute_frequencies: &HashMap<String, u32>,
        lower_ngram_absolute_frequencies: &HashMap<String, u32>,
    ) -> HashMap<String, f64> {
        let mut relative_frequencies = hashmap!();
        let total_ngram_frequency = absolute_frequencies.values().sum::<u32>();

        for (ngram, frequency) in absolute_frequencies {
            let denominator = if ngram_length == 1 || lower_ngram_absolute_frequencies.is_empty() {
                total_ngram_frequency
            } else {
                let chars = ngram.chars().collect_vec();
                let slice = &chars[0..ngram_length - 1].iter().collect::<String>();
                *lower_ngram_absolute_frequencies.get(slice).unwrap()
            };
            relative_frequencies.insert(ngram.clone(), *frequency as f64 / denominator as f64);
        }

        relative_frequencies
    }
}

/// Collects the unique ngrams of exactly `ngram_length` letters,
/// sliding a window over each word separately so that no ngram spans a
/// word boundary.
pub(crate) fn create_ngrams<'a>(words: &[&'a str], ngram_length: usize) -> AHashSet<NgramRef<'a>> {
    if !(1..6).contains(&ngram_length) {
        panic!("ngram length {ngram_length} is not in range 1..6");
    }
    let mut ngrams = AHashSet::new();
    for word in words.iter() {
        let chars_count = word.chars().count();
        if chars_count >= ngram_length {
            for i in 0..=chars_count - ngram_length {
                let slice = get_utf8_slice(word, i, i + ngram_length);
                ngrams.insert(NgramRef::new(slice));
            }
        }
    }
    ngrams
}

pub(crate) fn get_utf8_slice(string: &str, start: usize, end: usize) -> &str {
    string
        .char_indices()
        .nth(start)
        .map(|(start_pos, _)| {
            string[start_pos..]
                .char_indices()
                .nth(end - start)
                .map_or_else(
                    || &string[start_pos..],
                    |(end_pos, _)| &string[start_pos..start_pos + end_pos],
                )
        })
        .unwrap()
}
