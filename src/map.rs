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
use crate::language::Language;
use compact_str::CompactString;
use std::collections::HashSet;
use strum::IntoEnumIterator;

/// A bijective map between a fixed set of languages and the dense index
/// range `[0, N)`, used to size and address per-language arrays.
///
/// Indices follow the declaration order of [`Language`], both for the
/// full set and for any subset a detector is configured with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct LanguageIndexer {
    languages: Box<[Language]>,
}

impl LanguageIndexer {
    pub(crate) fn over_all_languages() -> Self {
        Self {
            languages: Language::iter().collect(),
        }
    }

    pub(crate) fn over(languages: &HashSet<Language>) -> Self {
        let mut sorted_languages = languages.iter().copied().collect::<Vec<_>>();
        sorted_languages.sort_unstable();
        Self {
            languages: sorted_languages.into_boxed_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.languages.len()
    }

    /// The dense index of `language`, or `None` if it is not part of
    /// this indexer's set.
    pub(crate) fn index_of(&self, language: Language) -> Option<usize> {
        self.languages.binary_search(&language).ok()
    }

    pub(crate) fn language_at(&self, index: usize) -> Language {
        self.languages[index]
    }
}

/// An array-backed map from language to `f64`, sized by an indexer.
///
/// Presence is tracked separately from the stored values, so an
/// accumulated value of exactly zero remains a valid entry — a
/// language whose every ngram carries a relative frequency of 1.0
/// legitimately sums its log probabilities to zero. The descending
/// iterator yields every present entry exactly once in non-increasing
/// value order, breaking ties by language declaration order.
pub(crate) struct LanguageValueMap<'a> {
    indexer: &'a LanguageIndexer,
    values: Box<[f64]>,
    is_present: Box<[bool]>,
}

impl<'a> LanguageValueMap<'a> {
    pub(crate) fn new(indexer: &'a LanguageIndexer) -> Self {
        Self {
            indexer,
            values: vec![0.0; indexer.len()].into_boxed_slice(),
            is_present: vec![false; indexer.len()].into_boxed_slice(),
        }
    }

    fn index_of(&self, language: Language) -> usize {
        self.indexer
            .index_of(language)
            .unwrap_or_else(|| panic!("language {:?} is not part of this map's index", language))
    }

    pub(crate) fn put(&mut self, language: Language, value: f64) {
        let index = self.index_of(language);
        self.values[index] = value;
        self.is_present[index] = true;
    }

    pub(crate) fn add(&mut self, language: Language, value: f64) {
        let index = self.index_of(language);
        self.values[index] += value;
        self.is_present[index] = true;
    }

    pub(crate) fn get_or_zero(&self, language: Language) -> f64 {
        match self.indexer.index_of(language) {
            Some(index) if self.is_present[index] => self.values[index],
            _ => 0.0,
        }
    }

    pub(crate) fn count_present(&self) -> usize {
        self.is_present.iter().filter(|&&present| present).count()
    }

    pub(crate) fn first_present(&self) -> Option<Language> {
        self.is_present
            .iter()
            .position(|&present| present)
            .map(|index| self.indexer.language_at(index))
    }

    pub(crate) fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .zip(self.is_present.iter())
            .filter(|(_, &present)| present)
            .map(|(&value, _)| value)
            .fold(None, |max, value| match max {
                Some(max) if max >= value => Some(max),
                _ => Some(value),
            })
    }

    /// Applies `transform` to every present value, leaving absent slots
    /// absent.
    pub(crate) fn map_values(&self, transform: impl Fn(f64) -> f64) -> LanguageValueMap<'a> {
        let mut mapped = LanguageValueMap::new(self.indexer);
        for (index, &value) in self.values.iter().enumerate() {
            if self.is_present[index] {
                mapped.values[index] = transform(value);
                mapped.is_present[index] = true;
            }
        }
        mapped
    }

    pub(crate) fn iter_descending(&self) -> DescendingValueIter<'_, 'a> {
        DescendingValueIter {
            map: self,
            last: None,
            is_exhausted: false,
        }
    }
}

/// Iterates a [`LanguageValueMap`] by descending value with
/// declaration-order tie-break, without allocating.
///
/// Each step runs up to two scans: first for another slot holding the
/// value yielded last, then for the largest value strictly below it.
pub(crate) struct DescendingValueIter<'m, 'a> {
    map: &'m LanguageValueMap<'a>,
    last: Option<(usize, f64)>,
    is_exhausted: bool,
}

impl<'m, 'a> Iterator for DescendingValueIter<'m, 'a> {
    type Item = (Language, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted {
            return None;
        }
        let values = &self.map.values;
        let upper_bound = match self.last {
            Some((last_index, last_value)) => {
                for (offset, &value) in values[last_index + 1..].iter().enumerate() {
                    let index = last_index + 1 + offset;
                    if self.map.is_present[index] && value == last_value {
                        self.last = Some((index, value));
                        return Some((self.map.indexer.language_at(index), value));
                    }
                }
                Some(last_value)
            }
            None => None,
        };
        let mut best: Option<(usize, f64)> = None;
        for (index, &value) in values.iter().enumerate() {
            if !self.map.is_present[index] {
                continue;
            }
            if let Some(bound) = upper_bound {
                if value >= bound {
                    continue;
                }
            }
            match best {
                Some((_, best_value)) if best_value >= value => {}
                _ => best = Some((index, value)),
            }
        }
        match best {
            Some((index, value)) => {
                self.last = best;
                Some((self.map.indexer.language_at(index), value))
            }
            None => {
                self.is_exhausted = true;
                None
            }
        }
    }
}

/// A cursor over the raw bytes of a binary model blob.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], ModelError> {
        if self.remaining() < count {
            return Err(ModelError::UnexpectedEndOfData);
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    pub(crate) fn read_u24(&mut self) -> Result<u32, ModelError> {
        let bytes = self.take(3)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, ModelError> {
        Ok(u32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    pub(crate) fn read_u64(&mut self) -> Result<u64, ModelError> {
        Ok(u64::from_le_bytes(self.take(8)?.try_into().unwrap()))
    }

    pub(crate) fn read_f32(&mut self) -> Result<f32, ModelError> {
        Ok(f32::from_le_bytes(self.take(4)?.try_into().unwrap()))
    }

    pub(crate) fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], ModelError> {
        self.take(count)
    }

    /// Fails unless every byte of the blob has been consumed.
    pub(crate) fn finish(self) -> Result<(), ModelError> {
        match self.remaining() {
            0 => Ok(()),
            trailing => Err(ModelError::TrailingData(trailing)),
        }
    }
}

/// A fixed-width integer key of a [`FrequencyTable`].
pub(crate) trait TableKey: Copy + Ord {
    const WIDTH: usize;

    fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, ModelError>;
    fn write_to(self, buffer: &mut Vec<u8>);
}

impl TableKey for u32 {
    const WIDTH: usize = 4;

    fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, ModelError> {
        reader.read_u32()
    }

    fn write_to(self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.to_le_bytes());
    }
}

impl TableKey for u64 {
    const WIDTH: usize = 8;

    fn read_from(reader: &mut ByteReader<'_>) -> Result<Self, ModelError> {
        reader.read_u64()
    }

    fn write_to(self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.to_le_bytes());
    }
}

/// An immutable map from integer ngram keys to relative frequencies,
/// packed into two parallel arrays.
///
/// Keys are strictly ascending, values strictly positive; lookup is a
/// binary search and returns `0.0` exactly for absent keys. The
/// serialized form is `(u32 count, count × key, count × f32 value)` in
/// little-endian byte order, produced byte-identically for identical
/// input and consumed exactly by [`FrequencyTable::from_binary`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FrequencyTable<K> {
    keys: Box<[K]>,
    values: Box<[f32]>,
}

impl<K: TableKey> FrequencyTable<K> {
    pub(crate) fn empty() -> Self {
        Self {
            keys: Box::new([]),
            values: Box::new([]),
        }
    }

    pub(crate) fn from_entries(mut entries: Vec<(K, f32)>) -> Self {
        entries.sort_unstable_by_key(|(key, _)| *key);
        debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        debug_assert!(entries.iter().all(|(_, value)| *value > 0.0));
        let keys = entries.iter().map(|(key, _)| *key).collect();
        let values = entries.iter().map(|(_, value)| *value).collect();
        Self { keys, values }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn get(&self, key: K) -> f32 {
        match self.keys.binary_search(&key) {
            Ok(index) => self.values[index],
            Err(_) => 0.0,
        }
    }

    pub(crate) fn from_binary(reader: &mut ByteReader<'_>) -> Result<Self, ModelError> {
        let count = reader.read_u32()? as usize;
        if reader.remaining() < count * (K::WIDTH + 4) {
            return Err(ModelError::UnexpectedEndOfData);
        }
        let mut keys = Vec::with_capacity(count);
        for _ in 0..count {
            let key = K::read_from(reader)?;
            if let Some(&last) = keys.last() {
                if key <= last {
                    return Err(ModelError::KeysNotSorted);
                }
            }
            keys.push(key);
        }
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let value = reader.read_f32()?;
            if !(value > 0.0) || !value.is_finite() {
                return Err(ModelError::InvalidFrequency);
            }
            values.push(value);
        }
        Ok(Self {
            keys: keys.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }

    pub(crate) fn write_binary(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&(self.keys.len() as u32).to_le_bytes());
        for &key in self.keys.iter() {
            key.write_to(buffer);
        }
        for &value in self.values.iter() {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
    }
}

/// The string-keyed companion of [`FrequencyTable`] for quadri- and
/// fivegrams whose characters exceed the primitive bit budget.
///
/// Keys are sorted unique UTF-8 strings of at most five characters; the
/// serialized form is `(u32 count, count × u32 cumulative end offsets,
/// UTF-8 bytes, count × f32 values)`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct StringFrequencyTable {
    keys: Box<[CompactString]>,
    values: Box<[f32]>,
}

impl StringFrequencyTable {
    pub(crate) fn empty() -> Self {
        Self {
            keys: Box::new([]),
            values: Box::new([]),
        }
    }

    pub(crate) fn from_entries(mut entries: Vec<(CompactString, f32)>) -> Self {
        entries.sort_unstable_by(|(first, _), (second, _)| first.cmp(second));
        debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        debug_assert!(entries.iter().all(|(_, value)| *value > 0.0));
        let keys = entries.iter().map(|(key, _)| key.clone()).collect();
        let values = entries.iter().map(|(_, value)| *value).collect();
        Self { keys, values }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn get(&self, key: &str) -> f32 {
        match self
            .keys
            .binary_search_by(|probe| probe.as_str().cmp(key))
        {
            Ok(index) => self.values[index],
            Err(_) => 0.0,
        }
    }

    pub(crate) fn from_binary(reader: &mut ByteReader<'_>) -> Result<Self, ModelError> {
        let count = reader.read_u32()? as usize;
        if reader.remaining() < count * 8 {
            return Err(ModelError::UnexpectedEndOfData);
        }
        let mut offsets = Vec::with_capacity(count);
        for _ in 0..count {
            let offset = reader.read_u32()? as usize;
            if offset <= offsets.last().copied().unwrap_or(0) {
                return Err(ModelError::KeysNotSorted);
            }
            offsets.push(offset);
        }
        let total_bytes = offsets.last().copied().unwrap_or(0);
        let bytes = reader.read_bytes(total_bytes)?;
        let mut keys: Vec<CompactString> = Vec::with_capacity(count);
        let mut start = 0;
        for &end in offsets.iter() {
            let key = std::str::from_utf8(&bytes[start..end])
                .map_err(|_| ModelError::InvalidUtf8)?;
            if let Some(last) = keys.last() {
                if key <= last.as_str() {
                    return Err(ModelError::KeysNotSorted);
                }
            }
            keys.push(CompactString::from(key));
            start = end;
        }
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let value = reader.read_f32()?;
            if !(value > 0.0) || !value.is_finite() {
                return Err(ModelError::InvalidFrequency);
            }
            values.push(value);
        }
        Ok(Self {
            keys: keys.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }

    pub(crate) fn write_binary(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&(self.keys.len() as u32).to_le_bytes());
        let mut end = 0u32;
        for key in self.keys.iter() {
            end += key.len() as u32;
            buffer.extend_from_slice(&end.to_le_bytes());
        }
        for key in self.keys.iter() {
            buffer.extend_from_slice(key.as_bytes());
        }
        for &value in self.values.iter() {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language::*;
    use float_cmp::approx_eq;

    mod indexer {
        use super::*;

        #[test]
        fn assert_full_indexer_follows_declaration_order() {
            let indexer = LanguageIndexer::over_all_languages();
            assert_eq!(indexer.len(), Language::iter().count());
            assert_eq!(indexer.index_of(Afrikaans), Some(0));
            assert_eq!(indexer.language_at(0), Afrikaans);
            for (index, language) in Language::iter().enumerate() {
                assert_eq!(indexer.index_of(language), Some(index));
                assert_eq!(indexer.language_at(index), language);
            }
        }

        #[test]
        fn assert_subset_indexer_is_dense_and_ordered() {
            let indexer = LanguageIndexer::over(&hashset!(German, English, Swahili));
            assert_eq!(indexer.len(), 3);
            assert_eq!(indexer.index_of(English), Some(0));
            assert_eq!(indexer.index_of(German), Some(1));
            assert_eq!(indexer.index_of(Swahili), Some(2));
            assert_eq!(indexer.index_of(French), None);
            assert_eq!(indexer.language_at(1), German);
        }
    }

    mod value_map {
        use super::*;

        fn indexer() -> LanguageIndexer {
            LanguageIndexer::over(&hashset!(English, French, German, Italian, Spanish))
        }

        #[test]
        fn assert_absent_entries_read_as_zero() {
            let indexer = indexer();
            let mut map = LanguageValueMap::new(&indexer);
            assert_eq!(map.get_or_zero(English), 0.0);
            assert_eq!(map.count_present(), 0);
            assert_eq!(map.first_present(), None);
            assert_eq!(map.max_value(), None);

            map.put(German, -3.5);
            map.add(German, -1.0);
            map.put(Spanish, -2.25);

            assert_eq!(map.get_or_zero(German), -4.5);
            assert_eq!(map.get_or_zero(French), 0.0);
            assert_eq!(map.count_present(), 2);
            assert_eq!(map.first_present(), Some(German));
            assert_eq!(map.max_value(), Some(-2.25));
        }

        #[test]
        fn assert_stored_zero_is_distinct_from_absence() {
            let indexer = indexer();
            let mut map = LanguageValueMap::new(&indexer);
            map.add(English, 0.0);
            map.put(German, -2.0);

            assert_eq!(map.count_present(), 2);
            assert_eq!(map.first_present(), Some(English));
            assert_eq!(map.max_value(), Some(0.0));
            assert_eq!(map.get_or_zero(English), 0.0);

            let mapped = map.map_values(|value| value.exp());
            assert_eq!(mapped.count_present(), 2);
            assert_eq!(mapped.get_or_zero(English), 1.0);

            let entries = map.iter_descending().collect::<Vec<_>>();
            assert_eq!(entries, vec![(English, 0.0), (German, -2.0)]);
        }

        #[test]
        fn assert_map_values_skips_absent_entries() {
            let indexer = indexer();
            let mut map = LanguageValueMap::new(&indexer);
            map.put(English, -2.0);
            map.put(Italian, -4.0);

            let mapped = map.map_values(|value| (value + 4.0).exp());

            assert!(approx_eq!(f64, mapped.get_or_zero(English), (2.0f64).exp()));
            assert!(approx_eq!(f64, mapped.get_or_zero(Italian), 1.0));
            assert_eq!(mapped.get_or_zero(French), 0.0);
            assert_eq!(mapped.count_present(), 2);
        }

        #[test]
        fn assert_descending_iteration_breaks_ties_by_declaration_order() {
            let indexer = indexer();
            let mut map = LanguageValueMap::new(&indexer);
            map.put(Spanish, -1.0);
            map.put(German, -2.0);
            map.put(English, -2.0);
            map.put(Italian, -2.0);
            map.put(French, -7.5);

            let entries = map.iter_descending().collect::<Vec<_>>();

            assert_eq!(
                entries,
                vec![
                    (Spanish, -1.0),
                    (English, -2.0),
                    (German, -2.0),
                    (Italian, -2.0),
                    (French, -7.5)
                ]
            );
        }

        #[test]
        fn assert_descending_iteration_of_empty_map_yields_nothing() {
            let indexer = indexer();
            let map = LanguageValueMap::new(&indexer);
            assert_eq!(map.iter_descending().count(), 0);
        }

        #[test]
        fn assert_descending_iteration_stays_exhausted() {
            let indexer = indexer();
            let mut map = LanguageValueMap::new(&indexer);
            map.put(English, -1.0);

            let mut entries = map.iter_descending();
            assert_eq!(entries.next(), Some((English, -1.0)));
            assert_eq!(entries.next(), None);
            assert_eq!(entries.next(), None);
        }
    }

    mod frequency_table {
        use super::*;

        #[test]
        fn assert_lookup_returns_zero_exactly_for_absent_keys() {
            let table = FrequencyTable::<u32>::from_entries(vec![
                (17, 0.25),
                (3, 0.5),
                (42, 0.125),
            ]);
            assert_eq!(table.get(3), 0.5);
            assert_eq!(table.get(17), 0.25);
            assert_eq!(table.get(42), 0.125);
            assert_eq!(table.get(0), 0.0);
            assert_eq!(table.get(18), 0.0);
            assert_eq!(table.get(u32::MAX), 0.0);
        }

        #[test]
        fn assert_serialization_is_deterministic_and_fully_consumed() {
            let entries = vec![(1u32, 0.75), (2, 0.5), (900_000, 0.0625)];
            let table = FrequencyTable::from_entries(entries.clone());

            let mut first = vec![];
            table.write_binary(&mut first);
            let mut second = vec![];
            FrequencyTable::from_entries(entries).write_binary(&mut second);

            assert_eq!(first, second);
            assert_eq!(first.len(), 4 + 3 * 8);

            let mut reader = ByteReader::new(&first);
            let reloaded = FrequencyTable::<u32>::from_binary(&mut reader).unwrap();
            reader.finish().unwrap();
            assert_eq!(reloaded, table);
        }

        #[test]
        fn assert_truncated_data_is_rejected() {
            let table = FrequencyTable::<u32>::from_entries(vec![(1, 0.5), (2, 0.25)]);
            let mut buffer = vec![];
            table.write_binary(&mut buffer);
            buffer.truncate(buffer.len() - 1);

            let mut reader = ByteReader::new(&buffer);
            let result = FrequencyTable::<u32>::from_binary(&mut reader);
            assert!(matches!(result, Err(ModelError::UnexpectedEndOfData)));
        }

        #[test]
        fn assert_trailing_data_is_rejected() {
            let table = FrequencyTable::<u32>::from_entries(vec![(1, 0.5)]);
            let mut buffer = vec![];
            table.write_binary(&mut buffer);
            buffer.push(0);

            let mut reader = ByteReader::new(&buffer);
            FrequencyTable::<u32>::from_binary(&mut reader).unwrap();
            assert!(matches!(
                reader.finish(),
                Err(ModelError::TrailingData(1))
            ));
        }

        #[test]
        fn assert_unsorted_keys_are_rejected() {
            let mut buffer = vec![];
            buffer.extend_from_slice(&2u32.to_le_bytes());
            buffer.extend_from_slice(&7u32.to_le_bytes());
            buffer.extend_from_slice(&7u32.to_le_bytes());
            buffer.extend_from_slice(&0.5f32.to_le_bytes());
            buffer.extend_from_slice(&0.5f32.to_le_bytes());

            let mut reader = ByteReader::new(&buffer);
            let result = FrequencyTable::<u32>::from_binary(&mut reader);
            assert!(matches!(result, Err(ModelError::KeysNotSorted)));
        }

        #[test]
        fn assert_non_positive_frequencies_are_rejected() {
            let mut buffer = vec![];
            buffer.extend_from_slice(&1u32.to_le_bytes());
            buffer.extend_from_slice(&7u32.to_le_bytes());
            buffer.extend_from_slice(&0.0f32.to_le_bytes());

            let mut reader = ByteReader::new(&buffer);
            let result = FrequencyTable::<u32>::from_binary(&mut reader);
            assert!(matches!(result, Err(ModelError::InvalidFrequency)));
        }
    }

    mod string_table {
        use super::*;

        #[test]
        fn assert_lookup_by_borrowed_string() {
            let table = StringFrequencyTable::from_entries(vec![
                (CompactString::from("ができ"), 0.5),
                (CompactString::from("ーション"), 0.25),
                (CompactString::from("のとき"), 0.125),
            ]);
            assert_eq!(table.get("ができ"), 0.5);
            assert_eq!(table.get("ーション"), 0.25);
            assert_eq!(table.get("のとき"), 0.125);
            assert_eq!(table.get("できます"), 0.0);
        }

        #[test]
        fn assert_round_trip_preserves_all_entries() {
            let table = StringFrequencyTable::from_entries(vec![
                (CompactString::from("언어를"), 0.75),
                (CompactString::from("감지하"), 0.5),
            ]);
            let mut buffer = vec![];
            table.write_binary(&mut buffer);

            let mut reader = ByteReader::new(&buffer);
            let reloaded = StringFrequencyTable::from_binary(&mut reader).unwrap();
            reader.finish().unwrap();
            assert_eq!(reloaded, table);
        }

        #[test]
        fn assert_empty_table_round_trips() {
            let table = StringFrequencyTable::empty();
            let mut buffer = vec![];
            table.write_binary(&mut buffer);
            assert_eq!(buffer.len(), 4);

            let mut reader = ByteReader::new(&buffer);
            let reloaded = StringFrequencyTable::from_binary(&mut reader).unwrap();
            reader.finish().unwrap();
            assert_eq!(reloaded.len(), 0);
        }

        #[test]
        fn assert_invalid_utf8_is_rejected() {
            let mut buffer = vec![];
            buffer.extend_from_slice(&1u32.to_le_bytes());
            buffer.extend_from_slice(&2u32.to_le_bytes());
            buffer.extend_from_slice(&[0xc3, 0x28]);
            buffer.extend_from_slice(&0.5f32.to_le_bytes());

            let mut reader = ByteReader::new(&buffer);
            let result = StringFrequencyTable::from_binary(&mut reader);
            assert!(matches!(result, Err(ModelError::InvalidUtf8)));
        }
    }
}
