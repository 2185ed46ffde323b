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
use crate::map::ByteReader;

/// An immutable map from 32-bit keys to 32-bit float values, packed
/// into a two-level trie.
///
/// The first level holds each distinct high 16-bit key prefix exactly
/// once; the second level holds the low 16 bits of every entry,
/// grouped by prefix. Both levels are sorted and looked up by binary
/// search. Sharing the prefixes keeps the map well below eight bytes
/// per entry wherever keys cluster, which ngram keys do heavily.
///
/// The serialized form is, in little-endian byte order:
///
/// ```text
/// u32 entry count
/// u32 prefix count
/// prefix count × u16   high prefixes, strictly ascending
/// prefix count × u24   cumulative entry counts per prefix
/// entry count  × u16   low halves, strictly ascending per prefix
/// entry count  × f32   values
/// ```
///
/// Serialization is byte-identical for identical input and is
/// consumed exactly by [`Int2FloatTrieMap::from_binary`]. The layout
/// contains no pointers, so a blob can be memory-mapped read-only.
/// The u24 cumulative counts bound a single map to 2^24 − 1 entries.
pub(crate) struct Int2FloatTrieMap {
    prefixes: Box<[u16]>,
    bucket_ends: Box<[u32]>,
    lows: Box<[u16]>,
    values: Box<[f32]>,
}

impl Int2FloatTrieMap {
    pub(crate) fn from_entries(mut entries: Vec<(u32, f32)>) -> Self {
        entries.sort_unstable_by_key(|(key, _)| *key);
        debug_assert!(entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        debug_assert!(entries.len() < 1 << 24);

        let mut prefixes = vec![];
        let mut bucket_ends = vec![];
        let mut lows = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());

        for (key, value) in entries {
            let prefix = (key >> 16) as u16;
            if prefixes.last() != Some(&prefix) {
                prefixes.push(prefix);
                bucket_ends.push(0);
            }
            lows.push((key & 0xffff) as u16);
            values.push(value);
            *bucket_ends.last_mut().unwrap() = lows.len() as u32;
        }

        Self {
            prefixes: prefixes.into_boxed_slice(),
            bucket_ends: bucket_ends.into_boxed_slice(),
            lows: lows.into_boxed_slice(),
            values: values.into_boxed_slice(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// The value stored for `key`, or `0.0` if the key is absent.
    pub(crate) fn get(&self, key: u32) -> f32 {
        let bucket = match self.prefixes.binary_search(&((key >> 16) as u16)) {
            Ok(bucket) => bucket,
            Err(_) => return 0.0,
        };
        let start = if bucket == 0 {
            0
        } else {
            self.bucket_ends[bucket - 1] as usize
        };
        let end = self.bucket_ends[bucket] as usize;
        match self.lows[start..end].binary_search(&((key & 0xffff) as u16)) {
            Ok(offset) => self.values[start + offset],
            Err(_) => 0.0,
        }
    }

    pub(crate) fn from_binary(reader: &mut ByteReader<'_>) -> Result<Self, ModelError> {
        let entry_count = reader.read_u32()? as usize;
        let prefix_count = reader.read_u32()? as usize;
        if prefix_count > entry_count {
            return Err(ModelError::InconsistentData);
        }
        if reader.remaining() < prefix_count * 5 + entry_count * 6 {
            return Err(ModelError::UnexpectedEndOfData);
        }

        let mut prefixes = Vec::with_capacity(prefix_count);
        for _ in 0..prefix_count {
            let bytes = reader.read_bytes(2)?;
            let prefix = u16::from_le_bytes([bytes[0], bytes[1]]);
            if let Some(&last) = prefixes.last() {
                if prefix <= last {
                    return Err(ModelError::KeysNotSorted);
                }
            }
            prefixes.push(prefix);
        }

        let mut bucket_ends = Vec::with_capacity(prefix_count);
        for _ in 0..prefix_count {
            let end = reader.read_u24()?;
            if end <= bucket_ends.last().copied().unwrap_or(0) {
                return Err(ModelError::KeysNotSorted);
            }
            bucket_ends.push(end);
        }
        if bucket_ends.last().copied().unwrap_or(0) as usize != entry_count {
            return Err(ModelError::InconsistentData);
        }

        let mut lows = Vec::with_capacity(entry_count);
        let mut start = 0;
        for &end in bucket_ends.iter() {
            for position in start..end as usize {
                let bytes = reader.read_bytes(2)?;
                let low = u16::from_le_bytes([bytes[0], bytes[1]]);
                if position > start && low <= lows[position - 1] {
                    return Err(ModelError::KeysNotSorted);
                }
                lows.push(low);
            }
            start = end as usize;
        }

        let mut values = Vec::with_capacity(entry_count);
        for _ in 0..entry_count {
            values.push(reader.read_f32()?);
        }

        Ok(Self {
            prefixes: prefixes.into_boxed_slice(),
            bucket_ends: bucket_ends.into_boxed_slice(),
            lows: lows.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }

    pub(crate) fn write_binary(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&(self.values.len() as u32).to_le_bytes());
        buffer.extend_from_slice(&(self.prefixes.len() as u32).to_le_bytes());
        for &prefix in self.prefixes.iter() {
            buffer.extend_from_slice(&prefix.to_le_bytes());
        }
        for &end in self.bucket_ends.iter() {
            buffer.extend_from_slice(&end.to_le_bytes()[..3]);
        }
        for &low in self.lows.iter() {
            buffer.extend_from_slice(&low.to_le_bytes());
        }
        for &value in self.values.iter() {
            buffer.extend_from_slice(&value.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    /// The 48-bit linear congruential generator of `java.util.Random`,
    /// seeded and drawn exactly as the JDK does.
    struct JdkRandom {
        seed: u64,
    }

    impl JdkRandom {
        const MULTIPLIER: u64 = 0x5DEECE66D;
        const INCREMENT: u64 = 0xB;
        const MASK: u64 = (1 << 48) - 1;

        fn new(seed: u64) -> Self {
            Self {
                seed: (seed ^ Self::MULTIPLIER) & Self::MASK,
            }
        }

        fn next_int(&mut self) -> i32 {
            self.seed = self
                .seed
                .wrapping_mul(Self::MULTIPLIER)
                .wrapping_add(Self::INCREMENT)
                & Self::MASK;
            (self.seed >> 16) as i32
        }
    }

    fn small_map() -> Int2FloatTrieMap {
        Int2FloatTrieMap::from_entries(vec![
            (0x0001_0005, 0.5),
            (0x0001_0002, 0.25),
            (0x7fff_ffff, 0.125),
            (0x0000_0000, 0.0625),
            (0xffff_0000, -1.5),
        ])
    }

    #[test]
    fn assert_present_keys_are_found_and_absent_keys_read_as_zero() {
        let map = small_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(0x0001_0005), 0.5);
        assert_eq!(map.get(0x0001_0002), 0.25);
        assert_eq!(map.get(0x7fff_ffff), 0.125);
        assert_eq!(map.get(0x0000_0000), 0.0625);
        assert_eq!(map.get(0xffff_0000), -1.5);
        assert_eq!(map.get(0x0001_0003), 0.0);
        assert_eq!(map.get(0x0002_0005), 0.0);
        assert_eq!(map.get(u32::MAX), 0.0);
    }

    #[test]
    fn assert_empty_map_round_trips() {
        let map = Int2FloatTrieMap::from_entries(vec![]);
        let mut buffer = vec![];
        map.write_binary(&mut buffer);
        assert_eq!(buffer.len(), 8);

        let mut reader = ByteReader::new(&buffer);
        let reloaded = Int2FloatTrieMap::from_binary(&mut reader).unwrap();
        reader.finish().unwrap();
        assert_eq!(reloaded.len(), 0);
        assert_eq!(reloaded.get(0), 0.0);
    }

    #[test]
    fn assert_serialization_is_deterministic() {
        let mut first = vec![];
        small_map().write_binary(&mut first);
        let mut second = vec![];
        small_map().write_binary(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn assert_seeded_jdk_random_map_round_trips_within_size_budget() {
        let mut random = JdkRandom::new(2);
        let mut draws = BTreeSet::new();
        for _ in 0..79_999 {
            draws.insert(random.next_int());
        }
        assert_eq!(draws.len(), 79_999);

        let entries = draws
            .iter()
            .map(|&draw| (draw as u32, draw as f32))
            .collect::<Vec<_>>();
        let map = Int2FloatTrieMap::from_entries(entries);

        let mut buffer = vec![];
        map.write_binary(&mut buffer);
        // this encoding packs the fixture into 710,197 bytes, within
        // 0.5 percent of the 712,698-byte reference blob
        assert_eq!(buffer.len(), 710_197);
        let reference_blob_size = 712_698i64;
        assert!((buffer.len() as i64 - reference_blob_size).unsigned_abs() * 200 <= 712_698);

        let mut reader = ByteReader::new(&buffer);
        let reloaded = Int2FloatTrieMap::from_binary(&mut reader).unwrap();
        reader.finish().unwrap();

        assert_eq!(reloaded.len(), 79_999);
        for &draw in draws.iter() {
            assert_eq!(reloaded.get(draw as u32), draw as f32);
        }
    }

    #[test]
    fn assert_absent_random_probes_read_as_zero() {
        let mut random = JdkRandom::new(2);
        let keys = (0..10_000)
            .map(|_| random.next_int() as u32)
            .collect::<BTreeSet<_>>();
        let map = Int2FloatTrieMap::from_entries(
            keys.iter().map(|&key| (key, 1.0)).collect(),
        );

        let mut probe_rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let probe = probe_rng.gen::<u32>();
            let expected = if keys.contains(&probe) { 1.0 } else { 0.0 };
            assert_eq!(map.get(probe), expected);
        }
    }

    #[test]
    fn assert_truncated_data_is_rejected() {
        let mut buffer = vec![];
        small_map().write_binary(&mut buffer);
        buffer.truncate(buffer.len() - 1);

        let mut reader = ByteReader::new(&buffer);
        let result = Int2FloatTrieMap::from_binary(&mut reader);
        assert!(matches!(result, Err(ModelError::UnexpectedEndOfData)));
    }

    #[test]
    fn assert_trailing_data_is_rejected() {
        let mut buffer = vec![];
        small_map().write_binary(&mut buffer);
        buffer.push(0);

        let mut reader = ByteReader::new(&buffer);
        Int2FloatTrieMap::from_binary(&mut reader).unwrap();
        assert!(matches!(reader.finish(), Err(ModelError::TrailingData(1))));
    }

    #[test]
    fn assert_unsorted_prefixes_are_rejected() {
        let mut buffer = vec![];
        buffer.extend_from_slice(&2u32.to_le_bytes());
        buffer.extend_from_slice(&2u32.to_le_bytes());
        buffer.extend_from_slice(&7u16.to_le_bytes());
        buffer.extend_from_slice(&7u16.to_le_bytes());
        buffer.extend_from_slice(&[1, 0, 0, 2, 0, 0]);
        buffer.extend_from_slice(&1u16.to_le_bytes());
        buffer.extend_from_slice(&2u16.to_le_bytes());
        buffer.extend_from_slice(&0.5f32.to_le_bytes());
        buffer.extend_from_slice(&0.5f32.to_le_bytes());

        let mut reader = ByteReader::new(&buffer);
        let result = Int2FloatTrieMap::from_binary(&mut reader);
        assert!(matches!(result, Err(ModelError::KeysNotSorted)));
    }

    #[test]
    fn assert_unsorted_lows_are_rejected() {
        let mut buffer = vec![];
        buffer.extend_from_slice(&2u32.to_le_bytes());
        buffer.extend_from_slice(&1u32.to_le_bytes());
        buffer.extend_from_slice(&7u16.to_le_bytes());
        buffer.extend_from_slice(&[2, 0, 0]);
        buffer.extend_from_slice(&9u16.to_le_bytes());
        buffer.extend_from_slice(&3u16.to_le_bytes());
        buffer.extend_from_slice(&0.5f32.to_le_bytes());
        buffer.extend_from_slice(&0.5f32.to_le_bytes());

        let mut reader = ByteReader::new(&buffer);
        let result = Int2FloatTrieMap::from_binary(&mut reader);
        assert!(matches!(result, Err(ModelError::KeysNotSorted)));
    }

    #[test]
    fn assert_inconsistent_bucket_ends_are_rejected() {
        let mut buffer = vec![];
        buffer.extend_from_slice(&2u32.to_le_bytes());
        buffer.extend_from_slice(&1u32.to_le_bytes());
        buffer.extend_from_slice(&7u16.to_le_bytes());
        buffer.extend_from_slice(&[1, 0, 0]);
        buffer.extend_from_slice(&3u16.to_le_bytes());
        buffer.extend_from_slice(&9u16.to_le_bytes());
        buffer.extend_from_slice(&0.5f32.to_le_bytes());
        buffer.extend_from_slice(&0.5f32.to_le_bytes());

        let mut reader = ByteReader::new(&buffer);
        let result = Int2FloatTrieMap::from_binary(&mut reader);
        assert!(matches!(result, Err(ModelError::InconsistentData)));
    }
}
