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

use std::fmt;
use std::fmt::{Display, Formatter};

pub(crate) const MAX_NGRAM_LENGTH: usize = 5;

const LENGTH_SHIFT: u32 = 61;
const PAYLOAD_MASK: u64 = (1 << LENGTH_SHIFT) - 1;

/// A ngram of one to five characters packed into a single 64-bit key.
///
/// The three high bits hold the ngram length, the low 61 bits hold the
/// characters. Each length has a fixed per-character budget; a ngram
/// whose characters exceed the budget has no primitive form and is
/// represented as a string instead. The payload of lengths one to three
/// never exceeds 32 bits so that those keys fit the narrow lookup tables.
///
/// | length | layout                                  | budget                                       |
/// |--------|-----------------------------------------|----------------------------------------------|
/// | 1      | code point                              | any scalar value                             |
/// | 2      | `c0 << 16 \| c1`                        | both ≤ U+FFFF                                |
/// | 3      | `c0 << 16 \| (d1+128) << 8 \| (d2+128)` | `c0` ≤ U+FFFF, `di = ci − c0` in [−128, 127] |
/// | 4      | four 15-bit fields                      | all ≤ U+7FFF                                 |
/// | 5      | five 12-bit fields                      | all ≤ U+0FFF                                 |
///
/// The delta form at length three keeps trigrams whose characters stem
/// from a single script block (Latin, Cyrillic, Greek, Arabic,
/// Devanagari and so on) within the 32-bit budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub(crate) struct PrimitiveNgram(u64);

impl PrimitiveNgram {
    /// Packs `value` into a primitive key, or returns `None` if any
    /// character exceeds the bit budget of the ngram's length.
    ///
    /// Panics if `value` does not consist of one to five characters.
    pub(crate) fn encode(value: &str) -> Option<PrimitiveNgram> {
        let mut chars = [0u32; MAX_NGRAM_LENGTH];
        let mut length = 0;
        for char in value.chars() {
            if length == MAX_NGRAM_LENGTH {
                panic!("length of ngram '{}' is not in range 1..6", value);
            }
            chars[length] = char as u32;
            length += 1;
        }
        if length == 0 {
            panic!("length of ngram '{}' is not in range 1..6", value);
        }
        Self::encode_chars(&chars[..length])
    }

    fn encode_chars(chars: &[u32]) -> Option<PrimitiveNgram> {
        let payload = match *chars {
            [c0] => c0 as u64,
            [c0, c1] => {
                if c0 > 0xffff || c1 > 0xffff {
                    return None;
                }
                ((c0 as u64) << 16) | c1 as u64
            }
            [c0, c1, c2] => {
                if c0 > 0xffff {
                    return None;
                }
                let d1 = c1 as i64 - c0 as i64;
                let d2 = c2 as i64 - c0 as i64;
                if !(-128..=127).contains(&d1) || !(-128..=127).contains(&d2) {
                    return None;
                }
                ((c0 as u64) << 16) | (((d1 + 128) as u64) << 8) | (d2 + 128) as u64
            }
            [c0, c1, c2, c3] => {
                if chars.iter().any(|&c| c > 0x7fff) {
                    return None;
                }
                ((c0 as u64) << 45) | ((c1 as u64) << 30) | ((c2 as u64) << 15) | c3 as u64
            }
            [c0, c1, c2, c3, c4] => {
                if chars.iter().any(|&c| c > 0xfff) {
                    return None;
                }
                ((c0 as u64) << 48)
                    | ((c1 as u64) << 36)
                    | ((c2 as u64) << 24)
                    | ((c3 as u64) << 12)
                    | c4 as u64
            }
            _ => unreachable!(),
        };
        Some(PrimitiveNgram(
            ((chars.len() as u64) << LENGTH_SHIFT) | payload,
        ))
    }

    /// Restores the characters this key was encoded from.
    pub(crate) fn decode(self) -> String {
        let payload = self.0 & PAYLOAD_MASK;
        let code_points: Vec<u32> = match self.length() {
            1 => vec![payload as u32],
            2 => vec![(payload >> 16) as u32, (payload & 0xffff) as u32],
            3 => {
                let c0 = (payload >> 16) as u32;
                let d1 = ((payload >> 8) & 0xff) as i64 - 128;
                let d2 = (payload & 0xff) as i64 - 128;
                vec![c0, (c0 as i64 + d1) as u32, (c0 as i64 + d2) as u32]
            }
            4 => (0..4)
                .map(|i| ((payload >> (45 - 15 * i)) & 0x7fff) as u32)
                .collect(),
            5 => (0..5)
                .map(|i| ((payload >> (48 - 12 * i)) & 0xfff) as u32)
                .collect(),
            length => panic!("length {} of primitive ngram is not in range 1..6", length),
        };
        code_points
            .into_iter()
            .map(|code_point| {
                char::from_u32(code_point)
                    .unwrap_or_else(|| panic!("primitive ngram contains an invalid code point"))
            })
            .collect()
    }

    /// The number of characters of the encoded ngram, between one and five.
    pub(crate) fn length(self) -> usize {
        (self.0 >> LENGTH_SHIFT) as usize
    }

    /// The payload of a uni-, bi- or trigram key, which fits 32 bits.
    pub(crate) fn key32(self) -> u32 {
        debug_assert!(self.length() <= 3);
        (self.0 & PAYLOAD_MASK) as u32
    }

    /// The payload of a quadri- or fivegram key.
    pub(crate) fn key64(self) -> u64 {
        debug_assert!(self.length() >= 4);
        self.0 & PAYLOAD_MASK
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct NgramRef<'a> {
    pub(crate) value: &'a str,
}

impl<'a> NgramRef<'a> {
    pub(crate) fn new(value: &'a str) -> Self {
        let char_count = value.chars().count();
        if !(1..=MAX_NGRAM_LENGTH).contains(&char_count) {
            panic!(
                "length {} of ngram '{}' is not in range 1..6",
                char_count, value
            );
        }
        Self { value }
    }
}

impl<'a> Display for NgramRef<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
