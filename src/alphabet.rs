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

use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

static ARABIC: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Arabic}+$").unwrap());
static ARMENIAN: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Armenian}+$").unwrap());
static BENGALI: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Bengali}+$").unwrap());
static CYRILLIC: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Cyrillic}+$").unwrap());
static DEVANAGARI: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Devanagari}+$").unwrap());
static GEORGIAN: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Georgian}+$").unwrap());
static GREEK: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Greek}+$").unwrap());
static GUJARATI: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Gujarati}+$").unwrap());
static GURMUKHI: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Gurmukhi}+$").unwrap());
static HAN: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Han}+$").unwrap());
static HANGUL: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Hangul}+$").unwrap());
static HEBREW: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Hebrew}+$").unwrap());
static HIRAGANA: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Hiragana}+$").unwrap());
static KATAKANA: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Katakana}+$").unwrap());
static LATIN: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Latin}+$").unwrap());
static TAMIL: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Tamil}+$").unwrap());
static TELUGU: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Telugu}+$").unwrap());
static THAI: Lazy<Regex> = Lazy::new(|| Regex::new("^\\p{Thai}+$").unwrap());

/// The Unicode script groups the supported languages are written in.
#[derive(Clone, Copy, Debug, EnumIter, Eq, PartialEq, Hash)]
pub(crate) enum Alphabet {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Tamil,
    Telugu,
    Thai,
}

impl Alphabet {
    pub(crate) fn matches(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    pub(crate) fn matches_char(&self, character: char) -> bool {
        let mut buffer = [0; 4];
        self.regex().is_match(character.encode_utf8(&mut buffer))
    }

    fn regex(&self) -> &'static Regex {
        match self {
            Alphabet::Arabic => &ARABIC,
            Alphabet::Armenian => &ARMENIAN,
            Alphabet::Bengali => &BENGALI,
            Alphabet::Cyrillic => &CYRILLIC,
            Alphabet::Devanagari => &DEVANAGARI,
            Alphabet::Georgian => &GEORGIAN,
            Alphabet::Greek => &GREEK,
            Alphabet::Gujarati => &GUJARATI,
            Alphabet::Gurmukhi => &GURMUKHI,
            Alphabet::Han => &HAN,
            Alphabet::Hangul => &HANGUL,
            Alphabet::Hebrew => &HEBREW,
            Alphabet::Hiragana => &HIRAGANA,
            Alphabet::Katakana => &KATAKANA,
            Alphabet::Latin => &LATIN,
            Alphabet::Tamil => &TAMIL,
            Alphabet::Telugu => &TELUGU,
            Alphabet::Thai => &THAI,
        }
    }

    pub(crate) fn all_supporting_single_language() -> HashMap<Alphabet, Language> {
        let mut alphabets = HashMap::new();
        for alphabet in Alphabet::iter() {
            let supported_languages = alphabet.supported_languages();
            if supported_languages.len() == 1 {
                alphabets.insert(alphabet, supported_languages[0]);
            }
        }
        alphabets
    }

    fn supported_languages(&self) -> Vec<Language> {
        let mut languages = vec![];
        for language in Language::iter() {
            if language.alphabets().contains(self) {
                languages.push(language);
            }
        }
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language::*;

    #[test]
    fn assert_alphabets_match_their_scripts() {
        assert!(Alphabet::Latin.matches("language"));
        assert!(Alphabet::Cyrillic.matches("язык"));
        assert!(Alphabet::Arabic.matches("لغة"));
        assert!(Alphabet::Han.matches("语言"));
        assert!(!Alphabet::Latin.matches("язык"));
        assert!(!Alphabet::Cyrillic.matches("lang"));
    }

    #[test]
    fn assert_single_characters_are_classified() {
        assert!(Alphabet::Greek.matches_char('φ'));
        assert!(Alphabet::Hiragana.matches_char('ひ'));
        assert!(Alphabet::Katakana.matches_char('ク'));
        assert!(!Alphabet::Greek.matches_char('f'));
    }

    #[test]
    fn assert_certain_alphabets_support_exactly_one_language() {
        assert_eq!(
            Alphabet::all_supporting_single_language(),
            hashmap!(
                Alphabet::Armenian => Armenian,
                Alphabet::Bengali => Bengali,
                Alphabet::Georgian => Georgian,
                Alphabet::Greek => Greek,
                Alphabet::Gujarati => Gujarati,
                Alphabet::Gurmukhi => Punjabi,
                Alphabet::Hangul => Korean,
                Alphabet::Hebrew => Hebrew,
                Alphabet::Hiragana => Japanese,
                Alphabet::Katakana => Japanese,
                Alphabet::Tamil => Tamil,
                Alphabet::Telugu => Telugu,
                Alphabet::Thai => Thai
            )
        );
    }
}
