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

use crate::cache::ModelCache;
use crate::detector::LanguageDetector;
use crate::executor::ScoringExecutor;
use crate::isocode::{IsoCode639_1, IsoCode639_3};
use crate::language::Language;
use rayon::ThreadPool;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

const MISSING_LANGUAGE_MESSAGE: &str = "LanguageDetector needs at least 2 languages to choose from";

const DEFAULT_MODEL_DIRECTORY: &str = "models";

/// This struct configures and creates an instance of [`LanguageDetector`].
pub struct LanguageDetectorBuilder {
    languages: HashSet<Language>,
    minimum_relative_distance: f64,
    is_low_accuracy_mode_enabled: bool,
    is_every_language_model_preloaded: bool,
    model_directory: PathBuf,
    thread_pool: Option<Arc<ThreadPool>>,
}

impl LanguageDetectorBuilder {
    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in languages.
    pub fn from_all_languages() -> Self {
        Self::from(Language::all())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in spoken languages.
    pub fn from_all_spoken_languages() -> Self {
        Self::from(Language::all_spoken_ones())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in languages supporting the Arabic script.
    pub fn from_all_languages_with_arabic_script() -> Self {
        Self::from(Language::all_with_arabic_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in languages supporting the Cyrillic script.
    pub fn from_all_languages_with_cyrillic_script() -> Self {
        Self::from(Language::all_with_cyrillic_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in languages supporting the Devanagari script.
    pub fn from_all_languages_with_devanagari_script() -> Self {
        Self::from(Language::all_with_devanagari_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in languages supporting the Latin script.
    pub fn from_all_languages_with_latin_script() -> Self {
        Self::from(Language::all_with_latin_script())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with all built-in languages except those passed to this method.
    ///
    /// ⚠ Panics if less than two languages remain.
    pub fn from_all_languages_without(languages: &[Language]) -> Self {
        let mut languages_to_load = Language::all();
        languages_to_load.retain(|it| !languages.contains(it));
        if languages_to_load.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        Self::from(languages_to_load)
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with the languages passed to this method.
    ///
    /// ⚠ Panics if less than two languages are passed.
    pub fn from_languages(languages: &[Language]) -> Self {
        if languages.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        Self::from(languages.iter().copied().collect())
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with the languages specified by the ISO 639-1 codes passed
    /// to this method.
    ///
    /// ⚠ Panics if less than two codes are passed.
    pub fn from_iso_codes_639_1(iso_codes: &[IsoCode639_1]) -> Self {
        if iso_codes.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        let languages = iso_codes
            .iter()
            .map(Language::from_iso_code_639_1)
            .collect::<HashSet<_>>();
        Self::from(languages)
    }

    /// Creates and returns an instance of `LanguageDetectorBuilder`
    /// with the languages specified by the ISO 639-3 codes passed
    /// to this method.
    ///
    /// ⚠ Panics if less than two codes are passed.
    pub fn from_iso_codes_639_3(iso_codes: &[IsoCode639_3]) -> Self {
        if iso_codes.len() < 2 {
            panic!("{}", MISSING_LANGUAGE_MESSAGE);
        }
        let languages = iso_codes
            .iter()
            .map(Language::from_iso_code_639_3)
            .collect::<HashSet<_>>();
        Self::from(languages)
    }

    /// Sets the desired value for the minimum relative distance measure.
    ///
    /// The default distance is 0.0 so that
    /// [`LanguageDetector::detect_language_of`] only requires the most
    /// likely language to be strictly ahead of the second most likely
    /// one. The higher the value, the more conservative detection
    /// becomes.
    ///
    /// ⚠ Panics if `distance` is smaller than 0.0 or greater than 0.99.
    pub fn with_minimum_relative_distance(&mut self, distance: f64) -> &mut Self {
        if !(0.0..=0.99).contains(&distance) {
            panic!("minimum relative distance must lie in between 0.0 and 0.99");
        }
        self.minimum_relative_distance = distance;
        self
    }

    /// Configures the detector to load all language models when
    /// [`build`](Self::build) is called.
    ///
    /// By default, each language model is loaded lazily by the first
    /// detection that needs it.
    pub fn with_preloaded_language_models(&mut self) -> &mut Self {
        self.is_every_language_model_preloaded = true;
        self
    }

    /// Restricts scoring to ngrams of lengths one to three.
    ///
    /// Low accuracy mode loads considerably fewer model data and is
    /// noticeably faster, at the cost of detection accuracy for short
    /// text. Accuracy for text of 120 characters or more is mostly
    /// unaffected.
    pub fn with_low_accuracy_mode(&mut self) -> &mut Self {
        self.is_low_accuracy_mode_enabled = true;
        self
    }

    /// Sets the directory the binary language model files are read
    /// from. The default is the relative directory `models`.
    pub fn with_model_directory<P: Into<PathBuf>>(&mut self, model_directory: P) -> &mut Self {
        self.model_directory = model_directory.into();
        self
    }

    /// Supplies the thread pool used to score candidate languages in
    /// parallel. By default, the global rayon thread pool is used.
    pub fn with_thread_pool(&mut self, thread_pool: Arc<ThreadPool>) -> &mut Self {
        self.thread_pool = Some(thread_pool);
        self
    }

    /// Creates and returns the configured instance of
    /// [`LanguageDetector`].
    ///
    /// ⚠ Panics if language model preloading has been requested and a
    /// model file exists but is malformed.
    pub fn build(&mut self) -> LanguageDetector {
        let model_cache = Arc::new(ModelCache::new(self.model_directory.clone()));
        let executor = match &self.thread_pool {
            Some(thread_pool) => ScoringExecutor::Pool(thread_pool.clone()),
            None => ScoringExecutor::Builtin,
        };
        let detector = LanguageDetector::from(
            self.languages.clone(),
            self.minimum_relative_distance,
            self.is_low_accuracy_mode_enabled,
            model_cache,
            executor,
        );
        if self.is_every_language_model_preloaded {
            detector
                .preload_language_models()
                .unwrap_or_else(|error| panic!("language models could not be preloaded: {error}"));
        }
        detector
    }

    fn from(languages: HashSet<Language>) -> Self {
        Self {
            languages,
            minimum_relative_distance: 0.0,
            is_low_accuracy_mode_enabled: false,
            is_every_language_model_preloaded: false,
            model_directory: PathBuf::from(DEFAULT_MODEL_DIRECTORY),
            thread_pool: None,
        }
    }
}
