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

//! ## polyglossa
//!
//! *polyglossa* detects the natural language of text from a closed set
//! of 75 supported languages. It computes per-language confidence
//! values from compact binary character ngram models and works well
//! for long and short text alike.
//!
//! ### Basic usage
//!
//! ```no_run
//! use polyglossa::{Language, LanguageDetectorBuilder};
//!
//! let detector = LanguageDetectorBuilder::from_languages(&[
//!     Language::English,
//!     Language::French,
//!     Language::German,
//!     Language::Spanish,
//! ])
//! .with_model_directory("/usr/share/polyglossa/models")
//! .build();
//!
//! let detected_language = detector
//!     .detect_language_of("languages are awesome")
//!     .unwrap();
//! assert_eq!(detected_language, Some(Language::English));
//! ```
//!
//! ### Confidence values
//!
//! [`LanguageDetector::compute_language_confidence_values`] returns
//! every plausible language together with a value in `(0.0, 1.0]`,
//! sorted in descending order. The most likely language always has
//! the value 1.0.
//!
//! ### Model files
//!
//! The detector reads one pair of binary model files per language from
//! a model directory, lazily on first use, or eagerly if
//! [`LanguageDetectorBuilder::with_preloaded_language_models`] is set.
//! Model files are produced from training text by
//! [`LanguageModelFilesWriter`].

#![allow(dead_code)]

#[macro_use]
extern crate maplit;

mod alphabet;
mod builder;
mod cache;
mod constant;
mod detector;
mod error;
mod executor;
mod isocode;
mod language;
mod map;
mod model;
mod ngram;
mod trie;
mod writer;

pub use builder::LanguageDetectorBuilder;
pub use detector::LanguageDetector;
pub use error::{DetectorError, ModelError};
pub use isocode::{IsoCode639_1, IsoCode639_3};
pub use language::Language;
pub use writer::LanguageModelFilesWriter;
