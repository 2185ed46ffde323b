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
use thiserror::Error;

/// This enum describes why a binary language model could not be loaded.
///
/// A model file that is absent altogether is not an error; the affected
/// language simply scores without that model. These variants only occur
/// for files that exist but cannot be read or do not satisfy the
/// invariants of the binary model format.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("language model file could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("language model data ended unexpectedly")]
    UnexpectedEndOfData,

    #[error("language model data contains {0} trailing bytes")]
    TrailingData(usize),

    #[error("language model keys are not strictly ascending")]
    KeysNotSorted,

    #[error("language model data sections are inconsistent")]
    InconsistentData,

    #[error("language model contains a non-positive ngram frequency")]
    InvalidFrequency,

    #[error("language model contains ngram data that is not valid UTF-8")]
    InvalidUtf8,
}

/// This enum describes the error conditions of the public
/// [`LanguageDetector`](crate::LanguageDetector) operations.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The requested language is not part of the detector's
    /// configured set of languages.
    #[error("language {0:?} is not part of this detector's configured languages")]
    UnknownLanguage(Language),

    /// A language model file exists but is malformed or unreadable.
    #[error(transparent)]
    Model(#[from] ModelError),
}
