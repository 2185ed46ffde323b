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
use crate::map::LanguageIndexer;
use crate::model::{QuadriFivegramLookup, UniBiTrigramLookup};
use once_cell::sync::OnceCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) const UNI_BI_TRIGRAMS_FILE_NAME: &str = "uni-bi-trigrams.bin";
pub(crate) const QUADRI_FIVEGRAMS_FILE_NAME: &str = "quadri-fivegrams.bin";

/// The registry of loaded language models, owned by a detector and
/// shared between its clones and its scoring tasks.
///
/// Each (language, length class) pair occupies one cell. The first
/// thread asking for a model loads it while concurrent callers block
/// on the same cell; a failed load is not cached, so a later call
/// retries. Once published, a model is read without taking any lock
/// and stays in memory for the lifetime of the cache.
///
/// A model file that does not exist is not an error: some languages
/// ship without quadri- and fivegram tables. Such cells publish an
/// empty lookup whose frequencies are all zero.
pub(crate) struct ModelCache {
    model_directory: PathBuf,
    indexer: LanguageIndexer,
    uni_bi_trigram_models: Box<[OnceCell<Arc<UniBiTrigramLookup>>]>,
    quadri_fivegram_models: Box<[OnceCell<Arc<QuadriFivegramLookup>>]>,
}

impl ModelCache {
    pub(crate) fn new(model_directory: PathBuf) -> Self {
        let indexer = LanguageIndexer::over_all_languages();
        let uni_bi_trigram_models = (0..indexer.len()).map(|_| OnceCell::new()).collect();
        let quadri_fivegram_models = (0..indexer.len()).map(|_| OnceCell::new()).collect();
        Self {
            model_directory,
            indexer,
            uni_bi_trigram_models,
            quadri_fivegram_models,
        }
    }

    pub(crate) fn uni_bi_trigram_lookup(
        &self,
        language: Language,
    ) -> Result<Arc<UniBiTrigramLookup>, ModelError> {
        let cell = &self.uni_bi_trigram_models[self.index_of(language)];
        let lookup = cell.get_or_try_init(|| {
            Ok::<_, ModelError>(
                match self.read_model_file(language, UNI_BI_TRIGRAMS_FILE_NAME)? {
                    Some(data) => Arc::new(UniBiTrigramLookup::from_binary(&data)?),
                    None => Arc::new(UniBiTrigramLookup::empty()),
                },
            )
        })?;
        Ok(lookup.clone())
    }

    pub(crate) fn quadri_fivegram_lookup(
        &self,
        language: Language,
    ) -> Result<Arc<QuadriFivegramLookup>, ModelError> {
        let cell = &self.quadri_fivegram_models[self.index_of(language)];
        let lookup = cell.get_or_try_init(|| {
            Ok::<_, ModelError>(
                match self.read_model_file(language, QUADRI_FIVEGRAMS_FILE_NAME)? {
                    Some(data) => Arc::new(QuadriFivegramLookup::from_binary(&data)?),
                    None => Arc::new(QuadriFivegramLookup::empty()),
                },
            )
        })?;
        Ok(lookup.clone())
    }

    pub(crate) fn language_model_path(&self, language: Language, file_name: &str) -> PathBuf {
        self.model_directory
            .join(language.iso_code_639_1().to_string())
            .join(file_name)
    }

    fn index_of(&self, language: Language) -> usize {
        self.indexer
            .index_of(language)
            .expect("the cache indexer covers all languages")
    }

    fn read_model_file(
        &self,
        language: Language,
        file_name: &str,
    ) -> Result<Option<Vec<u8>>, ModelError> {
        let file_path = self.language_model_path(language, file_name);
        match fs::read(&file_path) {
            Ok(data) => Ok(Some(data)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(ModelError::Io(error)),
        }
    }

    #[cfg(test)]
    pub(crate) fn put_uni_bi_trigram_lookup(
        &self,
        language: Language,
        lookup: UniBiTrigramLookup,
    ) {
        self.uni_bi_trigram_models[self.index_of(language)]
            .set(Arc::new(lookup))
            .expect("uni-bi-trigram lookup has already been loaded");
    }

    #[cfg(test)]
    pub(crate) fn put_quadri_fivegram_lookup(
        &self,
        language: Language,
        lookup: QuadriFivegramLookup,
    ) {
        self.quadri_fivegram_models[self.index_of(language)]
            .set(Arc::new(lookup))
            .expect("quadri-fivegram lookup has already been loaded");
    }
}

pub(crate) fn write_model_file(
    directory: &Path,
    language: Language,
    file_name: &str,
    data: &[u8],
) -> std::io::Result<()> {
    let language_directory = directory.join(language.iso_code_639_1().to_string());
    fs::create_dir_all(&language_directory)?;
    fs::write(language_directory.join(file_name), data)
}
