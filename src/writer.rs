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

use crate::cache::{
    write_model_file, QUADRI_FIVEGRAMS_FILE_NAME, UNI_BI_TRIGRAMS_FILE_NAME,
};
use crate::language::Language;
use crate::model::{QuadriFivegramLookup, TrainingDataLanguageModel, UniBiTrigramLookup};
use itertools::Itertools;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// This struct creates the binary language model files from training
/// data and writes them to a directory.
///
/// For each language, two files are created in the subdirectory named
/// after the language's ISO 639-1 code: one holding the unigram,
/// bigram and trigram tables and one holding the quadrigram and
/// fivegram tables.
pub struct LanguageModelFilesWriter;

impl LanguageModelFilesWriter {
    /// Creates the language model files and writes them to a directory.
    ///
    /// `input_file_path`: The path to a txt file used for language
    /// model creation. The assumed encoding of the txt file is UTF-8.
    /// `output_directory_path`: The path to an existing directory
    /// where the language model files are to be written.
    /// `language`: The language for which to create language models.
    /// `char_class`: A regex character class such as `\p{L}` to
    /// restrict the set of characters that the language models are
    /// built from.
    ///
    /// ⚠ Panics if the input file path is not absolute or does not
    /// point to an existing txt file, or if the output directory path
    /// is not absolute or does not point to an existing directory.
    pub fn create_and_write_language_model_files(
        input_file_path: &Path,
        output_directory_path: &Path,
        language: &Language,
        char_class: &str,
    ) -> io::Result<()> {
        check_input_file_path(input_file_path);
        check_output_directory_path(output_directory_path);

        let unigram_model =
            Self::create_language_model(input_file_path, 1, char_class, &hashmap!())?;

        let bigram_model = Self::create_language_model(
            input_file_path,
            2,
            char_class,
            &unigram_model.absolute_frequencies,
        )?;

        let trigram_model = Self::create_language_model(
            input_file_path,
            3,
            char_class,
            &bigram_model.absolute_frequencies,
        )?;

        let quadrigram_model = Self::create_language_model(
            input_file_path,
            4,
            char_class,
            &trigram_model.absolute_frequencies,
        )?;

        let fivegram_model = Self::create_language_model(
            input_file_path,
            5,
            char_class,
            &quadrigram_model.absolute_frequencies,
        )?;

        let uni_bi_trigram_lookup =
            UniBiTrigramLookup::from_models(&[unigram_model, bigram_model, trigram_model]);
        let quadri_fivegram_lookup =
            QuadriFivegramLookup::from_models(&[quadrigram_model, fivegram_model]);

        write_model_file(
            output_directory_path,
            *language,
            UNI_BI_TRIGRAMS_FILE_NAME,
            &uni_bi_trigram_lookup.write_binary(),
        )?;
        write_model_file(
            output_directory_path,
            *language,
            QUADRI_FIVEGRAMS_FILE_NAME,
            &quadri_fivegram_lookup.write_binary(),
        )?;

        Ok(())
    }

    fn create_language_model(
        input_file_path: &Path,
        ngram_length: usize,
        char_class: &str,
        lower_ngram_absolute_frequencies: &HashMap<String, u32>,
    ) -> io::Result<TrainingDataLanguageModel> {
        let file = File::open(input_file_path)?;
        let reader = BufReader::new(file);
        let lines = reader
            .lines()
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect_vec();
        let lines_as_str = lines.iter().map(|line| line.as_str()).collect_vec();

        Ok(TrainingDataLanguageModel::from_text(
            &lines_as_str,
            ngram_length,
            char_class,
            lower_ngram_absolute_frequencies,
        ))
    }
}

fn check_input_file_path(input_file_path: &Path) {
    if !input_file_path.is_absolute() {
        panic!(
            "Input file path '{}' is not absolute",
            input_file_path.display()
        );
    }
    if !input_file_path.exists() {
        panic!("Input file '{}' does not exist", input_file_path.display());
    }
    if !input_file_path.is_file() {
        panic!(
            "Input file path '{}' does not represent a regular file",
            input_file_path.display()
        );
    }
}

fn check_output_directory_path(output_directory_path: &Path) {
    if !output_directory_path.is_absolute() {
        panic!(
            "Output directory path '{}' is not absolute",
            output_directory_path.display()
        );
    }
    if !output_directory_path.exists() {
        panic!(
            "Output directory '{}' does not exist",
            output_directory_path.display()
        );
    }
    if !output_directory_path.is_dir() {
        panic!(
            "Output directory path '{}' does not represent a directory",
            output_directory_path.display()
        );
    }
}
