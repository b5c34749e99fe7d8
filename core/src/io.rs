use std::{
    ffi::OsString,
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use crate::{
    config::ConfigInput,
    error::{ConvertError, Result},
    job::JobDocument,
};

const OUTPUT_PREFIX: &str = "output-";

/// Reads and decodes an input document.
pub fn read_input(path: impl AsRef<Path>) -> Result<ConfigInput> {
    let path = path.as_ref();
    log::info!("Opening file {}", path.display());

    let file = File::open(path).map_err(|e| ConvertError::input_file(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| ConvertError::input_file(path, e))
}

/// Where the job document for `input` goes: the input's file name prefixed with
/// `output-`, next to the input.
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();

    let mut file_name = OsString::from(OUTPUT_PREFIX);
    if let Some(name) = input.file_name() {
        file_name.push(name);
    }
    input.with_file_name(file_name)
}

/// Writes `document` to `path`, replacing any existing file.
///
/// The document is fully serialized before the file is touched.
pub fn write_output(path: impl AsRef<Path>, document: &JobDocument) -> Result<()> {
    let path = path.as_ref();
    let output_error = |source: std::io::Error| ConvertError::OutputFile {
        path: path.to_owned(),
        source,
    };

    let bytes = document
        .to_json_pretty()
        .map_err(|e| output_error(e.into()))?;

    log::info!("Writing to file {}", path.display());
    File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .and_then(|mut file| file.write_all(&bytes))
        .map_err(output_error)
}
