use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Streams the file through a `BufReader`
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	BufReader::new(File::open(filename)?).lines().collect()
}

/// Builds an output path from a folder and a complete file name.
///
/// The file name is joined as-is, dots included.
///
/// Example:
/// `out` + `"corpus.v1.txt"` → `out/corpus.v1.txt`
pub(crate) fn build_output_path<P: AsRef<Path>>(folder: P, file_name: &str) -> PathBuf {
	folder.as_ref().join(file_name)
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder<P: AsRef<Path>>(input: P) -> PathBuf {
	let input = input.as_ref();
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Creates `folder` (and its parents) if it does not exist yet.
///
/// # Errors
/// Fails if the path exists but is not a directory.
pub(crate) fn ensure_folder<P: AsRef<Path>>(folder: P) -> io::Result<()> {
	let folder = folder.as_ref();
	if folder.is_dir() {
		return Ok(());
	}
	if folder.exists() {
		return Err(io::Error::new(
			io::ErrorKind::InvalidInput,
			format!("Expected a directory, got: {}", folder.display()),
		));
	}
	fs::create_dir_all(folder)
}
