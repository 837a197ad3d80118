use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

pub(super) enum OpenError {
    FailedToOpen,
    FailedToRead,
    #[cfg(not(feature = "xz"))]
    UnsupportedCompression,
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen => write!(f, "Failed to open file."),
            Self::FailedToRead => write!(f, "Failed to read formula."),
            #[cfg(not(feature = "xz"))]
            Self::UnsupportedCompression => {
                write!(f, "Compressed files require the 'xz' feature.")
            }
        }
    }
}

/// Opens the file at `path` for buffered reading, decompressing files with an `xz` extension.
pub(super) fn open(path: &Path) -> Result<Box<dyn BufRead>, OpenError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(OpenError::FailedToOpen),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => Ok(Box::new(BufReader::new(
            xz2::read::XzDecoder::new(file),
        ))),

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => Err(OpenError::UnsupportedCompression),

        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// Reads the formula, from `path` if given and otherwise from all of standard input.
///
/// Invalid UTF-8 is replaced, and so is left to be rejected when the text is checked as a formula.
pub(super) fn read_formula(path: Option<&Path>) -> Result<String, OpenError> {
    let mut bytes = Vec::default();

    let result = match path {
        Some(path) => open(path)?.read_to_end(&mut bytes),
        None => std::io::stdin().read_to_end(&mut bytes),
    };

    match result {
        Ok(_) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(_) => Err(OpenError::FailedToRead),
    }
}
