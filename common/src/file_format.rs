use std::path::Path;

pub const TGA_EXTENSION: &str = "tga";

#[derive(Debug, thiserror::Error)]
pub enum FileExtensionError {
    #[error("Failed to get file extension")]
    MissingFileExtension,
    #[error("Unsupported file extension for file: {0}")]
    UnsupportedFileExtension(String),
}

pub type FileFormatResult<T> = Result<T, FileExtensionError>;

pub fn get_file_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|os_str| os_str.to_str())
}

/// Suffix match on the name, case-sensitive: `image.TGA` is rejected and a bare
/// `.tga` is accepted.
pub fn has_tga_extension(filename: &str) -> bool {
    filename
        .strip_suffix(TGA_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}

pub fn require_tga_extension(filename: &str) -> FileFormatResult<()> {
    if has_tga_extension(filename) {
        return Ok(());
    }

    match get_file_extension(filename) {
        None => Err(FileExtensionError::MissingFileExtension),
        Some(_) => Err(FileExtensionError::UnsupportedFileExtension(
            filename.to_string(),
        )),
    }
}
