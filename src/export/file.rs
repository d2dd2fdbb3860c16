//! File saving functionality for exported images.

use super::types::ExportError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `extension` - File extension (e.g., "jpg")
///
/// # Returns
/// Generated filename with extension
pub fn generate_filename(template: &str, extension: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, extension)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// # Arguments
/// * `directory` - Path to the directory
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve ~ and relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save encoded image data to a file.
///
/// # Arguments
/// * `image_data` - Encoded image bytes
/// * `directory` - Directory to write into (must exist)
/// * `filename` - File name including extension
///
/// # Returns
/// Path to the saved file
pub fn save_image(
    image_data: &[u8],
    directory: &Path,
    filename: &str,
) -> Result<PathBuf, ExportError> {
    let file_path = directory.join(filename);

    log::info!(
        "Saving image to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    // Write file
    fs::write(&file_path, image_data)?;

    // Verify the write
    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // Set permissions to user read/write only (security)
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generated_filename_keeps_prefix_and_extension() {
        let filename = generate_filename("sketch_%Y%m%d", "jpg");
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".jpg"));
        // Check that it contains a valid date (4 digits for year)
        assert!(filename.contains("202")); // Assuming we're in the 2020s
    }

    #[test]
    fn expand_tilde_resolves_home_prefix() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn save_image_writes_into_the_directory() {
        let temp = TempDir::new().unwrap();
        let path = save_image(b"not really an image", temp.path(), "out.jpg").unwrap();
        assert_eq!(path, temp.path().join("out.jpg"));
        assert_eq!(fs::read(&path).unwrap(), b"not really an image");
    }

    #[test]
    fn ensure_directory_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b");
        let dir = ensure_directory_exists(&nested).unwrap();
        assert!(dir.is_dir());
    }
}
