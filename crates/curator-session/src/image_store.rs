//! Copies item images into the images directory under a stable name.

use std::path::{Path, PathBuf};

use curator_core::constants::IMAGE_URL_PREFIX;
use curator_core::errors::CuratorResult;

/// `<title>_<artist>.jpg` with spaces replaced by underscores.
pub fn image_file_name(title: &str, artist: &str) -> String {
    format!("{}_{}.jpg", title.replace(' ', "_"), artist.replace(' ', "_"))
}

/// Public location of a stored image file.
pub fn image_url(file_name: &str) -> String {
    format!("{IMAGE_URL_PREFIX}/{file_name}")
}

/// Copy `source` into `images_dir`, overwriting any file of the same name.
/// Returns the destination path.
pub fn store_image(
    images_dir: &Path,
    source: &Path,
    title: &str,
    artist: &str,
) -> CuratorResult<PathBuf> {
    std::fs::create_dir_all(images_dir)?;
    let destination = images_dir.join(image_file_name(title, artist));
    std::fs::copy(source, &destination)?;
    Ok(destination)
}
