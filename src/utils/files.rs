use super::FetchError;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Name of the generated page inside the destination directory
pub const INDEX_FILE: &str = "index.html";

/// Create the destination directory.
///
/// Only the last component is created, and a directory that already exists is
/// an error just like a permission problem.
pub fn create_destination(dir: &Path) -> Result<(), FetchError> {
    fs::create_dir(dir).map_err(|e| FetchError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    tracing::info!("Created directory: {}", dir.display());
    Ok(())
}

/// Local file name for the image at position `index`
pub fn image_file_name(index: usize) -> String {
    format!("img{}.jpg", index)
}

/// `index.html` writer kept open for a whole download run.
///
/// Each entry is flushed as soon as it is added, so the page on disk always
/// lists exactly the images saved so far. Dropping the writer closes the file.
pub struct IndexWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl IndexWriter {
    pub fn open(dir: &Path) -> Result<Self, FetchError> {
        Self::open_file(dir.join(INDEX_FILE))
    }

    pub(crate) fn open_file(path: PathBuf) -> Result<Self, FetchError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| FetchError::Write {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self {
            path,
            out: BufWriter::new(file),
        })
    }

    pub fn add_image(&mut self, file_name: &str) -> Result<(), FetchError> {
        writeln!(self.out, "<img src=\"{}\" />", file_name)
            .and_then(|_| self.out.flush())
            .map_err(|e| FetchError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_destination_refuses_existing_directory() {
        let root = TempDir::new().unwrap();
        let dest = root.path().join("out");

        create_destination(&dest).unwrap();
        assert!(dest.is_dir());

        let err = create_destination(&dest).unwrap_err();
        assert!(matches!(err, FetchError::CreateDir { .. }));
    }

    #[test]
    fn create_destination_does_not_create_parents() {
        let root = TempDir::new().unwrap();
        let dest = root.path().join("missing").join("out");
        assert!(create_destination(&dest).is_err());
        assert!(!root.path().join("missing").exists());
    }

    #[test]
    fn index_lines_are_on_disk_before_drop() {
        let root = TempDir::new().unwrap();
        let mut index = IndexWriter::open(root.path()).unwrap();
        index.add_image(&image_file_name(0)).unwrap();
        index.add_image(&image_file_name(1)).unwrap();

        let page = fs::read_to_string(root.path().join(INDEX_FILE)).unwrap();
        assert_eq!(page, "<img src=\"img0.jpg\" />\n<img src=\"img1.jpg\" />\n");
    }
}
