use std::path::{Path, PathBuf};

use crate::error::{Error, IoError};

use tokio::{fs::File, io::AsyncReadExt};

#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path_buf = path.as_ref().to_path_buf();

        match File::open(&path_buf).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path_buf;
                Ok(())
            }
            Err(error) => Err(IoError::File {
                path: path_buf,
                kind: error.kind(),
            }
            .into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<(), Error> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_string(buffer)
                .await
                .map(|_| ())
                .map_err(|error| {
                    IoError::File {
                        path: self.path.clone(),
                        kind: error.kind(),
                    }
                    .into()
                }),

            None => Err(IoError::Reader(std::io::ErrorKind::InvalidInput).into()),
        }
    }
}

/// Reads the whole file at `path`.
pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let mut reader = FileReader::new();
    let mut buffer = String::new();

    reader.open(path).await?;
    reader.read_into(&mut buffer).await?;

    tracing::debug!(path = %reader.path().display(), bytes = buffer.len(), "read file");
    Ok(buffer)
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub async fn write_file<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let to_error = |error: std::io::Error| IoError::File {
        path: path.to_path_buf(),
        kind: error.kind(),
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
    }
    tokio::fs::write(path, contents).await.map_err(to_error)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{Error, IoError},
        read::{read_file, write_file, FileReader},
    };

    #[tokio::test]
    async fn test_reader_unopened() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        let result = reader.read_into(&mut buffer).await;
        assert!(matches!(
            result,
            Err(Error::Io(IoError::Reader(std::io::ErrorKind::InvalidInput)))
        ));
    }

    #[tokio::test]
    async fn test_reader_missing_file() {
        let result = read_file("tests/data/missing.csv").await;
        match result {
            Err(Error::Io(error)) => assert_eq!(error.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("table.csv");

        write_file(&path, b"sid\n1\n").await.unwrap();
        assert_eq!(read_file(&path).await.unwrap(), "sid\n1\n");
    }
}
