/*! Font metric files are found by a [`FontSource`], which turns a file id such as `cmr10` into
    the bytes of the corresponding `.tfm` file.

    [`DirectoryFontSource`] reads from a font directory on disk; [`VirtualFontSource`] serves
    files kept in memory and never touches the local file system.
*/

use std::path::{Path, PathBuf};
use path_dedot::ParseDot;
use crate::utils::HMap;

/// Resolves font file ids to file contents.
pub trait FontSource {
    /// A human-readable location for `file_id`, used in messages.
    fn locate(&self,file_id:&str) -> String;
    /// Reads the whole file in one blocking call.
    fn read(&mut self,file_id:&str) -> std::io::Result<Vec<u8>>;
}

/// Reads `<area>/<file_id>.tfm`.
#[derive(Clone,Debug)]
pub struct DirectoryFontSource {
    area:PathBuf
}
impl DirectoryFontSource {
    pub fn new<P:AsRef<Path>>(area:P) -> Self {
        DirectoryFontSource { area:area.as_ref().to_path_buf() }
    }
    pub fn area(&self) -> &Path { &self.area }

    pub fn path(&self,file_id:&str) -> PathBuf {
        let path = if file_id.ends_with(".tfm") {
            self.area.join(file_id)
        } else {
            self.area.join(format!("{}.tfm",file_id))
        };
        match path.parse_dot() {
            Ok(p) => p.to_path_buf(),
            Err(_) => path
        }
    }
}
impl FontSource for DirectoryFontSource {
    fn locate(&self, file_id: &str) -> String {
        self.path(file_id).display().to_string()
    }
    fn read(&mut self, file_id: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.path(file_id))
    }
}

/// Serves font files from memory.
#[derive(Clone,Debug,Default)]
pub struct VirtualFontSource {
    files:HMap<String,Vec<u8>>
}
impl VirtualFontSource {
    pub fn new() -> Self { Self::default() }
    pub fn insert<S:Into<String>>(&mut self,file_id:S,bytes:Vec<u8>) {
        self.files.insert(file_id.into(),bytes);
    }
    pub fn with<S:Into<String>>(mut self,file_id:S,bytes:Vec<u8>) -> Self {
        self.insert(file_id,bytes);
        self
    }
}
impl FontSource for VirtualFontSource {
    fn locate(&self, file_id: &str) -> String {
        format!("<memory>/{}",file_id)
    }
    fn read(&mut self, file_id: &str) -> std::io::Result<Vec<u8>> {
        match self.files.get(file_id) {
            Some(b) => Ok(b.clone()),
            None => Err(std::io::Error::new(std::io::ErrorKind::NotFound,
                format!("no virtual font file {}",file_id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_paths() {
        let src = DirectoryFontSource::new("/fonts/tfm/../metrics");
        assert_eq!(src.path("cmr10"),PathBuf::from("/fonts/metrics/cmr10.tfm"));
        assert_eq!(src.path("cmr10.tfm"),PathBuf::from("/fonts/metrics/cmr10.tfm"));
        assert!(src.locate("cmbx10").ends_with("cmbx10.tfm"));
    }

    #[test]
    fn missing_files() {
        let mut src = DirectoryFontSource::new("/definitely/not/a/font/area");
        assert_eq!(src.read("cmr10").unwrap_err().kind(),std::io::ErrorKind::NotFound);
        let mut v = VirtualFontSource::new().with("a",vec![1,2,3]);
        assert_eq!(v.read("a").unwrap(),vec![1,2,3]);
        assert_eq!(v.read("b").unwrap_err().kind(),std::io::ErrorKind::NotFound);
    }
}
