use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorFormat {
    Cur,
    Ani,
}

impl CursorFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "cur" => Some(CursorFormat::Cur),
            "ani" => Some(CursorFormat::Ani),
            _ => None,
        }
    }

    /// Identify a Windows cursor by its leading magic bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        if &data[0..4] == b"\x00\x00\x02\x00" {
            Some(CursorFormat::Cur)
        } else if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"ACON" {
            Some(CursorFormat::Ani)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            CursorFormat::Cur => "cur",
            CursorFormat::Ani => "ani",
        }
    }
}

/// A `.cur` or `.ani` file found inside a theme directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorFile {
    pub path: PathBuf,
    pub format: CursorFormat,
}

impl CursorFile {
    pub fn new(path: PathBuf) -> Option<Self> {
        let format = CursorFormat::from_extension(&path)?;
        Some(Self { path, format })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Read the header and report what the content claims to be.
    pub fn sniff(&self) -> std::io::Result<Option<CursorFormat>> {
        let mut header = Vec::with_capacity(12);
        File::open(&self.path)?.take(12).read_to_end(&mut header)?;
        Ok(CursorFormat::detect(&header))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_format_detection() {
        let cur_data = vec![0x00, 0x00, 0x02, 0x00, 0x01, 0x00];
        assert_eq!(CursorFormat::detect(&cur_data), Some(CursorFormat::Cur));

        let ani_data = b"RIFF\x00\x00\x00\x00ACON";
        assert_eq!(CursorFormat::detect(ani_data), Some(CursorFormat::Ani));

        let invalid = vec![0xFF, 0xFF, 0xFF, 0xFF];
        assert_eq!(CursorFormat::detect(&invalid), None);
        assert_eq!(CursorFormat::detect(b"RI"), None);
    }

    #[test]
    fn test_format_from_extension_ignores_case() {
        assert_eq!(
            CursorFormat::from_extension(Path::new("Normal.CUR")),
            Some(CursorFormat::Cur)
        );
        assert_eq!(
            CursorFormat::from_extension(Path::new("busy.Ani")),
            Some(CursorFormat::Ani)
        );
        assert_eq!(CursorFormat::from_extension(Path::new("install.inf")), None);
        assert_eq!(CursorFormat::from_extension(Path::new("README")), None);
    }

    #[test]
    fn test_sniff_reads_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wait.ani");
        std::fs::write(&path, b"RIFF\x10\x00\x00\x00ACONanih").unwrap();

        let file = CursorFile::new(path).unwrap();
        assert_eq!(file.format, CursorFormat::Ani);
        assert_eq!(file.file_name(), "wait.ani");
        assert_eq!(file.sniff().unwrap(), Some(CursorFormat::Ani));
    }
}
