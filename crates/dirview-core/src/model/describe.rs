/// Display formatting for the Type, Size and Modified columns.
///
/// All internal values stay raw (`u64` bytes, `SystemTime`); strings are
/// only produced here, at the display boundary.
use super::file_node::EntryInfo;
use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Files below this many bytes are shown in plain bytes.
pub const MB: u64 = 1024 * 1024;

/// Fixed timestamp layout for the Modified column.
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Human-readable type label for an entry.
///
/// Known extensions are matched case-insensitively. The fallback label
/// echoes the extension exactly as typed, so `notes.MD` reads ".MD File".
pub fn type_description(entry: &EntryInfo) -> String {
    if entry.is_dir {
        return "Directory".to_string();
    }

    let ext = entry.extension();
    let lower = ext.to_ascii_lowercase();
    match lower.as_str() {
        "txt" => "Text File".to_string(),
        "jpg" | "jpeg" => "JPEG Image".to_string(),
        "png" => "PNG Image".to_string(),
        _ => format!(".{ext} File"),
    }
}

/// Size label for an entry. Directories have no size label.
pub fn size_description(entry: &EntryInfo) -> String {
    if entry.is_dir {
        return String::new();
    }
    format_size(entry.size)
}

/// Format a byte count: plain bytes below 1 MiB, otherwise MiB with two decimals.
///
/// There is deliberately no KB or GB tier.
pub fn format_size(bytes: u64) -> String {
    if bytes < MB {
        format!("{bytes} B")
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

/// Format a modification time as `YYYY-MM-DD HH:MM:SS` in local time.
/// Unknown timestamps render as an empty string.
pub fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(t) => DateTime::<Local>::from(t).format(MODIFIED_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn file(name: &str, size: u64) -> EntryInfo {
        EntryInfo {
            path: PathBuf::from(name),
            name: CompactString::new(name),
            is_dir: false,
            size,
            modified: None,
        }
    }

    fn dir(name: &str) -> EntryInfo {
        EntryInfo {
            is_dir: true,
            size: 4096,
            ..file(name, 0)
        }
    }

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1_048_575), "1048575 B");
    }

    #[test]
    fn test_format_size_mb() {
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(2_621_440), "2.50 MB");
        assert_eq!(format_size(1_073_741_824), "1024.00 MB");
    }

    #[test]
    fn test_size_description_directory_is_blank() {
        assert_eq!(size_description(&dir("docs")), "");
        assert_eq!(size_description(&file("a.bin", 12)), "12 B");
    }

    #[test]
    fn test_type_known_extensions() {
        assert_eq!(type_description(&file("a.txt", 0)), "Text File");
        assert_eq!(type_description(&file("a.JPG", 0)), "JPEG Image");
        assert_eq!(type_description(&file("a.jpeg", 0)), "JPEG Image");
        assert_eq!(type_description(&file("a.Png", 0)), "PNG Image");
        assert_eq!(type_description(&dir("docs")), "Directory");
    }

    #[test]
    fn test_type_fallback_keeps_case() {
        assert_eq!(type_description(&file("readme.md", 0)), ".md File");
        assert_eq!(type_description(&file("README.MD", 0)), ".MD File");
        assert_eq!(type_description(&file("Makefile", 0)), ". File");
    }

    #[test]
    fn test_format_modified() {
        let local = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        let t: SystemTime = local.into();
        assert_eq!(format_modified(Some(t)), "2024-03-09 07:05:01");
        assert_eq!(format_modified(None), "");
    }
}
