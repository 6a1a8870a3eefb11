/// Icon lookup for the Name column's decoration role.
///
/// The model only asks "which icon for this entry?"; how an [`Icon`] is
/// drawn is up to the frontend.
use crate::model::EntryInfo;

/// Icon kinds a frontend is expected to know how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Folder,
    Text,
    Image,
    File,
}

/// Maps a metadata snapshot to an icon.
pub trait IconProvider {
    fn icon(&self, entry: &EntryInfo) -> Icon;
}

/// Default provider keyed on directory flag and lowercased extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtensionIcons;

impl IconProvider for ExtensionIcons {
    fn icon(&self, entry: &EntryInfo) -> Icon {
        if entry.is_dir {
            return Icon::Folder;
        }
        match entry.extension().to_ascii_lowercase().as_str() {
            "txt" | "md" | "log" | "csv" | "json" | "toml" | "yaml" | "yml" | "rs" => Icon::Text,
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" | "webp" | "ico" => Icon::Image,
            _ => Icon::File,
        }
    }
}
