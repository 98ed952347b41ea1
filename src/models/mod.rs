use serde::{Deserialize, Serialize};

mod volume;

pub use volume::{ImageLinks, VolumeInfo, VolumeItem, VolumesResponse};

// ============================================================================
// Book display model
// ============================================================================

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const PLACEHOLDER_COVER: &str = "https://via.placeholder.com/120x180?text=No+Cover";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_LINK: &str = "#";

/// A catalog entry as the page shows it, and as favorites are stored.
///
/// Built from a [`VolumeItem`] with every field filled in, so rendering never
/// has to deal with a missing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub cover: String,
    pub description: String,
    pub link: String,
}

/// The catalog sends empty strings and empty arrays as often as it omits
/// fields; both count as missing.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl From<VolumeInfo> for Book {
    fn from(info: VolumeInfo) -> Self {
        let author = info
            .authors
            .map(|authors| authors.join(", "))
            .filter(|joined| !joined.is_empty())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        Book {
            title: present(info.title).unwrap_or_else(|| UNTITLED.to_string()),
            author,
            cover: present(info.image_links.and_then(|links| links.thumbnail))
                .unwrap_or_else(|| PLACEHOLDER_COVER.to_string()),
            description: present(info.description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            link: present(info.preview_link).unwrap_or_else(|| NO_LINK.to_string()),
        }
    }
}

impl From<VolumeItem> for Book {
    fn from(item: VolumeItem) -> Self {
        item.volume_info.unwrap_or_default().into()
    }
}
