use serde::{Deserialize, Serialize};

/// Search response from the volumes API.
///
/// The catalog omits `items` entirely when nothing matched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<VolumeItem>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeItem {
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub image_links: Option<ImageLinks>,
    pub description: Option<String>,
    pub preview_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl VolumesResponse {
    pub fn into_items(self) -> Vec<VolumeItem> {
        self.items.unwrap_or_default()
    }
}
