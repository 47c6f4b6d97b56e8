use serde::{Deserialize, Serialize};

/// Metadata row for one item of the collection.
///
/// `id` is the externally visible identifier. The item's internal index is
/// its row position in the catalog and is never exposed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub year: i32,
    #[serde(alias = "imagepath")]
    pub image_path: String,
}

/// An item about to enter the catalog; the catalog assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub artist: String,
    pub year: i32,
    #[serde(alias = "imagepath")]
    pub image_path: String,
}

impl NewItem {
    /// Attach a catalog-assigned id.
    pub fn with_id(self, id: i64) -> ItemRecord {
        ItemRecord {
            id,
            title: self.title,
            artist: self.artist,
            year: self.year,
            image_path: self.image_path,
        }
    }
}
