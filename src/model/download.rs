use serde::Deserialize;

pub const NOT_DOWNLOADED: &str = "No";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DownloadRow {
    #[serde(rename = "songName")]
    pub title: String,
    pub author: String,
    pub link: String,
    #[serde(rename = "hasBeenDownloaded")]
    pub downloaded: String,
}

impl DownloadRow {
    pub fn single(title: String, author: String, link: String) -> Self {
        Self {
            title,
            author,
            link,
            downloaded: NOT_DOWNLOADED.to_string(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.downloaded == NOT_DOWNLOADED
    }
}
