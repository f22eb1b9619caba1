use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct DownloaderStatus {
    pub status: &'static str,
    pub speed: &'static str,
    pub active_torrents: u32,
}

#[derive(Serialize, Debug, Clone)]
pub struct PtSite {
    pub status: &'static str,
    pub free_torrents: Vec<&'static str>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Recommendation {
    pub id: u32,
    pub title: &'static str,
    pub year: u16,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub genre: &'static str,
    pub quality: &'static str,
    pub poster: &'static str,
    pub download_url: &'static str,
}

#[derive(Serialize, Debug, Clone)]
pub struct QueueEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub progress: u8,
    pub status: &'static str,
    pub speed: &'static str,
    pub size: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub name: String,
    pub path: String,
    pub size: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct DashboardStats {
    pub media_files: u32,
    pub active_downloads: u32,
    pub storage_used: &'static str,
    pub active_plugins: u32,
    pub cpu_usage: u8,
    pub memory_usage: u8,
    pub disk_usage: u8,
    pub network_speed: &'static str,
}
