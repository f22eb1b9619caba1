use serde::{Serialize, Serializer};
use crate::models::{
    DashboardStats, DownloaderStatus, PtSite, QueueEntry, Recommendation, ScannedFile,
};

/// Entries keyed by display name, serialized as a JSON object in insertion order.
#[derive(Debug, Clone)]
pub struct Named<T>(Vec<(&'static str, T)>);

impl<T> Named<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T: Serialize> Serialize for Named<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, value)| (*key, value)))
    }
}

// (file name, sub-directory, size) for the directory scan listing
const SCAN_FILES: [(&str, &str, &str); 5] = [
    ("奥本海默.2023.2160p.BluRay.REMUX.mkv", "movies", "45.2 GB"),
    ("最后生还者.S01E01.1080p.WEB-DL.mkv", "tv", "2.1 GB"),
    ("Taylor Swift - 1989 (2014) [FLAC].zip", "music", "350 MB"),
    ("阿凡达：水之道.2022.1080p.BluRay.mkv", "movies", "15.8 GB"),
    ("权力的游戏.S08E06.1080p.BluRay.mkv", "tv", "3.2 GB"),
];

/// Demo data served by the dashboard endpoints. Nothing here changes at runtime.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub downloaders: Named<DownloaderStatus>,
    pub pt_sites: Named<PtSite>,
    pub hot_recommendations: Vec<Recommendation>,
    pub download_queue: Vec<QueueEntry>,
    pub dashboard_stats: DashboardStats,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            downloaders: Named(vec![
                ("qBittorrent", DownloaderStatus { status: "online", speed: "65%", active_torrents: 12 }),
                ("Transmission", DownloaderStatus { status: "offline", speed: "0%", active_torrents: 0 }),
                ("Aria2", DownloaderStatus { status: "online", speed: "30%", active_torrents: 5 }),
            ]),
            pt_sites: Named(vec![
                ("M-Team", PtSite {
                    status: "connected",
                    free_torrents: vec!["奥本海默 4K REMUX", "最后生还者 S01"],
                }),
                ("HDChina", PtSite {
                    status: "connected",
                    free_torrents: vec!["Taylor Swift - 1989 FLAC"],
                }),
                ("PTHome", PtSite {
                    status: "connected",
                    free_torrents: vec!["经典电影合集"],
                }),
                ("TTG", PtSite {
                    status: "disconnected",
                    free_torrents: Vec::new(),
                }),
            ]),
            hot_recommendations: vec![
                Recommendation {
                    id: 1,
                    title: "奥本海默",
                    year: 2023,
                    kind: "movie",
                    genre: "剧情/历史",
                    quality: "4K REMUX",
                    poster: "film",
                    download_url: "magnet:?xt=urn:btih:example1",
                },
                Recommendation {
                    id: 2,
                    title: "最后生还者 S01",
                    year: 2023,
                    kind: "tv",
                    genre: "剧情/科幻",
                    quality: "1080p",
                    poster: "tv",
                    download_url: "magnet:?xt=urn:btih:example2",
                },
                Recommendation {
                    id: 3,
                    title: "Taylor Swift - 1989",
                    year: 2014,
                    kind: "music",
                    genre: "流行音乐",
                    quality: "FLAC",
                    poster: "music",
                    download_url: "magnet:?xt=urn:btih:example3",
                },
            ],
            download_queue: vec![
                QueueEntry {
                    id: "task_1",
                    name: "奥本海默.2023.2160p",
                    progress: 85,
                    status: "downloading",
                    speed: "12.5 MB/s",
                    size: "45.2 GB",
                },
                QueueEntry {
                    id: "task_2",
                    name: "最后生还者.S01E01",
                    progress: 45,
                    status: "downloading",
                    speed: "8.3 MB/s",
                    size: "2.1 GB",
                },
                QueueEntry {
                    id: "task_3",
                    name: "Taylor Swift - 1989",
                    progress: 20,
                    status: "downloading",
                    speed: "5.1 MB/s",
                    size: "350 MB",
                },
            ],
            dashboard_stats: DashboardStats {
                media_files: 1284,
                active_downloads: 86,
                storage_used: "24.7TB",
                active_plugins: 12,
                cpu_usage: 24,
                memory_usage: 68,
                disk_usage: 82,
                network_speed: "156M/s",
            },
        }
    }

    /// Lists the demo files as if they had been found under `path`.
    pub fn scan(&self, path: &str) -> Vec<ScannedFile> {
        SCAN_FILES
            .iter()
            .map(|(name, subdir, size)| ScannedFile {
                name: name.to_string(),
                path: format!("{}/{}", path, subdir),
                size: size.to_string(),
            })
            .collect()
    }

    /// Task id handed back when a download is "started".
    pub fn download_ack(&self) -> String {
        format!("task_{}", self.downloaders.len())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_prefixes_every_path() {
        let catalog = Catalog::new();
        for root in ["X", "/mnt/media", ""] {
            let files = catalog.scan(root);
            assert_eq!(files.len(), 5);
            let prefix = format!("{}/", root);
            assert!(files.iter().all(|f| f.path.starts_with(&prefix)));
        }

        let files = catalog.scan("/data");
        assert_eq!(files[0].path, "/data/movies");
        assert_eq!(files[2].path, "/data/music");
        assert_eq!(files[4].size, "3.2 GB");
    }

    #[test]
    fn test_named_keeps_insertion_order() {
        let catalog = Catalog::new();
        let json = serde_json::to_string(&catalog.downloaders).unwrap();

        let qb = json.find("qBittorrent").unwrap();
        let tr = json.find("Transmission").unwrap();
        let aria = json.find("Aria2").unwrap();
        assert!(qb < tr && tr < aria);
    }

    #[test]
    fn test_downloader_entries() {
        let catalog = Catalog::new();
        let json = serde_json::to_value(&catalog.downloaders).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 3);
        assert_eq!(json["Transmission"]["status"], "offline");
        assert_eq!(json["Transmission"]["active_torrents"], 0);
        assert!(json.get("Deluge").is_none());
    }

    #[test]
    fn test_disconnected_site_has_no_torrents() {
        let catalog = Catalog::new();
        let json = serde_json::to_value(&catalog.pt_sites).unwrap();
        assert_eq!(json["TTG"]["status"], "disconnected");
        assert_eq!(json["TTG"]["free_torrents"], serde_json::json!([]));
        assert_eq!(json["M-Team"]["free_torrents"][1], "最后生还者 S01");
    }

    #[test]
    fn test_download_ack_counts_downloaders() {
        assert_eq!(Catalog::new().download_ack(), "task_3");
    }
}
