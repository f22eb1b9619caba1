mod pages;
mod api;
mod process;
mod ws;

pub use pages::{PAGES, render_page};
pub use api::{
    get_dashboard_stats, get_downloaders_status, get_pt_sites, get_hot_recommendations,
    get_download_queue, start_download, scan_directory,
};
pub use process::{start_processing, get_process_status};
pub use ws::live_feed;
