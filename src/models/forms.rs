use serde::{Deserialize, Deserializer, de::Error};
use super::{WorkflowConfig, WorkflowSteps};

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub magnet_url: String,
    #[serde(default = "default_downloader")]
    pub downloader: String,
}

#[derive(Debug, Deserialize)]
pub struct ScanForm {
    pub path: String,
}

#[derive(Debug, Deserialize)]
pub struct ProcessForm {
    pub directory: String,
    #[serde(default = "enabled", deserialize_with = "deserialize_flag")]
    pub enable_scan: bool,
    #[serde(default = "enabled", deserialize_with = "deserialize_flag")]
    pub enable_recognize: bool,
    #[serde(default = "enabled", deserialize_with = "deserialize_flag")]
    pub enable_rename: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub enable_metadata: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub enable_move: bool,
}

impl ProcessForm {
    pub fn into_config(self) -> WorkflowConfig {
        WorkflowConfig {
            directory: self.directory,
            steps: WorkflowSteps {
                scan: self.enable_scan,
                recognize: self.enable_recognize,
                rename: self.enable_rename,
                metadata: self.enable_metadata,
                move_files: self.enable_move,
            },
        }
    }
}

fn default_downloader() -> String {
    "qBittorrent".to_string()
}

fn enabled() -> bool {
    true
}

// Checkbox-friendly boolean parsing: browsers submit "on", scripts tend to send "1" or "true"
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_flag(&value).ok_or_else(|| {
        D::Error::custom(format!(
            "Invalid boolean value '{}', expected one of true/false, 1/0, on/off, yes/no",
            value
        ))
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, serde_urlencoded::de::Error> {
        serde_urlencoded::from_str(body)
    }

    #[test]
    fn test_process_form_defaults() {
        let form: ProcessForm = decode("directory=%2Fmedia%2Fincoming").unwrap();
        assert_eq!(form.directory, "/media/incoming");
        assert!(form.enable_scan);
        assert!(form.enable_recognize);
        assert!(form.enable_rename);
        assert!(!form.enable_metadata);
        assert!(!form.enable_move);
    }

    #[test]
    fn test_process_form_flag_spellings() {
        let form: ProcessForm =
            decode("directory=d&enable_scan=off&enable_recognize=0&enable_metadata=on&enable_move=YES")
                .unwrap();
        assert!(!form.enable_scan);
        assert!(!form.enable_recognize);
        assert!(form.enable_rename);
        assert!(form.enable_metadata);
        assert!(form.enable_move);
    }

    #[test]
    fn test_process_form_rejects_unknown_flag() {
        assert!(decode::<ProcessForm>("directory=d&enable_move=maybe").is_err());
    }

    #[test]
    fn test_download_form_default_downloader() {
        let form: DownloadForm = decode("magnet_url=magnet%3A%3Fxt%3Durn%3Abtih%3Aabc").unwrap();
        assert_eq!(form.magnet_url, "magnet:?xt=urn:btih:abc");
        assert_eq!(form.downloader, "qBittorrent");
    }

    #[test]
    fn test_into_config_maps_every_step() {
        let form: ProcessForm = decode("directory=%2Fdata&enable_move=true").unwrap();
        let config = form.into_config();
        assert_eq!(config.directory, "/data");
        assert!(config.steps.scan && config.steps.recognize && config.steps.rename);
        assert!(!config.steps.metadata);
        assert!(config.steps.move_files);
    }
}
