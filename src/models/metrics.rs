use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LiveMetrics {
    pub cpu: u8,
    pub memory: u8,
    pub disk: u8,
    pub network: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct FeedEvent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: LiveMetrics,
}

impl FeedEvent {
    pub fn stats_update(data: LiveMetrics) -> Self {
        Self {
            kind: "stats_update",
            data,
        }
    }
}
