use serde::{Deserialize, Serialize};

fn default_icon_size() -> u32 {
    8
}

fn default_frame_duration_ms() -> u64 {
    200
}

/// Icon as stored on disk:
/// {"name":"heart","frame_duration_ms":300,"frames":[[[255,0,0], ...], ...]}
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct IconDefinition {
    pub name: String,
    #[serde(default = "default_icon_size")]
    pub width: u32,
    #[serde(default = "default_icon_size")]
    pub height: u32,
    #[serde(default = "default_frame_duration_ms")]
    pub frame_duration_ms: u64,
    /// Row-major pixels per frame
    pub frames: Vec<Vec<[u8; 3]>>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct IconFile {
    pub icons: Vec<IconDefinition>,
}
