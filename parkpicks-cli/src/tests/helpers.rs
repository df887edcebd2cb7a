//! Test helpers for writing request files and feed snapshots.

use camino::{Utf8Path, Utf8PathBuf};
use parkpicks_core::{Park, Ride};
use parkpicks_core::test_support::MemoryRideSource;
use tempfile::TempDir;

use crate::recommend::{RecommendConfig, RideSourceBuilder};

pub(super) const FAMILY_REQUEST: &str = r#"{
  "park": "Disneyland",
  "profile": {
    "current_land": "Fantasyland",
    "prefer_indoor": true,
    "with_kids": true,
    "hour": 14
  }
}"#;

pub(super) const DISNEYLAND_SNAPSHOT: &str = r#"{
  "lands": [
    {
      "id": 1,
      "name": "Fantasyland",
      "rides": [
        {"id": 10, "name": "Peter Pan's Flight", "is_open": true, "wait_time": 20},
        {"id": 11, "name": "it's a small world", "is_open": true, "wait_time": 10},
        {"id": 12, "name": "Dumbo the Flying Elephant", "is_open": true, "wait_time": 15}
      ]
    },
    {
      "id": 2,
      "name": "Tomorrowland",
      "rides": [
        {"id": 20, "name": "Space Mountain", "is_open": false, "wait_time": 0}
      ]
    }
  ],
  "rides": []
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write file");
}

pub(super) fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}

/// Serves a fixed Disneyland ride list regardless of configuration.
pub(super) struct MemoryBuilder {
    pub(super) rides: Vec<Ride>,
}

impl RideSourceBuilder for MemoryBuilder {
    fn build(&self, _config: &RecommendConfig) -> Box<dyn parkpicks_core::RideSource> {
        Box::new(MemoryRideSource::with_rides(
            Park::Disneyland,
            self.rides.clone(),
        ))
    }
}
