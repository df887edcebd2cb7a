//! A [`RideSource`] backed by feed snapshots on disk.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use parkpicks_core::{Park, Ride, RideSource, RideSourceError};
use parkpicks_fs::{open_optional_in, open_utf8_dir};

use super::FeedPayload;

/// Reads `<feed id>.json` snapshots from a directory.
///
/// Each call re-reads the file, so replacing a snapshot takes effect on the
/// next request. A missing file reports [`RideSourceError::Unavailable`].
///
/// # Examples
/// ```no_run
/// use parkpicks_core::{Park, RideSource};
/// use parkpicks_data::FeedDirectorySource;
///
/// let source = FeedDirectorySource::new("feeds");
/// // Reads feeds/16.json
/// let rides = source.rides(Park::Disneyland)?;
/// # Ok::<(), parkpicks_core::RideSourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FeedDirectorySource {
    dir: Utf8PathBuf,
}

impl FeedDirectorySource {
    /// Serve snapshots stored under `dir`.
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the snapshots.
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// File name of the snapshot for `park`.
    #[must_use]
    pub fn file_name(park: Park) -> String {
        format!("{}.json", park.feed_id())
    }
}

impl RideSource for FeedDirectorySource {
    fn rides(&self, park: Park) -> Result<Vec<Ride>, RideSourceError> {
        let io_error = |source| RideSourceError::Io { park, source };
        let dir = open_utf8_dir(&self.dir).map_err(io_error)?;
        let name = Self::file_name(park);
        let file = open_optional_in(&dir, &name)
            .map_err(io_error)?
            .ok_or(RideSourceError::Unavailable { park })?;
        let rides = FeedPayload::from_reader(park, BufReader::new(file))?.into_rides(park);
        debug!("read {} rides for {park} from {}/{name}", rides.len(), self.dir);
        Ok(rides)
    }
}
