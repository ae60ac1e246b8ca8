//! Writing synthetic samples as raw-sample JSON files.

use std::path::{Path, PathBuf};

use tracing::info;

use bellphase_est::{EstError, EstResult};

use crate::source::SyntheticSource;

/// Sample every phase and write one `phi_{φ:.3}.json` file per point.
///
/// The directory is created if missing. Returns the written paths in
/// phase order. File names zero-pad to three decimals, so lexicographic
/// order matches phase order for the usual 0..2π sweeps and the
/// estimator's sorted directory load replays the run order.
pub fn write_sample_files(
    dir: &Path,
    source: &SyntheticSource,
    phis: &[f64],
) -> EstResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .map_err(|e| EstError::Io(format!("failed to create {}: {e}", dir.display())))?;

    let samples = source.run(phis);
    let mut paths = Vec::with_capacity(samples.len());
    for sample in &samples {
        let path = dir.join(format!("phi_{:.3}.json", sample.phi));
        std::fs::write(&path, sample.to_json()?)
            .map_err(|e| EstError::Io(format!("failed to write {}: {e}", path.display())))?;
        info!("saved {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}
