use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use classic_sorts::io::read_integers;
use classic_sorts::Distribution;

/// A directory under the system temp dir that is removed again on drop, also when the test
/// owning it panics.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(prefix: &str) -> Self {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "classic-sort-{prefix}-{}-{stamp}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("failed to create scratch directory");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.path) {
            eprintln!("failed to remove {}: {err}", self.path.display());
        }
    }
}

/// Reads back the dataset `generate::write_suite` wrote below `dir`.
pub fn read_dataset(dir: &Path, size: usize, distribution: Distribution) -> Vec<i64> {
    let path = dir.join(size.to_string()).join(format!("{distribution}.txt"));
    let file = File::open(&path).unwrap();
    read_integers(BufReader::new(file)).unwrap()
}
