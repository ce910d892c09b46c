use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use classic_sorts::dataset;
use classic_sorts::io::write_lines;
use classic_sorts::Distribution;

use crate::GenerateArgs;

pub fn run(args: GenerateArgs) -> Result<()> {
    let written = write_suite(&args.out_dir, &args.sizes, args.seed)?;
    info!(files = written.len(), out_dir = %args.out_dir.display(), "dataset suite complete");

    Ok(())
}

/// Writes `<out_dir>/<size>/<distribution>.txt` for every size and distribution.
///
/// The files hold [`dataset::suite`] for `seed`, so the same arguments always produce the same
/// files and `bench` with the same sizes and seed times exactly these datasets.
pub fn write_suite(out_dir: &Path, sizes: &[usize], seed: u64) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(sizes.len() * Distribution::ALL.len());

    for (size, distribution, values) in dataset::suite(sizes, seed) {
        let size_dir = out_dir.join(size.to_string());
        fs::create_dir_all(&size_dir)
            .with_context(|| format!("failed to create {}", size_dir.display()))?;

        let path = size_dir.join(format!("{distribution}.txt"));
        let file =
            File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        write_lines(file, &values).with_context(|| format!("failed to write {}", path.display()))?;

        info!(path = %path.display(), size, "wrote dataset");
        written.push(path);
    }

    Ok(written)
}
