//! Projection of resolved files into marker path strings

use std::env;
use std::path::PathBuf;

/// Return the path strings to embed in markers: the absolute paths as
/// resolved, or each made relative to the current working directory when
/// `relative` is set. A path outside the working directory, or any path
/// when the working directory cannot be determined, keeps its absolute
/// form.
pub fn output_paths(files: &[PathBuf], relative: bool) -> Vec<String> {
    if !relative {
        return files.iter().map(|p| p.display().to_string()).collect();
    }
    let Ok(cwd) = env::current_dir() else {
        return files.iter().map(|p| p.display().to_string()).collect();
    };
    files
        .iter()
        .map(|p| p.strip_prefix(&cwd).unwrap_or(p).display().to_string())
        .collect()
}
