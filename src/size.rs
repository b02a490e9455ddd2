//! File and directory size resolution and formatting

use std::path::Path;

use ignore::WalkBuilder;

/// Byte length of a regular file.
///
/// Returns `None` when metadata cannot be read or the entry is not a
/// regular file; callers then omit the size annotation rather than failing.
pub fn file_size(path: &Path) -> Option<u64> {
    let meta = path.metadata().ok()?;
    meta.is_file().then(|| meta.len())
}

/// Recursive total of all regular-file sizes under `dir`, like `du -sh`.
///
/// Always measures the true on-disk total: display filters and the depth
/// ceiling do not apply here. Unreadable subtrees are skipped and the
/// partial sum is still returned.
pub fn dir_size(dir: &Path) -> u64 {
    let walker = WalkBuilder::new(dir)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    let mut total = 0;
    for entry in walker.flatten() {
        if let Ok(meta) = entry.path().metadata() {
            if meta.is_file() {
                total += meta.len();
            }
        }
    }
    total
}

/// Format a byte count with binary units.
///
/// One decimal place when the scaled value is below 10 and at least one
/// division happened; a rounded integer otherwise.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if value < 10.0 && unit > 0 {
        format!("{:.1} {}", value, UNITS[unit])
    } else {
        format!("{:.0} {}", value, UNITS[unit])
    }
}
