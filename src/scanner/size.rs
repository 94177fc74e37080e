const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const OVERFLOW_UNIT: &str = "PB";
const STEP: f64 = 1024.0;

/// Format a byte count with base-1024 units and two decimals.
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in UNITS {
        if size < STEP {
            return format!("{size:.2} {unit}");
        }
        size /= STEP;
    }
    format!("{size:.2} {OVERFLOW_UNIT}")
}
