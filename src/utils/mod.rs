/// Truncate a string for single-line display, keeping `max_len - 3`
/// characters plus an ellipsis marker
pub fn truncate_for_display(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let prefix: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{prefix}...")
    } else {
        text.to_string()
    }
}

/// Format file size in human-readable format
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let bytes_f = bytes as f64;
    let unit_index = (bytes_f.log10() / THRESHOLD.log10()).floor() as usize;
    let unit_index = unit_index.min(UNITS.len() - 1);

    let size = bytes_f / THRESHOLD.powi(unit_index as i32);

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
