//! Plain-text rendering of results and head positions.

use u_seek::models::{Position, SeekResult};
use u_seek::scheduler::SeekKpi;

/// One line summarizing a result.
pub fn summary(result: &SeekResult) -> String {
    format!(
        "total seek {:>6}  average seek {:>8.2}",
        result.total_seek_time, result.average_seek_time
    )
}

/// The plan as `a -> b -> c`.
pub fn sequence(plan: &[Position]) -> String {
    plan.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Per-step table: from, to, distance.
pub fn steps(result: &SeekResult) -> String {
    let mut out = String::new();
    for (i, (w, d)) in result
        .head_movements
        .windows(2)
        .zip(result.seek_distances())
        .enumerate()
    {
        out.push_str(&format!("  {:>3}. {:>6} -> {:<6} seek {:>6}\n", i + 1, w[0], w[1], d));
    }
    out
}

pub fn kpi(kpi: &SeekKpi) -> String {
    format!(
        "max seek {}  reversals {}  span {}",
        kpi.max_seek, kpi.reversals, kpi.span
    )
}

/// Maps a position onto a column of a `width`-wide track.
pub fn column(position: Position, disk_size: Position, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let last = width - 1;
    let disk_size = disk_size.max(1);
    let clamped = position.clamp(0, disk_size);
    let col = (clamped as f64 / disk_size as f64 * last as f64).round() as usize;
    col.min(last)
}

/// A track line: `.` empty, `o` visited, `H` the head.
pub fn track(visible: &[Position], disk_size: Position, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut cells = vec!['.'; width];
    for &p in visible {
        cells[column(p, disk_size, width)] = 'o';
    }
    if let Some(&head) = visible.last() {
        cells[column(head, disk_size, width)] = 'H';
    }
    format!("|{}|", cells.into_iter().collect::<String>())
}
