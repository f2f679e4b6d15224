use crate::scan::sort_rows;
use crate::session::SessionRow;

/// Split a roster into sequential parts, flipping to the next part the
/// first time the session index resets downward (e.g. 12 -> 1).
///
/// Rows are walked in canonical order. Rows without a session index never
/// trigger a transition and never update the carried index. Once
/// `max_parts` is reached, further resets keep assigning to the last part.
/// Empty input yields `max_parts` empty buckets.
pub fn split_by_reset(rows: &[SessionRow], max_parts: usize) -> Vec<Vec<SessionRow>> {
    let mut parts: Vec<Vec<SessionRow>> = (0..max_parts).map(|_| Vec::new()).collect();
    if max_parts == 0 {
        return parts;
    }

    let mut current_part = 0usize;
    let mut previous_index: Option<u32> = None;
    for row in sort_rows(rows) {
        let index = row.session_index();
        if let (Some(previous), Some(current)) = (previous_index, index) {
            if current < previous && current_part + 1 < max_parts {
                current_part += 1;
            }
        }
        if index.is_some() {
            previous_index = index;
        }
        parts[current_part].push(row);
    }
    parts
}
