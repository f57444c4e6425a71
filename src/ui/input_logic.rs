/// Move a cursor one step back inside `first..=last`.
///
/// At `first` the cursor stays put, or jumps to `last` when `wrap` is set.
pub fn select_prev(current: i32, first: i32, last: i32, wrap: bool) -> i32 {
    if current > first {
        current - 1
    } else if wrap {
        last
    } else {
        first
    }
}

/// Move a cursor one step forward inside `first..=last`.
///
/// At `last` the cursor stays put, or jumps to `first` when `wrap` is set.
pub fn select_next(current: i32, first: i32, last: i32, wrap: bool) -> i32 {
    if current < last {
        current + 1
    } else if wrap {
        first
    } else {
        last
    }
}
