pub struct TimedResult<T> {
    pub res: T,
    pub elapsed: std::time::Duration,
}

pub fn timed_scope<R, F: FnOnce() -> R>(f: F) -> TimedResult<R> {
    let begin = std::time::Instant::now();
    let res = f();

    TimedResult {
        res,
        elapsed: begin.elapsed(),
    }
}

/// Runs `f` and logs how long it took under the given label.
pub fn timed_scope_log<R, F: FnOnce() -> R>(label: &'static str, f: F) -> TimedResult<R> {
    let timed = timed_scope(f);
    log::info!(target: "scoped timer", "{}: {}", label, format_elapsed(timed.elapsed));
    timed
}

pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    if elapsed < std::time::Duration::from_millis(1) {
        format!("{:.3}µs", elapsed.as_secs_f32() * 1_000_000.)
    } else if elapsed < std::time::Duration::from_secs(1) {
        format!("{:.3}ms", elapsed.as_secs_f32() * 1_000.)
    } else {
        format!("{:.3}s", elapsed.as_secs_f32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_magnitude() {
        assert!(format_elapsed(std::time::Duration::from_micros(12)).ends_with("µs"));
        assert!(format_elapsed(std::time::Duration::from_millis(12)).ends_with("ms"));
        assert!(format_elapsed(std::time::Duration::from_secs(2)).ends_with('s'));
    }
}
