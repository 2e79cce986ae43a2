// lib/src/config.rs
// Request defaults shared by whichever layer hosts the engine. The
// values mirror the front end's controls: depth defaults to 2, batch
// size defaults to 200 and is clamped to 1..=500.

/// Traversal depth used when a request omits it.
pub const DEFAULT_DEPTH: usize = 2;

/// Result batch size used when a request omits `max`.
pub const DEFAULT_BATCH_SIZE: usize = 200;

pub const MIN_BATCH_SIZE: usize = 1;
pub const MAX_BATCH_SIZE: usize = 500;

/// Coerces a caller-supplied depth to a positive integer. Absent falls
/// back to `default`, invalid (zero or negative) falls back to 1.
pub fn coerce_depth_or(raw: Option<i64>, default: usize) -> usize {
    match raw {
        None => default,
        Some(d) if d > 0 => d as usize,
        Some(_) => 1,
    }
}

/// `coerce_depth_or` with the stock default.
pub fn coerce_depth(raw: Option<i64>) -> usize {
    coerce_depth_or(raw, DEFAULT_DEPTH)
}

/// Clamps a caller-supplied batch size into the allowed range. Absent
/// falls back to `default`.
pub fn clamp_batch_or(raw: Option<i64>, default: usize) -> usize {
    match raw {
        None => default,
        Some(v) => (v.max(MIN_BATCH_SIZE as i64) as usize).min(MAX_BATCH_SIZE),
    }
}

/// `clamp_batch_or` with the stock default.
pub fn clamp_batch(raw: Option<i64>) -> usize {
    clamp_batch_or(raw, DEFAULT_BATCH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_defaults_and_coercion() {
        assert_eq!(coerce_depth(None), 2);
        assert_eq!(coerce_depth(Some(4)), 4);
        assert_eq!(coerce_depth(Some(0)), 1);
        assert_eq!(coerce_depth(Some(-3)), 1);
    }

    #[test]
    fn batch_defaults_and_clamping() {
        assert_eq!(clamp_batch(None), 200);
        assert_eq!(clamp_batch(Some(50)), 50);
        assert_eq!(clamp_batch(Some(0)), 1);
        assert_eq!(clamp_batch(Some(-10)), 1);
        assert_eq!(clamp_batch(Some(9_999)), 500);
    }

    #[test]
    fn host_supplied_defaults_take_over_when_absent() {
        assert_eq!(coerce_depth_or(None, 7), 7);
        assert_eq!(coerce_depth_or(Some(-1), 7), 1);
        assert_eq!(clamp_batch_or(None, 42), 42);
        assert_eq!(clamp_batch_or(Some(9_999), 42), MAX_BATCH_SIZE);
    }
}
