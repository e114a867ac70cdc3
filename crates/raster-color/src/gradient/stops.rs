//! Sorted gradient stop list and the stop-search lookup.

use tracing::trace;

use crate::color::Color;

/// One color stop in a gradient's sorted stop list.
///
/// The list is kept sorted by `(offset asc, insertion_index asc)` so that
/// stops sharing an offset ("hard stops") still resolve deterministically
/// to the earlier-inserted one as `c0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Order in which this stop was appended; the tiebreaker for equal offsets.
    pub insertion_index: u32,
    /// Position along the gradient, clamped to `[0, 1]` on insertion.
    pub offset: f32,
    /// The stop's color.
    pub color: Color,
}

impl GradientStop {
    /// Builds a stop, clamping `offset` to `[0, 1]`.
    pub fn new(insertion_index: u32, offset: f32, color: Color) -> Self {
        Self { insertion_index, offset: offset.clamp(0.0, 1.0), color }
    }
}

/// Inserts `stop` into `stops`, keeping the list sorted by
/// `(offset asc, insertion_index asc)`.
pub fn insert_sorted(stops: &mut Vec<GradientStop>, stop: GradientStop) {
    let pos = stops
        .partition_point(|s| (s.offset, s.insertion_index) <= (stop.offset, stop.insertion_index));
    stops.insert(pos, stop);
}

/// The result of searching the stop list at a given offset: the two stops
/// to interpolate between and the relative position `rel` between them.
#[derive(Debug, Clone, Copy)]
pub struct StopLookup {
    /// The earlier stop's color (or the sole stop for edge cases).
    pub c0: Color,
    /// The later stop's color (equals `c0` at the gradient's ends).
    pub c1: Color,
    /// Interpolation parameter between `c0` and `c1`.
    pub rel: f32,
}

/// Looks up the two stops an `offset` falls between.
///
/// Negative offsets or an empty stop list resolve to transparent black at
/// `rel = 0`; this is also how an invalid (`-1`-sentinel) gradient
/// projection result is represented, since every projector's "invalid"
/// sentinel is negative.
pub fn lookup(stops: &[GradientStop], offset: f32) -> StopLookup {
    if offset < 0.0 || stops.is_empty() {
        return StopLookup { c0: Color::TRANSPARENT, c1: Color::TRANSPARENT, rel: 0.0 };
    }
    let offset = offset.clamp(0.0, 1.0);

    // Count of stops with offset strictly less than `offset`: the index of
    // the first stop whose offset is >= `offset`.
    let first_ge = stops.partition_point(|s| s.offset < offset);

    if first_ge == stops.len() {
        // offset > every stop: hold the last stop's color.
        let last = stops[stops.len() - 1];
        return StopLookup { c0: last.color, c1: last.color, rel: offset - last.offset };
    }

    if first_ge == 0 && offset < stops[0].offset {
        // offset strictly before the first stop: ramp in.
        let first = stops[0];
        let rel = if first.offset > 0.0 { offset / first.offset } else { 0.0 };
        return StopLookup { c0: first.color, c1: first.color, rel };
    }

    // m = the index of the stop immediately at-or-before `offset`. Picking
    // the *leftmost* candidate (rather than collapsing runs of equal
    // offsets) is what makes a hard stop resolve as an instantaneous jump
    // from the earlier-inserted stop to the later one.
    let m = if first_ge == 0 { 0 } else { first_ge - 1 };
    trace!(offset, m, stop_count = stops.len(), "stop lookup resolved bracketing index");

    if m + 1 >= stops.len() {
        let s = stops[m];
        return StopLookup { c0: s.color, c1: s.color, rel: offset - s.offset };
    }

    let a = stops[m];
    let b = stops[m + 1];
    let span = b.offset - a.offset;
    let rel = if span <= f32::EPSILON { 0.0 } else { (offset - a.offset) / span };
    StopLookup { c0: a.color, c1: b.color, rel }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(i: u32, offset: f32) -> GradientStop {
        GradientStop::new(i, offset, Color::BLACK)
    }

    #[test]
    fn test_insert_sorted_by_offset() {
        let mut stops = Vec::new();
        insert_sorted(&mut stops, stop(0, 0.5));
        insert_sorted(&mut stops, stop(1, 0.1));
        insert_sorted(&mut stops, stop(2, 0.9));
        let offsets: Vec<f32> = stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.1, 0.5, 0.9]);
    }

    #[test]
    fn test_insert_sorted_ties_break_by_insertion_index() {
        let mut stops = Vec::new();
        insert_sorted(&mut stops, stop(5, 0.5));
        insert_sorted(&mut stops, stop(2, 0.5));
        insert_sorted(&mut stops, stop(9, 0.5));
        let indices: Vec<u32> = stops.iter().map(|s| s.insertion_index).collect();
        assert_eq!(indices, vec![5, 2, 9]); // insertion order preserved for equal offsets
    }

    #[test]
    fn test_lookup_empty_is_transparent() {
        let result = lookup(&[], 0.5);
        assert_eq!(result.c0, Color::TRANSPARENT);
        assert_eq!(result.rel, 0.0);
    }

    #[test]
    fn test_lookup_negative_offset_is_transparent() {
        let stops = vec![stop(0, 0.0), stop(1, 1.0)];
        let result = lookup(&stops, -1.0);
        assert_eq!(result.c0, Color::TRANSPARENT);
    }

    #[test]
    fn test_lookup_before_first_stop_ramps_in() {
        let stops = vec![GradientStop::new(0, 0.5, Color::linear_rgb(1.0, 0.0, 0.0, 1.0))];
        let result = lookup(&stops, 0.25);
        assert_eq!(result.c0, result.c1);
        assert!((result.rel - 0.5).abs() < 1e-6); // 0.25 / 0.5
    }

    #[test]
    fn test_lookup_past_last_stop_holds() {
        let stops = vec![GradientStop::new(0, 0.5, Color::linear_rgb(1.0, 0.0, 0.0, 1.0))];
        let result = lookup(&stops, 0.8);
        assert_eq!(result.c0, result.c1);
    }

    #[test]
    fn test_lookup_between_two_stops() {
        let stops = vec![
            GradientStop::new(0, 0.0, Color::linear_rgb(0.0, 0.0, 0.0, 1.0)),
            GradientStop::new(1, 1.0, Color::linear_rgb(1.0, 1.0, 1.0, 1.0)),
        ];
        let result = lookup(&stops, 0.5);
        assert!((result.rel - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_lookup_hard_stop_is_instantaneous() {
        let stops = vec![
            GradientStop::new(0, 0.5, Color::linear_rgb(1.0, 0.0, 0.0, 1.0)),
            GradientStop::new(1, 0.5, Color::linear_rgb(0.0, 1.0, 0.0, 1.0)),
        ];
        let result = lookup(&stops, 0.5);
        assert_eq!(result.rel, 0.0);
        assert_eq!(result.c0, Color::linear_rgb(1.0, 0.0, 0.0, 1.0));
        assert_eq!(result.c1, Color::linear_rgb(0.0, 1.0, 0.0, 1.0));
    }
}
