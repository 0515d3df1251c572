//! Settlement-price scan-window generation.
//!
//! Derives a bounded (start, end, step) window covering every leg's anchor
//! price with margin, sized so the sampled point count stays roughly constant
//! regardless of price magnitude. The hard point-count ceiling is the only
//! defence against pathological input (anchors separated by many orders of
//! magnitude), trading curve resolution for a bounded response.

use payoff_core::config::GridConfig;
use payoff_core::types::Leg;

/// A bounded settlement-price scan window.
///
/// Either a degenerate single-price window (no usable anchors) or a proper
/// range with `start < end`, `step > 0` and a point count within the
/// configured ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceGrid {
    /// First sampled price.
    pub start: f64,
    /// Last sampled price (inclusive).
    pub end: f64,
    /// Increment between samples; zero for a degenerate window.
    pub step: f64,
}

impl PriceGrid {
    /// A single-price window used when no leg carries a usable anchor.
    pub fn degenerate(price: f64) -> Self {
        Self {
            start: price,
            end: price,
            step: 0.0,
        }
    }

    /// Whether this window collapses to a single price.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.step <= 0.0 || self.start >= self.end
    }

    /// Number of prices [`Self::prices`] will yield.
    pub fn point_count(&self) -> usize {
        if self.is_degenerate() {
            return 1;
        }
        let span = self.end - self.start;
        let whole_steps = (span / self.step + 1e-9).floor();
        let mut count = whole_steps as usize + 1;
        // The inclusive end is appended when the last whole step falls short.
        if self.start + whole_steps * self.step < self.end - 1e-9 {
            count += 1;
        }
        count
    }

    /// The sampled prices, ascending, inclusive of `end`.
    pub fn prices(&self) -> Vec<f64> {
        if self.is_degenerate() {
            return vec![self.start];
        }
        let mut prices = Vec::with_capacity(self.point_count());
        let mut i = 0u32;
        loop {
            let price = self.start + f64::from(i) * self.step;
            if price > self.end + self.step * 1e-9 {
                break;
            }
            prices.push(price);
            i += 1;
        }
        if let Some(&last) = prices.last() {
            if last < self.end - self.step * 1e-9 {
                prices.push(self.end);
            }
        }
        prices
    }
}

/// Derives the scan window from the legs' anchor prices.
///
/// Anchors are the positive strikes and futures entry prices across all
/// legs. An empty anchor set yields a degenerate window at the configured
/// fallback price; a single shared anchor synthesises a visible range as a
/// fixed fraction of that price.
pub fn derive(legs: &[Leg], config: &GridConfig) -> PriceGrid {
    let anchors: Vec<f64> = legs.iter().filter_map(Leg::anchor_price).collect();
    if anchors.is_empty() {
        return PriceGrid::degenerate(config.fallback_price);
    }
    let min_anchor = anchors.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_anchor = anchors.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let mut raw_range = max_anchor - min_anchor;
    if raw_range == 0.0 {
        raw_range = max_anchor * config.single_anchor_range_fraction;
    }

    let buffer = (raw_range * config.buffer_fraction(max_anchor))
        .max(max_anchor * config.buffer_floor_fraction);

    bounded(min_anchor - buffer, max_anchor + buffer, max_anchor, config)
}

/// Builds the scan window from an explicit centre price and percent range.
///
/// Used by interactive callers that control the window directly instead of
/// deriving it from leg prices: the window spans
/// `centre × (1 ± percent/100)`, then runs through the same rounding and
/// step machinery as the derived path. A non-positive centre falls back to
/// the degenerate window; a non-positive percent behaves like a
/// single-anchor range.
pub fn window(centre: f64, range_percent: f64, config: &GridConfig) -> PriceGrid {
    if centre <= 0.0 {
        return PriceGrid::degenerate(config.fallback_price);
    }
    let fraction = if range_percent > 0.0 {
        (range_percent / 100.0).min(1.0)
    } else {
        config.single_anchor_range_fraction
    };
    bounded(centre * (1.0 - fraction), centre * (1.0 + fraction), centre, config)
}

/// Rounds raw window edges to the magnitude-tiered unit and picks a step.
fn bounded(raw_min: f64, raw_max: f64, magnitude: f64, config: &GridConfig) -> PriceGrid {
    let unit = config.rounding_unit(magnitude);
    let start = ((raw_min / unit).floor() * unit).max(unit);
    let mut end = (raw_max / unit).ceil() * unit;
    if end <= start {
        end = start + unit;
    }

    let raw_step = (end - start) / config.target_points as f64;
    let mut step = nice_floor(raw_step).max(config.price_unit());
    while count_for(start, end, step) > config.max_points {
        step = nice_next(step);
    }

    PriceGrid { start, end, step }
}

fn count_for(start: f64, end: f64, step: f64) -> usize {
    PriceGrid { start, end, step }.point_count()
}

/// Largest 1/5/10-scaled increment at or below `raw`.
fn nice_floor(raw: f64) -> f64 {
    if raw <= 0.0 {
        return 0.0;
    }
    let pow = 10f64.powf(raw.log10().floor());
    let mantissa = raw / pow;
    if mantissa >= 5.0 {
        5.0 * pow
    } else {
        pow
    }
}

/// Next 1/5/10-scaled increment above `step`.
fn nice_next(step: f64) -> f64 {
    let pow = 10f64.powf(step.log10().floor());
    let mantissa = step / pow;
    if mantissa < 5.0 {
        5.0 * pow
    } else {
        10.0 * pow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use payoff_core::types::Direction;

    fn config() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn test_no_anchors_degenerate() {
        let grid = derive(&[], &config());
        assert!(grid.is_degenerate());
        assert_eq!(grid.prices(), vec![100.0]);
        assert_eq!(grid.point_count(), 1);
    }

    #[test]
    fn test_blank_legs_degenerate() {
        // Legs exist but none carries a usable price.
        let legs = vec![Leg::call(Direction::Long, 0.0, 200.0, 50.0)];
        let grid = derive(&legs, &config());
        assert!(grid.is_degenerate());
    }

    #[test]
    fn test_window_covers_anchors_with_margin() {
        let legs = vec![
            Leg::future(Direction::Long, 18000.0, 50.0),
            Leg::call(Direction::Short, 18500.0, 200.0, 50.0),
        ];
        let grid = derive(&legs, &config());
        assert!(!grid.is_degenerate());
        assert!(grid.start < 18000.0);
        assert!(grid.end > 18500.0);
        assert!(grid.step > 0.0);
        assert!(grid.point_count() <= config().max_points);
    }

    #[test]
    fn test_window_edges_are_unit_multiples() {
        let legs = vec![
            Leg::put(Direction::Long, 17000.0, 80.0, 50.0),
            Leg::call(Direction::Long, 19000.0, 80.0, 50.0),
        ];
        let grid = derive(&legs, &config());
        // Index-scale anchors round to a 100-point unit.
        assert_relative_eq!(grid.start % 100.0, 0.0);
        assert_relative_eq!(grid.end % 100.0, 0.0);
    }

    #[test]
    fn test_single_anchor_synthesises_range() {
        let legs = vec![Leg::call(Direction::Long, 18000.0, 300.0, 50.0)];
        let grid = derive(&legs, &config());
        assert!(!grid.is_degenerate());
        // The synthetic ±20% range gives a 5%-of-price buffer either side
        // of the shared strike, so the curve is visible rather than flat.
        assert!(grid.start <= 17100.0);
        assert!(grid.end >= 18900.0);
        assert!(grid.point_count() > 10);
    }

    #[test]
    fn test_point_count_roughly_constant_across_magnitudes() {
        for anchor in [5.0, 80.0, 1200.0, 18000.0, 250_000.0] {
            let legs = vec![
                Leg::put(Direction::Long, anchor * 0.95, 1.0, 1.0),
                Leg::call(Direction::Long, anchor * 1.05, 1.0, 1.0),
            ];
            let grid = derive(&legs, &config());
            let count = grid.point_count();
            assert!(
                (20..=500).contains(&count),
                "anchor {}: count {}",
                anchor,
                count
            );
        }
    }

    #[test]
    fn test_pathological_spread_hits_ceiling_not_oom() {
        let legs = vec![
            Leg::put(Direction::Long, 0.05, 1.0, 1.0),
            Leg::call(Direction::Long, 90_000_000.0, 1.0, 1.0),
        ];
        let grid = derive(&legs, &config());
        assert!(!grid.is_degenerate());
        assert!(grid.point_count() <= config().max_points);
        assert_eq!(grid.prices().len(), grid.point_count());
    }

    #[test]
    fn test_start_never_below_rounding_unit() {
        let legs = vec![
            Leg::put(Direction::Long, 2.0, 0.5, 1.0),
            Leg::call(Direction::Long, 3.0, 0.5, 1.0),
        ];
        let grid = derive(&legs, &config());
        // Buffered min would go negative; start clamps to the unit.
        assert!(grid.start >= 1.0);
    }

    #[test]
    fn test_prices_inclusive_of_end() {
        let grid = PriceGrid {
            start: 100.0,
            end: 110.0,
            step: 3.0,
        };
        let prices = grid.prices();
        assert_eq!(prices, vec![100.0, 103.0, 106.0, 109.0, 110.0]);
        assert_eq!(grid.point_count(), prices.len());
    }

    #[test]
    fn test_prices_exact_multiple_end_not_duplicated() {
        let grid = PriceGrid {
            start: 100.0,
            end: 110.0,
            step: 5.0,
        };
        assert_eq!(grid.prices(), vec![100.0, 105.0, 110.0]);
        assert_eq!(grid.point_count(), 3);
    }

    #[test]
    fn test_window_override_spans_percent_range() {
        let grid = window(18000.0, 30.0, &config());
        assert!(!grid.is_degenerate());
        assert!(grid.start <= 18000.0 * 0.70);
        assert!(grid.end >= 18000.0 * 1.30);
        assert!(grid.point_count() <= config().max_points);
    }

    #[test]
    fn test_window_override_invalid_centre() {
        let grid = window(0.0, 30.0, &config());
        assert!(grid.is_degenerate());
        assert_eq!(grid.start, 100.0);
    }

    #[test]
    fn test_window_override_percent_clamped() {
        // 400% would push the raw minimum far below zero.
        let grid = window(100.0, 400.0, &config());
        assert!(grid.start >= 1.0);
        assert!(grid.end >= 200.0);
    }

    #[test]
    fn test_nice_floor() {
        assert_relative_eq!(nice_floor(22.7), 10.0);
        assert_relative_eq!(nice_floor(7.3), 5.0);
        assert_relative_eq!(nice_floor(4.9), 1.0);
        assert_relative_eq!(nice_floor(0.034), 0.01);
        assert_relative_eq!(nice_floor(5.0), 5.0);
    }

    #[test]
    fn test_nice_next() {
        assert_relative_eq!(nice_next(1.0), 5.0);
        assert_relative_eq!(nice_next(5.0), 10.0);
        assert_relative_eq!(nice_next(10.0), 50.0);
        assert_relative_eq!(nice_next(0.01), 0.05);
    }
}
