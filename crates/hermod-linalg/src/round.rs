//! Fixed-decimal rounding shared by operator construction and hosts that
//! need reproducible comparisons.

/// Round `x` to `places` decimal digits.
///
/// Scales by `10^places`, applies [`f64::round`], and scales back. Ties
/// round half away from zero — a scaled value landing exactly on `.5`
/// moves to the integer of larger magnitude, never to the even neighbour.
pub fn round_to_places(x: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (x * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_five_places() {
        assert_eq!(round_to_places(0.123456789, 5), 0.12346);
        assert_eq!(round_to_places(-2.718281828, 5), -2.71828);
        assert_eq!(round_to_places(3.0, 5), 3.0);
    }

    // Tie fixtures use zero-place rounding: the scaled values are exactly
    // representable, so they pin the half-rounding rule without decimal
    // conversion noise.
    #[test]
    fn ties_round_half_away_from_zero() {
        assert_eq!(round_to_places(0.5, 0), 1.0);
        assert_eq!(round_to_places(-0.5, 0), -1.0);
        assert_eq!(round_to_places(1.5, 0), 2.0);
        assert_eq!(round_to_places(2.5, 0), 3.0); // not banker's rounding
        assert_eq!(round_to_places(-2.5, 0), -3.0);
    }

    #[test]
    fn below_resolution_collapses_to_zero() {
        assert_eq!(round_to_places(0.0000049, 5), 0.0);
        assert_eq!(round_to_places(-0.0000049, 5), 0.0);
    }
}
