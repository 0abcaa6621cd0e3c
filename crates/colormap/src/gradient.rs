//! Blue-to-red gradient generation.

use crate::scheme::Hsl;

/// Hue of the first (shortest-time) band.
pub const HUE_START: f64 = 230.0;
/// Hue of the last (longest-time) band.
pub const HUE_END: f64 = 0.0;

const SATURATION: f64 = 100.0;
const LIGHTNESS_START: f64 = 45.0;
const LIGHTNESS_SPAN: f64 = 5.0;

/// Color at `ratio` ∈ [0, 1] along the blue-to-red ramp.
///
/// Lightness rises slightly toward the red end so warm bands stay readable.
pub fn interpolate(ratio: f64) -> Hsl {
    let ratio = ratio.clamp(0.0, 1.0);
    Hsl::new(
        HUE_START - ratio * (HUE_START - HUE_END),
        SATURATION,
        LIGHTNESS_START + ratio * LIGHTNESS_SPAN,
    )
}

/// `steps` evenly spaced colors from blue to red.
///
/// A single step yields the blue end only.
pub fn generate_gradient(steps: usize) -> Vec<Hsl> {
    match steps {
        0 => Vec::new(),
        1 => vec![interpolate(0.0)],
        n => (0..n)
            .map(|i| interpolate(i as f64 / (n - 1) as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_blue_and_red() {
        for steps in [2, 3, 9, 12, 40] {
            let colors = generate_gradient(steps);
            assert_eq!(colors.len(), steps);
            assert_eq!(colors[0].hue, 230.0);
            assert_eq!(colors[0].lightness, 45.0);
            assert_eq!(colors[steps - 1].hue, 0.0);
            assert_eq!(colors[steps - 1].lightness, 50.0);
        }
    }

    #[test]
    fn lightness_never_decreases() {
        let colors = generate_gradient(12);
        for pair in colors.windows(2) {
            assert!(pair[1].lightness >= pair[0].lightness);
            assert!(pair[1].hue < pair[0].hue);
        }
        assert!(colors.iter().all(|c| c.saturation == 100.0));
    }

    #[test]
    fn degenerate_step_counts() {
        assert!(generate_gradient(0).is_empty());
        assert_eq!(generate_gradient(1), vec![interpolate(0.0)]);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(interpolate(-1.0), interpolate(0.0));
        assert_eq!(interpolate(2.0), interpolate(1.0));
    }
}
