//! Gradient time thresholds and their placement on a color palette.

/// Shortest isochrone requested for a gradient, in minutes.
pub const MIN_MINUTES: u32 = 5;

/// Smallest gap kept between two neighbouring thresholds, in minutes.
pub const MIN_GAP: u32 = 3;

/// Easing exponent; values above 1 put more thresholds at short times.
const EASING: f64 = 2.5;

/// Compute up to `steps` distinct minute thresholds in `[MIN_MINUTES, max_minutes]`,
/// sorted in descending order.
///
/// Thresholds follow `5 + (1 - (i / (steps - 1))^2.5) * (max - 5)`, so the
/// spacing gets finer toward short travel times. A threshold closer than
/// [`MIN_GAP`] to the previous one is pulled down to `previous - MIN_GAP`
/// (never below the floor) and duplicates are dropped, so the result may be
/// shorter than `steps`. `max_minutes == MIN_MINUTES` yields `[5]`.
pub fn time_steps(max_minutes: u32, steps: usize) -> Vec<u32> {
    let floor = MIN_MINUTES as i64;
    let span = max_minutes as f64 - MIN_MINUTES as f64;
    let mut result: Vec<u32> = Vec::with_capacity(steps);

    for i in 0..steps {
        let ratio = if steps > 1 {
            i as f64 / (steps - 1) as f64
        } else {
            0.0
        };
        let factor = 1.0 - ratio.powf(EASING);
        let mut time = (MIN_MINUTES as f64 + factor * span).round() as i64;

        if let Some(&last) = result.last() {
            let last = last as i64;
            if last - time < MIN_GAP as i64 {
                time = (last - MIN_GAP as i64).max(floor);
            }
        }

        if time >= floor {
            let time = time as u32;
            if !result.contains(&time) {
                result.push(time);
            }
        }
    }

    result.sort_unstable_by(|a, b| b.cmp(a));
    result
}

/// Palette slot for the `index`-th of `result_count` results.
///
/// Results are spread over the whole palette so the first result always takes
/// slot 0 and the last always takes slot `palette_size - 1`, whatever the
/// result count.
pub fn color_index(index: usize, result_count: usize, palette_size: usize) -> usize {
    if result_count <= 1 || palette_size == 0 {
        return 0;
    }
    let ratio = index as f64 / (result_count - 1) as f64;
    let slot = (ratio * (palette_size - 1) as f64).floor() as usize;
    slot.min(palette_size - 1)
}
