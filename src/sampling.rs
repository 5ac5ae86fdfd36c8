use tracing::debug;

pub const HUE_STEPS: i64 = 14;
pub const CHROMA_STEPS: i64 = 7;

// green-dominant band dropped from the hsv grid (exclusive bounds, degrees)
const SUPPRESSED_HUE: (f64, f64) = (80.0, 130.0);
// near-white hues that get dimmed above DIM_VALUE_THRESHOLD
const DIMMED_HUE: (f64, f64) = (85.0, 140.0);
const DIM_VALUE_THRESHOLD: f64 = 0.90;
const DIM_FACTOR: f64 = 0.85;

/// One axis of the sampling grid, in integer percent (or degree) units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAxis {
    pub min: i64,
    pub max: i64,
    pub steps: i64,
}

impl GridAxis {
    /// Step counts below one would give an empty or unbounded walk, so they are
    /// floored to one.
    pub fn new(min: i64, max: i64, steps: i64) -> Self {
        Self { min, max, steps: steps.max(1) }
    }

    // floor plus one, never zero
    pub fn step(&self) -> i64 {
        (self.max - self.min) / self.steps + 1
    }

    /// max, max - step, ... while still above min.
    pub fn descending(&self) -> impl Iterator<Item = i64> {
        (self.min + 1..=self.max).rev().step_by(self.step() as usize)
    }

    /// min + offset, min + offset + step, ... while below max + offset.
    pub fn ascending(&self, offset: i64) -> impl Iterator<Item = i64> {
        (self.min + offset..self.max + offset).step_by(self.step() as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvGrid {
    pub hue: GridAxis,
    pub saturation: GridAxis,
    pub value: GridAxis,
}

impl HsvGrid {
    pub fn for_count(count: usize) -> Self {
        let count = count as i64;
        let saturation_steps = ((count as f64 / HUE_STEPS as f64).sqrt().floor()) as i64 + 1;
        let saturation = GridAxis::new(60, 95, saturation_steps);
        let value_steps = count / (HUE_STEPS + saturation.steps) - 2;
        Self {
            hue: GridAxis::new(0, 360 - 360 / HUE_STEPS, HUE_STEPS),
            saturation,
            value: GridAxis::new(30, 90, value_steps),
        }
    }

    // how far the hue origin moves after every saturation band
    pub fn hue_drift(&self) -> i64 {
        self.hue.step() / (self.saturation.steps * self.value.steps)
    }

    /// Walks the grid, yielding normalized (hue, saturation, value) triples with
    /// the perceptual corrections already applied.
    pub fn samples(&self) -> Vec<[f64; 3]> {
        let drift = self.hue_drift();
        debug!(grid = ?self, drift, "walking hsv grid");

        let mut samples = vec![];
        let mut start_hue = 0;
        for t_val in self.value.descending() {
            for t_sat in self.saturation.descending() {
                for t_hue in self.hue.ascending(start_hue) {
                    let hue = t_hue as f64;
                    if is_suppressed_hue(hue) {
                        continue;
                    }
                    let value = perceptual_value(hue, t_val as f64 / 100.0);
                    samples.push([hue / 360.0, t_sat as f64 / 100.0, value]);
                }
                start_hue += drift;
            }
        }
        samples
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YiqGrid {
    pub luma: GridAxis,
    pub chroma_i: GridAxis,
    pub chroma_q: GridAxis,
}

impl YiqGrid {
    pub fn for_count(count: usize) -> Self {
        let luma_steps = count as i64 / (CHROMA_STEPS * CHROMA_STEPS);
        Self {
            luma: GridAxis::new(10, 90, luma_steps),
            chroma_i: GridAxis::new(-100, 100, CHROMA_STEPS),
            chroma_q: GridAxis::new(-100, 100, CHROMA_STEPS),
        }
    }

    /// Walks the grid, yielding (luma, i, q) triples. The chroma plane is
    /// sampled as a square even though only a rotated part of it maps into the
    /// rgb cube, so many of these get rejected on conversion.
    pub fn samples(&self) -> Vec<[f64; 3]> {
        debug!(grid = ?self, "walking yiq grid");

        let mut samples = vec![];
        for t_luma in self.luma.descending() {
            for t_i in self.chroma_i.ascending(0) {
                for t_q in self.chroma_q.ascending(0) {
                    samples.push([t_luma as f64 / 100.0, t_i as f64 / 100.0, t_q as f64 / 100.0]);
                }
            }
        }
        samples
    }
}

pub fn is_suppressed_hue(hue_degrees: f64) -> bool {
    hue_degrees > SUPPRESSED_HUE.0 && hue_degrees < SUPPRESSED_HUE.1
}

/// Value actually used for a sample: bright yellow-green hues are dimmed so
/// they stay apart from each other.
pub fn perceptual_value(hue_degrees: f64, value: f64) -> f64 {
    if value > DIM_VALUE_THRESHOLD && hue_degrees > DIMMED_HUE.0 && hue_degrees < DIMMED_HUE.1 {
        value * DIM_FACTOR
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_walks() {
        let axis = GridAxis::new(60, 95, 2);
        assert_eq!(axis.step(), 18);
        assert_eq!(axis.descending().collect::<Vec<_>>(), vec![95, 77]);
        assert_eq!(axis.ascending(5).collect::<Vec<_>>(), vec![65, 83]);

        let exact = GridAxis::new(0, 10, 5);
        assert_eq!(exact.step(), 3);
        assert_eq!(exact.ascending(0).collect::<Vec<_>>(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_degenerate_steps_floor_to_one() {
        let axis = GridAxis::new(30, 90, -2);
        assert_eq!(axis.steps, 1);
        assert_eq!(axis.step(), 61);
        assert_eq!(axis.descending().collect::<Vec<_>>(), vec![90]);

        let zero = GridAxis::new(10, 90, 0);
        assert_eq!(zero.steps, 1);
        assert_eq!(zero.descending().count(), 1);
    }

    #[test]
    fn test_hsv_grid_for_sixteen() {
        let grid = HsvGrid::for_count(16);
        assert_eq!(grid.hue, GridAxis::new(0, 335, 14));
        assert_eq!(grid.hue.step(), 24);
        assert_eq!(grid.saturation.steps, 2);
        // 16 / 16 - 2 is negative, floored to a single value band
        assert_eq!(grid.value.steps, 1);
        assert_eq!(grid.hue_drift(), 12);

        let samples = grid.samples();
        assert_eq!(samples.len(), 24);
        // first band starts at red, fully saturated, value 0.9
        assert_eq!(samples[0], [0.0, 0.95, 0.9]);
        // second band starts after one drift
        assert_eq!(samples[12], [12.0 / 360.0, 0.77, 0.9]);
    }

    #[test]
    fn test_hsv_grid_for_large_count() {
        let grid = HsvGrid::for_count(1000);
        assert_eq!(grid.saturation.steps, 9);
        assert_eq!(grid.value.steps, 41);
        assert_eq!(grid.hue_drift(), 0);
        assert_eq!(grid.value.descending().count(), 30);
        assert_eq!(grid.saturation.descending().count(), 9);
    }

    #[test]
    fn test_hsv_samples_skip_green_band() {
        for count in [0, 16, 40, 100, 500, 2000] {
            for [hue, saturation, value] in HsvGrid::for_count(count).samples() {
                let degrees = hue * 360.0;
                assert!(!(degrees > 80.0 + 1e-9 && degrees < 130.0 - 1e-9), "hue {} in band", degrees);
                assert!((0.6..=0.95).contains(&saturation));
                assert!(value > 0.3 && value <= 0.9);
            }
        }
    }

    #[test]
    fn test_perceptual_value() {
        assert!((perceptual_value(100.0, 0.95) - 0.8075).abs() < 1e-12);
        assert_eq!(perceptual_value(100.0, 0.90), 0.90);
        assert_eq!(perceptual_value(85.0, 0.95), 0.95);
        assert_eq!(perceptual_value(140.0, 0.95), 0.95);
        assert_eq!(perceptual_value(200.0, 0.95), 0.95);
    }

    #[test]
    fn test_suppressed_band_bounds() {
        assert!(!is_suppressed_hue(80.0));
        assert!(is_suppressed_hue(80.5));
        assert!(is_suppressed_hue(129.0));
        assert!(!is_suppressed_hue(130.0));
    }

    #[test]
    fn test_yiq_grid() {
        let grid = YiqGrid::for_count(100);
        assert_eq!(grid.luma.steps, 2);
        assert_eq!(grid.luma.step(), 41);
        assert_eq!(grid.chroma_i.step(), 29);
        assert_eq!(
            grid.chroma_i.ascending(0).collect::<Vec<_>>(),
            vec![-100, -71, -42, -13, 16, 45, 74]
        );

        let samples = grid.samples();
        assert_eq!(samples.len(), 2 * 7 * 7);
        assert_eq!(samples[0], [0.9, -1.0, -1.0]);
        assert_eq!(samples[1], [0.9, -1.0, -0.71]);
        assert_eq!(samples[49][0], 0.49);
    }

    #[test]
    fn test_yiq_grid_small_count() {
        let grid = YiqGrid::for_count(10);
        assert_eq!(grid.luma.steps, 1);
        assert_eq!(grid.samples().len(), 49);
    }
}
