//! Iron filings and the field-blend relaxation step
//!
//! Each interaction pass nudges every filing's orientation toward the
//! bearing of each source, weighted by an inverse-square force. This is a
//! relaxation step rather than a physical simulation: orientation is the
//! only state, there is no momentum or damping, and the result depends on
//! how often passes run.

use filings_math::{angle::{bearing_degrees, heading}, normalize_180, Vec2};
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::Bounds;
use crate::source::DipoleSource;

/// Gain applied to the summed contributions of a pass
pub const INFLUENCE_FACTOR: f64 = 15.0;

/// Soft cutoff distance for a source's influence
///
/// Far beyond any on-screen distance, so the attenuation it applies is
/// effectively 1.
pub const INFLUENCE_RADIUS: f64 = 1.0e13;

/// Floor applied to filing-source distances
pub const MIN_DISTANCE: f64 = 1.0;

/// A single iron filing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Filing {
    position: Vec2,
    half_length: f64,
    /// Orientation in degrees, 0 = pointing up. Unbounded.
    orientation_degrees: f64,
}

impl Filing {
    pub fn new(position: Vec2, half_length: f64, orientation_degrees: f64) -> Self {
        Self {
            position,
            half_length,
            orientation_degrees,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    pub fn orientation_degrees(&self) -> f64 {
        self.orientation_degrees
    }

    /// Segment end points `(head, tail)`, head lying along the orientation
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        let offset = heading(self.orientation_degrees) * self.half_length;
        (self.position + offset, self.position - offset)
    }

    /// Summed, unscaled contribution of every source at this filing
    fn net_contribution(&self, sources: &[DipoleSource]) -> f64 {
        sources.iter().fold(0.0, |sum, source| {
            sum + source_contribution(self.position, self.orientation_degrees, source)
        })
    }
}

/// Contribution of one source to a filing's orientation change
///
/// Returns `d_theta * force`, before [`INFLUENCE_FACTOR`] is applied:
/// the signed angle from the filing's orientation to the source-to-filing
/// bearing, weighted by an inverse-square force with a distance floor of
/// [`MIN_DISTANCE`] and a soft cutoff at [`INFLUENCE_RADIUS`].
pub fn source_contribution(position: Vec2, orientation_degrees: f64, source: &DipoleSource) -> f64 {
    let delta = position - source.position();
    let distance = delta.length().max(MIN_DISTANCE);

    let mut force = source.strength() / (distance * distance);
    force *= (INFLUENCE_RADIUS - distance).max(0.0) / INFLUENCE_RADIUS;

    let d_theta = normalize_180(bearing_degrees(delta) - orientation_degrees);
    d_theta * force
}

/// The filing population
#[derive(Clone, Debug, Default)]
pub struct FilingField {
    filings: Vec<Filing>,
}

impl FilingField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing set of filings
    pub fn from_filings(filings: Vec<Filing>) -> Self {
        Self { filings }
    }

    /// Replace the population with `count` fresh random filings
    ///
    /// Positions are uniform over `[0, width) × [0, height)` and
    /// orientations uniform over `[0, 360)`.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        bounds: Bounds,
        filing_half_length: f64,
        rng: &mut R,
    ) {
        self.filings = (0..count)
            .map(|_| {
                let x = rng.gen::<f64>() * bounds.width;
                let y = rng.gen::<f64>() * bounds.height;
                let orientation = rng.gen::<f64>() * 360.0;
                Filing::new(Vec2::new(x, y), filing_half_length, orientation)
            })
            .collect();
    }

    /// Run one interaction pass over all filings
    ///
    /// Each filing's contributions are folded over `sources` against its
    /// orientation at the start of the pass. Passing no sources leaves the
    /// field untouched.
    pub fn update(&mut self, sources: &[DipoleSource]) {
        if sources.is_empty() {
            return;
        }
        for filing in &mut self.filings {
            let sum = filing.net_contribution(sources);
            filing.orientation_degrees += sum * INFLUENCE_FACTOR;
        }
    }

    pub fn filings(&self) -> &[Filing] {
        &self.filings
    }

    pub fn len(&self) -> usize {
        self.filings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filing> {
        self.filings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EPSILON: f64 = 1e-9;

    fn source_at(x: f64, y: f64, strength: f64) -> DipoleSource {
        DipoleSource::new(Vec2::new(x, y), 50.0, strength)
    }

    fn single(position: Vec2, orientation: f64) -> FilingField {
        FilingField::from_filings(vec![Filing::new(position, 5.0, orientation)])
    }

    #[test]
    fn test_endpoints() {
        let f = Filing::new(Vec2::new(10.0, 10.0), 5.0, 90.0);
        let (head, tail) = f.endpoints();
        assert!((head.x - 15.0).abs() < EPSILON && (head.y - 10.0).abs() < EPSILON);
        assert!((tail.x - 5.0).abs() < EPSILON && (tail.y - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_contribution_inverse_square() {
        let near = source_contribution(Vec2::new(10.0, 0.0), 45.0, &source_at(0.0, 0.0, 100.0));
        let far = source_contribution(Vec2::new(20.0, 0.0), 45.0, &source_at(0.0, 0.0, 100.0));
        // Same bearing (0) and orientation, so only the distance differs
        assert!(near < 0.0);
        assert!((near / far - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_contribution_value() {
        // Bearing 0, orientation 0 -> no turn
        let c = source_contribution(Vec2::new(10.0, 0.0), 0.0, &source_at(0.0, 0.0, 100.0));
        assert_eq!(c, 0.0);

        // Bearing 90 (filing below the source), orientation 0 -> 90 * 100 / 100
        let c = source_contribution(Vec2::new(0.0, 10.0), 0.0, &source_at(0.0, 0.0, 100.0));
        assert!((c - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_floor_at_source() {
        // Filing exactly on the source: distance floors to 1, bearing atan2(0, 0) = 0
        let c = source_contribution(Vec2::new(50.0, 50.0), 30.0, &source_at(50.0, 50.0, 2.0));
        assert!(c.is_finite());
        assert!((c - (-30.0 * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_floor_inside_unit_radius() {
        let at = source_contribution(Vec2::new(0.5, 0.0), 90.0, &source_at(0.0, 0.0, 3.0));
        // distance 0.5 floors to 1: force = 3, d_theta = 0 - 90
        assert!((at - (-270.0)).abs() < 1e-9);
    }

    #[test]
    fn test_update_no_sources_is_noop() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut field = FilingField::new();
        field.generate(50, Bounds::new(400.0, 400.0), 5.0, &mut rng);
        let before = field.filings().to_vec();
        field.update(&[]);
        assert_eq!(field.filings(), &before[..]);
    }

    #[test]
    fn test_update_single_source() {
        let mut field = single(Vec2::new(0.0, 10.0), 0.0);
        field.update(&[source_at(0.0, 0.0, 100.0)]);
        // 90 degrees * force 1 * factor 15
        assert!((field.filings()[0].orientation_degrees() - 1350.0).abs() < 1e-6);
    }

    #[test]
    fn test_update_three_sources_is_sum() {
        let sources = [
            source_at(0.0, 0.0, 150.0),
            source_at(300.0, 40.0, 80.0),
            source_at(120.0, 390.0, 220.0),
        ];
        let position = Vec2::new(140.0, 160.0);
        let expected: f64 = sources
            .iter()
            .map(|s| source_contribution(position, 12.0, s))
            .sum::<f64>()
            * INFLUENCE_FACTOR;

        let mut field = single(position, 12.0);
        field.update(&sources);
        assert!((field.filings()[0].orientation_degrees() - (12.0 + expected)).abs() < 1e-9);
    }

    #[test]
    fn test_mirror_symmetry_cancels() {
        // Filing pointing along +x, sources mirrored across the x axis at equal distance
        let position = Vec2::new(100.0, 100.0);
        let above = source_at(60.0, 70.0, 150.0);
        let below = source_at(60.0, 130.0, 150.0);

        let a = source_contribution(position, 0.0, &above);
        let b = source_contribution(position, 0.0, &below);
        assert!(a != 0.0);
        assert!((a + b).abs() < 1e-12, "{} vs {}", a, b);

        let mut field = single(position, 0.0);
        field.update(&[above, below]);
        assert!(field.filings()[0].orientation_degrees().abs() < 1e-9);
    }

    #[test]
    fn test_update_keeps_positions() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut field = FilingField::new();
        field.generate(100, Bounds::new(400.0, 400.0), 5.0, &mut rng);
        let positions: Vec<Vec2> = field.iter().map(|f| f.position()).collect();
        field.update(&[source_at(170.0, 230.0, 150.0), source_at(230.0, 170.0, 150.0)]);
        let after: Vec<Vec2> = field.iter().map(|f| f.position()).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_generate_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut field = single(Vec2::ZERO, 0.0);
        field.generate(0, Bounds::new(400.0, 400.0), 5.0, &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn test_generate_count_and_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut field = FilingField::new();
        let bounds = Bounds::new(400.0, 250.0);
        field.generate(1000, bounds, 5.0, &mut rng);

        assert_eq!(field.len(), 1000);
        for f in field.iter() {
            let p = f.position();
            assert!(p.x >= 0.0 && p.x < bounds.width);
            assert!(p.y >= 0.0 && p.y < bounds.height);
            assert!(f.orientation_degrees() >= 0.0 && f.orientation_degrees() < 360.0);
            assert_eq!(f.half_length(), 5.0);
        }
    }

    #[test]
    fn test_generate_replaces_wholesale() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut field = FilingField::new();
        field.generate(30, Bounds::new(400.0, 400.0), 5.0, &mut rng);
        field.generate(5, Bounds::new(400.0, 400.0), 5.0, &mut rng);
        assert_eq!(field.len(), 5);
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let bounds = Bounds::new(400.0, 400.0);
        let mut a = FilingField::new();
        let mut b = FilingField::new();
        a.generate(20, bounds, 5.0, &mut ChaCha8Rng::seed_from_u64(99));
        b.generate(20, bounds, 5.0, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a.filings(), b.filings());
    }
}
