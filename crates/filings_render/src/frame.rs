//! Conversion of a simulation snapshot into vertex lists
//!
//! Simulation units are passed through unchanged; the shader maps the
//! simulation bounds onto the surface.

use filings_core::{DipoleSource, Snapshot};
use filings_math::Vec2;

use crate::pipeline::Vertex2D;

/// Vertices emitted per magnet: shadow, north half, south half
pub const VERTICES_PER_MAGNET: usize = 18;

/// Colors and magnet dimensions used when building a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub filing: [f32; 4],
    pub north: [f32; 4],
    pub south: [f32; 4],
    pub shadow: [f32; 4],
    /// Magnet body width in simulation units
    pub magnet_width: f64,
    /// Shadow offset along both magnet axes
    pub shadow_offset: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [1.0, 1.0, 1.0, 1.0],
            filing: [0.0, 0.0, 0.0, 1.0],
            north: [200.0 / 255.0, 20.0 / 255.0, 20.0 / 255.0, 1.0],
            south: [20.0 / 255.0, 20.0 / 255.0, 200.0 / 255.0, 1.0],
            shadow: [0.0, 0.0, 0.0, 0.4],
            magnet_width: 40.0,
            shadow_offset: 3.0,
        }
    }
}

impl Palette {
    /// Background as a wgpu clear color
    pub fn clear_color(&self) -> wgpu::Color {
        let [r, g, b, a] = self.background;
        wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        }
    }
}

/// Vertex lists for one frame
#[derive(Clone, Debug, Default)]
pub struct FrameGeometry {
    /// Line list, two vertices per filing
    pub filing_vertices: Vec<Vertex2D>,
    /// Triangle list, [`VERTICES_PER_MAGNET`] vertices per source
    pub magnet_vertices: Vec<Vertex2D>,
}

impl FrameGeometry {
    /// Build the geometry for a snapshot
    pub fn from_snapshot(snapshot: &Snapshot<'_>, palette: &Palette) -> Self {
        let mut filing_vertices = Vec::with_capacity(snapshot.filings.len() * 2);
        for filing in snapshot.filings {
            let (start, end) = filing.endpoints();
            filing_vertices.push(Vertex2D::new(start.to_f32_array(), palette.filing));
            filing_vertices.push(Vertex2D::new(end.to_f32_array(), palette.filing));
        }

        let mut magnet_vertices = Vec::with_capacity(snapshot.sources.len() * VERTICES_PER_MAGNET);
        for source in snapshot.sources.iter() {
            push_magnet(&mut magnet_vertices, source, palette);
        }

        Self {
            filing_vertices,
            magnet_vertices,
        }
    }

    pub fn filing_count(&self) -> usize {
        self.filing_vertices.len() / 2
    }
}

fn push_magnet(out: &mut Vec<Vertex2D>, source: &DipoleSource, palette: &Palette) {
    let half_width = palette.magnet_width / 2.0;
    let half_length = source.half_length();
    let offset = palette.shadow_offset;

    // Local frame: -y points at the north pole
    push_rect(
        out,
        source,
        Vec2::new(-half_width + offset, -half_length + offset),
        Vec2::new(half_width + offset, half_length + offset),
        palette.shadow,
    );
    push_rect(
        out,
        source,
        Vec2::new(-half_width, -half_length),
        Vec2::new(half_width, 0.0),
        palette.north,
    );
    push_rect(
        out,
        source,
        Vec2::new(-half_width, 0.0),
        Vec2::new(half_width, half_length),
        palette.south,
    );
}

/// Two triangles covering the local rectangle `min..max`, rotated and
/// translated into simulation space
fn push_rect(out: &mut Vec<Vertex2D>, source: &DipoleSource, min: Vec2, max: Vec2, color: [f32; 4]) {
    let center = source.position();
    let angle = source.orientation_degrees();
    let corner = |x: f64, y: f64| {
        let world = center + Vec2::new(x, y).rotated_degrees(angle);
        Vertex2D::new(world.to_f32_array(), color)
    };

    let a = corner(min.x, min.y);
    let b = corner(max.x, min.y);
    let c = corner(max.x, max.y);
    let d = corner(min.x, max.y);

    out.extend_from_slice(&[a, b, c, a, c, d]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use filings_core::{Bounds, Filing};

    fn sources() -> [DipoleSource; 2] {
        [
            DipoleSource::new(Vec2::new(170.0, 230.0), 50.0, 150.0),
            DipoleSource::new(Vec2::new(230.0, 170.0), 50.0, 150.0),
        ]
    }

    fn approx(a: [f32; 2], b: [f32; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-3 && (a[1] - b[1]).abs() < 1e-3
    }

    #[test]
    fn test_vertex_counts() {
        let sources = sources();
        let filings = vec![
            Filing::new(Vec2::new(10.0, 10.0), 5.0, 0.0),
            Filing::new(Vec2::new(20.0, 20.0), 5.0, 90.0),
            Filing::new(Vec2::new(30.0, 30.0), 5.0, 45.0),
        ];
        let snapshot = Snapshot {
            sources: &sources,
            filings: &filings,
            bounds: Bounds::default(),
        };

        let geometry = FrameGeometry::from_snapshot(&snapshot, &Palette::default());
        assert_eq!(geometry.filing_vertices.len(), 6);
        assert_eq!(geometry.filing_count(), 3);
        assert_eq!(geometry.magnet_vertices.len(), 2 * VERTICES_PER_MAGNET);
    }

    #[test]
    fn test_empty_population_still_draws_magnets() {
        let sources = sources();
        let snapshot = Snapshot {
            sources: &sources,
            filings: &[],
            bounds: Bounds::default(),
        };

        let geometry = FrameGeometry::from_snapshot(&snapshot, &Palette::default());
        assert!(geometry.filing_vertices.is_empty());
        assert_eq!(geometry.magnet_vertices.len(), 36);
    }

    #[test]
    fn test_filing_endpoints_and_color() {
        let sources = sources();
        let filings = vec![Filing::new(Vec2::new(100.0, 100.0), 5.0, 90.0)];
        let snapshot = Snapshot {
            sources: &sources,
            filings: &filings,
            bounds: Bounds::default(),
        };
        let palette = Palette::default();

        let geometry = FrameGeometry::from_snapshot(&snapshot, &palette);
        let (start, end) = filings[0].endpoints();
        assert!(approx(geometry.filing_vertices[0].position, start.to_f32_array()));
        assert!(approx(geometry.filing_vertices[1].position, end.to_f32_array()));
        assert_eq!(geometry.filing_vertices[0].color, palette.filing);
    }

    #[test]
    fn test_upright_magnet_halves() {
        let sources = sources();
        let snapshot = Snapshot {
            sources: &sources,
            filings: &[],
            bounds: Bounds::default(),
        };
        let palette = Palette::default();
        let geometry = FrameGeometry::from_snapshot(&snapshot, &palette);
        let magnet = &geometry.magnet_vertices[..VERTICES_PER_MAGNET];

        // Shadow first, shifted by the offset
        assert_eq!(magnet[0].color, palette.shadow);
        assert!(approx(magnet[0].position, [170.0 - 20.0 + 3.0, 230.0 - 50.0 + 3.0]));

        // North half spans from the top edge to the center
        let north = &magnet[6..12];
        assert!(north.iter().all(|v| v.color == palette.north));
        assert!(approx(north[0].position, [150.0, 180.0]));
        assert!(approx(north[2].position, [190.0, 230.0]));

        // South half spans from the center to the bottom edge
        let south = &magnet[12..18];
        assert!(south.iter().all(|v| v.color == palette.south));
        assert!(approx(south[0].position, [150.0, 230.0]));
        assert!(approx(south[2].position, [190.0, 280.0]));
    }

    #[test]
    fn test_rotated_magnet_points_north_along_heading() {
        let sources = [
            DipoleSource::new(Vec2::new(200.0, 200.0), 50.0, 150.0).with_orientation(90.0),
            DipoleSource::new(Vec2::new(0.0, 0.0), 50.0, 150.0),
        ];
        let snapshot = Snapshot {
            sources: &sources,
            filings: &[],
            bounds: Bounds::default(),
        };
        let geometry = FrameGeometry::from_snapshot(&snapshot, &Palette::default());

        // Facing right, the north half lies at x >= 200
        let north = &geometry.magnet_vertices[6..12];
        assert!(north.iter().all(|v| v.position[0] >= 200.0 - 1e-3));
        let south = &geometry.magnet_vertices[12..18];
        assert!(south.iter().all(|v| v.position[0] <= 200.0 + 1e-3));
    }

    #[test]
    fn test_clear_color_is_white() {
        let color = Palette::default().clear_color();
        assert_eq!((color.r, color.g, color.b, color.a), (1.0, 1.0, 1.0, 1.0));
    }
}
