use serde::{Deserialize, Serialize};

use crate::core::Vec3;

use super::config::ConfigError;

/// A camera position, relative to the piece being captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
}

/// Closed interval `[start, end]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f32,
    pub end: f32,
}

impl AxisRange {
    #[must_use]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Returns exactly `n` evenly spaced values from `start` to `end` inclusive.
    ///
    /// Values are interpolated from their index rather than accumulated, so the
    /// first and last values are always exactly `start` and `end`.
    #[expect(clippy::cast_precision_loss)]
    fn steps(self, n: usize) -> impl Iterator<Item = f32> + Clone {
        let last = (n - 1) as f32;
        (0..n).map(move |i| {
            if i == n - 1 {
                self.end
            } else {
                self.start + (self.end - self.start) * (i as f32) / last
            }
        })
    }
}

/// Bounds of the camera sampling grid.
///
/// The default bounds span `x, z ∈ [-0.5, 0.5]` and `y ∈ [2.0, 3.0]`, a
/// square patch above the piece.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBounds {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl Default for CameraBounds {
    fn default() -> Self {
        Self {
            x: AxisRange::new(-0.5, 0.5),
            y: AxisRange::new(2.0, 3.0),
            z: AxisRange::new(-0.5, 0.5),
        }
    }
}

impl CameraBounds {
    /// Generates an `n × n × n` grid of poses.
    ///
    /// Poses are ordered with x in the outer loop, z in the middle loop and y
    /// in the inner loop.
    pub fn grid(&self, n: usize) -> Result<Vec<CameraPose>, ConfigError> {
        if n < 2 {
            return Err(ConfigError::CameraSubdivisions { subdivisions: n });
        }
        let mut poses = Vec::with_capacity(n * n * n);
        for x in self.x.steps(n) {
            for z in self.z.steps(n) {
                for y in self.y.steps(n) {
                    poses.push(CameraPose {
                        position: Vec3::new(x, y, z),
                    });
                }
            }
        }
        Ok(poses)
    }
}

/// Generates the camera grid over the default [`CameraBounds`].
///
/// # Example
///
/// ```
/// use pieceshot_engine::engine::camera_grid;
///
/// let poses = camera_grid(3).unwrap();
/// assert_eq!(poses.len(), 27);
/// assert!(camera_grid(1).is_err());
/// ```
pub fn camera_grid(n: usize) -> Result<Vec<CameraPose>, ConfigError> {
    CameraBounds::default().grid(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_n_cubed_poses() {
        for n in 2..=6 {
            assert_eq!(camera_grid(n).unwrap().len(), n * n * n);
        }
    }

    #[test]
    fn test_grid_rejects_fewer_than_two_subdivisions() {
        for n in [0, 1] {
            assert!(matches!(
                camera_grid(n),
                Err(ConfigError::CameraSubdivisions { subdivisions }) if subdivisions == n
            ));
        }
    }

    #[test]
    fn test_grid_order_and_endpoints() {
        let poses = camera_grid(2).unwrap();
        let positions: Vec<_> = poses
            .iter()
            .map(|p| (p.position.x, p.position.z, p.position.y))
            .collect();
        assert_eq!(
            positions,
            [
                (-0.5, -0.5, 2.0),
                (-0.5, -0.5, 3.0),
                (-0.5, 0.5, 2.0),
                (-0.5, 0.5, 3.0),
                (0.5, -0.5, 2.0),
                (0.5, -0.5, 3.0),
                (0.5, 0.5, 2.0),
                (0.5, 0.5, 3.0),
            ]
        );
    }

    #[test]
    fn test_grid_includes_boundaries_exactly() {
        // 0.1 steps do not accumulate exactly in f32.
        let poses = camera_grid(11).unwrap();
        let first = poses.first().unwrap().position;
        let last = poses.last().unwrap().position;
        assert_eq!(first, Vec3::new(-0.5, 2.0, -0.5));
        assert_eq!(last, Vec3::new(0.5, 3.0, 0.5));
        let ys: Vec<_> = poses.iter().take(11).map(|p| p.position.y).collect();
        assert!((ys[5] - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = CameraBounds {
            x: AxisRange::new(0.0, 1.0),
            y: AxisRange::new(1.0, 1.0),
            z: AxisRange::new(0.0, 0.0),
        };
        let poses = bounds.grid(3).unwrap();
        assert_eq!(poses.len(), 27);
        assert_eq!(poses[9].position, Vec3::new(0.5, 1.0, 0.0));
    }
}
