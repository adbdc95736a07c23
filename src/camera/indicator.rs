//! Visual indicator for the trackball sphere.
//!
//! The controller does not own GPU resources; it hands renderers a uniform
//! block and a unit line-list they can upload however they like.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer for drawing the trackball indicator.
pub struct IndicatorUniform {
    /// Indicator projection × model (pull-back, rotation, radius scale).
    pub view_proj: [[f32; 4]; 4],
    /// Trackball radius in normalized screen units.
    pub radius: f32,
    /// Current zoom factor.
    pub zoom: f32,
    /// 1 while a rotation drag is active, 0 otherwise.
    pub active: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: u32,
}

impl IndicatorUniform {
    /// Pack the indicator parameters for upload.
    #[must_use]
    pub fn new(view_proj: Mat4, radius: f32, zoom: f32, active: bool) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            radius,
            zoom,
            active: u32::from(active),
            _pad: 0,
        }
    }
}

impl Default for IndicatorUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, 0.0, 1.0, false)
    }
}

/// Three unit great circles (XY, YZ, XZ planes) as line-list vertices.
///
/// Each circle contributes `segments` line segments, i.e. `2 * segments`
/// vertices. Fewer than three segments yields no geometry.
#[must_use]
pub fn circle_line_list(segments: u32) -> Vec<[f32; 3]> {
    if segments < 3 {
        return Vec::new();
    }
    let planes: [fn(f32, f32) -> Vec3; 3] = [
        |c, s| Vec3::new(c, s, 0.0),
        |c, s| Vec3::new(0.0, c, s),
        |c, s| Vec3::new(c, 0.0, s),
    ];
    let step = TAU / segments as f32;
    let mut vertices = Vec::with_capacity(planes.len() * 2 * segments as usize);
    for plane in planes {
        for i in 0..segments {
            let a0 = step * i as f32;
            let a1 = step * (i + 1) as f32;
            vertices.push(plane(a0.cos(), a0.sin()).to_array());
            vertices.push(plane(a1.cos(), a1.sin()).to_array());
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<IndicatorUniform>(), 80);
        let uniform = IndicatorUniform::new(Mat4::IDENTITY, 0.8, 2.0, true);
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 80);
        assert_eq!(uniform.active, 1);
    }

    #[test]
    fn circles_lie_on_unit_sphere() {
        let vertices = circle_line_list(32);
        assert_eq!(vertices.len(), 3 * 2 * 32);
        for v in &vertices {
            assert!((Vec3::from_array(*v).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn segments_close_each_circle() {
        let vertices = circle_line_list(8);
        // Last vertex of the first circle returns to its first vertex.
        let first = Vec3::from_array(vertices[0]);
        let last = Vec3::from_array(vertices[15]);
        assert!((first - last).length() < 1e-5);
    }

    #[test]
    fn too_few_segments_is_empty() {
        assert!(circle_line_list(2).is_empty());
    }
}
