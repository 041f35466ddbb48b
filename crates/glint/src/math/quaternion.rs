use glam::Vec3;

pub use glam::Quat;

use super::float::FloatAsExt;

/// Builds the rotation that maps `forward` onto `direction`.
pub struct LookAt {
    pub direction: Vec3,
    pub forward: Vec3,
}

impl From<LookAt> for Quat {
    fn from(this: LookAt) -> Self {
        let direction = this.direction.normalize();
        let forward = this.forward.normalize();

        let cos = forward.dot(direction);
        let angle = cos.acos();
        match (cos.abs() - 1.0).into_non_zero(0.01) {
            Some(_non_0deg_cos) => {
                let axe = forward.cross(direction);
                Self::from_axis_angle(axe.normalize(), angle)
            }
            // forward and direction are (anti)parallel, any perpendicular axis does
            None => Self::from_axis_angle(Vec3::Y, angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LookAt, Quat};
    use glam::Vec3;

    #[test]
    fn look_at_quarter_turn() {
        let quat: Quat = LookAt {
            direction: Vec3::X,
            forward: Vec3::NEG_Z,
        }
        .into();

        assert!(quat.mul_vec3(Vec3::NEG_Z).distance(Vec3::X) < 1e-6);
    }
}
