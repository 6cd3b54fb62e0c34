//! Ray picking over the orbiting nodes and the hover emphasis state machine.

use crate::camera::Ray;
use crate::input::PointerState;
use glam::{Affine3A, Vec3};
use smallvec::SmallVec;

/// Tooltip offset from the pointer, in CSS pixels.
pub const TOOLTIP_OFFSET_PX: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

/// Something the hover picker can test and emphasise.
pub trait Pickable {
    /// Object space to parent space.
    fn transform(&self) -> Affine3A;
    /// Radius of the bounding sphere in object space.
    fn bounding_radius(&self) -> f32;
    fn label(&self) -> &str;
    fn set_highlighted(&mut self, highlighted: bool);
    fn is_highlighted(&self) -> bool;

    fn bounds(&self) -> BoundingSphere {
        let t = self.transform();
        let max_scale = t
            .matrix3
            .x_axis
            .length()
            .max(t.matrix3.y_axis.length())
            .max(t.matrix3.z_axis.length());
        BoundingSphere {
            center: Vec3::from(t.translation),
            radius: self.bounding_radius() * max_scale,
        }
    }
}

/// All hits along `ray`, nearest first.
pub fn hits<P: Pickable>(ray: &Ray, objects: &[P]) -> SmallVec<[(usize, f32); 8]> {
    let mut out: SmallVec<[(usize, f32); 8]> = objects
        .iter()
        .enumerate()
        .filter_map(|(i, o)| {
            let b = o.bounds();
            ray.intersect_sphere(b.center, b.radius).map(|t| (i, t))
        })
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1));
    out
}

#[inline]
pub fn nearest_hit<P: Pickable>(ray: &Ray, objects: &[P]) -> Option<usize> {
    hits(ray, objects).first().map(|&(i, _)| i)
}

/// What the tooltip overlay should show after a picker pass.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipUpdate {
    Show { text: String, x: f32, y: f32 },
    Clear,
}

/// Tracks the single hovered object by index; it never owns the object.
#[derive(Clone, Debug, Default)]
pub struct HoverPicker {
    hovered: Option<usize>,
}

impl HoverPicker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Re-pick along `ray`, moving emphasis so at most one object carries it.
    pub fn update<P: Pickable>(&mut self, ray: &Ray, objects: &mut [P]) -> Option<usize> {
        let hit = nearest_hit(ray, objects);

        if let Some(prev) = self.hovered {
            if Some(prev) != hit {
                if let Some(obj) = objects.get_mut(prev) {
                    obj.set_highlighted(false);
                }
                log::debug!("[hover] leave {}", prev);
                self.hovered = None;
            }
        }

        if let Some(i) = hit {
            if self.hovered != Some(i) {
                objects[i].set_highlighted(true);
                log::debug!("[hover] enter {} ({})", i, objects[i].label());
                self.hovered = Some(i);
            }
        }

        self.hovered
    }

    pub fn tooltip<P: Pickable>(&self, objects: &[P], pointer: &PointerState) -> TooltipUpdate {
        match self.hovered.and_then(|i| objects.get(i)) {
            Some(obj) if pointer.active => TooltipUpdate::Show {
                text: obj.label().to_string(),
                x: pointer.pixel.x + TOOLTIP_OFFSET_PX,
                y: pointer.pixel.y + TOOLTIP_OFFSET_PX,
            },
            _ => TooltipUpdate::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    struct Ball {
        at: Vec3,
        lit: bool,
    }

    impl Pickable for Ball {
        fn transform(&self) -> Affine3A {
            let s = if self.lit { 2.0 } else { 1.0 };
            Affine3A::from_scale_rotation_translation(Vec3::splat(s), glam::Quat::IDENTITY, self.at)
        }
        fn bounding_radius(&self) -> f32 {
            0.5
        }
        fn label(&self) -> &str {
            "ball"
        }
        fn set_highlighted(&mut self, highlighted: bool) {
            self.lit = highlighted;
        }
        fn is_highlighted(&self) -> bool {
            self.lit
        }
    }

    fn balls() -> Vec<Ball> {
        vec![
            Ball { at: Vec3::new(0.0, 0.0, -5.0), lit: false },
            Ball { at: Vec3::new(0.0, 0.0, -3.0), lit: false },
            Ball { at: Vec3::new(3.0, 0.0, -3.0), lit: false },
        ]
    }

    #[test]
    fn nearest_of_overlapping_hits_wins() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let b = balls();
        let all = hits(&ray, &b);
        assert_eq!(all.iter().map(|h| h.0).collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(nearest_hit(&ray, &b), Some(1));
    }

    #[test]
    fn bounds_follow_scale() {
        let ball = Ball { at: Vec3::ONE, lit: true };
        assert_eq!(ball.bounds(), BoundingSphere { center: Vec3::ONE, radius: 1.0 });
    }

    #[test]
    fn tooltip_needs_active_pointer() {
        let mut b = balls();
        let mut picker = HoverPicker::new();
        picker.update(&Ray::new(Vec3::ZERO, Vec3::NEG_Z), &mut b);
        let mut pointer = PointerState { ndc: Vec2::ZERO, pixel: Vec2::new(10.0, 20.0), active: true };
        assert_eq!(
            picker.tooltip(&b, &pointer),
            TooltipUpdate::Show { text: "ball".into(), x: 22.0, y: 32.0 }
        );
        pointer.active = false;
        assert_eq!(picker.tooltip(&b, &pointer), TooltipUpdate::Clear);
    }
}
