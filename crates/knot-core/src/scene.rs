use crate::camera::Camera;
use crate::color::hex_rgb;
use crate::constants::*;
use crate::error::RenderError;
use crate::geometry;
use crate::pick::Pickable;
use glam::{Affine3A, EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// Surface description consumed by the renderer. Colours are sRGB `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub opacity: f32,
}

impl Material {
    pub fn knot() -> Self {
        Self {
            color: hex_rgb(0x9b8cff),
            roughness: 0.35,
            metalness: 0.55,
            emissive: hex_rgb(0x120a22),
            emissive_intensity: 0.25,
            opacity: 1.0,
        }
    }

    pub fn node(base_color: u32) -> Self {
        Self {
            color: hex_rgb(base_color),
            roughness: 0.25,
            metalness: 0.35,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            opacity: 1.0,
        }
    }

    pub fn stars() -> Self {
        Self {
            color: Vec3::ONE,
            roughness: 1.0,
            metalness: 0.0,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            opacity: STAR_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emphasis {
    #[default]
    Neutral,
    Highlighted,
}

/// One orbiting, hoverable skill marker.
#[derive(Clone, Debug)]
pub struct SkillNode {
    label: String,
    base_position: Vec3,
    pub position: Vec3,
    scale: f32,
    emphasis: Emphasis,
    material: Material,
}

impl SkillNode {
    pub fn new(label: impl Into<String>, base_color: u32, base_position: Vec3) -> Self {
        Self {
            label: label.into(),
            base_position,
            position: base_position,
            scale: 1.0,
            emphasis: Emphasis::Neutral,
            material: Material::node(base_color),
        }
    }

    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn material(&self) -> &Material {
        &self.material
    }
}

impl Pickable for SkillNode {
    fn transform(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(Vec3::splat(self.scale), Quat::IDENTITY, self.position)
    }

    fn bounding_radius(&self) -> f32 {
        NODE_RADIUS
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        if highlighted {
            self.scale = HOVER_SCALE;
            self.emphasis = Emphasis::Highlighted;
            self.material.emissive = hex_rgb(HOVER_EMISSIVE_HEX);
            self.material.emissive_intensity = HOVER_EMISSIVE_INTENSITY;
        } else {
            self.scale = 1.0;
            self.emphasis = Emphasis::Neutral;
            self.material.emissive = Vec3::ZERO;
            self.material.emissive_intensity = 0.0;
        }
    }

    fn is_highlighted(&self) -> bool {
        self.emphasis == Emphasis::Highlighted
    }
}

/// Orbit slot `index` of `count`: a ring in XZ with a gentle vertical wave.
pub fn node_base_position(index: usize, count: usize) -> Vec3 {
    let t = index as f32 / count.max(1) as f32 * TAU;
    Vec3::new(
        t.cos() * NODE_ORBIT_RADIUS,
        (t * NODE_ORBIT_Y_FREQ).sin() * NODE_ORBIT_Y_AMPLITUDE,
        t.sin() * NODE_ORBIT_RADIUS,
    )
}

#[inline]
fn euler_xyz(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Rotating parent of the knot and the nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Group {
    /// Euler angles, applied in XYZ order.
    pub rotation: Vec3,
}

impl Group {
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_quat(euler_xyz(self.rotation))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centerpiece {
    pub position: Vec3,
    pub rotation: Vec3,
    pub material: Material,
}

impl Default for Centerpiece {
    fn default() -> Self {
        Self {
            position: vec3_of(KNOT_POSITION),
            rotation: Vec3::ZERO,
            material: Material::knot(),
        }
    }
}

impl Centerpiece {
    pub fn transform(&self) -> Affine3A {
        Affine3A::from_rotation_translation(euler_xyz(self.rotation), self.position)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub points: Vec<Vec3>,
    pub rotation_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Light sits at `position` and shines toward the origin.
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub key: DirectionalLight,
    pub rim: DirectionalLight,
    pub fog_color: Vec3,
    pub fog_density: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            key: DirectionalLight {
                color: hex_rgb(KEY_LIGHT_HEX),
                intensity: KEY_LIGHT_INTENSITY,
                position: vec3_of(KEY_LIGHT_POSITION),
            },
            rim: DirectionalLight {
                color: hex_rgb(RIM_LIGHT_HEX),
                intensity: RIM_LIGHT_INTENSITY,
                position: vec3_of(RIM_LIGHT_POSITION),
            },
            fog_color: hex_rgb(FOG_HEX),
            fog_density: FOG_DENSITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Knot,
    Node,
    Stars,
}

/// One draw call worth of scene content.
#[derive(Clone, Copy, Debug)]
pub struct Drawable<'a> {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub material: &'a Material,
}

/// What a renderer needs from a scene: a camera, lights and things to draw.
pub trait RenderableScene {
    fn camera(&self) -> &Camera;
    fn lighting(&self) -> &Lighting;
    fn drawables(&self) -> Vec<Drawable<'_>>;
}

/// Anything that can turn a [`RenderableScene`] into pixels.
pub trait SceneRenderer {
    fn render(&mut self, scene: &dyn RenderableScene) -> Result<(), RenderError>;
}

/// The whole background scene.
#[derive(Clone, Debug)]
pub struct SkillScene {
    pub camera: Camera,
    pub group: Group,
    pub knot: Centerpiece,
    pub nodes: Vec<SkillNode>,
    pub stars: Starfield,
    pub lighting: Lighting,
    stars_material: Material,
}

impl SkillScene {
    pub fn new(skills: &[(&str, u32)], star_points: Vec<Vec3>) -> Self {
        let nodes = skills
            .iter()
            .enumerate()
            .map(|(i, (label, color))| {
                SkillNode::new(*label, *color, node_base_position(i, skills.len()))
            })
            .collect();
        Self {
            camera: Camera::default(),
            group: Group::default(),
            knot: Centerpiece::default(),
            nodes,
            stars: Starfield {
                points: star_points,
                rotation_y: 0.0,
            },
            lighting: Lighting::default(),
            stars_material: Material::stars(),
        }
    }

    /// Default skills and a freshly scattered starfield.
    pub fn with_default_skills<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stars = geometry::starfield(STAR_COUNT, vec3_of(STAR_EXTENT), rng);
        Self::new(&DEFAULT_SKILLS, stars)
    }

    pub fn highlighted_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_highlighted()).count()
    }
}

impl RenderableScene for SkillScene {
    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    fn drawables(&self) -> Vec<Drawable<'_>> {
        let group = self.group.transform();
        let mut out = Vec::with_capacity(self.nodes.len() + 2);
        out.push(Drawable {
            mesh: MeshKind::Knot,
            model: Mat4::from(group * self.knot.transform()),
            material: &self.knot.material,
        });
        for node in &self.nodes {
            out.push(Drawable {
                mesh: MeshKind::Node,
                model: Mat4::from(group * node.transform()),
                material: node.material(),
            });
        }
        // transparent, so after everything opaque
        out.push(Drawable {
            mesh: MeshKind::Stars,
            model: Mat4::from_rotation_y(self.stars.rotation_y),
            material: &self.stars_material,
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_scene_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = SkillScene::with_default_skills(&mut rng);
        assert_eq!(scene.nodes.len(), DEFAULT_SKILLS.len());
        assert_eq!(scene.stars.points.len(), STAR_COUNT);
        let draws = scene.drawables();
        assert_eq!(draws.len(), DEFAULT_SKILLS.len() + 2);
        assert_eq!(draws[0].mesh, MeshKind::Knot);
        assert_eq!(draws.last().map(|d| d.mesh), Some(MeshKind::Stars));
        assert_eq!(scene.highlighted_count(), 0);
    }

    #[test]
    fn nodes_sit_on_the_orbit_ring() {
        for i in 0..6 {
            let p = node_base_position(i, 6);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - NODE_ORBIT_RADIUS).abs() < 1e-5);
            assert!(p.y.abs() <= NODE_ORBIT_Y_AMPLITUDE + 1e-6);
        }
        assert_eq!(node_base_position(0, 6), Vec3::new(NODE_ORBIT_RADIUS, 0.0, 0.0));
    }

    #[test]
    fn highlight_toggles_scale_and_emissive() {
        let mut node = SkillNode::new("Rust", 0x18d7ff, Vec3::X);
        node.set_highlighted(true);
        assert_eq!(node.scale(), HOVER_SCALE);
        assert_eq!(node.material().emissive, Vec3::ONE);
        assert_eq!(node.material().emissive_intensity, HOVER_EMISSIVE_INTENSITY);
        assert!((node.bounds().radius - NODE_RADIUS * HOVER_SCALE).abs() < 1e-6);
        node.set_highlighted(false);
        assert_eq!(node.scale(), 1.0);
        assert_eq!(node.material().emissive, Vec3::ZERO);
        assert_eq!(node.material().emissive_intensity, 0.0);
        assert_eq!(node.emphasis(), Emphasis::Neutral);
    }

    #[test]
    fn group_rotation_moves_children() {
        let mut scene = SkillScene::new(&[("A", 0xffffff)], Vec::new());
        scene.group.rotation.y = std::f32::consts::FRAC_PI_2;
        let node_draw = scene
            .drawables()
            .into_iter()
            .find(|d| d.mesh == MeshKind::Node)
            .unwrap();
        let world = node_draw.model.transform_point3(Vec3::ZERO);
        // (1.65, 0, 0) rotated a quarter turn about Y lands on -Z
        assert!((world - Vec3::new(0.0, 0.0, -NODE_ORBIT_RADIUS)).length() < 1e-4);
    }
}
