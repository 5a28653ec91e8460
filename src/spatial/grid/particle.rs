use crate::domain::materials::Material;

/// Snapshot of one cell.
///
/// The grid stores these fields in separate arrays; `Particle` is the value
/// form used when a whole cell is read, written or relocated at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Particle {
    pub material: Material,
    pub lifetime: u16,
    pub processed: bool,
}

impl Particle {
    pub const EMPTY: Particle = Particle {
        material: Material::None,
        lifetime: 0,
        processed: false,
    };

    pub fn new(material: Material, lifetime: u16) -> Self {
        // Only Fire, Smoke and Steam carry a lifetime
        let lifetime = if material.decays() { lifetime } else { 0 };
        Self {
            material,
            lifetime,
            processed: false,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.material.is_none()
    }
}
