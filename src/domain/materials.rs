//! Material Definitions
//!
//! Seven cell types. Sand, Water and Wood are permanent; Fire, Smoke and Steam
//! carry a lifetime that counts down once per tick and return the cell to
//! `None` when it runs out.

use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub type MaterialId = u8;

pub const MAT_NONE: MaterialId = 0;
pub const MAT_SAND: MaterialId = 1;
pub const MAT_WATER: MaterialId = 2;
pub const MAT_WOOD: MaterialId = 3;
pub const MAT_FIRE: MaterialId = 4;
pub const MAT_SMOKE: MaterialId = 5;
pub const MAT_STEAM: MaterialId = 6;

pub const MATERIAL_COUNT: usize = 7;

const FIRE_LIFETIME: Range<u16> = 200..250;
const GAS_LIFETIME: Range<u16> = 100..150;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[default]
    None = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
    Fire = 4,
    Smoke = 5,
    Steam = 6,
}

impl Material {
    /// Materials a user can paint, in number-key order (key 1 = Sand).
    pub const PAINTABLE: [Material; 6] = [
        Material::Sand,
        Material::Water,
        Material::Wood,
        Material::Fire,
        Material::Smoke,
        Material::Steam,
    ];

    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    pub fn from_id(id: MaterialId) -> Option<Material> {
        match id {
            MAT_NONE => Some(Material::None),
            MAT_SAND => Some(Material::Sand),
            MAT_WATER => Some(Material::Water),
            MAT_WOOD => Some(Material::Wood),
            MAT_FIRE => Some(Material::Fire),
            MAT_SMOKE => Some(Material::Smoke),
            MAT_STEAM => Some(Material::Steam),
            _ => None,
        }
    }

    /// Number key 1..=6 -> paintable material. Anything else is not a selection.
    pub fn from_key(key: u32) -> Option<Material> {
        let idx = key.checked_sub(1)? as usize;
        Self::PAINTABLE.get(idx).copied()
    }

    /// Inverse of [`Material::from_key`]; `None` has no key.
    pub fn key(self) -> Option<u32> {
        Self::PAINTABLE
            .iter()
            .position(|&m| m == self)
            .map(|i| i as u32 + 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::None => "None",
            Material::Sand => "Sand",
            Material::Water => "Water",
            Material::Wood => "Wood",
            Material::Fire => "Fire",
            Material::Smoke => "Smoke",
            Material::Steam => "Steam",
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Material::None
    }

    /// Fire, Smoke and Steam burn out; everything else lives forever.
    #[inline]
    pub fn decays(self) -> bool {
        matches!(self, Material::Fire | Material::Smoke | Material::Steam)
    }

    /// Cells a rising gas may bubble through. Sand and Wood block the column.
    #[inline]
    pub fn is_permeable(self) -> bool {
        matches!(
            self,
            Material::None | Material::Fire | Material::Water | Material::Smoke | Material::Steam
        )
    }

    /// Lifetime range for freshly created cells; `None` for non-decaying materials.
    pub fn lifetime_range(self) -> Option<Range<u16>> {
        match self {
            Material::Fire => Some(FIRE_LIFETIME),
            Material::Smoke | Material::Steam => Some(GAS_LIFETIME),
            _ => None,
        }
    }

    /// Draw the starting lifetime for a cell that just became `self`.
    pub fn roll_lifetime<R: Rng + ?Sized>(self, rng: &mut R) -> u16 {
        match self.lifetime_range() {
            Some(range) => rng.gen_range(range),
            None => 0,
        }
    }
}

impl TryFrom<MaterialId> for Material {
    type Error = String;

    fn try_from(id: MaterialId) -> Result<Self, Self::Error> {
        Material::from_id(id).ok_or_else(|| format!("unknown material id {}", id))
    }
}
