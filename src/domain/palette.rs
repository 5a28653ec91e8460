//! Material colors
//!
//! Packed as ABGR u32 (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA]) so the
//! pixel buffer can be uploaded as an RGBA8 texture or copied straight into a
//! canvas ImageData without swizzling.

use super::materials::Material;

/// Alpha used for the brush preview drawn over empty cells.
pub const PREVIEW_ALPHA: u8 = 128;

#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

#[inline]
pub const fn unpack_rgba(color: u32) -> [u8; 4] {
    color.to_le_bytes()
}

/// Same color with its alpha channel replaced.
#[inline]
pub const fn with_alpha(color: u32, a: u8) -> u32 {
    (color & 0x00FF_FFFF) | ((a as u32) << 24)
}

const SAND_COLOR: u32 = pack_rgba(194, 178, 128, 255);
const WATER_COLOR: u32 = pack_rgba(0, 105, 148, 255);
// Wood is drawn slightly translucent
const WOOD_COLOR: u32 = pack_rgba(111, 76, 30, 135);
const FIRE_COLOR: u32 = pack_rgba(226, 88, 34, 255);
const SMOKE_COLOR: u32 = pack_rgba(131, 131, 131, 255);
const STEAM_COLOR: u32 = pack_rgba(245, 245, 245, 255);

/// Cell color for a material. Empty cells are fully transparent.
#[inline]
pub const fn material_color(material: Material) -> u32 {
    match material {
        Material::None => 0,
        Material::Sand => SAND_COLOR,
        Material::Water => WATER_COLOR,
        Material::Wood => WOOD_COLOR,
        Material::Fire => FIRE_COLOR,
        Material::Smoke => SMOKE_COLOR,
        Material::Steam => STEAM_COLOR,
    }
}

/// Half-alpha variant shown where the brush would paint.
#[inline]
pub const fn preview_color(material: Material) -> u32 {
    match material {
        Material::None => 0,
        other => with_alpha(material_color(other), PREVIEW_ALPHA),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_as_rgba_bytes() {
        assert_eq!(unpack_rgba(material_color(Material::Sand)), [194, 178, 128, 255]);
        assert_eq!(unpack_rgba(material_color(Material::Wood)), [111, 76, 30, 135]);
        assert_eq!(material_color(Material::None), 0);
    }

    #[test]
    fn preview_keeps_rgb_and_halves_alpha() {
        for m in Material::PAINTABLE {
            let [r, g, b, a] = unpack_rgba(preview_color(m));
            let [r0, g0, b0, _] = unpack_rgba(material_color(m));
            assert_eq!((r, g, b), (r0, g0, b0));
            assert_eq!(a, PREVIEW_ALPHA);
        }
        assert_eq!(preview_color(Material::None), 0);
    }
}
