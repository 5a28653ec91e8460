use crate::domain::materials::Material;
use crate::domain::palette::{material_color, preview_color};
use crate::grid::Region;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Simulation;

pub(super) fn render(sim: &mut Simulation) {
    let mut pixels = std::mem::take(&mut sim.pixels);
    pixels.resize(sim.grid.size(), 0);
    render_into(sim, &mut pixels);
    sim.pixels = pixels;
}

/// Shade every cell; empty cells under the brush get the translucent
/// preview of the selected material.
pub(super) fn render_into(sim: &Simulation, out: &mut [u32]) {
    assert_eq!(
        out.len(),
        sim.grid.size(),
        "pixel buffer must hold {} texels",
        sim.grid.size()
    );

    let width = sim.grid.width() as usize;
    let brush = sim
        .grid
        .clamp_region(sim.cursor_x, sim.cursor_y, sim.brush_size, sim.brush_size);
    let preview = preview_color(sim.selected);
    let cells = sim.grid.materials();

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(width)
            .zip(cells.par_chunks(width))
            .enumerate()
            .for_each(|(y, (row, materials))| shade_row(row, materials, y as u32, &brush, preview));
    }
    #[cfg(not(feature = "parallel"))]
    {
        out.chunks_mut(width)
            .zip(cells.chunks(width))
            .enumerate()
            .for_each(|(y, (row, materials))| shade_row(row, materials, y as u32, &brush, preview));
    }
}

#[inline]
fn shade_row(row: &mut [u32], materials: &[Material], y: u32, brush: &Region, preview: u32) {
    for (x, (texel, &material)) in row.iter_mut().zip(materials).enumerate() {
        *texel = if material.is_none() && brush.contains(x as u32, y) {
            preview
        } else {
            material_color(material)
        };
    }
}
