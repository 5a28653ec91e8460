use super::super::UpdateContext;

/// Rows skipped per probe while bubbling up the column.
pub(super) const BUBBLE_STRIDE: u32 = 5;

/// Probe the column above the cell every `BUBBLE_STRIDE` rows, starting one
/// row up. The first empty cell found is the target. The search gives up at
/// the first probe that is not permeable (sand, wood) or at the top edge.
pub(super) fn bubble_target(ctx: &UpdateContext) -> Option<(u32, u32)> {
    let x = ctx.x;
    let mut j = ctx.y + 1;
    while j < ctx.grid.height() {
        let above = ctx.grid.material(x, j);
        if above.is_none() {
            return Some((x, j));
        }
        if !above.is_permeable() {
            return None;
        }
        j += BUBBLE_STRIDE;
    }
    None
}
