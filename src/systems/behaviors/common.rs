use super::UpdateContext;

/// Count the cell's lifetime down by one tick. When it runs out the cell is
/// emptied and `true` is returned; the caller must stop processing it.
#[inline]
pub fn decay(ctx: &mut UpdateContext) -> bool {
    let life = ctx.grid.lifetime(ctx.x, ctx.y).saturating_sub(1);
    if life == 0 {
        ctx.grid.clear_cell(ctx.x, ctx.y);
        ctx.expired = true;
        return true;
    }
    ctx.grid.set_lifetime(ctx.x, ctx.y, life);
    false
}

/// Straight down, then down-diagonal toward the bias side, then the other
/// down-diagonal. Nothing is tried on the bottom row.
#[inline]
pub fn fall(ctx: &mut UpdateContext) -> bool {
    if ctx.y == 0 {
        return false;
    }
    let lr = ctx.left_or_right;
    ctx.try_move_by(0, -1) || ctx.try_move_by(lr, -1) || ctx.try_move_by(-lr, -1)
}

/// Fall, or failing that slide one cell sideways (bias side first).
#[inline]
pub fn flow(ctx: &mut UpdateContext) -> bool {
    if fall(ctx) {
        return true;
    }
    let lr = ctx.left_or_right;
    ctx.try_move_by(lr, 0) || ctx.try_move_by(-lr, 0)
}
