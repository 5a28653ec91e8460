use super::super::UpdateContext;

/// Up, then the two up-diagonals (bias side first), then sideways.
/// The upward attempts are skipped on the top row.
#[inline]
pub(super) fn rise(ctx: &mut UpdateContext) -> bool {
    let lr = ctx.left_or_right;
    if ctx.y + 1 < ctx.grid.height()
        && (ctx.try_move_by(0, 1) || ctx.try_move_by(lr, 1) || ctx.try_move_by(-lr, 1))
    {
        return true;
    }
    ctx.try_move_by(lr, 0) || ctx.try_move_by(-lr, 0)
}
