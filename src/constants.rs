/// Every ghost starts heading toward the lower coordinate on its axis.
pub const INITIAL_GHOST_DIRECTION: i32 = -1;

pub const MAX_BOARD_SIZE: i32 = 1_000_000;
pub const MAX_MOVE_COUNT: usize = 10_000_000;
pub const MAX_GHOST_COUNT: usize = 1_000_000;
/// Upper bound on ghosts × moves, the number of ghost steps a run may take.
pub const MAX_GHOST_STEPS: usize = 100_000_000;
