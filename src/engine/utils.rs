use crate::types::{Direction, Vec2};

/// Board-space step for a command. Up increases `y`.
pub(super) fn offset(pos: Vec2, dir: Direction) -> Vec2 {
    match dir {
        Direction::Up => Vec2::new(pos.x, pos.y + 1),
        Direction::Down => Vec2::new(pos.x, pos.y - 1),
        Direction::Left => Vec2::new(pos.x - 1, pos.y),
        Direction::Right => Vec2::new(pos.x + 1, pos.y),
    }
}

pub(super) fn in_bounds(value: i32, board_size: i32) -> bool {
    (1..=board_size).contains(&value)
}

pub(super) fn on_board(pos: Vec2, board_size: i32) -> bool {
    in_bounds(pos.x, board_size) && in_bounds(pos.y, board_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_one_cell() {
        let pos = Vec2::new(3, 3);
        assert_eq!(offset(pos, Direction::Up), Vec2::new(3, 4));
        assert_eq!(offset(pos, Direction::Down), Vec2::new(3, 2));
        assert_eq!(offset(pos, Direction::Left), Vec2::new(2, 3));
        assert_eq!(offset(pos, Direction::Right), Vec2::new(4, 3));
    }

    #[test]
    fn on_board_is_one_indexed_and_inclusive() {
        assert!(on_board(Vec2::new(1, 1), 4));
        assert!(on_board(Vec2::new(4, 4), 4));
        assert!(!on_board(Vec2::new(0, 2), 4));
        assert!(!on_board(Vec2::new(2, 5), 4));
    }
}
