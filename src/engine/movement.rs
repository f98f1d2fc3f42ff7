use crate::constants::INITIAL_GHOST_DIRECTION;
use crate::types::{Direction, GhostColor, Vec2};

use super::utils::{in_bounds, offset, on_board};

/// Anything that advances by one step per tick on a square board.
pub trait Movable {
    fn position(&self) -> Vec2;
    fn step(&mut self, board_size: i32);
}

/// Follows its scripted path, one command per tick, clamped at the board edges.
#[derive(Clone, Debug)]
pub struct PackMan {
    position: Vec2,
    path: Vec<Direction>,
    cursor: usize,
}

impl PackMan {
    pub fn new(position: Vec2, path: Vec<Direction>) -> Self {
        Self {
            position,
            path,
            cursor: 0,
        }
    }

    pub fn remaining_moves(&self) -> usize {
        self.path.len() - self.cursor
    }

    pub fn path_exhausted(&self) -> bool {
        self.cursor >= self.path.len()
    }
}

impl Movable for PackMan {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn step(&mut self, board_size: i32) {
        let Some(&dir) = self.path.get(self.cursor) else {
            return;
        };
        self.cursor += 1;
        let next = offset(self.position, dir);
        if on_board(next, board_size) {
            self.position = next;
        }
    }
}

/// Patrols one axis, reversing when the next cell would be off the board.
/// Red ghosts patrol `x`, blue ghosts patrol `y`.
#[derive(Clone, Debug)]
pub struct Ghost {
    color: GhostColor,
    position: Vec2,
    direction: i32,
}

impl Ghost {
    pub fn new(color: GhostColor, position: Vec2) -> Self {
        Self {
            color,
            position,
            direction: INITIAL_GHOST_DIRECTION,
        }
    }

    pub fn color(&self) -> GhostColor {
        self.color
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }
}

impl Movable for Ghost {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn step(&mut self, board_size: i32) {
        let axis = self.color.axis();
        let current = self.position.axis(axis);
        let mut next = current + self.direction;
        if !in_bounds(next, board_size) {
            // Reverse and take this tick's step with the new heading.
            self.direction = -self.direction;
            next = current + self.direction;
            if !in_bounds(next, board_size) {
                // 1x1 board: nowhere to go either way.
                return;
            }
        }
        self.position.set_axis(axis, next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction::{Down, Left, Right, Up};

    fn run(packman: &mut PackMan, ticks: usize, board_size: i32) {
        for _ in 0..ticks {
            packman.step(board_size);
        }
    }

    #[test]
    fn packman_follows_path_in_order() {
        let mut packman = PackMan::new(Vec2::new(3, 3), vec![Up, Right, Down, Left, Left]);
        let mut trail = Vec::new();
        for _ in 0..5 {
            packman.step(5);
            trail.push(packman.position());
        }
        assert_eq!(
            trail,
            vec![
                Vec2::new(3, 4),
                Vec2::new(4, 4),
                Vec2::new(4, 3),
                Vec2::new(3, 3),
                Vec2::new(2, 3),
            ]
        );
    }

    #[test]
    fn packman_clamps_at_every_edge() {
        let mut packman = PackMan::new(Vec2::new(1, 1), vec![Left, Down]);
        run(&mut packman, 2, 4);
        assert_eq!(packman.position(), Vec2::new(1, 1));

        let mut packman = PackMan::new(Vec2::new(4, 4), vec![Right, Up]);
        run(&mut packman, 2, 4);
        assert_eq!(packman.position(), Vec2::new(4, 4));
    }

    #[test]
    fn clamped_command_is_still_consumed() {
        let mut packman = PackMan::new(Vec2::new(1, 2), vec![Left, Right]);
        packman.step(3);
        assert_eq!(packman.position(), Vec2::new(1, 2));
        assert_eq!(packman.remaining_moves(), 1);
        packman.step(3);
        assert_eq!(packman.position(), Vec2::new(2, 2));
    }

    #[test]
    fn exhausted_packman_stays_put() {
        let mut packman = PackMan::new(Vec2::new(2, 2), vec![Up]);
        packman.step(5);
        assert!(packman.path_exhausted());
        for _ in 0..10 {
            packman.step(5);
            assert_eq!(packman.position(), Vec2::new(2, 3));
            assert_eq!(packman.remaining_moves(), 0);
        }
    }

    #[test]
    fn red_ghost_bounces_off_left_edge_on_same_tick() {
        let mut ghost = Ghost::new(GhostColor::Red, Vec2::new(1, 4));
        assert_eq!(ghost.direction(), -1);
        ghost.step(5);
        assert_eq!(ghost.position(), Vec2::new(2, 4));
        assert_eq!(ghost.direction(), 1);
    }

    #[test]
    fn red_ghost_patrols_back_and_forth() {
        let mut ghost = Ghost::new(GhostColor::Red, Vec2::new(2, 1));
        let mut xs = Vec::new();
        for _ in 0..8 {
            ghost.step(3);
            xs.push(ghost.position().x);
            assert_eq!(ghost.position().y, 1);
        }
        assert_eq!(xs, vec![1, 2, 3, 2, 1, 2, 3, 2]);
    }

    #[test]
    fn blue_ghost_patrols_vertically() {
        let mut ghost = Ghost::new(GhostColor::Blue, Vec2::new(4, 5));
        let mut ys = Vec::new();
        for _ in 0..6 {
            ghost.step(5);
            ys.push(ghost.position().y);
            assert_eq!(ghost.position().x, 4);
        }
        assert_eq!(ys, vec![4, 3, 2, 1, 2, 3]);
    }

    #[test]
    fn ghost_on_single_cell_board_flips_in_place() {
        let mut ghost = Ghost::new(GhostColor::Blue, Vec2::new(1, 1));
        ghost.step(1);
        assert_eq!(ghost.position(), Vec2::new(1, 1));
        assert_eq!(ghost.direction(), 1);
        ghost.step(1);
        assert_eq!(ghost.position(), Vec2::new(1, 1));
        assert_eq!(ghost.direction(), -1);
    }

    #[test]
    fn ghost_on_two_cell_board_alternates() {
        let mut ghost = Ghost::new(GhostColor::Red, Vec2::new(2, 1));
        let mut xs = Vec::new();
        for _ in 0..4 {
            ghost.step(2);
            xs.push(ghost.position().x);
        }
        assert_eq!(xs, vec![1, 2, 1, 2]);
    }
}
