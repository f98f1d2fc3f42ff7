mod movement;
mod utils;

pub use movement::{Ghost, Movable, PackMan};

use crate::types::{BoardEvent, EndReason, GameSetup, GhostColor, Vec2};

#[derive(Clone, Debug)]
pub struct Board {
    board_size: i32,
    move_count: usize,
    packman: PackMan,
    ghosts: Vec<Ghost>,

    tick_counter: u64,
    ended: bool,
    end_reason: Option<EndReason>,
    path_exhausted_emitted: bool,
    events: Vec<BoardEvent>,
}

impl Board {
    /// Builds a board from a parsed setup. Ghosts keep the setup order.
    pub fn from_setup(setup: GameSetup) -> Self {
        let GameSetup {
            board_size,
            packman,
            ghosts,
            moves,
        } = setup;
        let move_count = moves.len();
        let ghosts = ghosts
            .into_iter()
            .map(|start| Ghost::new(start.color, start.position))
            .collect();
        Self::new(board_size, PackMan::new(packman, moves), ghosts, move_count)
    }

    pub fn new(board_size: i32, packman: PackMan, ghosts: Vec<Ghost>, move_count: usize) -> Self {
        Self {
            board_size,
            move_count,
            packman,
            ghosts,
            tick_counter: 0,
            ended: false,
            end_reason: None,
            path_exhausted_emitted: false,
            events: Vec::new(),
        }
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn packman(&self) -> &PackMan {
        &self.packman
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    /// Number of ticks executed so far.
    pub fn tick(&self) -> u64 {
        self.tick_counter
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Runs until a collision or until every scripted tick has been played.
    pub fn play(&mut self) -> EndReason {
        while self.step() {}
        self.end_reason.unwrap_or(EndReason::MovesExhausted)
    }

    /// Advances one tick. Returns `false` once the board has halted; a halted
    /// board is left untouched.
    pub fn step(&mut self) -> bool {
        if self.ended {
            return false;
        }
        // Pieces may already overlap before anything moves.
        if self.tick_counter == 0 && self.check_collision() {
            return false;
        }
        if self.tick_counter >= self.move_count as u64 {
            self.finish(EndReason::MovesExhausted);
            return false;
        }

        self.tick_counter += 1;
        self.packman.step(self.board_size);
        for ghost in &mut self.ghosts {
            ghost.step(self.board_size);
        }

        if !self.path_exhausted_emitted && self.packman.path_exhausted() {
            self.path_exhausted_emitted = true;
            if self.tick_counter < self.move_count as u64 {
                self.events.push(BoardEvent::PathExhausted {
                    tick: self.tick_counter,
                });
            }
        }

        if self.check_collision() {
            return false;
        }
        if self.tick_counter >= self.move_count as u64 {
            self.finish(EndReason::MovesExhausted);
            return false;
        }
        true
    }

    pub fn has_collision(&self) -> bool {
        let target = self.packman.position();
        self.ghosts.iter().any(|ghost| ghost.position() == target)
    }

    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    fn check_collision(&mut self) -> bool {
        if !self.has_collision() {
            return false;
        }
        let Vec2 { x, y } = self.packman.position();
        let colors = self.colliding_colors();
        self.events.push(BoardEvent::Collision {
            tick: self.tick_counter,
            x,
            y,
            colors,
        });
        self.finish(EndReason::Collision {
            tick: self.tick_counter,
        });
        true
    }

    fn colliding_colors(&self) -> Vec<GhostColor> {
        let target = self.packman.position();
        let mut colors: Vec<GhostColor> = self
            .ghosts
            .iter()
            .filter(|ghost| ghost.position() == target)
            .map(Ghost::color)
            .collect();
        colors.sort();
        colors.dedup();
        colors
    }

    fn finish(&mut self, reason: EndReason) {
        self.ended = true;
        self.end_reason = Some(reason);
    }
}
