//! Agent path simulation: the fitness function of the agent-evolution GA.
//!
//! An agent walks a one-dimensional course at one of two heights. Bushes
//! block it at low height, birds at high height. [`simulate`] replays a
//! move plan against a fixed world and reports the position reached.

use crate::world::Obstacle;
use rand::Rng;

/// One step of an agent's move plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Stay,
    Right,
    Down,
    Left,
    Up,
}

impl Move {
    /// All move variants, in genome symbol order.
    pub const ALL: [Move; 5] = [Move::Stay, Move::Right, Move::Down, Move::Left, Move::Up];

    /// Draws a move uniformly over all variants.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Vertical state of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Height {
    Low,
    High,
}

impl Height {
    /// The obstacle kind that blocks horizontal movement at this height.
    fn barrier(self) -> Obstacle {
        match self {
            Height::Low => Obstacle::Bush,
            Height::High => Obstacle::Bird,
        }
    }
}

/// Replays a move plan and returns the horizontal position reached
/// (0-indexed).
///
/// The agent starts at position 0, low. Blocked or impossible moves are
/// silently absorbed; there are no error paths. The first time
/// `position + 1` equals the world length the agent has touched the far
/// end and the current position is returned immediately, ignoring any
/// remaining moves. Otherwise the position after the last move is
/// returned.
pub fn simulate(world: &[Obstacle], moves: &[Move]) -> usize {
    if world.is_empty() {
        return 0;
    }

    let mut position = 0usize;
    let mut height = Height::Low;

    for mv in moves {
        if position + 1 == world.len() {
            return position;
        }

        match mv {
            Move::Stay => {}
            Move::Right => {
                if world[position + 1] != height.barrier() {
                    position += 1;
                }
            }
            Move::Down => {
                if height == Height::High && world[position] != Obstacle::Bush {
                    height = Height::Low;
                }
            }
            Move::Left => {
                if position != 0 && world[position - 1] != height.barrier() {
                    position -= 1;
                }
            }
            Move::Up => {
                if height == Height::Low && world[position] != Obstacle::Bird {
                    height = Height::High;
                }
            }
        }
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::{Down, Left, Right, Stay, Up};
    use Obstacle::{Bird, Bush, Empty};

    #[test]
    fn test_all_stay_goes_nowhere() {
        let world = vec![Empty; 8];
        assert_eq!(simulate(&world, &[Stay; 80]), 0);
    }

    #[test]
    fn test_walks_open_course() {
        let world = vec![Empty; 5];
        assert_eq!(simulate(&world, &[Right, Right, Right, Right]), 4);
    }

    #[test]
    fn test_early_return_ignores_remaining_moves() {
        // Touching the far end ends evaluation; the trailing Left and Up
        // must never execute.
        let world = vec![Empty, Empty, Empty];
        assert_eq!(simulate(&world, &[Right, Right, Left, Up]), 2);
    }

    #[test]
    fn test_bush_blocks_low_agent() {
        let world = vec![Empty, Bush, Empty];
        assert_eq!(simulate(&world, &[Right, Right]), 0);
    }

    #[test]
    fn test_jumps_over_bush() {
        let world = vec![Empty, Bush, Empty, Empty];
        assert_eq!(simulate(&world, &[Up, Right, Right, Down, Right]), 3);
    }

    #[test]
    fn test_bird_blocks_high_agent() {
        let world = vec![Empty, Bird, Empty];
        assert_eq!(simulate(&world, &[Up, Right]), 0);
        // Staying low walks straight under it.
        assert_eq!(simulate(&world, &[Right, Right]), 2);
    }

    #[test]
    fn test_cannot_rise_under_bird() {
        let world = vec![Bird, Empty, Empty];
        // Up is absorbed at a bird cell; the agent stays low.
        assert_eq!(simulate(&world, &[Up, Right]), 1);
    }

    #[test]
    fn test_cannot_drop_onto_bush() {
        let world = vec![Empty, Bush, Bush, Empty, Empty];
        // The agent rises, crosses the bushes, and cannot drop mid-bush.
        let reached = simulate(&world, &[Up, Right, Down, Right, Down, Right, Right]);
        assert_eq!(reached, 4);
    }

    #[test]
    fn test_left_absorbed_at_origin() {
        let world = vec![Empty; 4];
        assert_eq!(simulate(&world, &[Left, Left, Right]), 1);
    }

    #[test]
    fn test_left_moves_back() {
        let world = vec![Empty; 5];
        assert_eq!(simulate(&world, &[Right, Right, Left]), 1);
    }

    #[test]
    fn test_single_cell_world_is_already_finished() {
        let world = vec![Empty];
        assert_eq!(simulate(&world, &[Right, Right]), 0);
    }

    #[test]
    fn test_empty_world() {
        assert_eq!(simulate(&[], &[Right, Up, Left]), 0);
    }
}
