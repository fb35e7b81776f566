//! Per-frame combat resolution between the player, enemies and bullets
//!
//! Every shape is treated as an axis-aligned box here, including the round
//! player and bullets.

use crate::entities::{Bullet, Enemy, Player};
use crate::geometry::boxes_overlap;

/// What happened during one collision pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionOutcome {
    /// Enemies destroyed by bullets
    pub kills: u32,
    /// An enemy reached the player; the session is over
    pub player_hit: bool,
}

/// Runs the collision pass and drops every destroyed enemy and spent bullet.
///
/// Enemies are checked in collection order. Each one first tests against the
/// player; a hit removes that enemy and ends the pass, leaving later enemies
/// untouched for this frame. Otherwise the enemy takes the first unspent
/// bullet overlapping it. A bullet is spent at most once per pass.
pub fn resolve(
    player: &Player,
    enemies: &mut Vec<Enemy>,
    bullets: &mut Vec<Bullet>,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();
    let mut enemies_to_remove = vec![false; enemies.len()];
    let mut bullets_spent = vec![false; bullets.len()];

    for (e_idx, enemy) in enemies.iter().enumerate() {
        let center = enemy.center();
        let half_size = enemy.size() / 2.0;

        if boxes_overlap(player.pos, center, player.radius() + half_size) {
            enemies_to_remove[e_idx] = true;
            outcome.player_hit = true;
            break;
        }

        let hit = bullets.iter().enumerate().position(|(b_idx, bullet)| {
            !bullets_spent[b_idx] && boxes_overlap(bullet.pos, center, half_size + bullet.radius())
        });

        if let Some(b_idx) = hit {
            bullets_spent[b_idx] = true;
            enemies_to_remove[e_idx] = true;
            outcome.kills += 1;
        }
    }

    retain_unmarked(enemies, &enemies_to_remove);
    retain_unmarked(bullets, &bullets_spent);

    outcome
}

/// Keeps the items whose mark is false, preserving order
fn retain_unmarked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut idx = 0;
    items.retain(|_| {
        let keep = !marks[idx];
        idx += 1;
        keep
    });
}
