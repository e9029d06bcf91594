//! Append-only session result records.
//!
//! One block per finished or abandoned session, appended to a plain text
//! store and never overwritten. The block layout is a compatibility boundary:
//! field order, the `(x-y);` visited notation, and the trailing blank line
//! are all fixed. Writes flush immediately.

use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::state::{PlayerState, WorldState};
use crate::types::EndReason;

/// Render one result block, including the trailing blank line.
pub fn render_report(player: &PlayerState, world: &WorldState, reason: EndReason) -> String {
    let mut out = String::new();
    out.push_str("=== TALES OF TERMINAL RESULT ===\n");
    let _ = writeln!(out, "Player: {}", player.name);
    let _ = writeln!(out, "Reason: {}", reason.as_str());
    let _ = writeln!(out, "Score: {}", player.score);
    let _ = writeln!(out, "HP: {}", player.display_vitality());
    let _ = writeln!(out, "Steps: {}", player.steps);

    out.push_str("Visited: ");
    // The visited set iterates x-major, the order the record format expects.
    for pos in &player.visited {
        let _ = write!(out, "({}-{});", pos.x, pos.y);
    }
    out.push('\n');

    let _ = writeln!(out, "Inventory: {}", player.inventory.join(", "));
    let _ = writeln!(out, "Remaining Enemies: {}", world.enemies.len());
    for (index, (_, enemy)) in world.enemies.iter().enumerate() {
        let stats = enemy.stats();
        let _ = writeln!(
            out,
            "  {}) {} at ({},{}) power={} dmg={}",
            index + 1,
            enemy.kind.name(),
            enemy.pos.x,
            enemy.pos.y,
            stats.power,
            stats.damage
        );
    }
    out.push_str("---- End of Result ----\n\n");
    out
}

/// Append one result block to the store at `path`, creating it (and its
/// parent directory) on first use.
pub fn append_report(
    path: &Path,
    player: &PlayerState,
    world: &WorldState,
    reason: EndReason,
) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_report(player, world, reason).as_bytes())?;
    writer.flush()
}
