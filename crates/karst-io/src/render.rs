//! Glyph-row rendering of terrains and witnesses.

use karst_engine::Terrain;

/// Glyph drawn over cells the connectivity witness marked.
pub const WITNESS_GLYPH: char = '#';

/// Render a terrain's cells as newline-joined glyph rows.
///
/// The output uses the same `*`/`.` glyphs the batch format uses, with
/// no trailing newline.
pub fn render_cells(terrain: &Terrain) -> String {
    terrain
        .rows()
        .map(|row| row.iter().map(|c| c.glyph()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a terrain with its witness overlaid as [`WITNESS_GLYPH`].
///
/// The overlay draws the survey's view of the grid: a witness left
/// stale by later erosion steps will mark cells that have since gone
/// void. Call [`Terrain::refresh_witness`] first for a current overlay.
pub fn render_witness(terrain: &Terrain) -> String {
    let (rows, cols) = terrain.dimensions();
    let witness = terrain.witness();
    let mut out = String::with_capacity(rows * (cols + 1));
    for (row, cells) in terrain.rows().enumerate() {
        if row > 0 {
            out.push('\n');
        }
        for (col, cell) in cells.iter().enumerate() {
            if witness.contains(row, col) {
                out.push(WITNESS_GLYPH);
            } else {
                out.push(cell.glyph());
            }
        }
    }
    out
}
