//! Shared proptest strategies for the engine's test modules.

use proptest::prelude::*;

/// Glyph rows for an arbitrary terrain of up to 7x7 cells, drawn with
/// an even solid/void mix.
pub fn arb_rows() -> impl Strategy<Value = Vec<String>> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        let row = proptest::collection::vec(prop_oneof![Just('*'), Just('.')], cols)
            .prop_map(|glyphs| glyphs.into_iter().collect::<String>());
        proptest::collection::vec(row, rows)
    })
}
