//! Noise text for the lose overlay.

use rand::Rng;

use crate::config::PuzzleConfig;

/// `lines` strings of `width` characters drawn uniformly from `palette`.
///
/// Returns nothing when the palette is empty.
pub fn glitch_lines<R: Rng>(rng: &mut R, palette: &str, lines: usize, width: usize) -> Vec<String> {
    let glyphs: Vec<char> = palette.chars().collect();
    if glyphs.is_empty() {
        return Vec::new();
    }

    (0..lines)
        .map(|_| {
            (0..width)
                .map(|_| glyphs[rng.random_range(0..glyphs.len())])
                .collect()
        })
        .collect()
}

/// Overlay sized from the puzzle config.
pub fn glitch_overlay<R: Rng>(rng: &mut R, config: &PuzzleConfig) -> Vec<String> {
    glitch_lines(rng, &config.glitch_palette, config.glitch_lines, config.glitch_width)
}
