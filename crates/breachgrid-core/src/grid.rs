//! Decorative digest grid shown on the start screen.
//!
//! Every cell is the SHA-256 of a fresh random number plus a fixed salt,
//! rendered as lowercase hex. The grid has no bearing on the answer.
//!
//! ## Generation
//!
//! All cell digests are requested up front and awaited together, so the grid
//! either appears whole or not at all:
//!
//! ```ignore
//! let grid = generate_grid(&Sha256Source, &mut rng, &PuzzleConfig::default()).await?;
//! assert_eq!(grid.rows().len(), 5);
//! ```

use futures::future::try_join_all;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::config::PuzzleConfig;
use crate::error::{BreachError, BreachResult};

/// Anything that can hash text, possibly asynchronously.
///
/// The browser's `crypto.subtle` is promise-based and may be missing
/// entirely (insecure contexts), so digests are fallible futures.
#[allow(async_fn_in_trait)]
pub trait DigestSource {
    async fn digest(&self, text: &str) -> BreachResult<Vec<u8>>;

    /// Digest rendered as lowercase, zero-padded hex.
    async fn digest_hex(&self, text: &str) -> BreachResult<String> {
        let bytes = self.digest(text).await?;
        Ok(hex::encode(bytes))
    }
}

/// In-process SHA-256 via the `sha2` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Source;

impl DigestSource for Sha256Source {
    async fn digest(&self, text: &str) -> BreachResult<Vec<u8>> {
        Ok(Sha256::digest(text.as_bytes()).to_vec())
    }
}

/// Text fed to the digest for one cell: `<value>:<salt>`.
pub fn salted_seed(value: f64, salt: &str) -> String {
    format!("{}:{}", value, salt)
}

/// Truncate a digest for display: the first `prefix_len` characters followed
/// by `ellipsis`.
pub fn display_cell(digest: &str, prefix_len: usize, ellipsis: &str) -> String {
    let prefix: String = digest.chars().take(prefix_len).collect();
    format!("{}{}", prefix, ellipsis)
}

/// Fully resolved grid of hex digests, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecorativeGrid {
    rows: Vec<Vec<String>>,
}

impl DecorativeGrid {
    /// Group a flat list of cells into rows of `cols`, keeping order.
    pub fn from_cells(cells: Vec<String>, cols: usize) -> BreachResult<Self> {
        if cols == 0 || cells.len() % cols != 0 {
            return Err(BreachError::InvalidConfig(format!(
                "{} cells do not fill rows of {}",
                cells.len(),
                cols
            )));
        }
        let rows = cells.chunks(cols).map(|row| row.to_vec()).collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as they appear on screen.
    pub fn display_rows(&self, config: &PuzzleConfig) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| display_cell(cell, config.cell_prefix_len, &config.cell_ellipsis))
                    .collect()
            })
            .collect()
    }
}

/// Build a grid of `config.cell_count()` salted digests.
///
/// Random values are drawn before any digest is awaited; the digests then
/// resolve in any order and are reassembled by position.
pub async fn generate_grid<D, R>(
    source: &D,
    rng: &mut R,
    config: &PuzzleConfig,
) -> BreachResult<DecorativeGrid>
where
    D: DigestSource,
    R: Rng,
{
    let seeds: Vec<String> = (0..config.cell_count())
        .map(|_| salted_seed(rng.random::<f64>(), &config.salt))
        .collect();

    let cells = try_join_all(seeds.iter().map(|seed| source.digest_hex(seed))).await?;

    tracing::debug!(cells = cells.len(), "decorative grid resolved");
    DecorativeGrid::from_cells(cells, config.grid_cols)
}
