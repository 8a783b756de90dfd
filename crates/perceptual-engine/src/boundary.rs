//! Gamut boundary tables: maximum chroma by hue.
//!
//! The most chromatic colors of an RGB cube lie on the ring of fully
//! saturated colors, the six cube edges red → yellow → green → cyan →
//! blue → magenta → red. Each edge is sampled at 8-bit resolution, which
//! gives `6 × 256 − 6` distinct colors once the shared corners are counted
//! once. Sorted by hue and padded with one wrap-around copy at each end,
//! every table holds `6 × 256 − 6 + 2` entries, and any hue in `[0, 360)`
//! has a neighbor on both sides.

use perceptual_core::Rgba8;
use perceptual_math::{inverse_lerp, lerp, normalize_angle_360};

/// Number of entries in every boundary table.
pub const BOUNDARY_TABLE_LEN: usize = 256 * 6 - 6 + 2;

/// One sampled point on the gamut boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEntry {
    /// Hue in degrees. The two padding entries lie outside `[0, 360)`.
    pub hue: f64,
    /// Chroma of the sample.
    pub chroma: f64,
    /// The sampled device color.
    pub rgb: [u8; 3],
}

/// The fully saturated 8-bit colors, in ring order, each exactly once.
pub(crate) fn hue_ring() -> Vec<[u8; 3]> {
    let mut ring = Vec::with_capacity(BOUNDARY_TABLE_LEN - 2);
    for t in 0..255u8 {
        ring.push([255, t, 0]);
    }
    for t in 0..255u8 {
        ring.push([255 - t, 255, 0]);
    }
    for t in 0..255u8 {
        ring.push([0, 255, t]);
    }
    for t in 0..255u8 {
        ring.push([0, 255 - t, 255]);
    }
    for t in 0..255u8 {
        ring.push([t, 0, 255]);
    }
    for t in 0..255u8 {
        ring.push([255, 0, 255 - t]);
    }
    ring
}

/// Boundary samples sorted by hue.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
    entries: Vec<BoundaryEntry>,
}

impl BoundaryTable {
    /// Builds a table from unsorted samples.
    ///
    /// Hues are normalized into `[0, 360)` before sorting.
    pub(crate) fn from_samples(samples: impl IntoIterator<Item = BoundaryEntry>) -> Self {
        let mut entries: Vec<BoundaryEntry> = samples
            .into_iter()
            .map(|e| BoundaryEntry {
                hue: normalize_angle_360(e.hue),
                ..e
            })
            .collect();
        entries.sort_by(|a, b| a.hue.total_cmp(&b.hue));

        if let (Some(&first), Some(&last)) = (entries.first(), entries.last()) {
            entries.insert(
                0,
                BoundaryEntry {
                    hue: last.hue - 360.0,
                    ..last
                },
            );
            entries.push(BoundaryEntry {
                hue: first.hue + 360.0,
                ..first
            });
        }
        Self { entries }
    }

    /// All entries, padding included.
    pub fn entries(&self) -> &[BoundaryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest sampled chroma.
    pub fn max_chroma(&self) -> f64 {
        self.entries.iter().map(|e| e.chroma).fold(0.0, f64::max)
    }

    // The two entries enclosing `hue`, and the position between them.
    fn neighbors(&self, hue: f64) -> Option<(&BoundaryEntry, &BoundaryEntry, f64)> {
        let hue = if hue.is_finite() { normalize_angle_360(hue) } else { 0.0 };
        let i = self.entries.partition_point(|e| e.hue < hue);
        let upper = self.entries.get(i)?;
        let lower = self.entries.get(i.checked_sub(1)?)?;
        Some((lower, upper, inverse_lerp(lower.hue, upper.hue, hue)))
    }

    /// Boundary chroma at `hue`, interpolated between the nearest samples.
    pub fn chroma_at(&self, hue: f64) -> f64 {
        match self.neighbors(hue) {
            Some((lower, upper, t)) => lerp(lower.chroma, upper.chroma, t),
            None => 0.0,
        }
    }

    /// The most chromatic device color at `hue`.
    ///
    /// Interpolates between the two nearest samples and stretches the
    /// result back onto the saturated ring, so at least one channel is 0
    /// and one is 255.
    pub fn max_chroma_color(&self, hue: f64) -> Rgba8 {
        let Some((lower, upper, t)) = self.neighbors(hue) else {
            return Rgba8::opaque(0, 0, 0);
        };
        let mixed: [f64; 3] =
            std::array::from_fn(|i| lerp(f64::from(lower.rgb[i]), f64::from(upper.rgb[i]), t));
        let max = mixed.iter().copied().fold(f64::MIN, f64::max);
        let min = mixed.iter().copied().fold(f64::MAX, f64::min);
        if max - min <= 0.0 {
            let nearest = if t < 0.5 { lower } else { upper };
            let [r, g, b] = nearest.rgb;
            return Rgba8::opaque(r, g, b);
        }
        let [r, g, b] = mixed.map(|v| ((v - min) / (max - min) * 255.0).round() as u8);
        Rgba8::opaque(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic() -> BoundaryTable {
        // Hue equal to the ring index scaled onto the circle.
        let ring = hue_ring();
        let n = ring.len() as f64;
        BoundaryTable::from_samples(ring.into_iter().enumerate().map(|(i, rgb)| BoundaryEntry {
            hue: i as f64 * 360.0 / n,
            chroma: 50.0 + i as f64 / n,
            rgb,
        }))
    }

    #[test]
    fn test_ring_is_unique_and_saturated() {
        let ring = hue_ring();
        assert_eq!(ring.len(), 1530);
        let unique: std::collections::HashSet<_> = ring.iter().collect();
        assert_eq!(unique.len(), ring.len());
        for rgb in &ring {
            assert!(rgb.contains(&0) && rgb.contains(&255), "{rgb:?}");
        }
    }

    #[test]
    fn test_table_len_and_order() {
        let table = synthetic();
        assert_eq!(table.len(), BOUNDARY_TABLE_LEN);
        assert_eq!(table.len(), 1532);
        assert!(table.entries().windows(2).all(|w| w[0].hue <= w[1].hue));
        assert!(table.entries()[0].hue < 0.0);
        assert!(table.entries()[table.len() - 1].hue >= 360.0);
    }

    #[test]
    fn test_wrap_entries_duplicate_ends() {
        let table = synthetic();
        let e = table.entries();
        assert_eq!(e[0].rgb, e[e.len() - 2].rgb);
        assert_eq!(e[e.len() - 1].rgb, e[1].rgb);
    }

    #[test]
    fn test_max_chroma_color_has_extremes() {
        let table = synthetic();
        for i in 0..720 {
            let hue = i as f64 * 0.5 - 0.25;
            let c = table.max_chroma_color(hue);
            let channels = [c.r, c.g, c.b];
            assert!(channels.contains(&0) || channels.contains(&255), "hue {hue}: {c:?}");
            assert_eq!(c.a, 255);
        }
    }

    #[test]
    fn test_exact_sample_is_returned() {
        let table = synthetic();
        assert_eq!(table.max_chroma_color(0.0), Rgba8::opaque(255, 0, 0));
        assert_eq!(table.max_chroma_color(360.0), Rgba8::opaque(255, 0, 0));
    }

    #[test]
    fn test_chroma_at_interpolates() {
        let table = synthetic();
        let c = table.chroma_at(180.0);
        assert!((50.0..51.0).contains(&c));
        assert!(table.max_chroma() < 51.0);
        assert_eq!(table.chroma_at(f64::NAN), table.chroma_at(0.0));
    }

    #[test]
    fn test_empty_table() {
        let table = BoundaryTable::from_samples(std::iter::empty());
        assert!(table.is_empty());
        assert_eq!(table.chroma_at(10.0), 0.0);
        assert_eq!(table.max_chroma_color(10.0), Rgba8::opaque(0, 0, 0));
    }
}
