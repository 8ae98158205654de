use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::types::StatisticsDocument;

/// Single-color identity used as a mana curve row. Declaration order is
/// the row order of the curve table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Color {
    W,
    U,
    B,
    R,
    G,
}

impl Color {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Mana value bucket as keyed in `stats.manaCurveByColor.<color>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum CurveBucket {
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "3")]
    Three,
    #[strum(serialize = "4")]
    Four,
    #[strum(serialize = "5")]
    Five,
    #[strum(serialize = "6+")]
    SixPlus,
}

impl CurveBucket {
    pub fn label(self) -> &'static str {
        self.into()
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Creature counts per bucket for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCurve {
    counts: [u64; 6],
}

impl ColorCurve {
    /// Read the curve for `color`. Missing colors and buckets count as 0.
    pub fn read(doc: &StatisticsDocument, color: Color) -> Self {
        let mut curve = Self::default();
        for bucket in CurveBucket::iter() {
            curve.counts[bucket.index()] =
                doc.count(&["stats", "manaCurveByColor", color.label(), bucket.label()]);
        }
        curve
    }

    pub fn get(&self, bucket: CurveBucket) -> u64 {
        self.counts[bucket.index()]
    }

    /// The table folds "5" and "6+" into one column. Saturates at `u64::MAX`.
    pub fn five_plus(&self) -> u64 {
        self.get(CurveBucket::Five)
            .saturating_add(self.get(CurveBucket::SixPlus))
    }
}
