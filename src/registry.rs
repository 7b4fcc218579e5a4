//! Registry of benchmark rate series.
//!
//! Each [`RateSeriesDescriptor`] maps a logical series key to the upstream
//! dataset that carries it, plus the column of each data row to read. Simple
//! series (date, value) use column 1; yield-curve tables carry one column per
//! tenor and the descriptor picks the tenor of interest.
//!
//! The registry is plain immutable data handed to the client at construction,
//! so tests can substitute their own table.

/// One registered rate series.
#[derive(Debug, Clone)]
pub struct RateSeriesDescriptor {
    /// Logical key used throughout the crate (e.g. `"prime"`).
    pub key: String,
    /// Upstream dataset identifier (e.g. `"FRED/DPRIME"`).
    pub dataset: String,
    /// Human-readable title for display.
    pub title: String,
    /// Index into each upstream data row selecting the value column.
    /// Element 0 of a row is always the date.
    pub column: usize,
}

impl RateSeriesDescriptor {
    pub fn new(key: &str, dataset: &str, title: &str, column: usize) -> Self {
        Self {
            key: key.to_string(),
            dataset: dataset.to_string(),
            title: title.to_string(),
            column,
        }
    }
}

/// Immutable, ordered table of series descriptors.
#[derive(Debug, Clone)]
pub struct SeriesRegistry {
    series: Vec<RateSeriesDescriptor>,
}

impl SeriesRegistry {
    pub fn new(series: Vec<RateSeriesDescriptor>) -> Self {
        Self { series }
    }

    /// The benchmark set shown by the reference dashboard: Prime, Treasury
    /// yields, and SOFR.
    ///
    /// The Treasury tenors read from the multi-column `USTREASURY/YIELD`
    /// table (date, 1mo, 2mo, 3mo, 6mo, 1yr, 2yr, 3yr, 5yr, 7yr, 10yr, ...);
    /// the column indices below are tied to that schema and live here as
    /// configuration, not logic.
    pub fn benchmark() -> Self {
        Self::new(vec![
            RateSeriesDescriptor::new("prime", "FRED/DPRIME", "Prime Rate", 1),
            RateSeriesDescriptor::new("treasury_10y", "USTREASURY/YIELD", "10-Year Treasury", 10),
            RateSeriesDescriptor::new("treasury_2y", "USTREASURY/YIELD", "2-Year Treasury", 6),
            RateSeriesDescriptor::new("sofr", "FRED/SOFR", "SOFR", 1),
        ])
    }

    /// Looks up a descriptor by logical key.
    pub fn get(&self, key: &str) -> Option<&RateSeriesDescriptor> {
        self.series.iter().find(|d| d.key == key)
    }

    /// Iterates descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RateSeriesDescriptor> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
