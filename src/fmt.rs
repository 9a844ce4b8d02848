//! Numeric axis labels with magnitude suffixes (k/M/G/T...)

use thiserror::Error;

/// Magnitude symbols for base 1000, indexed by tier
const SI_SYMBOLS: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Magnitude symbols for base 1024, indexed by tier
const BINARY_SYMBOLS: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Unit base used to compute magnitude tiers
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Units {
    /// Decimal magnitudes, base 1000
    Si,
    /// Binary magnitudes, base 1024
    #[default]
    Binary,
}

impl Units {
    /// Select a base from its configuration name: "si" for base 1000, anything else for base 1024
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == "si" { Self::Si } else { Self::Binary }
    }

    fn base(self) -> f64 {
        match self {
            Self::Si => 1000.0,
            Self::Binary => 1024.0,
        }
    }

    fn symbols(self) -> &'static [&'static str; 9] {
        match self {
            Self::Si => &SI_SYMBOLS,
            Self::Binary => &BINARY_SYMBOLS,
        }
    }
}

/// How the magnitude symbol is chosen for each value
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SymbolChoice {
    /// Largest symbol whose threshold does not exceed the value
    #[default]
    Auto,
    /// Same symbol for every value, regardless of magnitude
    Fixed(String),
}

/// Label formatter configuration
#[derive(Clone, Debug, Default)]
pub struct LabelOptions {
    /// Symbol selection mode
    pub symbol: SymbolChoice,
    /// Unit base
    pub units: Units,
    /// Decimal places of the scaled value
    pub precision: usize,
    /// Literal string appended after the symbol
    pub suffix: String,
}

/// Label formatter construction error
#[derive(Debug, Error)]
pub enum LabelError {
    /// Fixed symbol does not belong to the symbol set of the selected base
    #[error("symbol {symbol:?} must be one of {allowed:?}")]
    InvalidSymbol {
        /// Rejected symbol
        symbol: String,
        /// Valid symbols for the selected base
        allowed: &'static [&'static str; 9],
    },
}

/// Symbol selection resolved at construction time
#[derive(Clone, Copy, Debug)]
enum Selection {
    Auto,
    Fixed(usize),
}

/// Magnitude label formatter
///
/// Maps each value of a sequence to a string, scaled by the appropriate power
/// of the base and tagged with the matching magnitude symbol:
///
/// ```
/// use benchplot::fmt::{LabelFormatter, LabelOptions, Units};
///
/// let opts = LabelOptions {
///     units: Units::Si,
///     suffix: "B".to_owned(),
///     ..LabelOptions::default()
/// };
/// let fmt = LabelFormatter::new(opts)?;
/// assert_eq!(
///     fmt.format(&[1000.0, 1_000_000.0, 4e5]),
///     vec!["1 kB", "1 MB", "400 kB"]
/// );
/// # Ok::<(), benchplot::fmt::LabelError>(())
/// ```
///
/// Formatting is pure: the configuration is immutable after construction and
/// calls share no mutable state.
#[derive(Clone, Debug)]
pub struct LabelFormatter {
    base: f64,
    /// Tier thresholds base^1..base^9, strictly increasing
    powers: [f64; 9],
    symbols: &'static [&'static str; 9],
    selection: Selection,
    precision: usize,
    suffix: String,
}

impl LabelFormatter {
    /// Build a formatter, validating a fixed symbol against the symbol set of the selected base
    pub fn new(options: LabelOptions) -> Result<Self, LabelError> {
        let base = options.units.base();
        let symbols = options.units.symbols();
        let selection = match options.symbol {
            SymbolChoice::Auto => Selection::Auto,
            SymbolChoice::Fixed(symbol) => match symbols.iter().position(|s| *s == symbol) {
                Some(index) => Selection::Fixed(index),
                None => {
                    return Err(LabelError::InvalidSymbol {
                        symbol,
                        allowed: symbols,
                    });
                }
            },
        };
        let mut powers = [0.0; 9];
        for (i, power) in powers.iter_mut().enumerate() {
            *power = base.powi(i as i32 + 1);
        }
        Ok(Self {
            base,
            powers,
            symbols,
            selection,
            precision: options.precision,
            suffix: options.suffix,
        })
    }

    /// Tier for a value: count of thresholds ≤ value, clamped to the last symbol
    ///
    /// The comparison is non-strict, so a value equal to a threshold advances
    /// to that threshold's tier. Zero, negative and NaN values satisfy no
    /// threshold and land on tier 0 (no symbol).
    fn scale_index(&self, value: f64) -> usize {
        match self.selection {
            Selection::Fixed(index) => index,
            Selection::Auto => self
                .powers
                .partition_point(|power| *power <= value)
                .min(self.symbols.len() - 1),
        }
    }

    /// Label a single value
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        let index = self.scale_index(value);
        let scaled = value / self.base.powi(index as i32);
        format!(
            "{scaled:.precision$} {symbol}{suffix}",
            precision = self.precision,
            symbol = self.symbols[index],
            suffix = self.suffix
        )
    }

    /// Label each value, preserving input order and length
    #[must_use]
    pub fn format(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|v| self.format_value(*v)).collect()
    }
}
