use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One marginal rate band. `ceiling` is the cumulative taxable-income
/// ceiling of the band; `None` marks the final, unbounded band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    pub rate: Decimal,
    pub ceiling: Option<Decimal>,
}

/// Errors raised when a band schedule fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("band schedule must contain at least one band")]
    Empty,

    #[error("band rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("band ceilings must be strictly increasing, got {0} after {1}")]
    NonIncreasingCeiling(Decimal, Decimal),

    #[error("only the final band may be unbounded")]
    UnboundedBandNotLast,

    #[error("the final band must be unbounded")]
    MissingUnboundedBand,
}

/// An ordered marginal-rate schedule.
///
/// The band count is never fixed: England/Wales/NI carries three bands,
/// Scotland between four and six depending on the year. Calculators walk
/// the schedule generically rather than naming individual bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSchedule {
    bands: Vec<TaxBand>,
}

impl BandSchedule {
    /// Validates and wraps an ordered band list.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if the list is empty, a rate falls outside
    /// [0, 1], ceilings are not strictly increasing from zero, or the
    /// unbounded band is missing or not in final position.
    pub fn new(bands: Vec<TaxBand>) -> Result<Self, ScheduleError> {
        if bands.is_empty() {
            return Err(ScheduleError::Empty);
        }

        let last = bands.len() - 1;
        let mut previous = Decimal::ZERO;
        for (position, band) in bands.iter().enumerate() {
            if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate(band.rate));
            }
            match band.ceiling {
                Some(ceiling) => {
                    if position == last {
                        return Err(ScheduleError::MissingUnboundedBand);
                    }
                    if ceiling <= previous {
                        return Err(ScheduleError::NonIncreasingCeiling(ceiling, previous));
                    }
                    previous = ceiling;
                }
                None => {
                    if position != last {
                        return Err(ScheduleError::UnboundedBandNotLast);
                    }
                }
            }
        }

        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[TaxBand] {
        &self.bands
    }
}
