//! Conversion of daily prices into polars frames.

use chrono::{Datelike, NaiveDate};
use fmp_core::{FmpError, Result};
use fmp_models::HistoricalPrice;
use polars::prelude::*;

use crate::Fmp;

/// `num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// polars stores dates as days since the Unix epoch.
fn epoch_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

/// Build a frame with columns `date, open, high, low, close, volume, vwap`,
/// sorted by ascending date.
///
/// # Errors
///
/// Returns [`FmpError::Decode`] if polars rejects the columns.
pub fn prices_to_frame(prices: &[HistoricalPrice]) -> Result<DataFrame> {
    let dates: Vec<i32> = prices.iter().map(|p| epoch_days(p.date)).collect();
    let opens: Vec<f64> = prices.iter().map(|p| p.open).collect();
    let highs: Vec<f64> = prices.iter().map(|p| p.high).collect();
    let lows: Vec<f64> = prices.iter().map(|p| p.low).collect();
    let closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
    let volumes: Vec<Option<i64>> = prices.iter().map(|p| p.volume).collect();
    let vwaps: Vec<Option<f64>> = prices.iter().map(|p| p.vwap).collect();

    let df = DataFrame::new(vec![
        Column::new("date".into(), dates),
        Column::new("open".into(), opens),
        Column::new("high".into(), highs),
        Column::new("low".into(), lows),
        Column::new("close".into(), closes),
        Column::new("volume".into(), volumes),
        Column::new("vwap".into(), vwaps),
    ])
    .map_err(|e| FmpError::Decode(e.to_string()))?;

    df.lazy()
        .with_column(col("date").cast(DataType::Date))
        .sort(["date"], Default::default())
        .collect()
        .map_err(|e| FmpError::Decode(e.to_string()))
}

impl Fmp {
    /// Daily OHLCV bars of `symbol` as a date-sorted frame. Records that fail
    /// validation are left out.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::historical_prices`] or
    /// [`prices_to_frame`].
    pub async fn historical_prices_frame(
        &self,
        symbol: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<DataFrame> {
        let prices = self.historical_prices(symbol, from, to).await?;
        prices_to_frame(prices.records())
    }
}
