use fmp_core::{Params, Result};
use fmp_models::{HistoricalRating, RatingSnapshot};

use crate::{Fmp, Normalized};

impl Fmp {
    /// Latest fundamental rating.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn rating_snapshot(&self, symbol: &str) -> Result<Normalized<RatingSnapshot>> {
        self.fetch("ratings-snapshot", &Params::new().with("symbol", symbol))
            .await
    }

    /// Dated rating history.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn historical_ratings(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Normalized<HistoricalRating>> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.fetch("ratings-historical", &params).await
    }
}
