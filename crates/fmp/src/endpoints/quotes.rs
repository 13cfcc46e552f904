use fmp_core::{Params, Result};
use fmp_models::{AftermarketQuote, PriceChange, Quote, ShortQuote};

use crate::{Fmp, Normalized};

impl Fmp {
    /// Full quote of one symbol of any asset class.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn quote(&self, symbol: &str) -> Result<Normalized<Quote>> {
        self.fetch("quote", &Params::new().with("symbol", symbol)).await
    }

    /// Full quotes of several symbols. Asset classes may be mixed; each
    /// record is matched to its own quote shape.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn batch_quote<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Normalized<Quote>> {
        self.fetch("batch-quote", &Params::new().with("symbols", symbols)).await
    }

    /// Price, change and volume only.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn quote_short(&self, symbol: &str) -> Result<Normalized<ShortQuote>> {
        self.fetch("quote-short", &Params::new().with("symbol", symbol)).await
    }

    /// Bid and ask outside regular trading hours.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn aftermarket_quote(&self, symbol: &str) -> Result<Normalized<AftermarketQuote>> {
        self.fetch("aftermarket-quote", &Params::new().with("symbol", symbol))
            .await
    }

    /// Percent price change over standard horizons.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn price_change(&self, symbol: &str) -> Result<Normalized<PriceChange>> {
        self.fetch("stock-price-change", &Params::new().with("symbol", symbol))
            .await
    }
}
