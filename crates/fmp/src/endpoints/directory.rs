use fmp_core::{Params, Result};
use fmp_models::{Cryptocurrency, Exchange, ForexPair, ListedSymbol, Sector};

use crate::{Fmp, Normalized};

impl Fmp {
    /// Every listed symbol.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn stock_list(&self) -> Result<Normalized<ListedSymbol>> {
        self.fetch("stock-list", &Params::new()).await
    }

    /// Supported exchanges.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn available_exchanges(&self) -> Result<Normalized<Exchange>> {
        self.fetch("available-exchanges", &Params::new()).await
    }

    /// Supported sectors.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn available_sectors(&self) -> Result<Normalized<Sector>> {
        self.fetch("available-sectors", &Params::new()).await
    }

    /// Traded currency pairs.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn forex_list(&self) -> Result<Normalized<ForexPair>> {
        self.fetch("forex-list", &Params::new()).await
    }

    /// Traded cryptocurrencies.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Fmp::fetch`].
    pub async fn cryptocurrency_list(&self) -> Result<Normalized<Cryptocurrency>> {
        self.fetch("cryptocurrency-list", &Params::new()).await
    }
}
