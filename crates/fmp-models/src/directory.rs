//! Reference lists: symbols, exchanges, sectors, currency pairs.

use chrono::NaiveDate;

record! {
    /// An entry of the full stock list.
    pub struct ListedSymbol as "listed-symbol" {
        /// Ticker symbol.
        symbol: String = "symbol" => Text;
        /// Company name.
        company_name: Option<String> = "companyName" => Text, optional;
    }
}

record! {
    /// A supported exchange.
    pub struct Exchange as "exchange" {
        /// Exchange code.
        exchange: String = "exchange" => Text;
        /// Exchange name.
        name: String = "name" => Text;
        /// Country name.
        country_name: Option<String> = "countryName" => Text, optional;
        /// ISO country code.
        country_code: Option<String> = "countryCode" => Text, optional;
        /// Suffix appended to symbols listed on the exchange.
        symbol_suffix: Option<String> = "symbolSuffix" => Text, optional;
        /// Quote delay.
        delay: Option<String> = "delay" => Text, optional;
    }
}

record! {
    /// A sector name.
    pub struct Sector as "sector" {
        /// Sector.
        sector: String = "sector" => Text;
    }
}

record! {
    /// A tradable currency pair.
    pub struct ForexPair as "forex-pair" {
        /// Pair symbol, e.g. `EURUSD`.
        symbol: String = "symbol" => Text;
        /// Base currency code.
        from_currency: String = "fromCurrency" => Text;
        /// Quote currency code.
        to_currency: String = "toCurrency" => Text;
        /// Base currency name.
        from_name: Option<String> = "fromName" => Text, optional;
        /// Quote currency name.
        to_name: Option<String> = "toName" => Text, optional;
    }
}

record! {
    /// A listed cryptocurrency.
    pub struct Cryptocurrency as "cryptocurrency" {
        /// Pair symbol, e.g. `BTCUSD`.
        symbol: String = "symbol" => Text;
        /// Name.
        name: String = "name" => Text;
        /// Exchange.
        exchange: Option<String> = "exchange" => Text, optional;
        /// Initial coin offering date.
        ico_date: Option<NaiveDate> = "icoDate" => Date, optional;
        /// Circulating supply.
        circulating_supply: Option<f64> = "circulatingSupply" => Number, optional;
        /// Total supply.
        total_supply: Option<f64> = "totalSupply" => Number, optional;
    }
}
