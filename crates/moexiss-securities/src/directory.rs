//! Engines and markets directory snapshot.

use std::collections::HashMap;

use moexiss_fetch::api;
use moexiss_fetch::IssTransport;
use moexiss_types::{EngineRecord, MarketRecord, Result};

/// Read-only snapshot of the exchange's classification axes: every
/// trading engine with its markets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeDirectory {
    /// All trading engines.
    pub engines: Vec<EngineRecord>,
    /// Markets per engine name.
    pub markets: HashMap<String, Vec<MarketRecord>>,
}

impl ExchangeDirectory {
    /// Loads the directory eagerly: one engines request plus one markets
    /// request per engine.
    ///
    /// # Errors
    ///
    /// Returns an error when any of the underlying fetches fails.
    pub fn load<T: IssTransport + ?Sized>(transport: &T) -> Result<Self> {
        let engines = api::engines(transport)?;
        let mut markets = HashMap::new();
        for engine in &engines {
            markets.insert(engine.name.clone(), api::markets(transport, &engine.name)?);
        }
        Ok(Self { engines, markets })
    }

    /// Returns the markets of an engine, empty when the engine is
    /// unknown.
    #[must_use]
    pub fn markets_for(&self, engine: &str) -> &[MarketRecord] {
        self.markets.get(engine).map_or(&[], Vec::as_slice)
    }
}
