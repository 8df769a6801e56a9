//! Symbol universe and classification
//!
//! Grid (primary) and ticker strip (secondary) membership is static and
//! comes from `SymbolConfig`. Human-readable names live in one lookup
//! table here; unknown symbols fall back to their base asset.

use std::collections::HashSet;

use crate::config::SymbolConfig;
use crate::feed::RawTicker;

/// Quote asset every tracked instrument is priced in
pub const QUOTE_ASSET: &str = "USDT";

/// Which board section a symbol belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Primary,
    Secondary,
}

/// Raw records split by section, input order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub primary: Vec<RawTicker>,
    pub secondary: Vec<RawTicker>,
}

/// O(1) membership view over the configured symbol sets
#[derive(Debug, Clone)]
pub struct SymbolUniverse {
    anchor: String,
    primary: HashSet<String>,
    secondary: HashSet<String>,
}

impl SymbolUniverse {
    /// Build from already validated symbol config (sets are disjoint)
    pub fn from_config(config: &SymbolConfig) -> Self {
        Self {
            anchor: config.anchor.clone(),
            primary: config.primary.iter().cloned().collect(),
            secondary: config.secondary.iter().cloned().collect(),
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn section_of(&self, symbol: &str) -> Option<Section> {
        if self.primary.contains(symbol) {
            Some(Section::Primary)
        } else if self.secondary.contains(symbol) {
            Some(Section::Secondary)
        } else {
            None
        }
    }

    pub fn tracked_count(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// Split a raw batch into grid and strip records
    ///
    /// Records whose symbol is in neither set are dropped silently.
    pub fn classify(&self, records: Vec<RawTicker>) -> Partition {
        let mut partition = Partition::default();
        for record in records {
            match self.section_of(&record.symbol) {
                Some(Section::Primary) => partition.primary.push(record),
                Some(Section::Secondary) => partition.secondary.push(record),
                None => {}
            }
        }
        partition
    }
}

impl Default for SymbolUniverse {
    fn default() -> Self {
        Self::from_config(&SymbolConfig::default())
    }
}

/// Known display names, keyed by exchange symbol
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("BTCUSDT", "Bitcoin"),
    ("ETHUSDT", "Ethereum"),
    ("BNBUSDT", "BNB"),
    ("XRPUSDT", "XRP"),
    ("ADAUSDT", "Cardano"),
    ("DOGEUSDT", "Dogecoin"),
    ("SOLUSDT", "Solana"),
    ("TRXUSDT", "TRON"),
    ("DOTUSDT", "Polkadot"),
    ("MATICUSDT", "Polygon"),
    ("AVAXUSDT", "Avalanche"),
    ("LINKUSDT", "Chainlink"),
    ("ATOMUSDT", "Cosmos"),
    ("LTCUSDT", "Litecoin"),
    ("UNIUSDT", "Uniswap"),
    ("ETCUSDT", "Ethereum Classic"),
    ("XLMUSDT", "Stellar"),
    ("BCHUSDT", "Bitcoin Cash"),
    ("FILUSDT", "Filecoin"),
    ("APTUSDT", "Aptos"),
    ("NEARUSDT", "NEAR Protocol"),
    ("ALGOUSDT", "Algorand"),
    ("VETUSDT", "VeChain"),
    ("ICPUSDT", "Internet Computer"),
    ("FTMUSDT", "Fantom"),
    ("SANDUSDT", "The Sandbox"),
    ("MANAUSDT", "Decentraland"),
    ("AXSUSDT", "Axie Infinity"),
    ("THETAUSDT", "Theta Network"),
    ("EOSUSDT", "EOS"),
    ("ARUSDT", "Arweave"),
    ("STORJUSDT", "Storj"),
    ("GALAUSDT", "Gala"),
    ("ROSEUSDT", "Oasis Network"),
    ("ARBUSDT", "Arbitrum"),
    ("HNTUSDT", "Helium"),
    ("KAVAUSDT", "Kava"),
    ("MKRUSDT", "Maker"),
    ("COMPUSDT", "Compound"),
    ("FETUSDT", "Fetch.ai"),
    ("SCRTUSDT", "Secret"),
    ("RNDRUSDT", "Render Token"),
    ("AKTUSDT", "Akash Network"),
];

/// Ticker without the quote suffix (`BTCUSDT` → `BTC`)
pub fn base_asset(symbol: &str) -> &str {
    match symbol.strip_suffix(QUOTE_ASSET) {
        Some(base) if !base.is_empty() => base,
        _ => symbol,
    }
}

/// Human-readable instrument name, base asset when unregistered
pub fn display_name(symbol: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, name)| *name)
        .unwrap_or_else(|| base_asset(symbol))
}

/// Pair label shown under a grid card (`Bitcoin/USDT`)
pub fn trading_pair(symbol: &str) -> String {
    format!("{}/{}", display_name(symbol), QUOTE_ASSET)
}
