//! Board ordering
//!
//! Both sections sort by parsed 24h volume, highest first. The grid pins
//! the anchor instrument to the first slot regardless of volume. Sorting
//! is stable, so equal volumes keep their upstream order.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::core::format::parse_decimal;
use crate::feed::RawTicker;

/// Volume used for ordering; unparsable counts as zero
fn sort_volume(record: &RawTicker) -> Decimal {
    parse_decimal(&record.volume).unwrap_or(Decimal::ZERO)
}

fn by_volume_desc(a: &RawTicker, b: &RawTicker) -> Ordering {
    sort_volume(b).cmp(&sort_volume(a))
}

/// Anchor first, remaining records by volume descending
pub fn rank_primary(mut records: Vec<RawTicker>, anchor: &str) -> Vec<RawTicker> {
    records.sort_by(|a, b| {
        match (a.symbol == anchor, b.symbol == anchor) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => by_volume_desc(a, b),
        }
    });
    records
}

/// Volume descending
pub fn rank_secondary(mut records: Vec<RawTicker>) -> Vec<RawTicker> {
    records.sort_by(by_volume_desc);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str, volume: &str) -> RawTicker {
        RawTicker::new(symbol, "1", "0", volume)
    }

    fn symbols(records: &[RawTicker]) -> Vec<&str> {
        records.iter().map(|r| r.symbol.as_str()).collect()
    }

    #[test]
    fn test_anchor_pinned_despite_lower_volume() {
        let ranked = rank_primary(
            vec![
                ticker("ETHUSDT", "9000"),
                ticker("SOLUSDT", "7000"),
                ticker("BTCUSDT", "5000"),
            ],
            "BTCUSDT",
        );
        assert_eq!(symbols(&ranked), vec!["BTCUSDT", "ETHUSDT", "SOLUSDT"]);
    }

    #[test]
    fn test_primary_without_anchor_sorted_by_volume() {
        let ranked = rank_primary(
            vec![ticker("ADAUSDT", "10"), ticker("ETHUSDT", "300"), ticker("XRPUSDT", "20")],
            "BTCUSDT",
        );
        assert_eq!(symbols(&ranked), vec!["ETHUSDT", "XRPUSDT", "ADAUSDT"]);
    }

    #[test]
    fn test_secondary_by_volume() {
        let ranked = rank_secondary(vec![
            ticker("DOGEUSDT", "1e3"),
            ticker("LINKUSDT", "2500.5"),
            ticker("UNIUSDT", "999"),
        ]);
        assert_eq!(symbols(&ranked), vec!["LINKUSDT", "DOGEUSDT", "UNIUSDT"]);
    }

    #[test]
    fn test_unparsable_volume_sinks_to_bottom() {
        let ranked = rank_secondary(vec![
            ticker("DOGEUSDT", "garbage"),
            ticker("LINKUSDT", "1"),
            ticker("UNIUSDT", ""),
        ]);
        assert_eq!(symbols(&ranked), vec!["LINKUSDT", "DOGEUSDT", "UNIUSDT"]);
    }

    #[test]
    fn test_equal_volumes_keep_input_order() {
        let ranked = rank_secondary(vec![
            ticker("AAAUSDT", "5"),
            ticker("BBBUSDT", "5.0"),
            ticker("CCCUSDT", "5.00"),
        ]);
        assert_eq!(symbols(&ranked), vec!["AAAUSDT", "BBBUSDT", "CCCUSDT"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_primary(Vec::new(), "BTCUSDT").is_empty());
        assert!(rank_secondary(Vec::new()).is_empty());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn batch() -> impl Strategy<Value = Vec<RawTicker>> {
            prop::collection::vec((0u64..1_000_000, any::<bool>()), 0..20).prop_map(|entries| {
                entries
                    .into_iter()
                    .enumerate()
                    .map(|(i, (volume, valid))| {
                        let volume = if valid { volume.to_string() } else { "n/a".to_string() };
                        ticker(&format!("S{i}USDT"), &volume)
                    })
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn secondary_is_permutation_sorted_desc(records in batch()) {
                let ranked = rank_secondary(records.clone());
                prop_assert_eq!(ranked.len(), records.len());
                for pair in ranked.windows(2) {
                    prop_assert!(sort_volume(&pair[0]) >= sort_volume(&pair[1]));
                }
                let mut before = symbols(&records);
                let mut after = symbols(&ranked);
                before.sort_unstable();
                after.sort_unstable();
                prop_assert_eq!(before, after);
            }

            #[test]
            fn anchor_always_first_when_present(records in batch(), pick in any::<prop::sample::Index>()) {
                prop_assume!(!records.is_empty());
                let anchor = records[pick.index(records.len())].symbol.clone();
                let ranked = rank_primary(records, &anchor);
                prop_assert_eq!(&ranked[0].symbol, &anchor);
                for pair in ranked[1..].windows(2) {
                    prop_assert!(sort_volume(&pair[0]) >= sort_volume(&pair[1]));
                }
            }
        }
    }
}
