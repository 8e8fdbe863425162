//! Detail aggregation tests: metadata lookup, per-wear prices and the merged view.

mod common;

use common::{FakeCatalog, FakePrices};
use cs2_catalog::models::{Wear, WatchlistEntry};
use cs2_catalog::queries::DetailQuery;
use cs2_catalog::{CancelToken, CatalogError, MemoryStore, Watchlist};

const LORE: &str = "AWP | Dragon Lore";

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

#[test]
fn get_returns_first_exact_match() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let detail = dq.get(LORE).unwrap();
    assert_eq!(detail.id.to_string(), "skin-1");
    assert_eq!(detail.min_float, Some(0.0));
    assert_eq!(detail.max_float, Some(0.7));
    assert_eq!(detail.float_range().as_deref(), Some("0.00 - 0.70"));
    assert_eq!(detail.collections[0].name, "The Cobblestone Collection");
    assert_eq!(detail.crates[0].name, "Cobblestone Souvenir Package");
    assert_eq!(detail.sources().count(), 2);
    assert!(detail.souvenir);
}

#[test]
fn get_is_exact_not_substring() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let result = dq.get("AWP | Dragon");
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[test]
fn get_handles_missing_optional_fields() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let detail = dq.get("AK-47 | Redline").unwrap();
    assert!(detail.description.is_none());
    assert!(detail.collections.is_empty());
    assert!(detail.weapon.is_none());
    assert!(detail.stattrak);
    assert!(detail.crates[0].image.is_none());
}

// ---------------------------------------------------------------------------
// prices
// ---------------------------------------------------------------------------

#[test]
fn prices_query_every_wear_with_composite_key() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    dq.prices(LORE);

    let mut queried = prices.queried();
    queried.sort();
    let mut expected = vec![
        "AWP | Dragon Lore (Battle-Scarred)",
        "AWP | Dragon Lore (Factory New)",
        "AWP | Dragon Lore (Field-Tested)",
        "AWP | Dragon Lore (Minimal Wear)",
        "AWP | Dragon Lore (Well-Worn)",
    ];
    expected.sort();
    assert_eq!(queried, expected);
}

#[test]
fn prices_keep_tier_order_with_mixed_failures() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new()
        .with_price("AWP | Dragon Lore (Minimal Wear)", "$9,500.00", "2", "$9,200.00")
        .with_error("AWP | Dragon Lore (Factory New)")
        .with_price("AWP | Dragon Lore (Battle-Scarred)", "$4,100.00", "5", "$4,000.00");
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let quotes = dq.prices(LORE);

    let wears: Vec<Wear> = quotes.iter().map(|q| q.wear).collect();
    assert_eq!(wears, Wear::ALL.to_vec());

    assert!(quotes[0].is_unavailable());
    assert_eq!(quotes[1].lowest_price, "$9,500.00");
    assert_eq!(quotes[1].volume, "2");
    assert_eq!(quotes[1].median_price, "$9,200.00");
    assert!(quotes[2].is_unavailable());
    assert!(quotes[3].is_unavailable());
    assert_eq!(quotes[4].median_price, "$4,000.00");
}

#[test]
fn failed_lookups_fill_all_fields_with_sentinel() {
    let catalog = FakeCatalog::new();
    let mut prices = FakePrices::new();
    for wear in Wear::ALL {
        prices = prices.with_error(&wear.market_hash_name(LORE));
    }
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let quotes = dq.prices(LORE);
    assert_eq!(quotes.len(), 5);
    for quote in &quotes {
        assert_eq!(quote.lowest_price, "N/A");
        assert_eq!(quote.volume, "N/A");
        assert_eq!(quote.median_price, "N/A");
    }
}

// ---------------------------------------------------------------------------
// view
// ---------------------------------------------------------------------------

#[test]
fn view_merges_detail_prices_and_membership() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new().with_price(
        "AK-47 | Redline (Field-Tested)",
        "$35.10",
        "1,024",
        "$34.80",
    );
    let watchlist = Watchlist::new(MemoryStore::new());
    watchlist.toggle(WatchlistEntry {
        id: Some("skin-2".into()),
        name: "AK-47 | Redline".into(),
        image: None,
        rarity: Some("Classified".into()),
    });
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let view = dq.view("AK-47 | Redline", &CancelToken::new()).unwrap();

    assert_eq!(view.detail.name, "AK-47 | Redline");
    assert!(view.in_watchlist);
    assert_eq!(view.prices.len(), 5);
    assert_eq!(view.prices[2].wear, Wear::FieldTested);
    assert_eq!(view.prices[2].lowest_price, "$35.10");
}

#[test]
fn view_of_unknown_item_is_not_found() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let result = dq.view("Nonexistent | Skin", &CancelToken::new());
    assert!(matches!(result, Err(CatalogError::NotFound(_))));
}

#[test]
fn view_propagates_catalog_errors() {
    let catalog = FakeCatalog::failing();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    assert!(dq.view(LORE, &CancelToken::new()).is_err());
}

#[test]
fn view_cancelled_before_start_is_discarded() {
    let catalog = FakeCatalog::new();
    let prices = FakePrices::new();
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    let cancel = CancelToken::new();
    cancel.cancel();
    let result = dq.view(LORE, &cancel);
    assert!(matches!(result, Err(CatalogError::Cancelled)));
}

#[test]
fn view_cancelled_mid_flight_is_discarded() {
    let catalog = FakeCatalog::new();
    let cancel = CancelToken::new();
    let prices = FakePrices {
        cancel_on_lookup: Some(cancel.clone()),
        ..FakePrices::new()
    };
    let watchlist = Watchlist::new(MemoryStore::new());
    let dq = DetailQuery::new(&catalog, &prices, &watchlist);

    assert!(!cancel.is_cancelled());
    let result = dq.view(LORE, &cancel);
    assert!(matches!(result, Err(CatalogError::Cancelled)));
    // The lookups themselves still ran to completion.
    assert_eq!(prices.queried().len(), 5);
}
