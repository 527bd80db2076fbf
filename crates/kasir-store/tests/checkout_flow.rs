//! Integration flow: seed the catalog, build a cart, take payment, and
//! check the ledger and the persisted snapshots end to end.

use kasir_core::{CheckoutState, CoreError, Money, PaymentMethod, ProductSpec};
use kasir_store::{
    seed, JsonFileBackend, MemoryBackend, PosStore, StoreError, PRODUCTS_KEY, TRANSACTIONS_KEY,
};

fn init_tracing() {
    // Honors RUST_LOG; repeated calls in the same process are fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn open_seeded(backend: MemoryBackend) -> PosStore<MemoryBackend> {
    let mut store = PosStore::open(backend).unwrap();
    for spec in seed::starter_products() {
        store.add_product(spec).unwrap();
    }
    store
}

fn id_of(store: &PosStore<MemoryBackend>, name: &str) -> String {
    store
        .catalog()
        .products()
        .iter()
        .find(|p| p.name == name)
        .unwrap()
        .id
        .clone()
}

// Flow: two units of the same product, exact cash, stock sells out.
#[test]
fn exact_cash_checkout_sells_out_stock() {
    init_tracing();
    let mut store = open_seeded(MemoryBackend::new());

    let id = store
        .add_product(ProductSpec::new("Nasi Uduk", 25_000, "Makanan", 2))
        .unwrap()
        .id;

    // Repeated adds merge into one line
    store.add_to_cart(&id, 1).unwrap();
    store.add_to_cart(&id, 1).unwrap();
    assert_eq!(store.cart().line_count(), 1);
    assert_eq!(store.cart().line(&id).unwrap().quantity, 2);
    assert_eq!(store.cart().subtotal(), Money::from_rupiah(50_000));

    store.begin_checkout().unwrap();
    store.select_payment_method(PaymentMethod::Cash).unwrap();
    store
        .set_received_amount(Money::from_rupiah(50_000))
        .unwrap();

    let tx = store.complete_checkout().unwrap();

    assert_eq!(tx.total, Money::from_rupiah(50_000));
    assert_eq!(tx.received_amount, Money::from_rupiah(50_000));
    assert_eq!(tx.change_amount, Money::zero());
    assert_eq!(store.catalog().get(&id).unwrap().stock, 0);
    assert!(store.cart().is_empty());
    assert_eq!(store.checkout_state(), CheckoutState::Completed);
}

// Flow: single unit, overpaid cash, change comes back.
#[test]
fn cash_checkout_returns_change() {
    init_tracing();
    let mut store = open_seeded(MemoryBackend::new());

    let id = store
        .add_product(ProductSpec::new("Nasi Uduk", 25_000, "Makanan", 2))
        .unwrap()
        .id;

    store.add_to_cart(&id, 1).unwrap();
    store.begin_checkout().unwrap();
    store.select_payment_method(PaymentMethod::Cash).unwrap();
    store
        .set_received_amount(Money::from_rupiah(30_000))
        .unwrap();

    let tx = store.complete_checkout().unwrap();

    assert_eq!(tx.total, Money::from_rupiah(25_000));
    assert_eq!(tx.received_amount, Money::from_rupiah(30_000));
    assert_eq!(tx.change_amount, Money::from_rupiah(5_000));
    assert_eq!(store.catalog().get(&id).unwrap().stock, 1);
}

// Flow: short cash is rejected; nothing moves until the operator fixes it.
#[test]
fn short_cash_is_rejected_and_correctable() {
    init_tracing();
    let mut store = open_seeded(MemoryBackend::new());
    let id = id_of(&store, "Kopi Susu Gula Aren"); // 18.000, stock 40

    store.add_to_cart(&id, 2).unwrap();
    store.begin_checkout().unwrap();
    store.select_payment_method(PaymentMethod::Cash).unwrap();
    store
        .set_received_amount(Money::from_rupiah(30_000))
        .unwrap();

    let err = store.complete_checkout().unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InsufficientPayment { .. })
    ));

    // Cart, catalog and ledger are untouched; entry is correctable
    assert_eq!(store.checkout_state(), CheckoutState::AwaitingPayment);
    assert_eq!(store.cart().total_quantity(), 2);
    assert_eq!(store.catalog().get(&id).unwrap().stock, 40);
    assert_eq!(store.ledger().count(), 0);

    store
        .set_received_amount(Money::from_rupiah(40_000))
        .unwrap();
    let tx = store.complete_checkout().unwrap();
    assert_eq!(tx.change_amount, Money::from_rupiah(4_000));
    assert_eq!(store.catalog().get(&id).unwrap().stock, 38);
}

// Flow: carting more than the stock on hand is rejected up front.
#[test]
fn oversell_is_rejected_at_add_time() {
    init_tracing();
    let mut store = open_seeded(MemoryBackend::new());

    let id = store
        .add_product(ProductSpec::new("Nasi Uduk", 25_000, "Makanan", 2))
        .unwrap()
        .id;

    let err = store.add_to_cart(&id, 3).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InsufficientStock {
            available: 2,
            requested: 3,
            ..
        })
    ));
    assert!(store.cart().is_empty());

    // The full stock can still be carted
    store.add_to_cart(&id, 2).unwrap();
    assert_eq!(store.cart().total_quantity(), 2);
}

// Flow: QRIS and debit settle at the total with no change.
#[test]
fn non_cash_methods_settle_at_total() {
    init_tracing();
    for method in [PaymentMethod::Qris, PaymentMethod::Debit] {
        let mut store = open_seeded(MemoryBackend::new());
        let id = id_of(&store, "Es Teh Manis"); // 5.000

        store.add_to_cart(&id, 3).unwrap();
        store.begin_checkout().unwrap();
        store.select_payment_method(method).unwrap();

        let tx = store.complete_checkout().unwrap();
        assert_eq!(tx.payment_method, method);
        assert_eq!(tx.total, Money::from_rupiah(15_000));
        assert_eq!(tx.received_amount, Money::from_rupiah(15_000));
        assert_eq!(tx.change_amount, Money::zero());
    }
}

// Flow: several sales, then the history rolls up.
#[test]
fn ledger_aggregates_across_sales() {
    init_tracing();
    let mut store = open_seeded(MemoryBackend::new());

    assert_eq!(store.ledger().average_sale(), Money::zero());

    let nasi = id_of(&store, "Nasi Goreng Special"); // 25.000
    let teh = id_of(&store, "Es Teh Manis"); // 5.000

    store.add_to_cart(&nasi, 1).unwrap();
    store.begin_checkout().unwrap();
    store.select_payment_method(PaymentMethod::Qris).unwrap();
    store.complete_checkout().unwrap();

    store.add_to_cart(&teh, 1).unwrap();
    store.begin_checkout().unwrap();
    store.select_payment_method(PaymentMethod::Cash).unwrap();
    store
        .set_received_amount(Money::from_rupiah(5_000))
        .unwrap();
    store.complete_checkout().unwrap();

    let ledger = store.ledger();
    assert_eq!(ledger.count(), 2);
    assert_eq!(ledger.total_sales(), Money::from_rupiah(30_000));
    assert_eq!(ledger.average_sale(), Money::from_rupiah(15_000));

    // Most recent first
    assert_eq!(ledger.transactions()[0].total, Money::from_rupiah(5_000));
    assert_eq!(ledger.transactions()[1].total, Money::from_rupiah(25_000));
}

// Flow: the JSON file backend survives a full close/reopen cycle.
#[test]
fn file_backed_store_survives_reopen() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = PosStore::open(JsonFileBackend::new(dir.path())).unwrap();
        for spec in seed::starter_products() {
            store.add_product(spec).unwrap();
        }

        let id = store
            .catalog()
            .products()
            .iter()
            .find(|p| p.name == "Ayam Bakar Madu")
            .unwrap()
            .id
            .clone();

        store.add_to_cart(&id, 2).unwrap();
        store.begin_checkout().unwrap();
        store.select_payment_method(PaymentMethod::Debit).unwrap();
        store.complete_checkout().unwrap();
    }

    assert!(dir.path().join(format!("{}.json", PRODUCTS_KEY)).exists());
    assert!(dir
        .path()
        .join(format!("{}.json", TRANSACTIONS_KEY))
        .exists());

    let reopened = PosStore::open(JsonFileBackend::new(dir.path())).unwrap();
    assert_eq!(reopened.catalog().len(), 5);
    assert_eq!(reopened.ledger().count(), 1);

    let tx = &reopened.ledger().transactions()[0];
    assert_eq!(tx.total, Money::from_rupiah(70_000));
    assert_eq!(tx.items.len(), 1);
    assert_eq!(tx.items[0].name, "Ayam Bakar Madu");

    let ayam = reopened
        .catalog()
        .products()
        .iter()
        .find(|p| p.name == "Ayam Bakar Madu")
        .unwrap();
    assert_eq!(ayam.stock, 23);
}

// Flow: a recorded sale is immune to later catalog edits.
#[test]
fn history_is_frozen_against_catalog_edits() {
    init_tracing();
    let mut store = open_seeded(MemoryBackend::new());
    let id = id_of(&store, "Kerupuk Udang"); // 3.000

    store.add_to_cart(&id, 2).unwrap();
    store.begin_checkout().unwrap();
    store.select_payment_method(PaymentMethod::Qris).unwrap();
    let tx = store.complete_checkout().unwrap();
    assert_eq!(tx.total, Money::from_rupiah(6_000));

    // Price change and removal after the fact
    store
        .update_product(
            &id,
            kasir_core::ProductPatch {
                price: Some(4_000),
                ..Default::default()
            },
        )
        .unwrap();
    store.remove_product(&id).unwrap();

    let recorded = &store.ledger().transactions()[0];
    assert_eq!(recorded.items[0].price, Money::from_rupiah(3_000));
    assert_eq!(recorded.total, Money::from_rupiah(6_000));
}
