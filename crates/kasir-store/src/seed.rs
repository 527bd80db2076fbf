//! # Seed Data
//!
//! Starter catalog for a first launch, so a fresh install has something
//! to sell before the operator enters their own products.

use kasir_core::ProductSpec;

/// The starter products a fresh store is typically seeded with.
///
/// ## Usage
/// ```rust
/// use kasir_store::{MemoryBackend, PosStore, seed};
///
/// let mut store = PosStore::open(MemoryBackend::new()).unwrap();
/// if store.catalog().is_empty() {
///     for spec in seed::starter_products() {
///         store.add_product(spec).unwrap();
///     }
/// }
/// ```
pub fn starter_products() -> Vec<ProductSpec> {
    vec![
        ProductSpec::new("Nasi Goreng Special", 25_000, "Makanan", 50)
            .with_image("https://picsum.photos/seed/nasi/400/300"),
        ProductSpec::new("Es Teh Manis", 5_000, "Minuman", 100)
            .with_image("https://picsum.photos/seed/teh/400/300"),
        ProductSpec::new("Kopi Susu Gula Aren", 18_000, "Minuman", 40)
            .with_image("https://picsum.photos/seed/coffee/400/300"),
        ProductSpec::new("Kerupuk Udang", 3_000, "Snack", 200)
            .with_image("https://picsum.photos/seed/snack/400/300"),
        ProductSpec::new("Ayam Bakar Madu", 35_000, "Makanan", 25)
            .with_image("https://picsum.photos/seed/chicken/400/300"),
    ]
}
