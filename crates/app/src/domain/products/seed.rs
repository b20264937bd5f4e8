//! Catalog seed data.

use rust_decimal::Decimal;

use crate::domain::products::models::{NewProduct, ProductId};

const CATALOG: [(&str, &str, i64, &str); 6] = [
    ("p1", "Vibe Tee - Black", 499, "Cotton t-shirt"),
    ("p2", "Vibe Hoodie", 1299, "Warm and cozy"),
    ("p3", "Vibe Sneakers", 2599, "Comfortable everyday shoes"),
    ("p4", "Vibe Cap", 249, "Adjustable cap"),
    ("p5", "Vibe Backpack", 1999, "Durable laptop backpack"),
    ("p6", "Vibe Mug", 199, "Ceramic mug"),
];

/// The fixed product set inserted into an empty catalog at boot.
#[must_use]
pub fn catalog() -> Vec<NewProduct> {
    CATALOG
        .iter()
        .map(|&(id, name, price, description)| NewProduct {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
            description: Some(description.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_has_six_distinct_products() {
        let products = catalog();
        let ids: HashSet<_> = products.iter().map(|p| p.id.clone()).collect();

        assert_eq!(products.len(), 6);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn catalog_prices_are_non_negative() {
        assert!(catalog().iter().all(|p| p.price >= Decimal::ZERO));
    }
}
