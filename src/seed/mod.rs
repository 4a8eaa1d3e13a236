use tracing::info;

use crate::models::ProductInput;
use crate::store::{ProductStore, StoreResult};

/// Products loaded into an empty catalog at startup.
pub fn default_catalog() -> Vec<ProductInput> {
    vec![
        ProductInput::new(101, "Café especial em grãos 1kg", 74.9, 100),
        ProductInput::new(202, "Caixa de barras de cereal sortidas", 39.5, 200),
        ProductInput::new(303, "Teclado mecânico compacto", 349.9, 300),
    ]
}

/// Seed `store` with the default catalog unless it already holds products.
pub fn seed_catalog(store: &ProductStore) -> StoreResult<usize> {
    let seeded = store.seed_if_empty(&default_catalog())?;
    if seeded.is_empty() {
        info!(existing = store.len(), "Catalog already populated, skipping seed");
    } else {
        info!(count = seeded.len(), "Seeded default catalog");
    }
    Ok(seeded.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid_and_labelled() {
        let store = ProductStore::new();
        assert_eq!(seed_catalog(&store).unwrap(), 3);

        let labels: Vec<(i32, String)> = store
            .list()
            .into_iter()
            .map(|p| (p.product_code, p.stock_group_label))
            .collect();
        assert_eq!(
            labels,
            vec![
                (101, "Bebidas e Cafés".to_string()),
                (202, "Alimentos e Mercearia".to_string()),
                (303, "Tecnologia e Acessórios".to_string()),
            ]
        );
    }

    #[test]
    fn seeding_twice_is_a_no_op() {
        let store = ProductStore::new();
        seed_catalog(&store).unwrap();
        assert_eq!(seed_catalog(&store).unwrap(), 0);
        assert_eq!(store.len(), 3);
    }
}
