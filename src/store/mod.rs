use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Product, ProductInput, StockGroup};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

fn invalid(msg: impl Into<String>) -> StoreError {
    StoreError::InvalidInput(msg.into())
}

fn conflict(code: i32) -> StoreError {
    StoreError::Conflict(format!("a product with code {} already exists", code))
}

fn not_found(id: u64) -> StoreError {
    StoreError::NotFound(format!("Product {} not found", id))
}

// ── Validation ───────────────────────────────────────────────────────────────

/// A `ProductInput` that passed validation, waiting for an id.
struct Draft {
    product_code: i32,
    description: String,
    price: f64,
    group: StockGroup,
}

impl Draft {
    fn into_product(self, id: u64) -> Product {
        Product {
            id,
            product_code: self.product_code,
            description: self.description,
            price: self.price,
            stock_group_code: self.group.code(),
            stock_group_label: self.group.label().to_string(),
        }
    }
}

fn validate(input: &ProductInput) -> StoreResult<Draft> {
    let product_code = input
        .product_code
        .ok_or_else(|| invalid("productCode is required"))?;
    if product_code <= 0 {
        return Err(invalid("productCode must be positive"));
    }

    let description = input
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| invalid("description must not be blank"))?;

    let price = input.price.ok_or_else(|| invalid("price is required"))?;
    if !price.is_finite() || price < 0.0 {
        return Err(invalid("price must be >= 0"));
    }

    let group_code = input
        .stock_group_code
        .ok_or_else(|| invalid("stockGroupCode is required"))?;
    let group = StockGroup::from_code(group_code)
        .ok_or_else(|| invalid(format!("stockGroupCode {} is not a known stock group", group_code)))?;

    Ok(Draft {
        product_code,
        description: description.to_string(),
        price,
        group,
    })
}

// ── ProductStore ─────────────────────────────────────────────────────────────

/// Thread-safe in-memory catalog.
///
/// - `by_id`      → primary records, keyed by store-issued id
/// - `id_by_code` → unique secondary index `productCode → id`
/// - `next_id`    → last issued id; the first product gets 1
///
/// Only `update` nests guards, and always takes `by_id` before `id_by_code`.
/// A code is reserved in `id_by_code` before its record lands in `by_id`, so
/// readers may briefly see an index entry without a record; `get_by_code`
/// reports that as absent.
#[derive(Debug, Default)]
pub struct ProductStore {
    by_id: DashMap<u64, Product>,
    id_by_code: DashMap<i32, u64>,
    next_id: AtomicU64,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Create every input in order. Items are committed one at a time, so a
    /// failure on item N leaves items `0..N` in the store.
    pub fn create(&self, inputs: &[ProductInput]) -> StoreResult<Vec<Product>> {
        if inputs.is_empty() {
            return Err(invalid("product list must not be empty"));
        }

        let mut created = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            match self.create_one(input) {
                Ok(product) => created.push(product),
                Err(e) => {
                    if index > 0 {
                        warn!(committed = index, error = %e, "Batch create stopped part-way");
                    }
                    return Err(e);
                }
            }
        }
        Ok(created)
    }

    fn create_one(&self, input: &ProductInput) -> StoreResult<Product> {
        let draft = validate(input)?;
        let code = draft.product_code;

        let id = match self.id_by_code.entry(code) {
            Entry::Occupied(_) => return Err(conflict(code)),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(id);
                id
            }
        };

        let product = draft.into_product(id);
        self.by_id.insert(id, product.clone());

        debug!(id, code, "Inserted product");
        Ok(product)
    }

    pub fn get(&self, id: u64) -> Option<Product> {
        self.by_id.get(&id).map(|p| p.value().clone())
    }

    /// All live products, ascending by id.
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.by_id.iter().map(|e| e.value().clone()).collect();
        products.sort_unstable_by_key(|p| p.id);
        products
    }

    pub fn get_by_code(&self, code: i32) -> Option<Product> {
        let id = *self.id_by_code.get(&code)?;
        self.get(id)
    }

    pub fn code_exists(&self, code: i32) -> bool {
        self.id_by_code.contains_key(&code)
    }

    /// Replace every descriptive field of product `id`.
    ///
    /// The record's write guard is held across the index changes, so updates
    /// and removes of one id run one at a time. Lock order is always
    /// `by_id` → `id_by_code`.
    pub fn update(&self, id: u64, input: &ProductInput) -> StoreResult<Product> {
        let mut slot = self.by_id.get_mut(&id).ok_or_else(|| not_found(id))?;
        let draft = validate(input)?;
        let new_code = draft.product_code;
        let old_code = slot.product_code;

        if new_code != old_code {
            match self.id_by_code.entry(new_code) {
                Entry::Occupied(_) => return Err(conflict(new_code)),
                Entry::Vacant(free) => {
                    free.insert(id);
                }
            }
            self.id_by_code.remove_if(&old_code, |_, owner| *owner == id);
        }

        let product = draft.into_product(id);
        *slot = product.clone();
        drop(slot);

        debug!(id, old_code, new_code, "Updated product");
        Ok(product)
    }

    pub fn remove(&self, id: u64) -> StoreResult<()> {
        let (_, product) = self.by_id.remove(&id).ok_or_else(|| not_found(id))?;
        self.id_by_code
            .remove_if(&product.product_code, |_, owner| *owner == id);

        debug!(id, code = product.product_code, "Removed product");
        Ok(())
    }

    /// Run `inputs` through [`create`](Self::create) only when the store holds
    /// no products. Returns what was inserted.
    pub fn seed_if_empty(&self, inputs: &[ProductInput]) -> StoreResult<Vec<Product>> {
        if !self.is_empty() {
            return Ok(Vec::new());
        }
        self.create(inputs)
    }
}
