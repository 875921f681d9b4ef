use stockroom_types::ShoeRecord;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Stock value of a single inventory line.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemValue {
    pub product: String,
    pub value: f64,
}

/// Insertion-ordered collection of shoe records.
///
/// Records are never removed. Positions returned by the query methods stay
/// valid for as long as the inventory lives.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inventory {
    records: Vec<ShoeRecord>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory holding `records` in the given order.
    pub fn from_records(records: Vec<ShoeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoeRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&ShoeRecord> {
        self.records.get(position)
    }

    /// Append a record and return its position.
    pub fn add(&mut self, record: ShoeRecord) -> usize {
        debug!(code = %record.code, "adding record");
        self.records.push(record);
        self.records.len() - 1
    }

    /// Position of the record with the smallest quantity.
    ///
    /// Among equal quantities the earliest record wins.
    pub fn lowest_stock(&self) -> Option<usize> {
        self.first_by(|candidate, best| candidate < best)
    }

    /// Position of the record with the largest quantity.
    ///
    /// Among equal quantities the earliest record wins.
    pub fn highest_stock(&self) -> Option<usize> {
        self.first_by(|candidate, best| candidate > best)
    }

    /// First record whose code matches `code` exactly.
    pub fn find_by_code(&self, code: &str) -> Option<&ShoeRecord> {
        self.records.iter().find(|record| record.code == code)
    }

    /// Stock value of every record, in insertion order.
    pub fn valuations(&self) -> Vec<ItemValue> {
        self.records
            .iter()
            .map(|record| ItemValue {
                product: record.product.clone(),
                value: record.value(),
            })
            .collect()
    }

    /// Increase the quantity of the record at `position` by `amount`.
    pub fn restock(&mut self, position: usize, amount: u64) -> StoreResult<&ShoeRecord> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(position)
            .ok_or(StoreError::NoSuchPosition { position, len })?;

        let updated = i64::try_from(amount)
            .ok()
            .and_then(|amount| record.quantity.checked_add(amount))
            .ok_or_else(|| StoreError::QuantityOverflow {
                code: record.code.clone(),
                amount,
            })?;

        debug!(code = %record.code, from = record.quantity, to = updated, "restocked");
        record.quantity = updated;
        Ok(record)
    }

    /// Scan once, replacing the current pick only when `better` holds strictly.
    fn first_by(&self, better: impl Fn(i64, i64) -> bool) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (position, record) in self.records.iter().enumerate() {
            match best {
                Some((_, quantity)) if !better(record.quantity, quantity) => {}
                _ => best = Some((position, record.quantity)),
            }
        }
        best.map(|(position, _)| position)
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a ShoeRecord;
    type IntoIter = std::slice::Iter<'a, ShoeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
