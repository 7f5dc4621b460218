use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{CustomerStore, StoreError, StoreResult};
use crate::models::customer::{Customer, CustomerId, NewCustomer};

#[derive(Debug)]
struct Inner {
    next_id: CustomerId,
    customers: BTreeMap<CustomerId, Customer>,
}

/// Customer store held in process memory.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryCustomerStore {
    inner: RwLock<Inner>,
}

impl Default for InMemoryCustomerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: CustomerId::FIRST,
                customers: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer> {
        let mut inner = self.inner.write();

        let id = inner.next_id;
        inner.next_id = id.next();

        let customer = Customer {
            id,
            name: customer.name,
            age: customer.age,
        };
        inner.customers.insert(id, customer.clone());

        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> StoreResult<Option<Customer>> {
        Ok(self.inner.read().customers.get(&id).cloned())
    }

    async fn save(&self, customer: &Customer) -> StoreResult<Customer> {
        let mut inner = self.inner.write();
        let stored = inner
            .customers
            .get_mut(&customer.id)
            .ok_or(StoreError::NotFound(customer.id))?;
        *stored = customer.clone();

        Ok(customer.clone())
    }

    async fn delete_by_id(&self, id: CustomerId) -> StoreResult<bool> {
        Ok(self.inner.write().customers.remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
