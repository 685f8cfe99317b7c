use std::sync::Arc;

use dashmap::DashMap;

use shared::cart::CartItem;

use super::persistence::CartPersistence;
use super::store::CartStore;
use super::MAX_PERSISTED_BYTES;

/// Registry of per-session carts
///
/// Sessions are created on first touch. Mutations run under the
/// session's map entry, then the new cart is written through to
/// persistence. Oversized carts stay memory-only with a warning
/// rather than failing the request.
pub struct CartSessions {
    carts: DashMap<String, CartStore>,
    persistence: Arc<dyn CartPersistence>,
}

impl CartSessions {
    pub fn new(persistence: Arc<dyn CartPersistence>) -> Self {
        Self {
            carts: DashMap::new(),
            persistence,
        }
    }

    /// Current cart contents, loading from persistence on first access
    pub fn snapshot(&self, session_id: &str) -> Vec<CartItem> {
        let entry = self
            .carts
            .entry(session_id.to_string())
            .or_insert_with(|| self.restore(session_id));
        entry.items().to_vec()
    }

    /// Mutate the session's cart and persist the result
    pub fn with<F>(&self, session_id: &str, mutate: F) -> Vec<CartItem>
    where
        F: FnOnce(&mut CartStore),
    {
        let mut entry = self
            .carts
            .entry(session_id.to_string())
            .or_insert_with(|| self.restore(session_id));
        mutate(&mut entry);
        let items = entry.items().to_vec();
        drop(entry);

        self.persist(session_id, &items);
        items
    }

    /// Drop the cart entirely, in memory and on disk
    pub fn clear(&self, session_id: &str) {
        self.carts.remove(session_id);
        if let Err(e) = self.persistence.clear(session_id) {
            tracing::warn!(session = %session_id, error = %e, "Failed to clear stored cart");
        }
    }

    fn restore(&self, session_id: &str) -> CartStore {
        match self.persistence.load(session_id) {
            Ok(Some(items)) => CartStore::from_items(items),
            Ok(None) => CartStore::new(),
            Err(e) => {
                tracing::warn!(session = %session_id, error = %e, "Failed to load stored cart");
                CartStore::new()
            }
        }
    }

    fn persist(&self, session_id: &str, items: &[CartItem]) {
        let size = serde_json::to_vec(items).map(|b| b.len()).unwrap_or(0);
        if size > MAX_PERSISTED_BYTES {
            tracing::warn!(
                session = %session_id,
                bytes = size,
                "Cart too large to store, keeping in memory only"
            );
            return;
        }
        if let Err(e) = self.persistence.save(session_id, items) {
            tracing::warn!(session = %session_id, error = %e, "Failed to store cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::MemoryPersistence;

    fn sessions() -> CartSessions {
        CartSessions::new(Arc::new(MemoryPersistence::new()))
    }

    #[test]
    fn mutations_are_visible_in_snapshots() {
        let sessions = sessions();
        sessions.with("s1", |cart| {
            cart.add_item(CartItem::basic("line1", "Popiah", "4.00", 1));
        });
        assert_eq!(sessions.snapshot("s1").len(), 1);
        assert!(sessions.snapshot("s2").is_empty());
    }

    #[test]
    fn carts_survive_memory_eviction_via_persistence() {
        let persistence: Arc<dyn CartPersistence> = Arc::new(MemoryPersistence::new());
        let first = CartSessions::new(persistence.clone());
        first.with("s1", |cart| {
            cart.add_item(CartItem::basic("line1", "Popiah", "4.00", 1));
        });

        // New registry over the same persistence sees the stored cart
        let second = CartSessions::new(persistence);
        assert_eq!(second.snapshot("s1").len(), 1);
    }

    #[test]
    fn clear_removes_stored_cart() {
        let sessions = sessions();
        sessions.with("s1", |cart| {
            cart.add_item(CartItem::basic("line1", "Popiah", "4.00", 1));
        });
        sessions.clear("s1");
        assert!(sessions.snapshot("s1").is_empty());
    }
}
