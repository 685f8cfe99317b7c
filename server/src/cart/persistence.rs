use std::path::Path;

use anyhow::{Context, Result};
use dashmap::DashMap;
use redb::{Database, ReadableDatabase, TableDefinition};

use shared::cart::CartItem;

const CARTS: TableDefinition<&str, &[u8]> = TableDefinition::new("carts");

/// Durable storage for session carts, keyed by session id
pub trait CartPersistence: Send + Sync {
    fn load(&self, session_id: &str) -> Result<Option<Vec<CartItem>>>;
    fn save(&self, session_id: &str, items: &[CartItem]) -> Result<()>;
    fn clear(&self, session_id: &str) -> Result<()>;
}

/// Memory-only fallback, used when the cart database cannot be opened
#[derive(Default)]
pub struct MemoryPersistence {
    carts: DashMap<String, Vec<CartItem>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartPersistence for MemoryPersistence {
    fn load(&self, session_id: &str) -> Result<Option<Vec<CartItem>>> {
        Ok(self.carts.get(session_id).map(|c| c.clone()))
    }

    fn save(&self, session_id: &str, items: &[CartItem]) -> Result<()> {
        self.carts.insert(session_id.to_string(), items.to_vec());
        Ok(())
    }

    fn clear(&self, session_id: &str) -> Result<()> {
        self.carts.remove(session_id);
        Ok(())
    }
}

/// redb-backed cart storage
///
/// One table, session id to JSON bytes. Every save replaces the whole
/// cart; carts are small so this stays cheap.
pub struct RedbCartPersistence {
    db: Database,
}

impl RedbCartPersistence {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Database::create(path.as_ref())
            .with_context(|| format!("open cart database at {}", path.as_ref().display()))?;
        // Create the table up front so reads never hit a missing table
        let txn = db.begin_write().context("init cart table")?;
        txn.open_table(CARTS).context("init cart table")?;
        txn.commit().context("init cart table")?;
        Ok(Self { db })
    }
}

impl CartPersistence for RedbCartPersistence {
    fn load(&self, session_id: &str) -> Result<Option<Vec<CartItem>>> {
        let txn = self.db.begin_read().context("begin cart read")?;
        let table = txn.open_table(CARTS).context("open cart table")?;
        match table.get(session_id).context("read cart")? {
            Some(bytes) => {
                let items = serde_json::from_slice(bytes.value()).context("decode cart")?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    fn save(&self, session_id: &str, items: &[CartItem]) -> Result<()> {
        let bytes = serde_json::to_vec(items).context("encode cart")?;
        let txn = self.db.begin_write().context("begin cart write")?;
        {
            let mut table = txn.open_table(CARTS).context("open cart table")?;
            table
                .insert(session_id, bytes.as_slice())
                .context("write cart")?;
        }
        txn.commit().context("commit cart write")?;
        Ok(())
    }

    fn clear(&self, session_id: &str) -> Result<()> {
        let txn = self.db.begin_write().context("begin cart write")?;
        {
            let mut table = txn.open_table(CARTS).context("open cart table")?;
            table.remove(session_id).context("remove cart")?;
        }
        txn.commit().context("commit cart write")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redb_round_trips_a_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbCartPersistence::open(dir.path().join("carts.redb")).unwrap();

        let items = vec![CartItem::basic("line1", "Chicken Rice", "5.50", 2)];
        store.save("sess-a", &items).unwrap();

        let loaded = store.load("sess-a").unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Chicken Rice");

        store.clear("sess-a").unwrap();
        assert!(store.load("sess-a").unwrap().is_none());
    }

    #[test]
    fn missing_session_loads_none() {
        let store = MemoryPersistence::new();
        assert!(store.load("nobody").unwrap().is_none());
    }
}
