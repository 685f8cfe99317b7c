use shared::cart::CartItem;

/// In-memory cart for one session
///
/// Lines are never merged: adding the same item twice yields two
/// lines, matching how customers re-add an item with different
/// options. Matching for update/remove is by cart line id.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a line. Never merges with an existing line.
    pub fn add_item(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Set a line's quantity; zero or negative removes the line.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.items.retain(|i| i.id != line_id);
            return;
        }
        for item in self.items.iter_mut() {
            if item.id == line_id {
                item.quantity = quantity;
            }
        }
    }

    /// Remove the first line with the given id
    pub fn remove_item(&mut self, line_id: &str) {
        if let Some(pos) = self.items.iter().position(|i| i.id == line_id) {
            self.items.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_never_merges_lines() {
        let mut cart = CartStore::new();
        cart.add_item(CartItem::basic("line1", "Satay", "8.00", 1));
        cart.add_item(CartItem::basic("line2", "Satay", "8.00", 1));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = CartStore::new();
        cart.add_item(CartItem::basic("line1", "Satay", "8.00", 2));
        cart.update_quantity("line1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_changes_only_matching_line() {
        let mut cart = CartStore::new();
        cart.add_item(CartItem::basic("line1", "Satay", "8.00", 1));
        cart.add_item(CartItem::basic("line2", "Otah", "2.50", 1));
        cart.update_quantity("line2", 5);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.items()[1].quantity, 5);
    }

    #[test]
    fn remove_takes_first_match_only() {
        let mut cart = CartStore::new();
        cart.add_item(CartItem::basic("dup", "Satay", "8.00", 1));
        cart.add_item(CartItem::basic("dup", "Satay", "8.00", 3));
        cart.remove_item("dup");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }
}
