use rand::Rng;

use crate::db::repository::OrderRepository;
use crate::utils::{AppError, AppResult};

const ATTEMPTS: u32 = 5;

/// Allocate a 6-digit order number not used by any stored order.
///
/// Random draw with a collision check against the order table. With a
/// 900000-number space the retry loop only matters at absurd volumes;
/// after a handful of collisions in a row we give up rather than spin.
pub async fn generate_unique(orders: &OrderRepository) -> AppResult<String> {
    for _ in 0..ATTEMPTS {
        let candidate = {
            let mut rng = rand::thread_rng();
            rng.gen_range(100000..=999999).to_string()
        };
        if !orders.order_number_exists(&candidate).await? {
            return Ok(candidate);
        }
    }
    Err(AppError::internal(
        "could not allocate a unique order number",
    ))
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    #[test]
    fn drawn_numbers_are_six_digits() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let n: u32 = rng.gen_range(100000..=999999);
            assert_eq!(n.to_string().len(), 6);
        }
    }
}
