use serde::Serialize;

use crate::db::models::RestaurantInfo;
use crate::pricing::calculator::round_money;

/// Charge breakdown shown at checkout and frozen onto the order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeBreakdown {
    pub subtotal: f64,
    pub service_charge: f64,
    pub gst: f64,
    pub total: f64,
}

/// Compute service charge and GST on top of a subtotal.
///
/// Rates are stored as percentages (10 = 10%). GST compounds on the
/// service-charged amount:
///   total = subtotal * (1 + sc) * (1 + gst)
/// Disabled charges contribute zero. Each component rounds to cents.
pub fn compute_charges(subtotal: f64, info: &RestaurantInfo) -> ChargeBreakdown {
    let sc_rate = if info.service_charge_enabled {
        info.service_charge_rate / 100.0
    } else {
        0.0
    };
    let gst_rate = if info.gst_enabled {
        info.gst_rate / 100.0
    } else {
        0.0
    };

    let service_charge = round_money(subtotal * sc_rate);
    let gst = round_money(subtotal * (1.0 + sc_rate) * gst_rate);
    let total = round_money(subtotal * (1.0 + sc_rate) * (1.0 + gst_rate));

    ChargeBreakdown {
        subtotal: round_money(subtotal),
        service_charge,
        gst,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(sc: bool, gst: bool) -> RestaurantInfo {
        RestaurantInfo {
            service_charge_enabled: sc,
            service_charge_rate: 10.0,
            gst_enabled: gst,
            gst_rate: 9.0,
            ..Default::default()
        }
    }

    #[test]
    fn both_charges_compound() {
        // 32.00 * 1.10 * 1.09 = 38.368 -> 38.37
        let b = compute_charges(32.00, &info(true, true));
        assert_eq!(b.subtotal, 32.00);
        assert_eq!(b.service_charge, 3.20);
        assert_eq!(b.gst, 3.17);
        assert_eq!(b.total, 38.37);
    }

    #[test]
    fn disabled_charges_are_zero() {
        let b = compute_charges(32.00, &info(false, false));
        assert_eq!(b.service_charge, 0.0);
        assert_eq!(b.gst, 0.0);
        assert_eq!(b.total, 32.00);
    }

    #[test]
    fn rates_are_percentages() {
        // Settings store 10 for 10%, as entered in the back office
        let b = compute_charges(100.0, &info(true, false));
        assert_eq!(b.service_charge, 10.0);
        assert_eq!(b.total, 110.0);
    }

    #[test]
    fn gst_only_applies_to_plain_subtotal() {
        let b = compute_charges(100.0, &info(false, true));
        assert_eq!(b.gst, 9.0);
        assert_eq!(b.total, 109.0);
    }

    #[test]
    fn nan_subtotal_propagates() {
        let b = compute_charges(f64::NAN, &info(true, true));
        assert!(b.total.is_nan());
    }
}
