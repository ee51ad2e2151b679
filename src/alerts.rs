// One-shot price alerts. Threshold checks are inclusive; a triggered alert
// never fires again but stays in the book until removed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("target price must be positive")]
    InvalidPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    Above,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: String,
    pub target_price: f64,
    pub direction: AlertDirection,
    pub triggered: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertBook {
    alerts: Vec<PriceAlert>,
    seq: u64,
}

impl AlertBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[PriceAlert] {
        &self.alerts
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.triggered).count()
    }

    /// Register an alert; returns its id.
    pub fn add(&mut self, target_price: f64, direction: AlertDirection) -> Result<String, AlertError> {
        if !target_price.is_finite() || target_price <= 0.0 {
            return Err(AlertError::InvalidPrice);
        }
        let id = format!("alert-{}", self.seq);
        self.seq += 1;
        self.alerts.push(PriceAlert {
            id: id.clone(),
            target_price,
            direction,
            triggered: false,
        });
        Ok(id)
    }

    /// Drop an alert regardless of triggered state. True if it existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }

    /// Evaluate all untriggered alerts against the current price and return
    /// the ids of those that fired.
    pub fn check(&mut self, price: f64) -> Vec<String> {
        let mut fired = Vec::new();
        for alert in &mut self.alerts {
            if alert.triggered {
                continue;
            }
            let hit = match alert.direction {
                AlertDirection::Above => price >= alert.target_price,
                AlertDirection::Below => price <= alert.target_price,
            };
            if hit {
                alert.triggered = true;
                fired.push(alert.id.clone());
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn above_fires_inclusively() {
        let mut book = AlertBook::new();
        let id = book.add(0.06, AlertDirection::Above).expect("add");
        assert!(book.check(0.059).is_empty());
        assert_eq!(book.check(0.06), vec![id]);
    }

    #[test]
    fn below_fires_inclusively() {
        let mut book = AlertBook::new();
        let id = book.add(0.04, AlertDirection::Below).expect("add");
        assert!(book.check(0.041).is_empty());
        assert_eq!(book.check(0.04), vec![id]);
    }

    #[test]
    fn alerts_fire_at_most_once() {
        let mut book = AlertBook::new();
        book.add(0.05, AlertDirection::Above).expect("add");
        assert_eq!(book.check(0.10).len(), 1);
        assert!(book.check(0.10).is_empty(), "one-shot alert re-fired");
        assert_eq!(book.active_count(), 0);
        assert_eq!(book.alerts().len(), 1, "triggered alert stays until removed");
    }

    #[test]
    fn remove_by_id() {
        let mut book = AlertBook::new();
        let a = book.add(0.05, AlertDirection::Above).expect("add");
        let b = book.add(0.02, AlertDirection::Below).expect("add");
        assert_ne!(a, b);
        assert!(book.remove(&a));
        assert!(!book.remove(&a));
        assert_eq!(book.alerts().len(), 1);
    }

    #[test]
    fn rejects_bad_targets() {
        let mut book = AlertBook::new();
        assert_eq!(book.add(0.0, AlertDirection::Above), Err(AlertError::InvalidPrice));
        assert_eq!(book.add(-1.0, AlertDirection::Below), Err(AlertError::InvalidPrice));
        assert_eq!(book.add(f64::NAN, AlertDirection::Above), Err(AlertError::InvalidPrice));
        assert!(book.alerts().is_empty());
    }
}
