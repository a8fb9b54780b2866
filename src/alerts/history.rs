//! Capacity-bounded alert log

use super::types::{AlertItem, NewAlert};
use chrono::Utc;
use uuid::Uuid;

/// In-memory alert history, newest first
///
/// At most `capacity` entries are tracked. Adding an alert drops dismissed
/// entries and evicts the oldest active ones beyond `capacity - 1`, so a
/// dismissed alert stays addressable only until the next add.
#[derive(Debug, Clone)]
pub struct AlertLog {
    capacity: usize,
    alerts: Vec<AlertItem>,
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            alerts: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record a new alert and return it
    pub fn add(&mut self, alert: NewAlert) -> &AlertItem {
        // Carry forward at most capacity - 1 active entries
        self.alerts.retain(|a| !a.dismissed);
        self.alerts.truncate(self.capacity - 1);

        let item = AlertItem {
            id: Uuid::new_v4().to_string(),
            message: alert.message,
            kind: alert.kind,
            timestamp: Utc::now(),
            spread: alert.spread,
            dismissed: false,
        };
        tracing::info!(id = %item.id, kind = ?item.kind, message = %item.message, "Alert raised");
        self.alerts.insert(0, item);
        &self.alerts[0]
    }

    /// Mark an alert dismissed; returns false when the id is unknown
    pub fn dismiss(&mut self, id: &str) -> bool {
        match self.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.dismissed = true;
                true
            }
            None => false,
        }
    }

    /// Remove every alert, dismissed or not
    pub fn clear_all(&mut self) {
        self.alerts.clear();
    }

    /// Non-dismissed alerts, newest first
    pub fn active(&self) -> impl Iterator<Item = &AlertItem> {
        self.alerts.iter().filter(|a| !a.dismissed)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Every tracked alert, newest first
    pub fn all(&self) -> &[AlertItem] {
        &self.alerts
    }

    pub fn get(&self, id: &str) -> Option<&AlertItem> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertKind;
    use rust_decimal_macros::dec;

    fn info(msg: &str) -> NewAlert {
        NewAlert {
            kind: AlertKind::Info,
            message: msg.to_string(),
            spread: None,
        }
    }

    #[test]
    fn test_add_prepends() {
        let mut log = AlertLog::new(20);
        log.add(info("first"));
        log.add(NewAlert {
            kind: AlertKind::Arbitrage,
            message: "second".to_string(),
            spread: Some(dec!(0.7)),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0].message, "second");
        assert_eq!(log.all()[0].spread, Some(dec!(0.7)));
        assert_eq!(log.all()[1].message, "first");
        assert_ne!(log.all()[0].id, log.all()[1].id);
        assert!(!log.all()[0].dismissed);
    }

    #[test]
    fn test_twenty_first_alert_evicts_oldest() {
        let mut log = AlertLog::new(20);
        for i in 0..21 {
            log.add(info(&format!("alert {i}")));
        }
        assert_eq!(log.len(), 20);
        assert_eq!(log.all()[0].message, "alert 20");
        assert_eq!(log.all()[19].message, "alert 1");
        assert!(log.all().iter().all(|a| a.message != "alert 0"));
    }

    #[test]
    fn test_dismiss_hides_from_active_view_only() {
        let mut log = AlertLog::new(20);
        let id = log.add(info("a")).id.clone();
        log.add(info("b"));

        assert!(log.dismiss(&id));
        assert_eq!(log.active_count(), 1);
        assert_eq!(log.len(), 2);
        assert!(log.get(&id).unwrap().dismissed);
        assert!(log.active().all(|a| a.id != id));
    }

    #[test]
    fn test_dismiss_unknown_id() {
        let mut log = AlertLog::new(20);
        log.add(info("a"));
        assert!(!log.dismiss("missing"));
        assert_eq!(log.active_count(), 1);
    }

    #[test]
    fn test_add_drops_dismissed_entries() {
        let mut log = AlertLog::new(3);
        let id = log.add(info("dismissed")).id.clone();
        log.dismiss(&id);
        log.add(info("active 0"));
        assert!(log.get(&id).is_none());
        assert_eq!(log.len(), 1);

        for i in 1..4 {
            log.add(info(&format!("active {i}")));
        }
        assert_eq!(log.len(), 3);
        assert!(log.all().iter().all(|a| a.message != "active 0"));
    }

    #[test]
    fn test_len_bounded_when_every_alert_is_dismissed() {
        let mut log = AlertLog::new(20);
        for i in 0..500 {
            let id = log.add(info(&format!("alert {i}"))).id.clone();
            assert!(log.dismiss(&id));
            assert!(log.len() <= log.capacity());
        }
        assert_eq!(log.len(), 1);
        assert_eq!(log.active_count(), 0);
    }

    #[test]
    fn test_clear_all() {
        let mut log = AlertLog::new(20);
        let id = log.add(info("a")).id.clone();
        log.dismiss(&id);
        log.add(info("b"));
        log.clear_all();
        assert!(log.is_empty());
        assert!(log.get(&id).is_none());
    }
}
