// src/effect/debounce.rs

use bevy::time::{Timer, TimerMode};
use std::time::Duration;

/// Verzögert eine Aktion bis `delay` nach dem letzten Ereignis.
///
/// Jedes neue Ereignis bricht das anstehende ab und startet den Timer mit
/// der neuen Nutzlast neu; nur das letzte Ereignis einer Serie feuert.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(Timer, T)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Bricht ein anstehendes Ereignis ab und plant `payload` neu ein.
    pub fn trigger(&mut self, payload: T) {
        self.cancel();
        self.pending = Some((Timer::new(self.delay, TimerMode::Once), payload));
    }

    /// Verwirft ein anstehendes Ereignis. Gibt `true` zurück, wenn eines anstand.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Lässt die Zeit voranschreiten; liefert die Nutzlast, sobald die
    /// Verzögerung abgelaufen ist.
    pub fn tick(&mut self, delta: Duration) -> Option<T> {
        let (timer, _) = self.pending.as_mut()?;
        if !timer.tick(delta).finished() {
            return None;
        }
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_fires_once_after_delay() {
        let mut d = Debounce::new(ms(60));
        d.trigger(1);
        assert_eq!(d.tick(ms(30)), None);
        assert_eq!(d.tick(ms(30)), Some(1));
        assert!(!d.is_pending());
        assert_eq!(d.tick(ms(100)), None);
    }

    #[test]
    fn test_only_last_event_of_burst_fires() {
        let mut d = Debounce::new(ms(60));
        d.trigger("a");
        d.tick(ms(50));
        d.trigger("b");
        d.tick(ms(50));
        d.trigger("c");
        assert_eq!(d.tick(ms(50)), None);
        assert_eq!(d.tick(ms(10)), Some("c"));
    }

    #[test]
    fn test_continuous_events_postpone_forever() {
        let mut d = Debounce::new(ms(500));
        for i in 0..100 {
            d.trigger(i);
            assert_eq!(d.tick(ms(100)), None);
        }
        assert!(d.is_pending());
    }

    #[test]
    fn test_cancel_discards_pending() {
        let mut d = Debounce::new(ms(10));
        assert!(!d.cancel());
        d.trigger(());
        assert!(d.cancel());
        assert_eq!(d.tick(ms(20)), None);
    }
}
