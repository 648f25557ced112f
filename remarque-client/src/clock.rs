use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hands out millisecond timestamps, bumped past the last one handed out so
/// that two calls within the same millisecond (or across a clock going
/// backwards) never return the same id
///
/// Returns `None` once the last id handed out is `i64::MAX`.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn starting_after(last: Option<i64>) -> IdGenerator {
        IdGenerator { last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> Option<i64> {
        let now = now.timestamp_millis();
        let id = match self.last {
            Some(last) if now <= last => last.checked_add(1)?,
            _ => now,
        };
        self.last = Some(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn follows_clock() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(at(1000)), Some(1000));
        assert_eq!(ids.next(at(1500)), Some(1500));
    }

    #[test]
    fn same_millisecond() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(at(1000)), Some(1000));
        assert_eq!(ids.next(at(1000)), Some(1001));
        assert_eq!(ids.next(at(1000)), Some(1002));
        assert_eq!(ids.next(at(1001)), Some(1003));
        assert_eq!(ids.next(at(2000)), Some(2000));
    }

    #[test]
    fn clock_going_backwards() {
        let mut ids = IdGenerator::starting_after(Some(5000));
        assert_eq!(ids.next(at(1000)), Some(5001));
        assert_eq!(ids.next(at(6000)), Some(6000));
    }

    #[test]
    fn exhausted() {
        let mut ids = IdGenerator::starting_after(Some(i64::MAX - 1));
        assert_eq!(ids.next(at(1000)), Some(i64::MAX));
        assert_eq!(ids.next(at(1000)), None);
        assert_eq!(ids.next(at(2000)), None);
    }
}
