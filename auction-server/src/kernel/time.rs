use time::OffsetDateTime;

/// Time source for the lifecycle engine.
///
/// Abstracted so expiry-driven behavior can be tested with deterministic
/// time instead of sleeping.
pub trait TimeSource: Send + Sync + 'static {
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time source used in production.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[cfg(test)]
pub mod tests {
    use {
        super::TimeSource,
        std::{
            sync::Mutex,
            time::Duration,
        },
        time::OffsetDateTime,
    };

    /// Manually advanced time source for tests.
    pub struct FakeTimeSource {
        now: Mutex<OffsetDateTime>,
    }

    impl FakeTimeSource {
        pub fn new(now: OffsetDateTime) -> Self {
            Self {
                now: Mutex::new(now),
            }
        }

        pub fn advance(&self, by: Duration) {
            *self.now.lock().unwrap() += by;
        }
    }

    impl TimeSource for FakeTimeSource {
        fn now(&self) -> OffsetDateTime {
            *self.now.lock().unwrap()
        }
    }
}
