//! Asynchronous timer abstraction bounding the dispatcher's receive window.

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait CanTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(&'a mut self, millis: u32) -> impl core::future::Future<Output = ()> + 'a;
}

/// [`CanTimer`] backed by the embassy time driver.
///
/// Only usable on targets that link an `embassy-time` driver.
#[cfg(feature = "embassy-timer")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy-timer")]
impl CanTimer for EmbassyTimer {
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(millis as u64)).await;
    }
}

#[cfg(all(test, feature = "embassy-timer"))]
mod tests {
    use super::*;

    fn assert_timer<T: CanTimer + Default + Copy>() {}

    #[test]
    /// The embassy-backed timer satisfies the dispatcher timer seam.
    fn test_embassy_timer_is_can_timer() {
        assert_timer::<EmbassyTimer>();
    }
}
