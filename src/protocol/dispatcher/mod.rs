//! Polling dispatcher routing received frames to registered callbacks.
//!
//! One call to [`Dispatcher::step`] performs a full cycle:
//!
//! 1. wait for a frame, at most `receive_timeout_ms`;
//! 2. on a frame, look its identifier up in the data or remote-request table
//!    (picked by [`FrameKind`]), falling back to the unmatched handler; in
//!    drain mode, keep handling frames while the bus reports more queued;
//! 3. on timeout, invoke the timeout handler;
//! 4. invoke every iteration callback, in registration order.
//!
//! Any frame returned by a callback is sent right after that callback
//! returns. Callbacks never touch the bus themselves, which keeps the
//! transmit order identical to the callback order.
//!
//! The dispatcher owns no heap memory: tables are fixed-capacity, sized by
//! the `HANDLERS` and `ITERATIONS` const generics, and callbacks are borrowed
//! trait objects living for `'a`.
//!
//! A panicking callback unwinds out of `step()`. The loop is not meant to
//! survive a broken handler: heartbeat-loss detection depends on a regular
//! step cadence.
use core::convert::Infallible;

use futures_util::{future::select, future::Either, pin_mut};
use heapless::{LinearMap, Vec};

use crate::error::{DispatchError, RegistrationError};
use crate::protocol::transport::can_frame::{CanFrame, FrameKind};
use crate::protocol::transport::traits::{can_bus::CanBus, can_timer::CanTimer};
use crate::protocol::transport::DEFAULT_RECEIVE_TIMEOUT_MS;

/// Callback for a received frame. May return a frame to transmit.
pub type FrameHandler<'a> = &'a mut dyn FnMut(&CanFrame) -> Option<CanFrame>;

/// Callback taking no frame (timeout and iteration callbacks). May return a
/// frame to transmit.
pub type IdleHandler<'a> = &'a mut dyn FnMut() -> Option<CanFrame>;

//==================================================================================CONFIG
/// Runtime settings of a [`Dispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatcherConfig {
    /// Maximum wait for a frame within one step (ms).
    pub receive_timeout_ms: u32,
    /// Handle every queued frame within one step instead of a single one.
    pub drain_queue: bool,
}

impl DispatcherConfig {
    pub const fn new() -> Self {
        Self {
            receive_timeout_ms: DEFAULT_RECEIVE_TIMEOUT_MS,
            drain_queue: false,
        }
    }

    pub const fn with_receive_timeout_ms(mut self, receive_timeout_ms: u32) -> Self {
        self.receive_timeout_ms = receive_timeout_ms;
        self
    }

    pub const fn with_drain_queue(mut self, drain_queue: bool) -> Self {
        self.drain_queue = drain_queue;
        self
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened during the receive phase of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Number of frames handled (always 1 outside drain mode).
    Handled(usize),
    /// No frame arrived within the receive window.
    TimedOut,
}

//==================================================================================DISPATCHER
/// Frame dispatcher owning the CAN bus and the receive-window timer.
pub struct Dispatcher<'a, C, T, const HANDLERS: usize, const ITERATIONS: usize>
where
    C: CanBus,
    T: CanTimer,
{
    can_bus: C,
    timer: T,
    config: DispatcherConfig,
    data_handlers: LinearMap<u32, FrameHandler<'a>, HANDLERS>,
    remote_handlers: LinearMap<u32, FrameHandler<'a>, HANDLERS>,
    unmatched_handler: Option<FrameHandler<'a>>,
    timeout_handler: Option<IdleHandler<'a>>,
    iteration_handlers: Vec<IdleHandler<'a>, ITERATIONS>,
}

impl<'a, C, T, const HANDLERS: usize, const ITERATIONS: usize>
    Dispatcher<'a, C, T, HANDLERS, ITERATIONS>
where
    C: CanBus,
    T: CanTimer,
{
    /// Create a dispatcher with empty tables.
    pub fn new(can_bus: C, timer: T, config: DispatcherConfig) -> Self {
        Self {
            can_bus,
            timer,
            config,
            data_handlers: LinearMap::new(),
            remote_handlers: LinearMap::new(),
            unmatched_handler: None,
            timeout_handler: None,
            iteration_handlers: Vec::new(),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Change the receive window; applies from the next step.
    pub fn set_receive_timeout_ms(&mut self, receive_timeout_ms: u32) {
        self.config.receive_timeout_ms = receive_timeout_ms;
    }

    /// Give back the bus and timer.
    pub fn into_parts(self) -> (C, T) {
        (self.can_bus, self.timer)
    }

    //==============================================================================REGISTRATION
    /// Route data frames carrying `id` to `handler`.
    ///
    /// A second registration for the same identifier is refused and the first
    /// handler stays active.
    pub fn register_handler(
        &mut self,
        id: impl Into<u32>,
        handler: FrameHandler<'a>,
    ) -> Result<(), RegistrationError> {
        register(&mut self.data_handlers, id.into(), handler)
    }

    /// Route remote transmission requests for `id` to `handler`.
    ///
    /// Same duplicate policy as [`register_handler`](Self::register_handler).
    pub fn register_rtr_handler(
        &mut self,
        id: impl Into<u32>,
        handler: FrameHandler<'a>,
    ) -> Result<(), RegistrationError> {
        register(&mut self.remote_handlers, id.into(), handler)
    }

    /// Fallback for frames no table entry matches. Replaces any previous one.
    pub fn register_unmatched_handler(&mut self, handler: FrameHandler<'a>) {
        self.unmatched_handler = Some(handler);
    }

    /// Called when a step's receive window elapses. Replaces any previous one.
    pub fn register_timeout_handler(&mut self, handler: IdleHandler<'a>) {
        self.timeout_handler = Some(handler);
    }

    /// Make `handler` the only callback run at the end of every step.
    ///
    /// Previously registered iteration callbacks are dropped.
    pub fn register_iteration(
        &mut self,
        handler: IdleHandler<'a>,
    ) -> Result<(), RegistrationError> {
        self.register_iterations([handler])
    }

    /// Replace the iteration callbacks with `handlers`, kept in the given order.
    ///
    /// If they do not all fit, nothing changes and the previous callbacks stay active.
    pub fn register_iterations<I>(&mut self, handlers: I) -> Result<(), RegistrationError>
    where
        I: IntoIterator<Item = IdleHandler<'a>>,
    {
        let mut replacement = Vec::new();
        for handler in handlers {
            replacement.push(handler).map_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::error!("Iteration list full ({} slots)", ITERATIONS);
                RegistrationError::TableFull {
                    capacity: ITERATIONS,
                }
            })?;
        }
        self.iteration_handlers = replacement;
        Ok(())
    }

    //==============================================================================POLLING
    /// Run one receive/dispatch/iterate cycle.
    ///
    /// The receive wait is the only suspension point that depends on bus
    /// traffic; everything else completes as soon as the bus accepts the
    /// outbound frames.
    pub async fn step(&mut self) -> Result<StepOutcome, DispatchError<C::Error>> {
        let received = {
            let recv = self.can_bus.recv();
            pin_mut!(recv);
            let window = self.timer.delay_ms(self.config.receive_timeout_ms);
            pin_mut!(window);

            // `recv` is polled first: a queued frame wins over an elapsed window.
            match select(recv, window).await {
                Either::Left((frame, _)) => Some(frame.map_err(DispatchError::Receive)?),
                Either::Right(_) => None,
            }
        };

        let outcome = match received {
            Some(frame) => {
                self.dispatch(&frame).await?;
                let mut handled = 1;
                if self.config.drain_queue {
                    while self.can_bus.has_pending() {
                        let frame = self
                            .can_bus
                            .recv()
                            .await
                            .map_err(DispatchError::Receive)?;
                        self.dispatch(&frame).await?;
                        handled += 1;
                    }
                    #[cfg(feature = "defmt")]
                    defmt::debug!("Drained {} frames", handled);
                }
                StepOutcome::Handled(handled)
            }
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("No frame within {} ms", self.config.receive_timeout_ms);
                if let Some(handler) = self.timeout_handler.as_mut() {
                    let reply = handler();
                    self.transmit(reply).await?;
                }
                StepOutcome::TimedOut
            }
        };

        for handler in self.iteration_handlers.iter_mut() {
            if let Some(frame) = handler() {
                self.can_bus
                    .send(&frame)
                    .await
                    .map_err(DispatchError::Send)?;
            }
        }

        Ok(outcome)
    }

    /// Transmit a frame outside any callback, e.g. a status message from the
    /// owning loop between steps.
    pub async fn send(&mut self, frame: &CanFrame) -> Result<(), DispatchError<C::Error>> {
        self.can_bus.send(frame).await.map_err(DispatchError::Send)
    }

    /// Step forever. Only returns on a transport error.
    pub async fn run(&mut self) -> Result<Infallible, DispatchError<C::Error>> {
        loop {
            self.step().await?;
        }
    }

    async fn dispatch(&mut self, frame: &CanFrame) -> Result<(), DispatchError<C::Error>> {
        let table = match frame.kind() {
            FrameKind::Data => &mut self.data_handlers,
            FrameKind::Remote => &mut self.remote_handlers,
        };

        let reply = if let Some(handler) = table.get_mut(&frame.raw_id()) {
            handler(frame)
        } else if let Some(handler) = self.unmatched_handler.as_mut() {
            handler(frame)
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("Dropping unmatched frame {:#x}", frame.raw_id());
            None
        };

        self.transmit(reply).await
    }

    async fn transmit(&mut self, reply: Option<CanFrame>) -> Result<(), DispatchError<C::Error>> {
        if let Some(frame) = reply {
            self.can_bus
                .send(&frame)
                .await
                .map_err(DispatchError::Send)?;
        }
        Ok(())
    }
}

fn register<'a, const N: usize>(
    table: &mut LinearMap<u32, FrameHandler<'a>, N>,
    id: u32,
    handler: FrameHandler<'a>,
) -> Result<(), RegistrationError> {
    if table.contains_key(&id) {
        #[cfg(feature = "defmt")]
        defmt::warn!("Identifier {:#x} already registered, keeping first handler", id);
        return Err(RegistrationError::DuplicateId { id });
    }
    table.insert(id, handler).map(|_| ()).map_err(|_| {
        #[cfg(feature = "defmt")]
        defmt::error!("Handler table full ({} slots)", N);
        RegistrationError::TableFull { capacity: N }
    })
}
