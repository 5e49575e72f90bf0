/// Test doubles to simulate the CAN bus and timer during integration tests.
use frc_can::protocol::transport::{
    can_frame::CanFrame,
    traits::{can_bus::CanBus, can_timer::CanTimer},
};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{sleep, Duration};

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior.
pub struct MockCanBus {
    tx: mpsc::UnboundedSender<CanFrame>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<CanFrame>>>,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Construct a pair of interconnected buses (DUT ↔ host).
    pub fn create_pair() -> (Self, Self) {
        let (dut_tx, host_rx) = mpsc::unbounded_channel();
        let (host_tx, dut_rx) = mpsc::unbounded_channel();

        let dut_bus = Self {
            tx: dut_tx,
            rx: Arc::new(Mutex::new(dut_rx)),
        };

        let host_bus = Self {
            tx: host_tx,
            rx: Arc::new(Mutex::new(host_rx)),
        };

        (dut_bus, host_bus)
    }

    /// Queue a frame for the other end without awaiting.
    pub fn inject(&self, frame: CanFrame) {
        self.tx.send(frame).expect("peer bus dropped");
    }

    /// Stop accepting frames from the other end; its next `send` fails.
    pub async fn close_receiver(&self) {
        self.rx.lock().await.close();
    }

    /// Everything the other end has sent so far, in order.
    pub async fn take_received(&self) -> Vec<CanFrame> {
        let mut rx = self.rx.lock().await;
        let mut frames = Vec::new();
        while let Ok(frame) = rx.try_recv() {
            frames.push(frame);
        }
        frames
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.tx.send(*frame).map_err(|_| ())?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(())
    }

    fn has_pending(&mut self) -> bool {
        self.rx
            .try_lock()
            .map(|rx| !rx.is_empty())
            .unwrap_or(false)
    }
}

#[allow(dead_code)]
/// Timer based on `tokio::time::sleep` to drive delays in tests.
pub struct MockTimer;

impl CanTimer for MockTimer {
    async fn delay_ms(&mut self, millis: u32) {
        sleep(Duration::from_millis(millis as u64)).await;
    }
}
