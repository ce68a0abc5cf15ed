//! Real-time raw sample streaming at a fixed sensor cadence

use crate::accel_simulator::{AccelSimulator, PatternConfig, SimConfig};
use crate::motion_patterns::MotionPattern;
use mot_core::{MotResult, RawSample};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{interval, Duration};

/// Configuration for real-time streaming
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Accelerometer simulation configuration; the sample cadence comes
    /// from its `sample_rate`
    pub sim_config: SimConfig,
    /// Buffer size of the broadcast channel (samples retained for slow
    /// subscribers)
    pub buffer_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            sim_config: SimConfig::default(),
            buffer_size: 256,
        }
    }
}

/// Commands for controlling the stream
#[derive(Debug, Clone)]
pub enum StreamCommand {
    Start,
    Stop,
    Pause,
    Resume,
    SetPattern(MotionPattern),
    UpdateConfig(StreamConfig),
}

/// Real-time tri-axial sample stream
///
/// Publishes one `RawSample` per tick on a broadcast channel; a command
/// channel starts, stops, and reconfigures delivery. Samples are only
/// delivered while running, so the consumer side never needs to filter
/// out stale data.
pub struct RealTimeSampleStream {
    config: StreamConfig,
    simulator: AccelSimulator,
    data_sender: broadcast::Sender<RawSample>,
    control_receiver: mpsc::Receiver<StreamCommand>,
    control_sender: mpsc::Sender<StreamCommand>,
    is_running: bool,
    samples_delivered: u64,
}

impl RealTimeSampleStream {
    /// Create new sample stream
    pub fn new(config: StreamConfig) -> MotResult<Self> {
        let simulator = AccelSimulator::new(config.sim_config.clone())?;
        let (data_sender, _) = broadcast::channel(config.buffer_size.max(1));
        let (control_sender, control_receiver) = mpsc::channel(32);

        Ok(RealTimeSampleStream {
            config,
            simulator,
            data_sender,
            control_receiver,
            control_sender,
            is_running: false,
            samples_delivered: 0,
        })
    }

    /// Get a receiver for raw samples
    pub fn subscribe(&self) -> broadcast::Receiver<RawSample> {
        self.data_sender.subscribe()
    }

    /// Get control sender for sending commands
    pub fn control_handle(&self) -> mpsc::Sender<StreamCommand> {
        self.control_sender.clone()
    }

    /// Number of samples delivered since the last Stop
    pub fn samples_delivered(&self) -> u64 {
        self.samples_delivered
    }

    /// Get current configuration
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Run the delivery loop until the control channel closes
    pub async fn run(&mut self) -> MotResult<()> {
        let tick = Duration::from_secs_f32(1.0 / self.config.sim_config.sample_rate);
        let mut ticker = interval(tick);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.is_running {
                        let sample = self.simulator.next_sample();
                        self.samples_delivered += 1;
                        // Ignore send errors: no subscribers is fine
                        let _ = self.data_sender.send(sample);
                    }
                }

                command = self.control_receiver.recv() => {
                    match command {
                        Some(StreamCommand::Start) => {
                            self.is_running = true;
                        }
                        Some(StreamCommand::Stop) => {
                            self.is_running = false;
                            self.samples_delivered = 0;
                            self.simulator.reset_time();
                        }
                        Some(StreamCommand::Pause) => {
                            self.is_running = false;
                        }
                        Some(StreamCommand::Resume) => {
                            self.is_running = true;
                        }
                        Some(StreamCommand::SetPattern(pattern)) => {
                            let mut sim_config = self.config.sim_config.clone();
                            sim_config.pattern = PatternConfig::from_pattern(pattern);
                            self.simulator.update_config(sim_config.clone())?;
                            self.config.sim_config = sim_config;
                        }
                        Some(StreamCommand::UpdateConfig(new_config)) => {
                            self.simulator.update_config(new_config.sim_config.clone())?;
                            let new_tick = Duration::from_secs_f32(
                                1.0 / new_config.sim_config.sample_rate,
                            );
                            ticker = interval(new_tick);
                            self.config = new_config;
                        }
                        None => {
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Helper to create a stream and run it in a background task
pub async fn start_sample_stream(config: StreamConfig) -> MotResult<(
    broadcast::Receiver<RawSample>,
    mpsc::Sender<StreamCommand>,
)> {
    let mut stream = RealTimeSampleStream::new(config)?;
    let data_receiver = stream.subscribe();
    let control_sender = stream.control_handle();

    tokio::spawn(async move {
        if let Err(e) = stream.run().await {
            eprintln!("Sample stream error: {}", e);
        }
    });

    Ok((data_receiver, control_sender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Duration};

    fn fast_config() -> StreamConfig {
        StreamConfig {
            sim_config: SimConfig {
                sample_rate: 200.0, // 5ms ticks for faster testing
                seed: Some(3),
                ..SimConfig::default()
            },
            ..StreamConfig::default()
        }
    }

    #[tokio::test]
    async fn test_stream_delivers_samples_when_started() {
        let (mut data_receiver, control_sender) =
            start_sample_stream(fast_config()).await.unwrap();

        control_sender.send(StreamCommand::Start).await.unwrap();
        sleep(Duration::from_millis(100)).await;

        let mut sample_count = 0;
        while let Ok(sample) = data_receiver.try_recv() {
            assert!(sample.x.is_finite());
            sample_count += 1;
            if sample_count >= 5 {
                break;
            }
        }
        assert!(sample_count >= 5, "Should have received at least 5 samples");

        control_sender.send(StreamCommand::Stop).await.unwrap();
    }

    #[tokio::test]
    async fn test_stream_silent_until_started() {
        let (mut data_receiver, control_sender) =
            start_sample_stream(fast_config()).await.unwrap();

        sleep(Duration::from_millis(60)).await;
        assert!(data_receiver.try_recv().is_err());

        control_sender.send(StreamCommand::Start).await.unwrap();
        sleep(Duration::from_millis(60)).await;
        assert!(data_receiver.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_pause_resume_cycle() {
        let (mut data_receiver, control_sender) =
            start_sample_stream(fast_config()).await.unwrap();

        control_sender.send(StreamCommand::Start).await.unwrap();
        sleep(Duration::from_millis(50)).await;

        control_sender.send(StreamCommand::Pause).await.unwrap();
        sleep(Duration::from_millis(30)).await;
        while data_receiver.try_recv().is_ok() {}

        sleep(Duration::from_millis(50)).await;
        assert!(data_receiver.try_recv().is_err(), "No samples while paused");

        control_sender.send(StreamCommand::Resume).await.unwrap();
        sleep(Duration::from_millis(60)).await;
        assert!(data_receiver.try_recv().is_ok());

        control_sender.send(StreamCommand::Stop).await.unwrap();
    }

    #[tokio::test]
    async fn test_pattern_change_while_running() {
        let (mut data_receiver, control_sender) =
            start_sample_stream(fast_config()).await.unwrap();

        control_sender.send(StreamCommand::Start).await.unwrap();
        control_sender
            .send(StreamCommand::SetPattern(MotionPattern::Walking {
                step_frequency: 2.0,
                amplitude: 2.5,
            }))
            .await
            .unwrap();

        sleep(Duration::from_millis(80)).await;
        assert!(data_receiver.try_recv().is_ok());

        control_sender.send(StreamCommand::Stop).await.unwrap();
    }
}
