//! Recorder service: single-consumer filtering and recording loop
//!
//! All mutable session state (filter bank, activity label, record sink)
//! lives inside one task. The boundary talks to it exclusively through
//! the command channel, so there is no cross-thread field access around
//! the label or the saving flag.

use crate::csv_recorder::CsvRecorder;
use crate::presenter::DisplayUpdate;
use mot_core::{ActivityLabel, MotResult, RawSample, SampleRecord};
use mot_processing::{AxisFilterBank, NoiseParams};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, Mutex};
use tracing::{error, info, warn};

/// Commands accepted by the recorder service
#[derive(Debug, Clone)]
pub enum RecorderCommand {
    /// Begin consuming samples
    Start,
    /// Stop consuming samples; closes any open saving session
    Stop,
    /// Set the label tagged onto subsequently produced records
    SetLabel(ActivityLabel),
    /// Arm the record sink
    StartSaving,
    /// Flush and disarm the record sink
    StopSaving,
}

/// Snapshot of service state for the boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderStats {
    pub is_running: bool,
    pub is_saving: bool,
    pub samples_processed: u64,
    pub records_written: u64,
    pub label: ActivityLabel,
    pub last_update_ms: i64,
}

impl RecorderStats {
    fn initial() -> Self {
        RecorderStats {
            is_running: false,
            is_saving: false,
            samples_processed: 0,
            records_written: 0,
            label: ActivityLabel::default(),
            last_update_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Real-time filtering and recording service
pub struct RecorderService {
    bank: AxisFilterBank,
    label: ActivityLabel,
    recorder: CsvRecorder,

    // Communication channels
    input_receiver: broadcast::Receiver<RawSample>,
    display_sender: broadcast::Sender<DisplayUpdate>,
    command_receiver: mpsc::Receiver<RecorderCommand>,
    command_sender: mpsc::Sender<RecorderCommand>,

    // State management
    is_running: bool,
    stats: Arc<Mutex<RecorderStats>>,
}

impl RecorderService {
    /// Create new recorder service
    ///
    /// Fails with `InvalidParameter` if the noise parameters are out of
    /// range, preventing the service from starting with a broken filter.
    pub fn new(
        input_receiver: broadcast::Receiver<RawSample>,
        params: NoiseParams,
        recorder: CsvRecorder,
    ) -> MotResult<Self> {
        let bank = AxisFilterBank::new(params)?;
        let (display_sender, _) = broadcast::channel(64);
        let (command_sender, command_receiver) = mpsc::channel(32);

        Ok(RecorderService {
            bank,
            label: ActivityLabel::default(),
            recorder,
            input_receiver,
            display_sender,
            command_receiver,
            command_sender,
            is_running: false,
            stats: Arc::new(Mutex::new(RecorderStats::initial())),
        })
    }

    /// Get receiver for display updates
    pub fn subscribe_display(&self) -> broadcast::Receiver<DisplayUpdate> {
        self.display_sender.subscribe()
    }

    /// Get command sender for controlling the service
    pub fn command_handle(&self) -> mpsc::Sender<RecorderCommand> {
        self.command_sender.clone()
    }

    /// Get shared stats handle
    pub fn stats_handle(&self) -> Arc<Mutex<RecorderStats>> {
        self.stats.clone()
    }

    /// Main processing loop; returns when both channels close
    pub async fn run(&mut self) -> MotResult<()> {
        info!("Recorder service started");

        loop {
            tokio::select! {
                sample_result = self.input_receiver.recv() => {
                    match sample_result {
                        Ok(sample) => {
                            if self.is_running {
                                self.process_sample(sample).await;
                            }
                        }
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(skipped, "Recorder lagged behind the sample stream");
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            info!("Sample stream closed, stopping recorder service");
                            self.close_saving_session().await;
                            break;
                        }
                    }
                }

                command = self.command_receiver.recv() => {
                    match command {
                        Some(command) => self.handle_command(command).await,
                        None => {
                            info!("Command channel closed");
                            self.close_saving_session().await;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Filter one sample, publish the display lines, and append a
    /// record when a saving session is open
    async fn process_sample(&mut self, raw: RawSample) {
        let filtered = self.bank.process(raw);

        // Display output is republished on every processed sample;
        // ignore send errors when nobody is watching.
        let _ = self.display_sender.send(DisplayUpdate::new(&raw, &filtered));

        let mut record_written = false;
        if self.recorder.is_enabled() {
            let record = SampleRecord::new(
                chrono::Utc::now().timestamp_millis(),
                raw,
                filtered,
                self.label,
            );

            match self.recorder.record(&record) {
                Ok(()) => record_written = true,
                Err(e) => {
                    // Interrupted session: disarm, keep filtering. No retry.
                    error!(error = %e, "Record append failed, closing saving session");
                    if let Err(e) = self.recorder.disable() {
                        warn!(error = %e, "Sink close after write failure also failed");
                    }
                }
            }
        }

        let mut stats = self.stats.lock().await;
        stats.samples_processed += 1;
        if record_written {
            stats.records_written += 1;
        }
        stats.is_saving = self.recorder.is_enabled();
        stats.last_update_ms = chrono::Utc::now().timestamp_millis();
    }

    async fn handle_command(&mut self, command: RecorderCommand) {
        match command {
            RecorderCommand::Start => {
                self.is_running = true;
                self.update_stats(|stats| stats.is_running = true).await;
                info!("Recorder started");
            }
            RecorderCommand::Stop => {
                self.is_running = false;
                self.close_saving_session().await;
                self.update_stats(|stats| stats.is_running = false).await;
                info!("Recorder stopped");
            }
            RecorderCommand::SetLabel(label) => {
                self.label = label;
                self.update_stats(|stats| stats.label = label).await;
                info!(label = %label, "Activity label changed");
            }
            RecorderCommand::StartSaving => {
                match self.recorder.enable() {
                    Ok(()) => {
                        self.update_stats(|stats| stats.is_saving = true).await;
                        info!(path = %self.recorder.path().display(), "Saving enabled");
                    }
                    Err(e) => {
                        // Filtering and display continue unaffected.
                        error!(error = %e, "Could not arm record sink, saving stays off");
                        self.update_stats(|stats| stats.is_saving = false).await;
                    }
                }
            }
            RecorderCommand::StopSaving => {
                self.close_saving_session().await;
                info!("Saving disabled");
            }
        }
    }

    async fn close_saving_session(&mut self) {
        if let Err(e) = self.recorder.disable() {
            warn!(error = %e, "Failed to flush record sink on close");
        }
        self.update_stats(|stats| stats.is_saving = false).await;
    }

    async fn update_stats<F>(&self, update_fn: F)
    where
        F: FnOnce(&mut RecorderStats),
    {
        let mut stats = self.stats.lock().await;
        update_fn(&mut stats);
        stats.last_update_ms = chrono::Utc::now().timestamp_millis();
    }
}

/// Helper to start the recorder service in a background task
pub async fn start_recorder_service(
    input_receiver: broadcast::Receiver<RawSample>,
    params: NoiseParams,
    recorder: CsvRecorder,
) -> MotResult<(
    broadcast::Receiver<DisplayUpdate>,
    mpsc::Sender<RecorderCommand>,
    Arc<Mutex<RecorderStats>>,
)> {
    let mut service = RecorderService::new(input_receiver, params, recorder)?;

    let display_receiver = service.subscribe_display();
    let command_sender = service.command_handle();
    let stats_handle = service.stats_handle();

    tokio::spawn(async move {
        if let Err(e) = service.run().await {
            error!(error = %e, "Recorder service error");
        }
    });

    Ok((display_receiver, command_sender, stats_handle))
}
