//! Mot-Recorder - Real-time motion smoothing and dataset recording
//!
//! Wires the simulated accelerometer stream into the recorder service
//! and drives a short labelled capture session:
//! Sample Stream → Filter Bank → Display + CSV Record Log

mod csv_recorder;
mod presenter;
mod recorder_service;

use csv_recorder::CsvRecorder;
use mot_core::ActivityLabel;
use mot_processing::NoiseParams;
use mot_simulation::{start_sample_stream, MotionPattern, StreamCommand, StreamConfig};
use recorder_service::{start_recorder_service, RecorderCommand};
use tokio::time::{sleep, Duration};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let record_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "motion_records.csv".to_string());

    // Optional second argument: JSON noise-parameter profile.
    let params = match std::env::args().nth(2) {
        Some(profile) => NoiseParams::load(std::path::Path::new(&profile))?,
        None => NoiseParams::default(),
    };

    info!(path = %record_path, "Starting motion recorder");

    // Sample source: simulated sensor at the default 50Hz cadence.
    let (sample_receiver, stream_commands) =
        start_sample_stream(StreamConfig::default()).await?;

    // Single-consumer processing loop: filter bank + record sink.
    let (mut display_receiver, recorder_commands, stats) = start_recorder_service(
        sample_receiver,
        params,
        CsvRecorder::new(&record_path),
    )
    .await?;

    // Presenter: print both display lines as they are republished.
    tokio::spawn(async move {
        while let Ok(update) = display_receiver.recv().await {
            println!("{}", update.raw);
            println!("{}", update.filtered);
        }
    });

    stream_commands.send(StreamCommand::Start).await?;
    recorder_commands.send(RecorderCommand::Start).await?;

    // Short demo session: idle, then a labelled walking capture.
    sleep(Duration::from_secs(2)).await;

    recorder_commands.send(RecorderCommand::StartSaving).await?;
    recorder_commands
        .send(RecorderCommand::SetLabel(ActivityLabel::Walking))
        .await?;
    stream_commands
        .send(StreamCommand::SetPattern(MotionPattern::Walking {
            step_frequency: 1.8,
            amplitude: 2.0,
        }))
        .await?;
    sleep(Duration::from_secs(5)).await;

    recorder_commands
        .send(RecorderCommand::SetLabel(ActivityLabel::ClimbingUp))
        .await?;
    stream_commands
        .send(StreamCommand::SetPattern(MotionPattern::Climbing {
            step_frequency: 1.2,
            amplitude: 2.0,
            vertical_bias: 0.8,
        }))
        .await?;
    sleep(Duration::from_secs(5)).await;

    recorder_commands.send(RecorderCommand::StopSaving).await?;
    recorder_commands.send(RecorderCommand::Stop).await?;
    stream_commands.send(StreamCommand::Stop).await?;
    sleep(Duration::from_millis(100)).await;

    let stats = stats.lock().await.clone();
    info!(
        samples = stats.samples_processed,
        records = stats.records_written,
        "Session finished"
    );

    Ok(())
}
