use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use flume::Sender;
use rodio::{Decoder, OutputStream, Sink, Source};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use super::{
    error::AudioError,
    progress::TrackProgress,
    traits::MediaElement,
    util::{construct_sink, setup_device_config},
};
use crate::event::events::{DomEvent, Event, EventKind, Payload};

const MONITOR_INTERVAL: Duration = Duration::from_millis(250);

/// Media element backed by a rodio sink.
///
/// Sources are downloaded whole, decoded off the runtime and appended to the
/// sink. State changes are reported as `Audio` events on `event_tx`. Playing
/// an ended source fetches it again from the start.
pub struct RodioMedia {
    _stream: OutputStream,
    sink: Arc<Sink>,
    client: reqwest::Client,
    event_tx: Sender<Event>,
    progress: Arc<TrackProgress>,
    flags: Arc<Flags>,
    source: Option<String>,
    current_load: Option<JoinHandle<()>>,
    monitor: JoinHandle<()>,
}

impl RodioMedia {
    pub fn new(event_tx: Sender<Event>) -> Result<Self, AudioError> {
        let (device, stream_config, sample_format) = setup_device_config()?;
        let (stream, sink) = construct_sink(device, &stream_config, sample_format)?;

        let sink = Arc::new(sink);
        let progress = Arc::new(TrackProgress::new());
        let flags = Arc::new(Flags::default());

        let monitor = Self::start_monitor(
            sink.clone(),
            progress.clone(),
            flags.clone(),
            event_tx.clone(),
        );

        Ok(Self {
            _stream: stream,
            sink,
            client: reqwest::Client::new(),
            event_tx,
            progress,
            flags,
            source: None,
            current_load: None,
            monitor,
        })
    }

    fn start_monitor(
        sink: Arc<Sink>,
        progress: Arc<TrackProgress>,
        flags: Arc<Flags>,
        event_tx: Sender<Event>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(MONITOR_INTERVAL);
            loop {
                interval.tick().await;

                let playing = flags.playing.load(Ordering::Relaxed);
                let drained = playing && sink.empty();
                if drained {
                    flags.playing.store(false, Ordering::Relaxed);
                    flags.ready.store(false, Ordering::Relaxed);
                    flags.ended.store(true, Ordering::Relaxed);
                } else if playing {
                    progress.set_current_position(sink.get_pos());
                }

                let (current, duration) = progress.seconds();
                for event in tick_events(playing, drained, current, duration) {
                    let _ = event_tx.send(event.into());
                }
            }
        })
    }

    fn emit(&self, kind: EventKind) {
        let _ = self.event_tx.send(DomEvent::media(kind).into());
    }

    fn stop(&mut self) -> u64 {
        if let Some(task) = self.current_load.take() {
            task.abort();
        }
        self.flags.ready.store(false, Ordering::Relaxed);
        self.flags.playing.store(false, Ordering::Relaxed);
        self.flags.ended.store(false, Ordering::Relaxed);
        self.sink.stop();
        self.progress.reset()
    }
}

#[derive(Default)]
struct Flags {
    ready: AtomicBool,
    playing: AtomicBool,
    ended: AtomicBool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayAction {
    Resume,
    Restart,
    Ignore,
}

fn play_action(ready: bool, ended: bool, has_source: bool) -> PlayAction {
    match (ready, ended, has_source) {
        (_, true, true) => PlayAction::Restart,
        (true, false, _) => PlayAction::Resume,
        _ => PlayAction::Ignore,
    }
}

/// Events one monitor tick reports. A drained sink pauses before it ends,
/// the order a media element fires them in.
fn tick_events(playing: bool, drained: bool, current: f64, duration: Option<f64>) -> Vec<DomEvent> {
    if drained {
        return vec![
            DomEvent::media(EventKind::Pause),
            DomEvent::media(EventKind::Ended),
        ];
    }
    if !playing {
        return Vec::new();
    }
    vec![time_update(current, duration)]
}

fn loaded_events(current: f64, duration: Option<f64>) -> Vec<DomEvent> {
    vec![DomEvent::media(EventKind::Play), time_update(current, duration)]
}

fn time_update(current: f64, duration: Option<f64>) -> DomEvent {
    DomEvent::media(EventKind::TimeUpdate).with(Payload::Time { current, duration })
}

fn is_current(progress: &TrackProgress, generation: u64) -> bool {
    progress.generation() == generation
}

async fn fetch(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, AudioError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}

fn decode(bytes: Vec<u8>) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let byte_len = bytes.len() as u64;
    Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(byte_len)
        .with_coarse_seek(true)
        .with_gapless(true)
        .build()
        .map_err(|e| AudioError::DecodingError(e.to_string()))
}

impl MediaElement for RodioMedia {
    fn load(&mut self, url: &str) {
        let generation = self.stop();
        self.source = Some(url.to_string());

        let client = self.client.clone();
        let sink = self.sink.clone();
        let progress = self.progress.clone();
        let flags = self.flags.clone();
        let event_tx = self.event_tx.clone();
        let url = url.to_string();

        self.current_load = Some(tokio::spawn(async move {
            let bytes = match fetch(&client, &url).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    error!("Failed to fetch {url}: {e}");
                    return;
                }
            };
            debug!("Fetched {} bytes from {url}", bytes.len());

            let decoded = tokio::task::spawn_blocking(move || decode(bytes)).await;
            let decoder = match decoded {
                Ok(Ok(decoder)) => decoder,
                Ok(Err(e)) => {
                    error!("Failed to decode {url}: {e}");
                    return;
                }
                Err(e) => {
                    error!("Decoder task failed for {url}: {e}");
                    return;
                }
            };

            if !is_current(&progress, generation) {
                return;
            }

            if let Some(total) = decoder.total_duration() {
                progress.set_total_duration(total);
            }

            sink.append(decoder);
            sink.play();
            flags.ready.store(true, Ordering::Relaxed);
            flags.playing.store(true, Ordering::Relaxed);

            let (current, duration) = progress.seconds();
            for event in loaded_events(current, duration) {
                let _ = event_tx.send(event.into());
            }
        }));
    }

    fn play(&mut self) {
        let action = play_action(
            self.flags.ready.load(Ordering::Relaxed),
            self.flags.ended.load(Ordering::Relaxed),
            self.source.is_some(),
        );

        match action {
            PlayAction::Resume => {
                self.sink.play();
                self.flags.playing.store(true, Ordering::Relaxed);
                self.emit(EventKind::Play);
            }
            PlayAction::Restart => {
                if let Some(url) = self.source.clone() {
                    debug!("Restarting ended source {url}");
                    self.load(&url);
                }
            }
            PlayAction::Ignore => debug!("Play requested before a source was ready"),
        }
    }

    fn pause(&mut self) {
        if !self.flags.ready.load(Ordering::Relaxed) {
            return;
        }
        self.sink.pause();
        self.progress.set_current_position(self.sink.get_pos());
        self.flags.playing.store(false, Ordering::Relaxed);
        self.emit(EventKind::Pause);
    }

    fn seek(&mut self, position: Duration) {
        if !self.flags.ready.load(Ordering::Relaxed) {
            return;
        }
        match self.sink.try_seek(position) {
            Ok(()) => self.progress.set_current_position(position),
            Err(e) => warn!("Seek to {position:?} failed: {e}"),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }
}

impl Drop for RodioMedia {
    fn drop(&mut self) {
        self.stop();
        self.monitor.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(events: &[DomEvent]) -> Vec<EventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn idle_ticks_report_nothing() {
        assert!(tick_events(false, false, 12.0, Some(200.0)).is_empty());
    }

    #[test]
    fn playing_ticks_report_the_clock() {
        let events = tick_events(true, false, 12.5, Some(200.0));
        assert_eq!(
            events,
            vec![DomEvent::media(EventKind::TimeUpdate).with(Payload::Time {
                current: 12.5,
                duration: Some(200.0)
            })]
        );
    }

    #[test]
    fn drained_sink_pauses_then_ends() {
        assert_eq!(
            kinds(&tick_events(true, true, 200.0, Some(200.0))),
            [EventKind::Pause, EventKind::Ended]
        );
    }

    #[test]
    fn finished_load_starts_playing() {
        let events = loaded_events(0.0, Some(180.0));
        assert_eq!(kinds(&events), [EventKind::Play, EventKind::TimeUpdate]);
        assert_eq!(
            events[1].payload,
            Payload::Time {
                current: 0.0,
                duration: Some(180.0)
            }
        );
    }

    #[test]
    fn play_after_end_restarts_source() {
        assert_eq!(play_action(false, true, true), PlayAction::Restart);
        assert_eq!(play_action(true, false, true), PlayAction::Resume);
        assert_eq!(play_action(false, false, true), PlayAction::Ignore);
        assert_eq!(play_action(false, true, false), PlayAction::Ignore);
    }

    #[test]
    fn newer_load_makes_older_one_stale() {
        let progress = TrackProgress::new();
        let first = progress.reset();
        assert!(is_current(&progress, first));

        let second = progress.reset();
        assert!(!is_current(&progress, first));
        assert!(is_current(&progress, second));
    }
}
