use crate::{
    CaptureConfig, CaptureError, Clock, CommandSender, EntryWatch, SystemClock, mapper,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use wave_camera::{CameraError, FrameSampler};
use wave_gesture::{GestureClassifier, GestureObservation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Stopped,
    Running,
    Stopping,
}

/// Counters updated by the capture thread, readable from anywhere.
#[derive(Debug, Default)]
pub struct CaptureStats {
    grabs: AtomicU64,
    grab_failures: AtomicU64,
    decode_failures: AtomicU64,
    classifications: AtomicU64,
    classify_failures: AtomicU64,
    dispatched: AtomicU64,
    dispatch_failures: AtomicU64,
}

fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

impl CaptureStats {
    pub fn grabs(&self) -> u64 {
        self.grabs.load(Ordering::Relaxed)
    }

    pub fn grab_failures(&self) -> u64 {
        self.grab_failures.load(Ordering::Relaxed)
    }

    pub fn decode_failures(&self) -> u64 {
        self.decode_failures.load(Ordering::Relaxed)
    }

    /// Classification attempts, successful or not.
    pub fn classifications(&self) -> u64 {
        self.classifications.load(Ordering::Relaxed)
    }

    pub fn classify_failures(&self) -> u64 {
        self.classify_failures.load(Ordering::Relaxed)
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    pub fn dispatch_failures(&self) -> u64 {
        self.dispatch_failures.load(Ordering::Relaxed)
    }
}

type Parts = (Box<dyn FrameSampler>, Box<dyn GestureClassifier>);

// consecutive failed grabs before the loop slows down
const GRAB_BACKOFF_AFTER: u64 = 100;
const GRAB_BACKOFF: Duration = Duration::from_millis(20);

// state owned by the capture thread while it runs
struct Cycle {
    sampler: Box<dyn FrameSampler>,
    classifier: Box<dyn GestureClassifier>,
    commands: CommandSender,
    entry: EntryWatch,
    clock: Arc<dyn Clock>,
    delay: Duration,
    anchor: Instant,
    failed_grabs: u64,
    stats: Arc<CaptureStats>,
}

impl Cycle {
    // one grab, and a full classification when the interval is up
    fn step(&mut self) {
        if let Err(e) = self.sampler.grab() {
            bump(&self.stats.grab_failures);
            self.failed_grabs += 1;
            // only the first failure of a run is logged
            if self.failed_grabs == 1 {
                if e.is_transient() {
                    log::warn!("{}", e);
                } else {
                    log::error!("{}", e);
                }
            }
            return;
        }
        if self.failed_grabs > 0 {
            log::info!("camera recovered after {} failed grabs", self.failed_grabs);
            self.failed_grabs = 0;
        }
        bump(&self.stats.grabs);

        if self.clock.now().saturating_duration_since(self.anchor) < self.delay {
            return;
        }
        if !self.entry.is_visible() {
            return;
        }

        let frame = match self.sampler.retrieve() {
            Ok(frame) => frame,
            Err(e) => {
                // not classified, so the interval is not consumed
                bump(&self.stats.decode_failures);
                log::warn!("{}", e);
                return;
            }
        };

        bump(&self.stats.classifications);
        let result = self.classifier.classify(&frame);
        self.anchor = self.clock.now();
        drop(frame);

        match result {
            Ok(observation) => self.dispatch(&observation),
            Err(e) => {
                bump(&self.stats.classify_failures);
                log::warn!("classification abandoned: {}", e);
            }
        }
    }

    fn dispatch(&self, observation: &GestureObservation) {
        let symbols = observation.symbols();
        if symbols.is_empty() {
            return;
        }

        // the entry may have been hidden while the request was in flight
        let entry = self.entry.snapshot();
        if !entry.visible {
            log::debug!("text entry hidden, dropping gestures {:?}", symbols);
            return;
        }

        for symbol in &symbols {
            let Some(command) = mapper::map(symbol, entry.visible, &entry.text) else {
                log::debug!("no command for {}", symbol);
                continue;
            };
            match self.commands.dispatch(command) {
                Ok(()) => {
                    bump(&self.stats.dispatched);
                    log::info!("{} -> {}", symbol, command);
                }
                Err(e) => {
                    bump(&self.stats.dispatch_failures);
                    log::warn!("{}", e);
                }
            }
        }
    }

    fn run(mut self, running: Arc<AtomicBool>, idle_yield: Duration) -> Parts {
        log::info!("capture thread started");
        while running.load(Ordering::Acquire) {
            self.step();
            if self.failed_grabs >= GRAB_BACKOFF_AFTER {
                thread::sleep(GRAB_BACKOFF);
            } else if idle_yield.is_zero() {
                thread::yield_now();
            } else {
                thread::sleep(idle_yield);
            }
        }
        log::info!("capture thread exiting");
        (self.sampler, self.classifier)
    }
}

/// Owns the capture thread and its lifecycle.
///
/// `start` opens the sampler and returns at once; `stop` waits for the thread
/// (including any classification in flight) and closes the sampler. A stopped
/// loop can be started again.
pub struct CaptureLoop {
    config: CaptureConfig,
    sampler: Option<Box<dyn FrameSampler>>,
    classifier: Option<Box<dyn GestureClassifier>>,
    commands: CommandSender,
    entry: EntryWatch,
    clock: Arc<dyn Clock>,
    running: Arc<AtomicBool>,
    state: CaptureState,
    stats: Arc<CaptureStats>,
    worker: Option<JoinHandle<Parts>>,
}

impl std::fmt::Debug for CaptureLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureLoop")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("stats", &self.stats)
            .finish()
    }
}

impl CaptureLoop {
    pub fn new(
        sampler: Box<dyn FrameSampler>,
        classifier: Box<dyn GestureClassifier>,
        commands: CommandSender,
        entry: EntryWatch,
        config: CaptureConfig,
    ) -> Self {
        Self {
            config,
            sampler: Some(sampler),
            classifier: Some(classifier),
            commands,
            entry,
            clock: Arc::new(SystemClock),
            running: Arc::new(AtomicBool::new(false)),
            state: CaptureState::Stopped,
            stats: Arc::new(CaptureStats::default()),
            worker: None,
        }
    }

    /// Replace the time source. Takes effect on the next `start`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn stats(&self) -> Arc<CaptureStats> {
        Arc::clone(&self.stats)
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Open the sampler and spawn the capture thread.
    ///
    /// A camera that cannot be opened is reported here and the loop stays
    /// `Stopped`.
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.state != CaptureState::Stopped {
            return Err(CaptureError::AlreadyRunning);
        }

        let (Some(mut sampler), Some(classifier)) = (self.sampler.take(), self.classifier.take())
        else {
            return Err(CaptureError::Camera(CameraError::DeviceUnavailable(
                "sampler was lost with a crashed capture thread".to_string(),
            )));
        };

        if let Err(e) = sampler.open() {
            self.sampler = Some(sampler);
            self.classifier = Some(classifier);
            return Err(e.into());
        }

        let cycle = Cycle {
            sampler,
            classifier,
            commands: self.commands.clone(),
            entry: self.entry.clone(),
            clock: Arc::clone(&self.clock),
            delay: self.config.delay(),
            anchor: self.clock.now(),
            failed_grabs: 0,
            stats: Arc::clone(&self.stats),
        };

        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);
        let idle_yield = self.config.idle_yield();
        let worker = thread::Builder::new()
            .name("wave-capture".to_string())
            .spawn(move || cycle.run(running, idle_yield))
            .map_err(|e| {
                self.running.store(false, Ordering::Release);
                CaptureError::Spawn(e)
            })?;

        self.worker = Some(worker);
        self.state = CaptureState::Running;
        log::info!("capture loop running, delay {:?}", self.config.delay());
        Ok(())
    }

    /// Signal the capture thread, wait for it, and close the sampler.
    ///
    /// Blocks for at most one in-flight classification. Calling it on a
    /// stopped loop does nothing.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        self.state = CaptureState::Stopping;
        self.running.store(false, Ordering::Release);

        match worker.join() {
            Ok((mut sampler, classifier)) => {
                sampler.close();
                self.sampler = Some(sampler);
                self.classifier = Some(classifier);
            }
            // the sampler went down with the thread, and its Drop released the device
            Err(_) => log::error!("capture thread panicked"),
        }

        self.state = CaptureState::Stopped;
        log::info!("capture loop stopped");
    }
}

impl Drop for CaptureLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
