use {
    crate::*,
    palm_image::Image,
    palm_video::VideoSource,
    std::{
        thread,
        time::Instant,
    },
};

/// Owns a source, classifier and handler and ticks them together.
///
/// Hosts with their own frame callback call [`GestureLoop::tick`] from it;
/// headless hosts can use [`GestureLoop::run`], which paces itself to the
/// configured tick rate.
pub struct GestureLoop<S, C, H> {
    source: S,
    classifier: C,
    handler: H,
    sampler: FrameSampler,
    config: GestureConfig,
    stats: TickStats,
    frame_rate: FrameRate,
}

impl<S, C, H> GestureLoop<S, C, H>
where
    S: VideoSource,
    C: Classifier,
    H: ActionHandler,
{
    pub fn new(source: S, classifier: C, handler: H, config: GestureConfig) -> Self {
        Self {
            source,
            classifier,
            handler,
            sampler: FrameSampler::new(config.mirror()),
            config,
            stats: TickStats::default(),
            frame_rate: FrameRate::new(),
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.tick_with(|_| {})
    }

    /// Tick, lending this tick's grayscale frame (if any) to `inspect`.
    pub fn tick_with<F: FnOnce(&Image)>(&mut self, inspect: F) -> TickOutcome {
        let outcome = tick_with(
            &self.sampler,
            &mut self.source,
            &mut self.classifier,
            &mut self.handler,
            inspect,
        );

        if !outcome.is_skipped() {
            self.frame_rate.mark(Instant::now());
        }
        self.stats.record(&outcome);

        let report_every = self.config.report_every();
        if report_every > 0 && self.stats.ticks % report_every == 0 {
            log::info!("gesture loop: {} ({:.1} fps)", self.stats, self.frame_rate.fps());
        }

        outcome
    }

    /// Tick at the configured rate until `keep_going` returns false.
    ///
    /// Returns the number of ticks run.
    pub fn run<F>(&mut self, mut keep_going: F) -> u64
    where
        F: FnMut(&TickOutcome) -> bool,
    {
        let interval = self.config.tick_interval();
        let mut ticks = 0;
        loop {
            let started = Instant::now();
            let outcome = self.tick();
            ticks += 1;
            if !keep_going(&outcome) {
                return ticks;
            }
            let elapsed = started.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
    }

    pub fn stats(&self) -> &TickStats {
        &self.stats
    }

    pub fn fps(&self) -> f32 {
        self.frame_rate.fps()
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn classifier_mut(&mut self) -> &mut C {
        &mut self.classifier
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Give back the parts, e.g. to close the source explicitly.
    pub fn into_parts(self) -> (S, C, H) {
        (self.source, self.classifier, self.handler)
    }
}
