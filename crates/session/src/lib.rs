// Session state for Strummer
pub mod directive;


use std::sync::Arc;

use generator::{generate, RandomSource};
use log::{debug, info};
use strum_core::{EventBus, GenerationConfig, GlyphStyle, Pattern, SharedEventBus, StrumEvent};

pub use directive::Directive;

/// One practice session: its config, its randomness and the latest bar
pub struct Session<R: RandomSource> {
    /// Generation options, only ever changed through [`Session::enable_muting`]
    config: GenerationConfig,
    rng: R,
    /// Glyph table used by [`Session::rendered`]
    glyph_style: GlyphStyle,
    /// The bar currently on screen
    current: Option<Pattern>,
    /// Bars generated so far
    generated: usize,
    event_bus: SharedEventBus,
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: GenerationConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            glyph_style: GlyphStyle::default(),
            current: None,
            generated: 0,
            event_bus: Arc::new(EventBus::new()),
        }
    }

    pub fn with_glyph_style(mut self, style: GlyphStyle) -> Self {
        self.glyph_style = style;
        self
    }

    /// Share an existing event bus instead of the session's own
    pub fn with_event_bus(mut self, event_bus: SharedEventBus) -> Self {
        self.event_bus = event_bus;
        self
    }

    /// Generate the next bar and make it current
    pub fn regenerate(&mut self) -> Pattern {
        let pattern = generate(&self.config, &mut self.rng);
        self.current = Some(pattern);
        self.generated += 1;
        debug!("Generated pattern #{}: {:?}", self.generated, pattern.slots());
        self.event_bus.emit(StrumEvent::PatternGenerated(pattern));
        pattern
    }

    /// Allow muted strums for the rest of the session
    pub fn enable_muting(&mut self) {
        if self.config.enable_muting() {
            info!("Muted strums enabled");
            self.event_bus.emit(StrumEvent::MutingEnabled);
        }
    }

    /// Act on a user directive
    ///
    /// Returns the new bar, or `None` once the user has quit.
    pub fn apply(&mut self, directive: Directive) -> Option<Pattern> {
        match directive {
            Directive::Regenerate => Some(self.regenerate()),
            Directive::EnableMuting => {
                self.enable_muting();
                Some(self.regenerate())
            }
            Directive::Quit => {
                info!("Session ended after {} pattern(s)", self.generated);
                self.event_bus.emit(StrumEvent::SessionEnded);
                None
            }
        }
    }

    /// The current bar as a text grid
    pub fn rendered(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|pattern| render::render_with(pattern, self.glyph_style))
    }

    pub fn current(&self) -> Option<&Pattern> {
        self.current.as_ref()
    }

    pub fn muting_enabled(&self) -> bool {
        self.config.muting_enabled
    }

    pub fn generated_count(&self) -> usize {
        self.generated
    }

    /// Subscribe to session events
    pub fn subscribe_to_events<F>(&self, listener: F) -> usize
    where
        F: Fn(&StrumEvent) + Send + Sync + 'static,
    {
        self.event_bus.subscribe(listener)
    }
}
