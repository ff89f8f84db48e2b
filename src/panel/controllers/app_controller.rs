//! # Panel Application Controller
//!
//! The hosting event loop. The controller owns the panel, pulls input
//! events from an injected source, drains the panel's model events onto
//! the event bus, and plays the host's configuration role: restore on
//! startup, autosave whenever the destination changes.

use anyhow::Result;
use std::time::{Duration, Instant};

use crate::panel::arm_panel::ArmPanel;
use crate::panel::events::{
    EventBus, EventSource, InputEvent, ModelEvent, ModelEventHandler, SimpleEventBus,
};
use crate::panel::persistence::{ConfigStore, Panel, PanelConfig};
use crate::panel::transport::Transport;

/// How long each loop iteration waits for input
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Controller driving an `ArmPanel` from an injected event source
pub struct AppController<ES: EventSource, T: Transport, CS: ConfigStore> {
    panel: ArmPanel<T>,
    event_source: ES,
    config_store: CS,
    event_bus: SimpleEventBus,
    initial_topic: Option<String>,
    repeat_interval: Option<Duration>,
    last_command: Option<bool>,
    should_quit: bool,
}

impl<ES: EventSource, T: Transport, CS: ConfigStore> AppController<ES, T, CS> {
    /// Create a controller hosting a fresh panel
    pub fn new(transport: T, event_source: ES, config_store: CS) -> Self {
        Self {
            panel: ArmPanel::new(transport),
            event_source,
            config_store,
            event_bus: SimpleEventBus::new(),
            initial_topic: None,
            repeat_interval: None,
            last_command: None,
            should_quit: false,
        }
    }

    /// Commit this topic right after configuration restore
    ///
    /// Lets a host override the persisted destination for one session
    /// (e.g. from a command-line flag) without touching the saved value
    /// until the override actually changes it.
    pub fn set_initial_topic(&mut self, topic: Option<String>) {
        self.initial_topic = topic;
    }

    /// Re-send the last arm/disarm command at this cadence
    ///
    /// Off by default. Some motor controllers want to be reassured
    /// periodically that the last command still stands; hosts that need
    /// that turn it on.
    pub fn set_repeat_interval(&mut self, interval: Option<Duration>) {
        self.repeat_interval = interval;
    }

    /// Observe model events (configuration changes) from outside
    pub fn subscribe_to_model_events(&mut self, handler: ModelEventHandler) {
        self.event_bus.subscribe_to_model_events(handler);
    }

    /// The hosted panel
    pub fn panel(&self) -> &ArmPanel<T> {
        &self.panel
    }

    /// Run the panel session until close or source exhaustion
    pub async fn run(&mut self) -> Result<()> {
        self.restore_configuration();
        if let Some(topic) = self.initial_topic.take() {
            self.dispatch(InputEvent::TopicCommitted { topic });
        }
        self.drain_model_events();

        let mut last_repeat = Instant::now();

        while !self.should_quit {
            if self.event_source.poll(POLL_INTERVAL)? {
                let event = self.event_source.read()?;
                tracing::debug!("input event: {event:?}");
                self.dispatch(event);
                self.drain_model_events();
            }

            if let Some(interval) = self.repeat_interval {
                if last_repeat.elapsed() >= interval {
                    if let Some(armed) = self.last_command {
                        self.panel.send_arm_command(armed);
                    }
                    last_repeat = Instant::now();
                }
            }

            if self.event_source.is_exhausted() {
                tracing::debug!("event source exhausted, ending session");
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, event: InputEvent) {
        match &event {
            InputEvent::CloseRequested => {
                tracing::info!("close requested");
                self.should_quit = true;
                return;
            }
            InputEvent::ArmRequested => self.last_command = Some(true),
            InputEvent::DisarmRequested => self.last_command = Some(false),
            InputEvent::TopicCommitted { .. } => {}
        }
        self.panel.handle_event(event);
    }

    fn restore_configuration(&mut self) {
        match self.config_store.load() {
            Ok(config) => self.panel.load(&config),
            Err(e) => tracing::warn!("failed to load configuration: {e:#}"),
        }
    }

    fn drain_model_events(&mut self) {
        for event in self.panel.take_pending_events() {
            match &event {
                ModelEvent::ConfigurationChanged { topic } => {
                    tracing::info!(topic = %topic, "configuration changed");
                    self.save_configuration();
                }
            }
            self.event_bus.publish_model_event(event);
        }
    }

    fn save_configuration(&mut self) {
        let mut config = PanelConfig::new();
        self.panel.save(&mut config);
        if let Err(e) = self.config_store.save(&config) {
            tracing::warn!("failed to save configuration: {e:#}");
        }
    }
}
