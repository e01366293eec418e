// 📒 Ledger - single owner of the screen state and the storage key
//
// Every mutating call takes &mut self, so reads and writes of the storage key
// happen one at a time through this value. The UI and the headless commands
// both drive the screen through it.

use crate::app::{self, Action, AppState, Effect};
use crate::db::KeyValueStore;
use crate::gateway::PersistenceGateway;
use crate::locale::Locale;
use crate::total::format_total;
use chrono::{DateTime, Local};

/// Source of "now" for ids and entry dates.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub struct Ledger<S: KeyValueStore, C: Clock = SystemClock> {
    gateway: PersistenceGateway<S>,
    clock: C,
    locale: Locale,
    state: AppState,
}

impl<S: KeyValueStore> Ledger<S, SystemClock> {
    pub fn new(gateway: PersistenceGateway<S>, locale: Locale) -> Self {
        Self::with_clock(gateway, locale, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> Ledger<S, C> {
    pub fn with_clock(gateway: PersistenceGateway<S>, locale: Locale, clock: C) -> Self {
        Self {
            gateway,
            clock,
            locale,
            state: AppState::default(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut PersistenceGateway<S> {
        &mut self.gateway
    }

    /// Hydrate from storage. Called once when the screen opens.
    pub fn mount(&mut self) {
        let (state, effects) = app::init();
        self.state = state;
        self.run(effects);
        tracing::info!(entries = self.state.entries.len(), "ledger mounted");
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.dispatch(Action::InputChanged(text.into()));
    }

    /// Read the stored list again, e.g. after a failed mount.
    pub fn reload(&mut self) {
        self.dispatch(Action::Reload);
    }

    pub fn submit(&mut self) {
        let now = self.clock.now();
        let (state, effects) = app::update(&self.state, Action::Submit { now }, &self.locale);

        if effects.is_empty() {
            if let Some(reason) = &state.error {
                tracing::warn!(input = %state.input, %reason, "submit rejected");
            }
        }

        self.state = state;
        self.run(effects);
    }

    pub fn delete(&mut self, id: &str) {
        self.dispatch(Action::Delete(id.to_string()));
    }

    /// Running total formatted for the bottom bar, e.g. `"12,50"`.
    pub fn total_display(&self) -> String {
        format_total(&self.state.entries, &self.locale)
    }

    fn dispatch(&mut self, action: Action) {
        let (state, effects) = app::update(&self.state, action, &self.locale);
        self.state = state;
        self.run(effects);
    }

    fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let outcome = match effect {
                Effect::Load => {
                    let result = self.gateway.load();
                    if let Err(ref e) = result {
                        tracing::error!(error = %e, "failed to load entries");
                    }
                    Action::Loaded(result)
                }
                Effect::Persist { op, entries } => {
                    let result = self.gateway.save(&entries);
                    match result {
                        Ok(()) => tracing::info!(?op, entries = entries.len(), "entries persisted"),
                        Err(ref e) => tracing::error!(?op, error = %e, "failed to persist entries"),
                    }
                    Action::Persisted { op, entries, result }
                }
            };

            self.dispatch(outcome);
        }
    }
}
