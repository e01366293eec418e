// 🧠 Screen state and pure update function
// update() never touches storage: it returns the next state plus the effects
// the caller has to run, and storage outcomes come back in as actions

use crate::entry::{next_id, Entry};
use crate::error::{StorageError, ValidationError};
use crate::locale::Locale;
use crate::total::total;
use crate::validation::validate_input;
use chrono::{DateTime, Local};

/// Everything the ledger screen holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub input: String,
    pub entries: Vec<Entry>,
    pub error: Option<String>,
    /// True once the stored list has been read successfully. Until then a
    /// write would replace history that was never seen, so none is issued.
    pub loaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Empty,
    Error,
    Populated,
}

impl AppState {
    pub fn status(&self) -> Status {
        if self.error.is_some() {
            Status::Error
        } else if self.entries.is_empty() {
            Status::Empty
        } else {
            Status::Populated
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOp {
    Append,
    Remove,
}

#[derive(Debug)]
pub enum Action {
    InputChanged(String),
    Reload,
    Submit { now: DateTime<Local> },
    Delete(String),
    Loaded(Result<Vec<Entry>, StorageError>),
    Persisted {
        op: PersistOp,
        entries: Vec<Entry>,
        result: Result<(), StorageError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Load,
    Persist { op: PersistOp, entries: Vec<Entry> },
}

/// Initial state for a freshly mounted screen plus the hydrate effect.
pub fn init() -> (AppState, Vec<Effect>) {
    (AppState::default(), vec![Effect::Load])
}

pub fn update(state: &AppState, action: Action, locale: &Locale) -> (AppState, Vec<Effect>) {
    let mut next = state.clone();

    match action {
        Action::InputChanged(text) => {
            next.input = text;
            (next, vec![])
        }

        Action::Reload => (next, vec![Effect::Load]),

        Action::Submit { now } => {
            if !state.loaded {
                next.error = Some(locale.messages.load_failed.clone());
                return (next, vec![]);
            }

            if let Err(err) = validate_input(&state.input) {
                next.error = Some(locale.validation_message(err).to_string());
                return (next, vec![]);
            }

            let entry = Entry::new(
                next_id(now.timestamp_millis(), &state.entries),
                state.input.clone(),
                locale.format_date(&now),
            );

            let mut entries = state.entries.clone();
            entries.push(entry);

            if !total(&entries).is_finite() {
                next.error = Some(locale.validation_message(ValidationError::OutOfRange).to_string());
                return (next, vec![]);
            }

            (next, vec![Effect::Persist { op: PersistOp::Append, entries }])
        }

        Action::Delete(id) => {
            if !state.loaded {
                next.error = Some(locale.messages.load_failed.clone());
                return (next, vec![]);
            }

            if !state.entries.iter().any(|e| e.id == id) {
                return (next, vec![]);
            }

            let entries: Vec<Entry> = state
                .entries
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect();

            (next, vec![Effect::Persist { op: PersistOp::Remove, entries }])
        }

        Action::Loaded(Ok(entries)) => {
            next.entries = entries;
            next.error = None;
            next.loaded = true;
            (next, vec![])
        }

        Action::Loaded(Err(_)) => {
            next.loaded = false;
            next.error = Some(locale.messages.load_failed.clone());
            (next, vec![])
        }

        Action::Persisted { op, entries, result } => {
            match result {
                Ok(()) => {
                    next.entries = entries;
                    next.error = None;
                    if op == PersistOp::Append {
                        next.input.clear();
                    }
                }
                Err(_) => {
                    next.error = Some(match op {
                        PersistOp::Append => locale.messages.save_failed.clone(),
                        PersistOp::Remove => locale.messages.remove_failed.clone(),
                    });
                }
            }
            (next, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap()
    }

    fn write_fault() -> StorageError {
        StorageError::Write {
            key: "@valores".to_string(),
            source: "disk full".into(),
        }
    }

    fn with_input(text: &str) -> AppState {
        AppState {
            input: text.to_string(),
            loaded: true,
            ..AppState::default()
        }
    }

    fn with_entries(entries: Vec<Entry>) -> AppState {
        AppState {
            entries,
            loaded: true,
            ..AppState::default()
        }
    }

    #[test]
    fn test_init_requests_load() {
        let (state, effects) = init();
        assert_eq!(state.status(), Status::Empty);
        assert_eq!(effects, vec![Effect::Load]);
    }

    #[test]
    fn test_submit_valid_emits_append() {
        let locale = Locale::pt_br();
        let (next, effects) = update(&with_input("2.5"), Action::Submit { now: now() }, &locale);

        // nothing is committed until the write is confirmed
        assert!(next.entries.is_empty());
        assert_eq!(next.input, "2.5");

        match &effects[..] {
            [Effect::Persist { op: PersistOp::Append, entries }] => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].value, "2.5");
                assert_eq!(entries[0].date, "05/01/2025");
                assert_eq!(entries[0].id, now().timestamp_millis().to_string());
            }
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_submit_empty() {
        let locale = Locale::pt_br();
        let (next, effects) = update(&with_input(""), Action::Submit { now: now() }, &locale);

        assert!(effects.is_empty());
        assert_eq!(next.error.as_deref(), Some("Insira um valor!"));
        assert_eq!(next.status(), Status::Error);
    }

    #[test]
    fn test_submit_not_numeric_keeps_input() {
        let locale = Locale::pt_br();
        let (next, effects) = update(&with_input("abc"), Action::Submit { now: now() }, &locale);

        assert!(effects.is_empty());
        assert_eq!(next.input, "abc");
        assert_eq!(next.error.as_deref(), Some("Insira um valor numérico!"));
    }

    #[test]
    fn test_append_confirmed_clears_input_and_error() {
        let locale = Locale::pt_br();
        let mut state = with_input("10");
        state.error = Some("old".to_string());
        let entries = vec![Entry::new("1", "10", "05/01/2025")];

        let (next, _) = update(
            &state,
            Action::Persisted { op: PersistOp::Append, entries: entries.clone(), result: Ok(()) },
            &locale,
        );

        assert_eq!(next.entries, entries);
        assert!(next.input.is_empty());
        assert_eq!(next.error, None);
        assert_eq!(next.status(), Status::Populated);
    }

    #[test]
    fn test_append_failed_keeps_entries() {
        let locale = Locale::pt_br();
        let state = with_input("10");

        let (next, _) = update(
            &state,
            Action::Persisted {
                op: PersistOp::Append,
                entries: vec![Entry::new("1", "10", "x")],
                result: Err(write_fault()),
            },
            &locale,
        );

        assert!(next.entries.is_empty());
        assert_eq!(next.input, "10");
        assert_eq!(next.error.as_deref(), Some("Erro ao salvar os dados."));
    }

    #[test]
    fn test_delete_emits_filtered_list() {
        let locale = Locale::pt_br();
        let state = with_entries(vec![
            Entry::new("1", "10", "x"),
            Entry::new("2", "20", "x"),
            Entry::new("3", "30", "x"),
        ]);

        let (_, effects) = update(&state, Action::Delete("2".to_string()), &locale);

        assert_eq!(
            effects,
            vec![Effect::Persist {
                op: PersistOp::Remove,
                entries: vec![Entry::new("1", "10", "x"), Entry::new("3", "30", "x")],
            }]
        );
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let locale = Locale::pt_br();
        let state = with_entries(vec![Entry::new("1", "10", "x")]);

        let (next, effects) = update(&state, Action::Delete("missing".to_string()), &locale);
        assert!(effects.is_empty());
        assert_eq!(next, state);
    }

    #[test]
    fn test_remove_failed_message() {
        let locale = Locale::pt_br();
        let state = with_entries(vec![Entry::new("1", "10", "x")]);

        let (next, _) = update(
            &state,
            Action::Persisted { op: PersistOp::Remove, entries: vec![], result: Err(write_fault()) },
            &locale,
        );

        assert_eq!(next.entries.len(), 1);
        assert_eq!(next.error.as_deref(), Some("Erro ao remover os dados."));
    }

    #[test]
    fn test_load_failed_message() {
        let locale = Locale::pt_br();
        let fault = StorageError::Read { key: "@valores".to_string(), source: "io".into() };

        let (next, _) = update(&AppState::default(), Action::Loaded(Err(fault)), &locale);
        assert_eq!(next.error.as_deref(), Some("Erro ao buscar os dados."));
    }

    #[test]
    fn test_writes_refused_until_loaded() {
        let locale = Locale::pt_br();
        let mut state = with_entries(vec![Entry::new("1", "10", "x")]);
        state.loaded = false;
        state.input = "5".to_string();

        let (next, effects) = update(&state, Action::Submit { now: now() }, &locale);
        assert!(effects.is_empty());
        assert_eq!(next.error.as_deref(), Some("Erro ao buscar os dados."));

        let (next, effects) = update(&state, Action::Delete("1".to_string()), &locale);
        assert!(effects.is_empty());
        assert_eq!(next.entries.len(), 1);
    }

    #[test]
    fn test_reload_requests_load_and_unlocks_writes() {
        let locale = Locale::pt_br();
        let (state, effects) = update(&AppState::default(), Action::Reload, &locale);
        assert_eq!(effects, vec![Effect::Load]);

        let (state, _) = update(&state, Action::Loaded(Ok(vec![])), &locale);
        assert!(state.loaded);

        let (state, _) = update(&state, Action::InputChanged("3".to_string()), &locale);
        let (_, effects) = update(&state, Action::Submit { now: now() }, &locale);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_submit_refused_when_total_overflows() {
        let locale = Locale::pt_br();
        let mut state = with_entries(vec![Entry::new("1", "1e308", "x")]);
        state.input = "1e308".to_string();

        let (next, effects) = update(&state, Action::Submit { now: now() }, &locale);

        assert!(effects.is_empty());
        assert_eq!(next.entries.len(), 1);
        assert_eq!(next.error.as_deref(), Some("Valor fora do limite!"));
    }
}
