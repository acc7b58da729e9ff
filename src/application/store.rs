//! The journal store: sole owner of trades, goals and the user profile.
//!
//! Every mutation rewrites the affected document in full. The three
//! documents are independent; there is no cross-document transaction.

use crate::domain::errors::JournalError;
use crate::domain::journal::{Goal, Trade, UserProfile};
use crate::domain::ports::{KeyValueStorage, StorageKey};
use crate::infrastructure::persistence::migration::{decode_trades, encode_trades};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

pub struct JournalStore<S: KeyValueStorage> {
    storage: S,
    trades: Vec<Trade>,
    goals: Vec<Goal>,
    profile: UserProfile,
}

impl<S: KeyValueStorage> JournalStore<S> {
    /// Load every document, falling back to defaults for anything missing or unreadable
    pub fn open(storage: S) -> Self {
        let trades = load_or_default(&storage, StorageKey::Trades, decode_trades);
        let goals = load_or_default(&storage, StorageKey::Goals, decode_json::<Vec<Goal>>);
        let profile =
            load_or_default(&storage, StorageKey::UserProfile, decode_json::<UserProfile>);

        info!(
            "Journal opened: {} trades, {} goals, profile '{}'",
            trades.len(),
            goals.len(),
            profile.name
        );

        Self {
            storage,
            trades,
            goals,
            profile,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Most recent first
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn trade(&self, id: &str) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn add_trade(&mut self, trade: Trade) -> Result<(), JournalError> {
        info!("Adding trade {} {} ({})", trade.pair, trade.date, trade.id);
        self.trades.insert(0, trade);
        self.persist_trades()
    }

    /// Returns whether a trade was removed; an unknown id changes nothing
    pub fn delete_trade(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(index) = self.trades.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.trades.remove(index);
        info!("Deleted trade {}", id);
        self.persist_trades()?;
        Ok(true)
    }

    pub fn add_goal(&mut self, goal: Goal) -> Result<(), JournalError> {
        info!("Adding goal '{}' due {}", goal.text, goal.deadline);
        self.goals.push(goal);
        self.persist_goals()
    }

    /// Flip a goal's completed flag; an unknown id changes nothing
    pub fn toggle_goal(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return Ok(false);
        };
        goal.toggle();
        self.persist_goals()?;
        Ok(true)
    }

    pub fn delete_goal(&mut self, id: &str) -> Result<bool, JournalError> {
        let Some(index) = self.goals.iter().position(|g| g.id == id) else {
            return Ok(false);
        };
        self.goals.remove(index);
        self.persist_goals()?;
        Ok(true)
    }

    pub fn update_profile(&mut self, name: impl Into<String>) -> Result<(), JournalError> {
        self.profile = UserProfile::new(name);
        info!("Profile updated: '{}'", self.profile.name);
        self.write_document(StorageKey::UserProfile, &self.profile)
    }

    fn persist_trades(&self) -> Result<(), JournalError> {
        let encoded = encode_trades(&self.trades)?;
        self.storage.write(StorageKey::Trades, &encoded)
    }

    fn persist_goals(&self) -> Result<(), JournalError> {
        self.write_document(StorageKey::Goals, &self.goals)
    }

    fn write_document<T: Serialize + ?Sized>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), JournalError> {
        let encoded = serde_json::to_string(value).map_err(|e| JournalError::Serialization {
            key: key.as_str().to_string(),
            reason: e.to_string(),
        })?;
        self.storage.write(key, &encoded)
    }
}

fn decode_json<T: DeserializeOwned>(raw: &str) -> Result<T, JournalError> {
    serde_json::from_str(raw).map_err(|e| JournalError::Serialization {
        key: std::any::type_name::<T>().to_string(),
        reason: e.to_string(),
    })
}

fn load_or_default<S, T, F>(storage: &S, key: StorageKey, decode: F) -> T
where
    S: KeyValueStorage,
    T: Default,
    F: Fn(&str) -> Result<T, JournalError>,
{
    match storage.read(key) {
        Ok(Some(raw)) => decode(&raw).unwrap_or_else(|e| {
            warn!("Ignoring unreadable '{}' document: {}", key.as_str(), e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Could not read '{}': {}", key.as_str(), e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::journal::{Direction, TradeStatus};
    use crate::infrastructure::persistence::InMemoryStorage;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn trade(id: &str, pnl: Decimal) -> Trade {
        Trade {
            id: id.to_string(),
            pair: "EURUSD".to_string(),
            asset_class: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            direction: Direction::Long,
            entry: dec!(1.07),
            exit_price: dec!(1.08),
            stop_loss: None,
            take_profit: None,
            lot_size: dec!(1),
            pnl,
            status: TradeStatus::from_pnl(pnl),
            strategy: None,
            notes: None,
            screenshot: None,
        }
    }

    fn deadline() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    #[test]
    fn test_defaults_on_empty_storage() {
        let store = JournalStore::open(InMemoryStorage::new());
        assert!(store.trades().is_empty());
        assert!(store.goals().is_empty());
        assert_eq!(store.profile().name, "Trader");
    }

    #[test]
    fn test_add_trade_prepends() {
        let mut store = JournalStore::open(InMemoryStorage::new());
        store.add_trade(trade("first", dec!(5))).unwrap();
        store.add_trade(trade("second", dec!(-2))).unwrap();

        let ids: Vec<_> = store.trades().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[test]
    fn test_delete_trade_keeps_order() {
        let mut store = JournalStore::open(InMemoryStorage::new());
        for id in ["a", "b", "c", "d"] {
            store.add_trade(trade(id, dec!(1))).unwrap();
        }

        assert!(store.delete_trade("b").unwrap());
        let ids: Vec<_> = store.trades().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "a"]);

        assert!(!store.delete_trade("missing").unwrap());
        assert_eq!(store.trades().len(), 3);
    }

    #[test]
    fn test_add_goal_appends() {
        let mut store = JournalStore::open(InMemoryStorage::new());
        store.add_goal(Goal::new("first", deadline())).unwrap();
        store.add_goal(Goal::new("second", deadline())).unwrap();

        let texts: Vec<_> = store.goals().iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_toggle_goal_twice_restores() {
        let mut store = JournalStore::open(InMemoryStorage::new());
        let goal = Goal::new("Follow plan", deadline());
        let id = goal.id.clone();
        store.add_goal(goal).unwrap();

        assert!(store.toggle_goal(&id).unwrap());
        assert!(store.goals()[0].completed);
        assert!(store.toggle_goal(&id).unwrap());
        assert!(!store.goals()[0].completed);

        let before = store.goals().to_vec();
        assert!(!store.toggle_goal("nope").unwrap());
        assert_eq!(store.goals(), before.as_slice());
    }

    #[test]
    fn test_every_mutation_is_mirrored() {
        let storage = InMemoryStorage::new();
        let mut store = JournalStore::open(storage.clone());

        store.add_trade(trade("t1", dec!(3))).unwrap();
        store.add_goal(Goal::new("g", deadline())).unwrap();
        store.update_profile("Nishant").unwrap();
        assert_eq!(
            storage.document(StorageKey::UserProfile).as_deref(),
            Some(r#"{"name":"Nishant"}"#)
        );

        let reopened = JournalStore::open(storage.clone());
        assert_eq!(reopened.trades(), store.trades());
        assert_eq!(reopened.goals(), store.goals());
        assert_eq!(reopened.profile().name, "Nishant");

        store.delete_trade("t1").unwrap();
        let reopened = JournalStore::open(storage);
        assert!(reopened.trades().is_empty());
    }

    #[test]
    fn test_corrupt_documents_fall_back_silently() {
        let storage = InMemoryStorage::new()
            .with_document(StorageKey::Trades, "[{broken")
            .with_document(StorageKey::Goals, "{\"not\":\"a list\"}")
            .with_document(StorageKey::UserProfile, "null");

        let store = JournalStore::open(storage);
        assert!(store.trades().is_empty());
        assert!(store.goals().is_empty());
        assert_eq!(store.profile().name, "Trader");
    }
}
