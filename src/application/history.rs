//! Conversion history service.
//!
//! Stamps conversions with the injected clock, writes them through a
//! [`HistoryStore`] under a fixed per-partition cap, and restores sessions
//! from the most recent record on cold start.

use tracing::info;

use crate::domain::{
    Category, Conversion, ConversionRecord, ConversionSession, CurrencyConverter, ExchangeRates,
    NewRecord, PairConverter, PartitionKey, UnitConverter,
};
use crate::error::Result;
use crate::port::{Clock, HistoryStore};

/// Entries kept per partition unless configured otherwise.
pub const DEFAULT_MAX_ENTRIES: usize = 25;

/// History use cases over a store and a clock.
pub struct HistoryService<S, C> {
    store: S,
    clock: C,
    max_entries: usize,
}

impl<S: HistoryStore, C: Clock> HistoryService<S, C> {
    /// `max_entries` is fixed for the lifetime of the service.
    pub const fn new(store: S, clock: C, max_entries: usize) -> Self {
        Self {
            store,
            clock,
            max_entries,
        }
    }

    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store a conversion stamped with the current time.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn record(&self, conversion: Conversion) -> Result<ConversionRecord> {
        let record = NewRecord {
            conversion,
            created_at_ms: self.clock.now_millis(),
        };
        let stored = self.store.insert_and_trim(record, self.max_entries).await?;
        info!(
            partition = %stored.partition(),
            id = stored.id,
            from = %stored.conversion.from_label,
            to = %stored.conversion.to_label,
            "Recorded conversion"
        );
        Ok(stored)
    }

    /// Commit `session` and record the result, if any.
    ///
    /// # Errors
    /// Propagates conversion and storage errors.
    pub async fn commit<P: PairConverter>(
        &self,
        session: &mut ConversionSession<P>,
    ) -> Result<Option<ConversionRecord>> {
        match session.commit()? {
            Some(conversion) => self.record(conversion).await.map(Some),
            None => Ok(None),
        }
    }

    /// Records of `key`, newest first.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn list(&self, key: PartitionKey) -> Result<Vec<ConversionRecord>> {
        self.store.list_all(key).await
    }

    /// # Errors
    /// Propagates storage errors.
    pub async fn latest(&self, key: PartitionKey) -> Result<Option<ConversionRecord>> {
        self.store.latest(key).await
    }

    /// Drop every record of `key`. Other partitions are untouched.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn clear(&self, key: PartitionKey) -> Result<usize> {
        let removed = self.store.clear(key).await?;
        info!(partition = %key, removed, "Cleared history");
        Ok(removed)
    }

    /// Session for `category`, starting on its most recent pair.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn restore_unit_session(
        &self,
        category: Category,
    ) -> Result<ConversionSession<UnitConverter>> {
        let converter = UnitConverter::new(category);
        self.restore(converter).await
    }

    /// Currency session over `rates`, starting on the most recent pair.
    ///
    /// # Errors
    /// Propagates storage errors.
    pub async fn restore_currency_session(
        &self,
        rates: ExchangeRates,
    ) -> Result<ConversionSession<CurrencyConverter>> {
        self.restore(CurrencyConverter::new(rates)).await
    }

    async fn restore<P: PairConverter>(&self, converter: P) -> Result<ConversionSession<P>> {
        let latest = self.store.latest(converter.partition()).await?;
        Ok(ConversionSession::restore(converter, latest.as_ref())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryHistoryStore;
    use crate::testkit::clock::ManualClock;
    use crate::testkit::record::conversion;

    fn service(max: usize) -> HistoryService<MemoryHistoryStore, ManualClock> {
        HistoryService::new(MemoryHistoryStore::new(), ManualClock::new(1_000), max)
    }

    #[tokio::test]
    async fn record_stamps_clock_time() {
        let service = service(DEFAULT_MAX_ENTRIES);
        let stored = service
            .record(conversion(PartitionKey::Unit(Category::Length), "1"))
            .await
            .unwrap();
        assert_eq!(stored.created_at_ms, 1_000);
    }

    #[tokio::test]
    async fn record_applies_the_cap() {
        let service = service(2);
        let key = PartitionKey::Unit(Category::Time);
        for amount in ["1", "2", "3"] {
            service.record(conversion(key, amount)).await.unwrap();
        }
        let records = service.list(key).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].conversion.from_amount, "3");
    }

    #[tokio::test]
    async fn commit_records_only_complete_entries() {
        let service = service(DEFAULT_MAX_ENTRIES);
        let mut session = service.restore_unit_session(Category::Length).await.unwrap();

        assert_eq!(service.commit(&mut session).await.unwrap(), None);

        session.set_value("2").unwrap();
        let stored = service.commit(&mut session).await.unwrap().unwrap();
        assert_eq!(stored.conversion.from_label, "Meter");
        assert_eq!(stored.conversion.to_label, "Foot");
        assert_eq!(session.from_value(), "");
    }

    #[tokio::test]
    async fn restore_picks_up_latest_pair() {
        let service = service(DEFAULT_MAX_ENTRIES);
        let mut first = conversion(PartitionKey::Unit(Category::Length), "1");
        first.from_label = "Inch".to_string();
        first.to_label = "Centimeter".to_string();
        service.record(first).await.unwrap();

        let session = service.restore_unit_session(Category::Length).await.unwrap();
        assert_eq!(session.from_unit().id, "inch");
        assert_eq!(session.to_unit().id, "centimeter");

        let untouched = service.restore_unit_session(Category::Area).await.unwrap();
        assert_eq!(
            (untouched.from_unit(), untouched.to_unit()),
            Category::Area.default_pair()
        );
    }
}
