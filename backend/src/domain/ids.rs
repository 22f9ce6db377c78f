use shared::RecordId;

/// Hands out record ids that look like millisecond timestamps but never repeat.
///
/// Two records created within the same clock tick get consecutive ids instead
/// of the same one.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that will never reissue any of `existing`
    pub fn seeded<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let mut ids = Self::new();
        for id in existing {
            ids.observe(id);
        }
        ids
    }

    /// Make sure `id` is never handed out
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id.value());
    }

    pub fn next(&mut self, now_millis: u64) -> RecordId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        RecordId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp_when_ahead() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next(1_000), RecordId(1_000));
        assert_eq!(ids.next(2_500), RecordId(2_500));
    }

    #[test]
    fn test_same_tick_does_not_collide() {
        let mut ids = IdGenerator::new();
        let first = ids.next(1_000);
        let second = ids.next(1_000);
        let third = ids.next(999);
        assert_eq!(first, RecordId(1_000));
        assert_eq!(second, RecordId(1_001));
        assert_eq!(third, RecordId(1_002));
    }

    #[test]
    fn test_seeded_skips_existing_ids() {
        let mut ids = IdGenerator::seeded([RecordId(50), RecordId(9_000), RecordId(12)]);
        assert_eq!(ids.next(100), RecordId(9_001));
    }
}
