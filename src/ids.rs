use uuid::Uuid;

/// Source of draft identifiers. Ids must not repeat within one parse.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `txn-1`, `txn-2`, ... for tests and reproducible output.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("txn-{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "txn-1");
        assert_eq!(ids.next_id(), "txn-2");
    }

    #[test]
    fn test_uuid_ids_do_not_repeat() {
        let mut ids = UuidIds;
        let seen: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 100);
    }
}
