//! State shared by every assert: description and failure sink

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::errors::AssertionError;

pub(crate) type FailureCollector = Arc<Mutex<Vec<AssertionError>>>;

/// Description and failure handling carried by an assert
///
/// Without a collector a failure panics; with one (soft assertions) it is
/// recorded and the assert keeps going.
#[derive(Debug, Clone, Default)]
pub struct AssertionInfo {
    description: Option<String>,
    collector: Option<FailureCollector>,
}

impl AssertionInfo {
    pub(crate) fn collecting_into(collector: FailureCollector) -> Self {
        Self {
            description: None,
            collector: Some(collector),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    /// Fails with `message()` unless `condition` holds
    pub(crate) fn check(&self, condition: bool, message: impl FnOnce() -> String) {
        if !condition {
            self.fail(message());
        }
    }

    pub(crate) fn fail(&self, message: String) {
        let message = match &self.description {
            Some(description) => format!("[{}] {}", description, message),
            None => message,
        };
        let error = AssertionError::new(message);

        match &self.collector {
            Some(collector) => {
                debug!(failure = error.message(), "Collected soft assertion failure");
                collector
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push(error);
            }
            None => panic!("{}", error),
        }
    }
}

/// Adds `described_as` and its `as_` alias to an assert type with an `info` field
macro_rules! descriptable {
    ($assert:ident $(<$($param:ident),+>)?) => {
        impl$(<$($param),+>)? $assert$(<$($param),+>)? {
            /// Prefixes failure messages of this assert with `[description] `
            pub fn described_as(mut self, description: impl Into<String>) -> Self {
                self.info.set_description(description.into());
                self
            }

            pub fn as_(self, description: impl Into<String>) -> Self {
                self.described_as(description)
            }

            pub fn info(&self) -> &$crate::api::AssertionInfo {
                &self.info
            }
        }
    };
}

pub(crate) use descriptable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_failure_carries_description() {
        let collector = FailureCollector::default();
        let mut info = AssertionInfo::collecting_into(collector.clone());
        info.set_description("age".to_string());
        info.check(false, || "too young".to_string());
        info.check(true, || unreachable!());

        let errors = collector.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "[age] too young");
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_failure_panics_without_collector() {
        AssertionInfo::default().fail("boom".to_string());
    }
}
