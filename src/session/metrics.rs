// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::obs::FlowKind;

/// Thread-safe counters for a single grant type.
#[derive(Debug, Default)]
pub struct ExchangeCounters {
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
}
impl ExchangeCounters {
	/// Returns the number of exchanges sent to the token endpoint.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of exchanges that produced a token pair.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of exchanges that failed.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}
}

/// Per-session counters for password and refresh exchanges.
#[derive(Debug, Default)]
pub struct ExchangeMetrics {
	/// Password grant counters.
	pub password: ExchangeCounters,
	/// Refresh grant counters.
	pub refresh: ExchangeCounters,
}
impl ExchangeMetrics {
	pub(crate) fn record_attempt(&self, kind: FlowKind) {
		if let Some(counters) = self.counters(kind) {
			counters.attempts.fetch_add(1, Ordering::Relaxed);
		}
	}

	pub(crate) fn record_success(&self, kind: FlowKind) {
		if let Some(counters) = self.counters(kind) {
			counters.success.fetch_add(1, Ordering::Relaxed);
		}
	}

	pub(crate) fn record_failure(&self, kind: FlowKind) {
		if let Some(counters) = self.counters(kind) {
			counters.failure.fetch_add(1, Ordering::Relaxed);
		}
	}

	fn counters(&self, kind: FlowKind) -> Option<&ExchangeCounters> {
		match kind {
			FlowKind::Password => Some(&self.password),
			FlowKind::Refresh => Some(&self.refresh),
			FlowKind::Request => None,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn counters_are_tracked_per_grant() {
		let metrics = ExchangeMetrics::default();

		metrics.record_attempt(FlowKind::Password);
		metrics.record_success(FlowKind::Password);
		metrics.record_attempt(FlowKind::Refresh);
		metrics.record_failure(FlowKind::Refresh);
		metrics.record_attempt(FlowKind::Request);

		assert_eq!(metrics.password.attempts(), 1);
		assert_eq!(metrics.password.successes(), 1);
		assert_eq!(metrics.password.failures(), 0);
		assert_eq!(metrics.refresh.attempts(), 1);
		assert_eq!(metrics.refresh.failures(), 1);
	}
}
