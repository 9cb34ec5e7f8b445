//! Typed resource calls for the Humanity v2 API, grouped by functional area.
//!
//! Each area module declares its [`Endpoint`] constants and adds thin async methods to
//! [`Session`](crate::session::Session); every method is one [`Call`](crate::dispatch::Call)
//! handed to [`Session::dispatch`](crate::session::Session::dispatch). Query parameters and form
//! data are passed through as [`Params`](crate::dispatch::Params) exactly as given.

pub mod availability;
pub mod company;
pub mod forecast;
pub mod leave;
pub mod locations;
pub mod messaging;
pub mod payroll;
pub mod reports;
pub mod schedule;
pub mod staff;
pub mod timeclock;
pub mod training;

// self
use crate::dispatch::Endpoint;

/// Iterates over every endpoint the crate exposes, area by area.
pub fn catalogue() -> impl Iterator<Item = &'static Endpoint> {
	[
		company::ENDPOINTS,
		locations::ENDPOINTS,
		staff::ENDPOINTS,
		schedule::ENDPOINTS,
		timeclock::ENDPOINTS,
		forecast::ENDPOINTS,
		leave::ENDPOINTS,
		payroll::ENDPOINTS,
		messaging::ENDPOINTS,
		availability::ENDPOINTS,
		training::ENDPOINTS,
		reports::ENDPOINTS,
	]
	.into_iter()
	.flatten()
}

/// Looks up an endpoint by its stable name.
pub fn find(name: &str) -> Option<&'static Endpoint> {
	catalogue().find(|endpoint| endpoint.name == name)
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashSet;
	// self
	use super::*;
	use crate::{auth::PermissionLevel, dispatch::Method};

	#[test]
	fn catalogue_covers_every_resource_call() {
		assert_eq!(catalogue().count(), 204);
	}

	#[test]
	fn endpoint_names_are_unique() {
		let mut seen = HashSet::new();

		for endpoint in catalogue() {
			assert!(seen.insert(endpoint.name), "Duplicate endpoint name `{}`.", endpoint.name);
		}
	}

	#[test]
	fn paths_are_relative_and_well_formed() {
		for endpoint in catalogue() {
			assert!(!endpoint.path.starts_with('/'), "`{endpoint}` must be relative.");
			assert!(!endpoint.path.contains("//"), "`{endpoint}` has an empty segment.");
			assert!(
				endpoint.path.split('/').all(|segment| segment == "{}" || !segment.contains('{')),
				"`{endpoint}` has a malformed placeholder."
			);
		}
	}

	#[test]
	fn trailing_slashes_survive_where_the_provider_expects_them() {
		let trailing = catalogue()
			.filter(|endpoint| endpoint.path.ends_with('/'))
			.map(|endpoint| endpoint.name)
			.collect::<HashSet<_>>();

		assert_eq!(trailing, HashSet::from(["get_group_reports", "get_single_availability_slot"]));
	}

	#[test]
	fn read_style_calls_sent_as_post() {
		for name in ["get_notes", "get_availability_in_date_period", "get_multiple_availability"] {
			let endpoint = find(name).expect("Endpoint should be catalogued.");

			assert_eq!(endpoint.method, Method::Post, "`{name}` is sent as POST.");
		}
	}

	#[test]
	fn documented_levels_are_preserved() {
		let level = |name| find(name).map(|endpoint| endpoint.permission);

		assert_eq!(level("get_me"), Some(PermissionLevel::ScheduleViewer));
		assert_eq!(level("delete_ratecard"), Some(PermissionLevel::Manager));
		assert_eq!(level("post_employee"), Some(PermissionLevel::Scheduler));
		assert_eq!(level("get_message"), Some(PermissionLevel::Unspecified));
		assert_eq!(level("delete_series"), Some(PermissionLevel::Unspecified));
		assert_eq!(level("get_preclockins"), Some(PermissionLevel::Supervisor));
		assert_eq!(level("missing"), None);
	}
}
