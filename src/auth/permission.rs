//! Humanity permission levels.
//!
//! Humanity ranks roles numerically; lower numbers are more privileged. Every endpoint
//! descriptor declares the level documented for it, and a session that knows its identity's
//! level rejects calls the identity cannot make.

// self
use crate::_prelude::*;

/// Role rank required by (or held for) an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
	/// Level 1, the account owner.
	Admin,
	/// Level 2.
	Manager,
	/// Level 3.
	Supervisor,
	/// Level 4.
	Scheduler,
	/// Level 5.
	Employee,
	/// Level 6.
	Accountant,
	/// Level 7.
	ScheduleViewer,
	/// Not documented by the provider; never enforced.
	Unspecified,
}
impl PermissionLevel {
	/// Numeric rank used by Humanity, when documented.
	pub const fn rank(self) -> Option<u8> {
		match self {
			Self::Admin => Some(1),
			Self::Manager => Some(2),
			Self::Supervisor => Some(3),
			Self::Scheduler => Some(4),
			Self::Employee => Some(5),
			Self::Accountant => Some(6),
			Self::ScheduleViewer => Some(7),
			Self::Unspecified => None,
		}
	}

	/// Maps a numeric Humanity rank back to a level.
	pub const fn from_rank(rank: u8) -> Option<Self> {
		match rank {
			1 => Some(Self::Admin),
			2 => Some(Self::Manager),
			3 => Some(Self::Supervisor),
			4 => Some(Self::Scheduler),
			5 => Some(Self::Employee),
			6 => Some(Self::Accountant),
			7 => Some(Self::ScheduleViewer),
			_ => None,
		}
	}

	/// Returns a stable label suitable for logs and error messages.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Admin => "admin",
			Self::Manager => "manager",
			Self::Supervisor => "supervisor",
			Self::Scheduler => "scheduler",
			Self::Employee => "employee",
			Self::Accountant => "accountant",
			Self::ScheduleViewer => "schedule_viewer",
			Self::Unspecified => "unspecified",
		}
	}

	/// Returns `true` when an identity holding `self` may call an endpoint requiring `required`.
	///
	/// Unspecified requirements always pass; an unspecified identity only passes those.
	pub fn satisfies(self, required: PermissionLevel) -> bool {
		match (self.rank(), required.rank()) {
			(_, None) => true,
			(None, Some(_)) => false,
			(Some(held), Some(needed)) => held <= needed,
		}
	}
}
impl Display for PermissionLevel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn lower_ranks_satisfy_higher_requirements() {
		assert!(PermissionLevel::Manager.satisfies(PermissionLevel::Supervisor));
		assert!(PermissionLevel::Employee.satisfies(PermissionLevel::Employee));
		assert!(PermissionLevel::Employee.satisfies(PermissionLevel::ScheduleViewer));
		assert!(!PermissionLevel::Employee.satisfies(PermissionLevel::Scheduler));
		assert!(!PermissionLevel::ScheduleViewer.satisfies(PermissionLevel::Employee));
	}

	#[test]
	fn admins_outrank_managers() {
		assert!(PermissionLevel::Admin.satisfies(PermissionLevel::Manager));
		assert!(PermissionLevel::Admin.satisfies(PermissionLevel::ScheduleViewer));
		assert!(!PermissionLevel::Manager.satisfies(PermissionLevel::Admin));
		assert_eq!(PermissionLevel::Admin.to_string(), "admin");
	}

	#[test]
	fn unspecified_requirements_always_pass() {
		assert!(PermissionLevel::ScheduleViewer.satisfies(PermissionLevel::Unspecified));
		assert!(PermissionLevel::Unspecified.satisfies(PermissionLevel::Unspecified));
		assert!(!PermissionLevel::Unspecified.satisfies(PermissionLevel::ScheduleViewer));
	}

	#[test]
	fn ranks_round_trip() {
		for rank in 1..=7 {
			let level = PermissionLevel::from_rank(rank).expect("Documented ranks should map.");

			assert_eq!(level.rank(), Some(rank));
		}

		assert_eq!(PermissionLevel::from_rank(1), Some(PermissionLevel::Admin));
		assert_eq!(PermissionLevel::from_rank(0), None);
		assert_eq!(PermissionLevel::from_rank(8), None);
	}
}
