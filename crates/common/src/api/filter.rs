//! Integer bitmask filters accepted by query operations.
//!
//! Filters are combined with bitwise OR and travel as plain integers, both in
//! query strings and in JSON bodies.

use bitflags::bitflags;

use super::health::HealthState;

/// Implements integer serde for a bitflags type; unknown bits are retained.
macro_rules! integer_flags_serde {
    ($name:ident, $bits:ty) => {
        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_u64(u64::from(self.bits()))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = u64::deserialize(deserializer)?;
                let bits = <$bits>::try_from(raw).map_err(|_| {
                    <D::Error as ::serde::de::Error>::custom(format!(
                        "filter value {raw} does not fit in {}",
                        stringify!($bits)
                    ))
                })?;
                Ok($name::from_bits_retain(bits))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::empty()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
    };
}

bitflags! {
    /// Health-state filter over the closed set {None, Ok, Warning, Error}.
    ///
    /// The empty value is the service's `Default` (0); [`HealthStateFilter::ALL`]
    /// is 65535.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HealthStateFilter: u32 {
        /// Matches entities whose health state is None.
        const NONE = 1;
        /// Matches entities whose health state is Ok.
        const OK = 2;
        /// Matches entities whose health state is Warning.
        const WARNING = 4;
        /// Matches entities whose health state is Error.
        const ERROR = 8;
        /// Matches every health state.
        const ALL = 65535;
    }
}

integer_flags_serde!(HealthStateFilter, u32);

impl HealthStateFilter {
    /// The service default (0): the server decides which entities to return.
    pub const DEFAULT: HealthStateFilter = HealthStateFilter::empty();

    /// Whether an entity in `state` would be selected by this filter.
    ///
    /// `DEFAULT` and `ALL` select every state.
    pub fn matches(&self, state: &HealthState) -> bool {
        if self.is_empty() || self.contains(HealthStateFilter::ALL) {
            return true;
        }
        let bit = match state {
            HealthState::Ok => HealthStateFilter::OK,
            HealthState::Warning => HealthStateFilter::WARNING,
            HealthState::Error => HealthStateFilter::ERROR,
            HealthState::Invalid | HealthState::Unknown | HealthState::Unrecognized(_) => {
                HealthStateFilter::NONE
            }
        };
        self.intersects(bit)
    }
}

bitflags! {
    /// Selects applications by how they were defined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ApplicationDefinitionKindFilter: u16 {
        /// Applications described by a Service Fabric application package.
        const SERVICE_FABRIC_APPLICATION_DESCRIPTION = 1;
        /// Applications created from a Compose file.
        const COMPOSE = 2;
        /// Applications described by a mesh resource description.
        const MESH_APPLICATION_DESCRIPTION = 4;
        /// Every definition kind.
        const ALL = 65535;
    }
}

integer_flags_serde!(ApplicationDefinitionKindFilter, u16);

bitflags! {
    /// Selects application types by how they were defined.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ApplicationTypeDefinitionKindFilter: u16 {
        /// Types provisioned from a Service Fabric application package.
        const SERVICE_FABRIC_APPLICATION_PACKAGE = 1;
        /// Types created from a Compose file.
        const COMPOSE = 2;
        /// Types created from a mesh application description.
        const MESH_APPLICATION_DESCRIPTION = 4;
        /// Every definition kind.
        const ALL = 65535;
    }
}

integer_flags_serde!(ApplicationTypeDefinitionKindFilter, u16);

bitflags! {
    /// Selects user-induced fault operations by type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OperationTypeFilter: u32 {
        /// StartDataLoss operations.
        const PARTITION_DATA_LOSS = 1;
        /// StartQuorumLoss operations.
        const PARTITION_QUORUM_LOSS = 2;
        /// StartPartitionRestart operations.
        const PARTITION_RESTART = 4;
        /// StartNodeTransition operations.
        const NODE_TRANSITION = 8;
        /// Every operation type.
        const ALL = 65535;
    }
}

integer_flags_serde!(OperationTypeFilter, u32);

bitflags! {
    /// Selects user-induced fault operations by state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OperationStateFilter: u32 {
        /// Operations still running.
        const RUNNING = 1;
        /// Operations rolling back.
        const ROLLING_BACK = 2;
        /// Operations that completed.
        const COMPLETED = 8;
        /// Operations that faulted.
        const FAULTED = 16;
        /// Operations cancelled gracefully.
        const CANCELLED = 32;
        /// Operations force-cancelled.
        const FORCE_CANCELLED = 64;
        /// Every operation state.
        const ALL = 65535;
    }
}

integer_flags_serde!(OperationStateFilter, u32);

bitflags! {
    /// Selects repair tasks by workflow state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RepairTaskStateFilter: u32 {
        /// Created tasks.
        const CREATED = 1;
        /// Claimed tasks.
        const CLAIMED = 2;
        /// Tasks preparing their impact.
        const PREPARING = 4;
        /// Approved tasks.
        const APPROVED = 8;
        /// Executing tasks.
        const EXECUTING = 16;
        /// Tasks restoring their impact.
        const RESTORING = 32;
        /// Completed tasks.
        const COMPLETED = 64;
        /// Tasks that are neither created nor completed.
        const ACTIVE = Self::CLAIMED.bits()
            | Self::PREPARING.bits()
            | Self::APPROVED.bits()
            | Self::EXECUTING.bits()
            | Self::RESTORING.bits();
    }
}

integer_flags_serde!(RepairTaskStateFilter, u32);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_state_filter_wire_values_are_fixed() {
        assert_eq!(HealthStateFilter::DEFAULT.bits(), 0);
        assert_eq!(HealthStateFilter::NONE.bits(), 1);
        assert_eq!(HealthStateFilter::OK.bits(), 2);
        assert_eq!(HealthStateFilter::WARNING.bits(), 4);
        assert_eq!(HealthStateFilter::ERROR.bits(), 8);
        assert_eq!(HealthStateFilter::ALL.bits(), 65535);
    }

    #[test]
    fn health_state_filter_combines_and_serializes_as_integer() {
        let filter = HealthStateFilter::WARNING | HealthStateFilter::ERROR;
        assert_eq!(serde_json::to_value(filter).expect("serialize"), json!(12));

        let decoded: HealthStateFilter = serde_json::from_value(json!(6)).expect("deserialize");
        assert_eq!(decoded, HealthStateFilter::OK | HealthStateFilter::WARNING);

        for raw in [0u32, 1, 2, 4, 8, 65535] {
            let decoded: HealthStateFilter =
                serde_json::from_value(json!(raw)).expect("documented value");
            assert_eq!(decoded.bits(), raw);
        }
    }

    #[test]
    fn health_state_filter_matches_states() {
        let filter = HealthStateFilter::ERROR;
        assert!(filter.matches(&HealthState::Error));
        assert!(!filter.matches(&HealthState::Ok));
        assert!(HealthStateFilter::DEFAULT.matches(&HealthState::Warning));
        assert!(HealthStateFilter::ALL.matches(&HealthState::Ok));
    }

    #[test]
    fn unknown_bits_are_retained() {
        let decoded: OperationStateFilter = serde_json::from_value(json!(4)).expect("deserialize");
        assert_eq!(decoded.bits(), 4);
        assert_eq!(serde_json::to_value(decoded).expect("serialize"), json!(4));
    }

    #[test]
    fn oversized_values_are_rejected() {
        let result: Result<ApplicationDefinitionKindFilter, _> =
            serde_json::from_value(json!(70000));
        assert!(result.is_err());
    }

    #[test]
    fn display_renders_integer() {
        let filter = RepairTaskStateFilter::CREATED | RepairTaskStateFilter::COMPLETED;
        assert_eq!(filter.to_string(), "65");
        assert_eq!(RepairTaskStateFilter::ACTIVE.bits(), 62);
    }
}
