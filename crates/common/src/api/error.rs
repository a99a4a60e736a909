//! The error envelope returned with every non-2xx response.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::known::open_enum;

/// Body of a failed request: `{"Error": {"Code": ..., "Message": ...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FabricError {
    /// Error details.
    pub error: FabricErrorError,
}

/// Error code and message carried by [`FabricError`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FabricErrorError {
    /// Error code; see [`FabricErrorCodes::documented_statuses`].
    pub code: FabricErrorCodes,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl fmt::Display for FabricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error.message.as_deref() {
            Some(message) if !message.trim().is_empty() => {
                write!(f, "{}: {}", self.error.code, message)
            }
            _ => write!(f, "{}", self.error.code),
        }
    }
}

open_enum! {
    /// Error codes the cluster reports in [`FabricErrorError::code`].
    pub enum FabricErrorCodes {
        /// Partition key is invalid for the service's partition scheme.
        InvalidPartitionKey = "FABRIC_E_INVALID_PARTITION_KEY",
        /// Image builder rejected the application package.
        ImagebuilderValidationError = "FABRIC_E_IMAGEBUILDER_VALIDATION_ERROR",
        /// Address is malformed.
        InvalidAddress = "FABRIC_E_INVALID_ADDRESS",
        /// Application is not being upgraded.
        ApplicationNotUpgrading = "FABRIC_E_APPLICATION_NOT_UPGRADING",
        /// Application upgrade description failed validation.
        ApplicationUpgradeValidationError = "FABRIC_E_APPLICATION_UPGRADE_VALIDATION_ERROR",
        /// Cluster is not being upgraded.
        FabricNotUpgrading = "FABRIC_E_FABRIC_NOT_UPGRADING",
        /// Cluster upgrade description failed validation.
        FabricUpgradeValidationError = "FABRIC_E_FABRIC_UPGRADE_VALIDATION_ERROR",
        /// Configuration is invalid.
        InvalidConfiguration = "FABRIC_E_INVALID_CONFIGURATION",
        /// Name is not a valid fabric URI.
        InvalidNameUri = "FABRIC_E_INVALID_NAME_URI",
        /// Path exceeds the maximum length.
        PathTooLong = "FABRIC_E_PATH_TOO_LONG",
        /// Key exceeds the maximum size.
        KeyTooLarge = "FABRIC_E_KEY_TOO_LARGE",
        /// Service affinity chains are not supported.
        ServiceAffinityChainNotSupported = "FABRIC_E_SERVICE_AFFINITY_CHAIN_NOT_SUPPORTED",
        /// Atomic group is invalid.
        InvalidAtomicGroup = "FABRIC_E_INVALID_ATOMIC_GROUP",
        /// Value must not be empty.
        ValueEmpty = "FABRIC_E_VALUE_EMPTY",
        /// Backup is already enabled for the entity.
        BackupIsEnabled = "FABRIC_E_BACKUP_IS_ENABLED",
        /// Restore source and target partitions differ.
        RestoreSourceTargetPartitionMismatch =
            "FABRIC_E_RESTORE_SOURCE_TARGET_PARTITION_MISMATCH",
        /// Operation does not apply to stateless services.
        InvalidForStatelessServices = "FABRIC_E_INVALID_FOR_STATELESS_SERVICES",
        /// Service scaling policy is invalid.
        InvalidServiceScalingPolicy = "FABRIC_E_INVALID_SERVICE_SCALING_POLICY",
        /// Argument is invalid.
        InvalidArg = "E_INVALIDARG",
        /// Node does not exist.
        NodeNotFound = "FABRIC_E_NODE_NOT_FOUND",
        /// Application type does not exist.
        ApplicationTypeNotFound = "FABRIC_E_APPLICATION_TYPE_NOT_FOUND",
        /// Application does not exist.
        ApplicationNotFound = "FABRIC_E_APPLICATION_NOT_FOUND",
        /// Service type does not exist.
        ServiceTypeNotFound = "FABRIC_E_SERVICE_TYPE_NOT_FOUND",
        /// Service does not exist.
        ServiceDoesNotExist = "FABRIC_E_SERVICE_DOES_NOT_EXIST",
        /// Service type template does not exist.
        ServiceTypeTemplateNotFound = "FABRIC_E_SERVICE_TYPE_TEMPLATE_NOT_FOUND",
        /// Configuration section does not exist.
        ConfigurationSectionNotFound = "FABRIC_E_CONFIGURATION_SECTION_NOT_FOUND",
        /// Partition does not exist.
        PartitionNotFound = "FABRIC_E_PARTITION_NOT_FOUND",
        /// Replica does not exist.
        ReplicaDoesNotExist = "FABRIC_E_REPLICA_DOES_NOT_EXIST",
        /// Service group does not exist.
        ServiceGroupDoesNotExist = "FABRIC_E_SERVICE_GROUP_DOES_NOT_EXIST",
        /// Configuration parameter does not exist.
        ConfigurationParameterNotFound = "FABRIC_E_CONFIGURATION_PARAMETER_NOT_FOUND",
        /// Directory does not exist.
        DirectoryNotFound = "FABRIC_E_DIRECTORY_NOT_FOUND",
        /// Fabric version is not provisioned.
        FabricVersionNotFound = "FABRIC_E_FABRIC_VERSION_NOT_FOUND",
        /// File does not exist.
        FileNotFound = "FABRIC_E_FILE_NOT_FOUND",
        /// Name does not exist.
        NameDoesNotExist = "FABRIC_E_NAME_DOES_NOT_EXIST",
        /// Property does not exist.
        PropertyDoesNotExist = "FABRIC_E_PROPERTY_DOES_NOT_EXIST",
        /// Enumeration has already completed.
        EnumerationCompleted = "FABRIC_E_ENUMERATION_COMPLETED",
        /// Service manifest does not exist.
        ServiceManifestNotFound = "FABRIC_E_SERVICE_MANIFEST_NOT_FOUND",
        /// Key does not exist.
        KeyNotFound = "FABRIC_E_KEY_NOT_FOUND",
        /// Health entity does not exist.
        HealthEntityNotFound = "FABRIC_E_HEALTH_ENTITY_NOT_FOUND",
        /// Backup is not enabled for the entity.
        BackupNotEnabled = "FABRIC_E_BACKUP_NOT_ENABLED",
        /// Backup policy does not exist.
        BackupPolicyNotExisting = "FABRIC_E_BACKUP_POLICY_NOT_EXISTING",
        /// Fault analysis service is not deployed.
        FaultAnalysisServiceNotExisting = "FABRIC_E_FAULT_ANALYSIS_SERVICE_NOT_EXISTING",
        /// Image builder reserved directory was used.
        ImagebuilderReservedDirectoryError = "FABRIC_E_IMAGEBUILDER_RESERVED_DIRECTORY_ERROR",
        /// Application type already exists.
        ApplicationTypeAlreadyExists = "FABRIC_E_APPLICATION_TYPE_ALREADY_EXISTS",
        /// Application already exists.
        ApplicationAlreadyExists = "FABRIC_E_APPLICATION_ALREADY_EXISTS",
        /// Application is already at the target version.
        ApplicationAlreadyInTargetVersion = "FABRIC_E_APPLICATION_ALREADY_IN_TARGET_VERSION",
        /// Application type provisioning is in progress.
        ApplicationTypeProvisionInProgress = "FABRIC_E_APPLICATION_TYPE_PROVISION_IN_PROGRESS",
        /// Application upgrade is in progress.
        ApplicationUpgradeInProgress = "FABRIC_E_APPLICATION_UPGRADE_IN_PROGRESS",
        /// Service already exists.
        ServiceAlreadyExists = "FABRIC_E_SERVICE_ALREADY_EXISTS",
        /// Service group already exists.
        ServiceGroupAlreadyExists = "FABRIC_E_SERVICE_GROUP_ALREADY_EXISTS",
        /// Application type is still in use.
        ApplicationTypeInUse = "FABRIC_E_APPLICATION_TYPE_IN_USE",
        /// Cluster is already at the target version.
        FabricAlreadyInTargetVersion = "FABRIC_E_FABRIC_ALREADY_IN_TARGET_VERSION",
        /// Fabric version is already provisioned.
        FabricVersionAlreadyExists = "FABRIC_E_FABRIC_VERSION_ALREADY_EXISTS",
        /// Fabric version is in use.
        FabricVersionInUse = "FABRIC_E_FABRIC_VERSION_IN_USE",
        /// Cluster upgrade is in progress.
        FabricUpgradeInProgress = "FABRIC_E_FABRIC_UPGRADE_IN_PROGRESS",
        /// Name already exists.
        NameAlreadyExists = "FABRIC_E_NAME_ALREADY_EXISTS",
        /// Name still has children.
        NameNotEmpty = "FABRIC_E_NAME_NOT_EMPTY",
        /// Property check in a batch failed.
        PropertyCheckFailed = "FABRIC_E_PROPERTY_CHECK_FAILED",
        /// Service metadata does not match.
        ServiceMetadataMismatch = "FABRIC_E_SERVICE_METADATA_MISMATCH",
        /// Service type does not match.
        ServiceTypeMismatch = "FABRIC_E_SERVICE_TYPE_MISMATCH",
        /// Health report is older than the one on record.
        HealthStaleReport = "FABRIC_E_HEALTH_STALE_REPORT",
        /// Sequence number check failed.
        SequenceNumberCheckFailed = "FABRIC_E_SEQUENCE_NUMBER_CHECK_FAILED",
        /// Node has not stopped yet.
        NodeHasNotStoppedYet = "FABRIC_E_NODE_HAS_NOT_STOPPED_YET",
        /// Instance id does not match.
        InstanceIdMismatch = "FABRIC_E_INSTANCE_ID_MISMATCH",
        /// Backup is in progress.
        BackupInProgress = "FABRIC_E_BACKUP_IN_PROGRESS",
        /// Restore is in progress.
        RestoreInProgress = "FABRIC_E_RESTORE_IN_PROGRESS",
        /// Backup policy already exists.
        BackupPolicyAlreadyExisting = "FABRIC_E_BACKUP_POLICY_ALREADY_EXISTING",
        /// Value exceeds the maximum size.
        ValueTooLarge = "FABRIC_E_VALUE_TOO_LARGE",
        /// Node is up.
        NodeIsUp = "FABRIC_E_NODE_IS_UP",
        /// Unspecified failure.
        Fail = "E_FAIL",
        /// Single-instance application already exists.
        SingleInstanceApplicationAlreadyExists =
            "FABRIC_E_SINGLE_INSTANCE_APPLICATION_ALREADY_EXISTS",
        /// Single-instance application does not exist.
        SingleInstanceApplicationNotFound = "FABRIC_E_SINGLE_INSTANCE_APPLICATION_NOT_FOUND",
        /// Volume already exists.
        VolumeAlreadyExists = "FABRIC_E_VOLUME_ALREADY_EXISTS",
        /// Volume does not exist.
        VolumeNotFound = "FABRIC_E_VOLUME_NOT_FOUND",
        /// Request body could not be serialized or deserialized.
        SerializationError = "SerializationError",
        /// Write quorum is not available.
        NoWriteQuorum = "FABRIC_E_NO_WRITE_QUORUM",
        /// Replica is not primary.
        NotPrimary = "FABRIC_E_NOT_PRIMARY",
        /// Service is not ready.
        NotReady = "FABRIC_E_NOT_READY",
        /// Reconfiguration is pending.
        ReconfigurationPending = "FABRIC_E_RECONFIGURATION_PENDING",
        /// Service is offline.
        ServiceOffline = "FABRIC_E_SERVICE_OFFLINE",
        /// Operation was aborted.
        Abort = "E_ABORT",
        /// Communication with the service failed.
        CommunicationError = "FABRIC_E_COMMUNICATION_ERROR",
        /// Operation has not completed.
        OperationNotComplete = "FABRIC_E_OPERATION_NOT_COMPLETE",
        /// Operation timed out.
        Timeout = "FABRIC_E_TIMEOUT",
    }
}

impl FabricErrorCodes {
    /// HTTP status codes under which the service documents this error code.
    ///
    /// Unrecognized codes have no documented statuses.
    pub fn documented_statuses(&self) -> &'static [u16] {
        use FabricErrorCodes::*;
        match self {
            InvalidPartitionKey
            | ImagebuilderValidationError
            | InvalidAddress
            | ApplicationNotUpgrading
            | ApplicationUpgradeValidationError
            | FabricNotUpgrading
            | FabricUpgradeValidationError
            | InvalidConfiguration
            | InvalidNameUri
            | PathTooLong
            | KeyTooLarge
            | ServiceAffinityChainNotSupported
            | InvalidAtomicGroup
            | ValueEmpty
            | BackupIsEnabled
            | RestoreSourceTargetPartitionMismatch
            | InvalidForStatelessServices
            | InvalidServiceScalingPolicy
            | InvalidArg => &[400],
            NodeNotFound
            | ApplicationTypeNotFound
            | ApplicationNotFound
            | ServiceTypeNotFound
            | ServiceDoesNotExist
            | ServiceTypeTemplateNotFound
            | ConfigurationSectionNotFound
            | PartitionNotFound
            | ReplicaDoesNotExist
            | ServiceGroupDoesNotExist
            | ConfigurationParameterNotFound
            | DirectoryNotFound
            | FabricVersionNotFound
            | FileNotFound
            | NameDoesNotExist
            | PropertyDoesNotExist
            | EnumerationCompleted
            | ServiceManifestNotFound
            | KeyNotFound
            | HealthEntityNotFound
            | BackupNotEnabled
            | BackupPolicyNotExisting
            | FaultAnalysisServiceNotExisting
            | ImagebuilderReservedDirectoryError => &[404],
            ApplicationTypeAlreadyExists
            | ApplicationAlreadyExists
            | ApplicationAlreadyInTargetVersion
            | ApplicationTypeProvisionInProgress
            | ApplicationUpgradeInProgress
            | ServiceAlreadyExists
            | ServiceGroupAlreadyExists
            | ApplicationTypeInUse
            | FabricAlreadyInTargetVersion
            | FabricVersionAlreadyExists
            | FabricVersionInUse
            | FabricUpgradeInProgress
            | NameAlreadyExists
            | NameNotEmpty
            | PropertyCheckFailed
            | ServiceMetadataMismatch
            | ServiceTypeMismatch
            | HealthStaleReport
            | SequenceNumberCheckFailed
            | NodeHasNotStoppedYet
            | InstanceIdMismatch
            | BackupInProgress
            | RestoreInProgress
            | BackupPolicyAlreadyExisting => &[409],
            ValueTooLarge => &[413, 503],
            NodeIsUp
            | Fail
            | SingleInstanceApplicationAlreadyExists
            | SingleInstanceApplicationNotFound
            | VolumeAlreadyExists
            | VolumeNotFound
            | SerializationError => &[500],
            NoWriteQuorum | NotPrimary | NotReady | ReconfigurationPending | ServiceOffline
            | Abort => &[503],
            CommunicationError | OperationNotComplete | Timeout => &[504],
            Unrecognized(_) => &[],
        }
    }

    /// Whether the code is documented as transient (503 or 504), making a
    /// caller-directed retry reasonable.
    pub fn is_retryable(&self) -> bool {
        self.documented_statuses()
            .iter()
            .any(|status| matches!(status, 503 | 504))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_error_envelope() {
        let err: FabricError = serde_json::from_value(json!({
            "Error": {
                "Code": "FABRIC_E_NODE_NOT_FOUND",
                "Message": "Node _Node_9 not found"
            }
        }))
        .expect("decode envelope");
        assert_eq!(err.error.code, FabricErrorCodes::NodeNotFound);
        assert_eq!(err.error.code.documented_statuses(), &[404]);
        assert_eq!(
            err.to_string(),
            "FABRIC_E_NODE_NOT_FOUND: Node _Node_9 not found"
        );
    }

    #[test]
    fn message_is_optional() {
        let err: FabricError =
            serde_json::from_value(json!({"Error": {"Code": "E_ABORT"}})).expect("decode");
        assert!(err.error.message.is_none());
        assert!(err.error.code.is_retryable());
        assert_eq!(err.to_string(), "E_ABORT");
    }

    #[test]
    fn unrecognized_codes_are_preserved() {
        let err: FabricError = serde_json::from_value(json!({
            "Error": {"Code": "FABRIC_E_SOMETHING_NEW", "Message": "later release"}
        }))
        .expect("decode");
        assert_eq!(
            err.error.code,
            FabricErrorCodes::Unrecognized("FABRIC_E_SOMETHING_NEW".into())
        );
        assert!(err.error.code.documented_statuses().is_empty());
        assert!(!err.error.code.is_retryable());
    }

    #[test]
    fn retryable_codes_follow_documented_statuses() {
        assert!(FabricErrorCodes::Timeout.is_retryable());
        assert!(FabricErrorCodes::NotPrimary.is_retryable());
        assert!(FabricErrorCodes::ValueTooLarge.is_retryable());
        assert!(!FabricErrorCodes::ApplicationAlreadyExists.is_retryable());
        assert!(!FabricErrorCodes::Fail.is_retryable());
    }

    #[test]
    fn every_known_code_has_a_documented_status() {
        for raw in FabricErrorCodes::KNOWN_VALUES {
            let code = FabricErrorCodes::from(*raw);
            assert!(
                !code.documented_statuses().is_empty(),
                "{raw} has no documented status"
            );
        }
    }
}
