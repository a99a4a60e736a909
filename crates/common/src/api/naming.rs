//! Naming service: names, sub-names, properties and atomic property batches.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::known::{UnknownVariant, open_enum, tagged_union};
use super::params::{TimeoutOptionalParams, optional_params};

open_enum! {
    /// Type of a property value.
    pub enum PropertyValueKind {
        /// Invalid.
        Invalid = "Invalid",
        /// Byte array.
        Binary = "Binary",
        /// 64-bit integer.
        Int64 = "Int64",
        /// Double.
        Double = "Double",
        /// String.
        String = "String",
        /// Guid.
        Guid = "Guid",
    }
}

/// Body of `create_name`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NameDescription {
    /// Name (`fabric:/...`).
    pub name: String,
}

/// Page of sub-names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PagedSubNameInfoList {
    /// Cursor for the next page; absent or empty when exhausted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// Whether the listing is consistent across pages.
    #[serde(default)]
    pub is_consistent: bool,
    /// Sub-names.
    #[serde(default)]
    pub sub_names: Vec<String>,
}

/// Value of a property, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum PropertyValue {
    /// Bytes, encoded as an array of numbers.
    Binary {
        /// Bytes.
        #[serde(rename = "Data")]
        data: Vec<u8>,
    },
    /// 64-bit integer, encoded as a decimal string.
    Int64 {
        /// Value.
        #[serde(rename = "Data")]
        data: String,
    },
    /// Double.
    Double {
        /// Value.
        #[serde(rename = "Data")]
        data: f64,
    },
    /// String.
    String {
        /// Value.
        #[serde(rename = "Data")]
        data: String,
    },
    /// Guid.
    Guid {
        /// Value.
        #[serde(rename = "Data")]
        data: Uuid,
    },
    /// Value kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<PropertyValue>),
}

tagged_union!(PropertyValue, "Kind", ["Binary", "Int64", "Double", "String", "Guid"]);

impl PropertyValue {
    /// An Int64 value.
    pub fn int64(value: i64) -> Self {
        PropertyValue::Int64 {
            data: value.to_string(),
        }
    }

    /// The value as an integer, for Int64 values.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int64 { data } => data.parse().ok(),
            _ => None,
        }
    }

    /// Kind of the value.
    pub fn kind(&self) -> PropertyValueKind {
        match self {
            PropertyValue::Binary { .. } => PropertyValueKind::Binary,
            PropertyValue::Int64 { .. } => PropertyValueKind::Int64,
            PropertyValue::Double { .. } => PropertyValueKind::Double,
            PropertyValue::String { .. } => PropertyValueKind::String,
            PropertyValue::Guid { .. } => PropertyValueKind::Guid,
            PropertyValue::Unrecognized(_) => PropertyValueKind::Invalid,
        }
    }
}

/// Metadata of a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyMetadata {
    /// Value kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<PropertyValueKind>,
    /// Application-defined type tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type_id: Option<String>,
    /// Owning name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Value size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i32>,
    /// Last write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_utc_timestamp: Option<DateTime<Utc>>,
    /// Sequence number of the last write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
}

/// A property and its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Value; absent when values were not requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<PropertyValue>,
    /// Metadata.
    #[serde(default)]
    pub metadata: PropertyMetadata,
}

/// Page of properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PagedPropertyInfoList {
    /// Cursor for the next page; absent or empty when exhausted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// Whether the listing is consistent across pages.
    #[serde(default)]
    pub is_consistent: bool,
    /// Properties.
    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
}

/// Body of `put_property`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyDescription {
    /// Property name.
    pub property_name: String,
    /// Application-defined type tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type_id: Option<String>,
    /// Value.
    pub value: PropertyValue,
}

/// One operation of a property batch, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum PropertyBatchOperation {
    /// Fail the batch unless the property's existence matches.
    CheckExists {
        /// Property name.
        #[serde(rename = "PropertyName")]
        property_name: String,
        /// Expected existence.
        #[serde(rename = "Exists")]
        exists: bool,
    },
    /// Fail the batch unless the sequence number matches.
    CheckSequence {
        /// Property name.
        #[serde(rename = "PropertyName")]
        property_name: String,
        /// Expected sequence number.
        #[serde(rename = "SequenceNumber")]
        sequence_number: String,
    },
    /// Fail the batch unless the value matches.
    CheckValue {
        /// Property name.
        #[serde(rename = "PropertyName")]
        property_name: String,
        /// Expected value.
        #[serde(rename = "Value")]
        value: PropertyValue,
    },
    /// Delete the property.
    Delete {
        /// Property name.
        #[serde(rename = "PropertyName")]
        property_name: String,
    },
    /// Read the property.
    Get {
        /// Property name.
        #[serde(rename = "PropertyName")]
        property_name: String,
        /// Return the value as well as the metadata.
        #[serde(rename = "IncludeValue", default)]
        include_value: bool,
    },
    /// Write the property.
    Put {
        /// Property name.
        #[serde(rename = "PropertyName")]
        property_name: String,
        /// Value.
        #[serde(rename = "Value")]
        value: PropertyValue,
        /// Application-defined type tag.
        #[serde(rename = "CustomTypeId", default, skip_serializing_if = "Option::is_none")]
        custom_type_id: Option<String>,
    },
    /// Operation kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<PropertyBatchOperation>),
}

tagged_union!(
    PropertyBatchOperation,
    "Kind",
    ["CheckExists", "CheckSequence", "CheckValue", "Delete", "Get", "Put"]
);

/// Body of `submit_property_batch`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PropertyBatchDescriptionList {
    /// Operations, applied atomically.
    #[serde(default)]
    pub operations: Vec<PropertyBatchOperation>,
}

/// Outcome of a property batch, discriminated by `Kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "Kind")]
pub enum PropertyBatchInfo {
    /// Every operation succeeded; Get results keyed by operation index.
    Successful {
        /// Properties read by Get operations.
        #[serde(rename = "Properties", default)]
        properties: BTreeMap<String, PropertyInfo>,
    },
    /// An operation failed and nothing was applied.
    Failed {
        /// Failure message.
        #[serde(rename = "ErrorMessage", default, skip_serializing_if = "Option::is_none")]
        error_message: Option<String>,
        /// Index of the failing operation.
        #[serde(rename = "OperationIndex", default)]
        operation_index: i32,
    },
    /// Outcome kind added by a newer service version.
    #[serde(untagged)]
    Unrecognized(UnknownVariant<PropertyBatchInfo>),
}

tagged_union!(PropertyBatchInfo, "Kind", ["Successful", "Failed"]);

optional_params! {
    /// Optional parameters of `get_sub_name_info_list`.
    pub struct GetSubNameInfoListOptionalParams {
        /// Include all descendants.
        recursive: bool => "Recursive",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
    }

    /// Optional parameters of `get_property_info_list`.
    pub struct GetPropertyInfoListOptionalParams {
        /// Include values.
        include_values: bool => "IncludeValues",
        /// Continuation token from the previous page.
        continuation_token: String => "ContinuationToken",
    }
}

/// Optional parameters of `create_name`.
pub type CreateNameOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_name_exists_info`.
pub type GetNameExistsInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `delete_name`.
pub type DeleteNameOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `put_property`.
pub type PutPropertyOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `get_property_info`.
pub type GetPropertyInfoOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `delete_property`.
pub type DeletePropertyOptionalParams = TimeoutOptionalParams;
/// Optional parameters of `submit_property_batch`.
pub type SubmitPropertyBatchOptionalParams = TimeoutOptionalParams;

/// Response of `get_sub_name_info_list`.
pub type GetSubNameInfoListResponse = PagedSubNameInfoList;
/// Response of `get_property_info_list`.
pub type GetPropertyInfoListResponse = PagedPropertyInfoList;
/// Response of `get_property_info`.
pub type GetPropertyInfoResponse = PropertyInfo;
/// Response of `submit_property_batch`.
pub type SubmitPropertyBatchResponse = PropertyBatchInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_values_decode_by_kind() {
        let values: Vec<PropertyValue> = serde_json::from_value(json!([
            {"Kind": "Binary", "Data": [0, 255, 7]},
            {"Kind": "Int64", "Data": "9223372036854775807"},
            {"Kind": "Double", "Data": 1.5},
            {"Kind": "String", "Data": "hello"},
            {"Kind": "Guid", "Data": "1daae3f5-7fd6-42e9-b1ba-8c05f873994d"},
            {"Kind": "Decimal", "Data": "1.0"}
        ]))
        .expect("decode");
        assert_eq!(values[0], PropertyValue::Binary { data: vec![0, 255, 7] });
        assert_eq!(values[1].as_i64(), Some(i64::MAX));
        assert_eq!(values[2].kind(), PropertyValueKind::Double);
        assert_eq!(values[5].kind(), PropertyValueKind::Invalid);
        assert_eq!(
            serde_json::to_value(&values[5]).expect("encode"),
            json!({"Kind": "Decimal", "Data": "1.0"})
        );
    }

    #[test]
    fn batch_encodes_operations() {
        let batch = PropertyBatchDescriptionList {
            operations: vec![
                PropertyBatchOperation::CheckExists {
                    property_name: "owner".into(),
                    exists: false,
                },
                PropertyBatchOperation::Put {
                    property_name: "owner".into(),
                    value: PropertyValue::String { data: "ops".into() },
                    custom_type_id: None,
                },
            ],
        };
        assert_eq!(
            serde_json::to_value(&batch).expect("encode"),
            json!({"Operations": [
                {"Kind": "CheckExists", "PropertyName": "owner", "Exists": false},
                {"Kind": "Put", "PropertyName": "owner", "Value": {"Kind": "String", "Data": "ops"}}
            ]})
        );
    }

    #[test]
    fn failed_batch_reports_operation_index() {
        let info: PropertyBatchInfo = serde_json::from_value(json!({
            "Kind": "Failed",
            "ErrorMessage": "FABRIC_E_PROPERTY_CHECK_FAILED",
            "OperationIndex": 1
        }))
        .expect("decode");
        assert!(matches!(info, PropertyBatchInfo::Failed { operation_index: 1, .. }));
    }

    #[test]
    fn property_list_without_values() {
        let page: PagedPropertyInfoList = serde_json::from_value(json!({
            "IsConsistent": true,
            "Properties": [{"Name": "owner", "Metadata": {"TypeId": "String", "SizeInBytes": 6}}]
        }))
        .expect("decode");
        assert!(page.is_consistent);
        assert!(page.properties[0].value.is_none());
        assert_eq!(
            page.properties[0].metadata.type_id,
            Some(PropertyValueKind::String)
        );
    }
}
