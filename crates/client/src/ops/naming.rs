use common::api::naming::*;
use reqwest::StatusCode;

use crate::{ClientError, FabricClient, Result};

/// `fabric:/a/b` and `a/b` both address the name through `/Names/a/b`.
fn name_segments<'a>(name: &'a str, suffix: &[&'a str]) -> Vec<&'a str> {
    let mut segments = vec!["Names"];
    segments.extend(
        name.trim()
            .trim_start_matches("fabric:")
            .split('/')
            .filter(|part| !part.is_empty()),
    );
    segments.extend_from_slice(suffix);
    segments
}

impl FabricClient {
    pub async fn create_name(
        &self,
        description: &NameDescription,
        params: &CreateNameOptionalParams,
    ) -> Result<()> {
        let req = self
            .post(&["Names", "$", "Create"], "6.0", params)
            .json(description);
        self.send_empty("create_name", req).await
    }

    /// Whether the name exists. A missing name is `Ok(false)`, not an error.
    pub async fn get_name_exists_info(
        &self,
        name: &str,
        params: &GetNameExistsInfoOptionalParams,
    ) -> Result<bool> {
        let req = self.get(&name_segments(name, &[]), "6.0", params);
        match self.send_empty("get_name_exists_info", req).await {
            Ok(()) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Fails if the name still has properties or sub-names.
    pub async fn delete_name(&self, name: &str, params: &DeleteNameOptionalParams) -> Result<()> {
        let req = self.delete(&name_segments(name, &[]), "6.0", params);
        self.send_empty("delete_name", req).await
    }

    pub async fn get_sub_name_info_list(
        &self,
        name: &str,
        params: &GetSubNameInfoListOptionalParams,
    ) -> Result<GetSubNameInfoListResponse> {
        let req = self.get(&name_segments(name, &["$", "GetSubNames"]), "6.0", params);
        self.send_json("get_sub_name_info_list", req).await
    }

    pub async fn get_property_info_list(
        &self,
        name: &str,
        params: &GetPropertyInfoListOptionalParams,
    ) -> Result<GetPropertyInfoListResponse> {
        let req = self.get(&name_segments(name, &["$", "GetProperties"]), "6.0", params);
        self.send_json("get_property_info_list", req).await
    }

    /// Creates or overwrites a property.
    pub async fn put_property(
        &self,
        name: &str,
        property: &PropertyDescription,
        params: &PutPropertyOptionalParams,
    ) -> Result<()> {
        let req = self
            .put(&name_segments(name, &["$", "GetProperty"]), "6.0", params)
            .json(property);
        self.send_empty("put_property", req).await
    }

    pub async fn get_property_info(
        &self,
        name: &str,
        property_name: &str,
        params: &GetPropertyInfoOptionalParams,
    ) -> Result<Option<GetPropertyInfoResponse>> {
        let req = self
            .get(&name_segments(name, &["$", "GetProperty"]), "6.0", params)
            .query(&[("PropertyName", property_name)]);
        match self.send_optional_json("get_property_info", req).await {
            Err(err) if err.is_not_found() => Ok(None),
            other => other,
        }
    }

    pub async fn delete_property(
        &self,
        name: &str,
        property_name: &str,
        params: &DeletePropertyOptionalParams,
    ) -> Result<()> {
        let req = self
            .delete(&name_segments(name, &["$", "GetProperty"]), "6.0", params)
            .query(&[("PropertyName", property_name)]);
        self.send_empty("delete_property", req).await
    }

    /// Applies the operations atomically. A batch rejected by one of its
    /// checks comes back as [`PropertyBatchInfo::Failed`] rather than an
    /// error.
    pub async fn submit_property_batch(
        &self,
        name: &str,
        batch: &PropertyBatchDescriptionList,
        params: &SubmitPropertyBatchOptionalParams,
    ) -> Result<SubmitPropertyBatchResponse> {
        let segments = name_segments(name, &["$", "GetProperties", "$", "SubmitBatch"]);
        let req = self.post(&segments, "6.0", params).json(batch);
        match self.send_json("submit_property_batch", req).await {
            Err(ClientError::Status { status, body }) if status == StatusCode::CONFLICT => {
                crate::decode("submit_property_batch", body.as_bytes())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_keep_their_hierarchy() {
        assert_eq!(
            name_segments("fabric:/samples/apps", &[]),
            ["Names", "samples", "apps"]
        );
        assert_eq!(
            name_segments("samples/apps", &["$", "GetSubNames"]),
            ["Names", "samples", "apps", "$", "GetSubNames"]
        );
    }
}
