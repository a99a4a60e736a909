//! REST operations, one file per entity family.
//!
//! Paths follow the cluster's `/<Collection>/<id>/$/<Verb>` layout. Each
//! method pins the `api-version` the operation was introduced with.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;

use crate::FabricClient;

mod application;
mod application_type;
mod backup;
mod chaos;
mod cluster;
mod deployed;
mod fault;
mod image_store;
mod mesh;
mod naming;
mod node;
mod partition;
mod repair;
mod replica;
mod service;

pub use deployed::CodePackageRef;

impl FabricClient {
    pub(crate) fn get<Q>(&self, segments: &[&str], api_version: &str, params: &Q) -> RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, segments, api_version, params)
    }

    pub(crate) fn post<Q>(&self, segments: &[&str], api_version: &str, params: &Q) -> RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        self.request(Method::POST, segments, api_version, params)
    }

    pub(crate) fn put<Q>(&self, segments: &[&str], api_version: &str, params: &Q) -> RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        self.request(Method::PUT, segments, api_version, params)
    }

    pub(crate) fn delete<Q>(&self, segments: &[&str], api_version: &str, params: &Q) -> RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        self.request(Method::DELETE, segments, api_version, params)
    }
}
