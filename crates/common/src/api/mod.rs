//! Wire types for the Service Fabric cluster management REST API.
//!
//! Models use the service's PascalCase JSON names (mesh resources use
//! camelCase). Polymorphic resources are tagged enums keyed by the service's
//! discriminator field and decode unknown discriminators into an
//! `Unrecognized` variant holding the raw object ([`UnknownVariant`]). Open
//! string enums come from [`known`].

mod known;

pub use known::{TaggedUnion, UnknownVariant};

pub mod application;
pub mod application_type;
pub mod backup;
pub mod chaos;
pub mod cluster;
pub mod deployed;
pub mod duration;
pub mod error;
pub mod fault;
pub mod filter;
pub mod health;
pub mod image_store;
pub mod mesh;
pub mod naming;
pub mod node;
pub mod paging;
pub mod params;
pub mod partition;
pub mod repair;
pub mod replica;
pub mod safety;
pub mod service;
pub mod upgrade;

pub use duration::{DurationParseError, FabricDuration};
pub use error::{FabricError, FabricErrorCodes, FabricErrorError};
pub use filter::HealthStateFilter;
pub use health::HealthState;
pub use paging::PagedList;
pub use params::{DEFAULT_SERVER_TIMEOUT_SECS, TimeoutOptionalParams};
