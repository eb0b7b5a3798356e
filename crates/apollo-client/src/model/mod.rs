//! CMDB data model.
//!
//! - [`Resource`]: a typed record with attributes and relations
//! - [`OpsGroup`], [`View`], [`OpsUser`]: operational group snapshots
//! - [`AggRes`], [`AggResLeftJoin`]: aggregation trees and forests
//! - [`consts`]: well-known attribute values

pub mod aggregate;
pub mod consts;
pub mod ops_group;
pub mod resource;

pub use aggregate::{AggRes, AggResLeftJoin, AggResLeftJoinItem};
pub use ops_group::{OpsGroup, OpsUser, View};
pub use resource::{Attr, AttrBase, Rel, Resource, ResourceType};
