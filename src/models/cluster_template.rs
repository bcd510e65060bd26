use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

use crate::utils::error::Error;

/// A vSAN cluster configuration template as read from disk.
///
/// Only `clusterConfiguration.name` is interpreted; every other key is kept as-is.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(transparent)]
pub struct ClusterTemplate(Map<String, Value>);

impl ClusterTemplate {
    /// Parses a template from a reader. The root must be a JSON object.
    pub fn from_reader<R: Read>(reader: R) -> Result<ClusterTemplate, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Display name from `clusterConfiguration.name`. Strings are returned bare, any other
    /// JSON value in its JSON text form.
    pub fn name(&self) -> Result<String, Error> {
        let name = self
            .0
            .get("clusterConfiguration")
            .and_then(|cluster_configuration| cluster_configuration.get("name"))
            .ok_or_else(|| Error::MissingFieldError("clusterConfiguration.name".to_owned()))?;

        Ok(match name {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        })
    }
}
