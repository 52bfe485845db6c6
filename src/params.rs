use std::{fs::File, io::Read, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_UNSEEN_PENALTY: f64 = -100.0;

/// Decoding parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Log-space emission term used for a (tag, word) pair never observed in training.
    pub unseen_penalty: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self { unseen_penalty: DEFAULT_UNSEEN_PENALTY }
    }
}

impl Params {
    /// Overrides a single parameter from its textual `name=value` form.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let invalid = || Error::InvalidParameter { name: name.to_string(), value: value.to_string() };
        match name {
            "unseen_penalty" => {
                let v: f64 = value.trim().parse().map_err(|_| invalid())?;
                if v.is_nan() {
                    return Err(invalid());
                }
                self.unseen_penalty = v;
            }
            _ => return Err(invalid()),
        }
        log::debug!("set {name}={value}");
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::info!("reading parameters from {:?}", path.as_ref());
        Self::from_reader(File::open(path)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
