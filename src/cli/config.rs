//! Settings for the performance harness.
//!
//! Values are read from the process environment (after an optional `.env`
//! file has been loaded by `main`) and can then be overridden by command
//! line flags.
//!
//! - QUICKBASE_BENCH_RECORDS: records to insert (100000)
//! - QUICKBASE_BENCH_DELETES: ids to delete from id 0 (10000)
//! - QUICKBASE_BENCH_MODULUS: values cycle through `0..modulus` (500)
//! - QUICKBASE_BENCH_PROBE: the value searched for (123)

use std::{fmt::Display, str::FromStr};

use crate::cli::parsers::BenchArgs;

pub const RECORDS_VAR: &str = "QUICKBASE_BENCH_RECORDS";
pub const DELETES_VAR: &str = "QUICKBASE_BENCH_DELETES";
pub const MODULUS_VAR: &str = "QUICKBASE_BENCH_MODULUS";
pub const PROBE_VAR: &str = "QUICKBASE_BENCH_PROBE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub records: u32,
    pub deletes: u32,
    pub modulus: u64,
    pub probe: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            records: 100_000,
            deletes: 10_000,
            modulus: 500,
            probe: 123,
        }
    }
}

pub(crate) fn parse_setting<T>(name: &str, raw: Option<&str>, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|error| format!("invalid setting {}='{}': {}", name, raw, error)),
    }
}

fn _read_var<T>(name: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match dotenvy::var(name) {
        Ok(raw) => parse_setting(name, Some(&raw), default),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default),
        Err(error) => Err(format!("unreadable setting {}: {}", name, error)),
    }
}

impl BenchConfig {
    pub fn from_env() -> Result<BenchConfig, String> {
        //! Build a config from the `QUICKBASE_BENCH_*` variables, falling
        //! back to the defaults for any that are unset.
        //!
        //! The result is not validated yet; command line flags may still
        //! replace any of the values.

        let defaults = BenchConfig::default();

        Ok(BenchConfig {
            records: _read_var(RECORDS_VAR, defaults.records)?,
            deletes: _read_var(DELETES_VAR, defaults.deletes)?,
            modulus: _read_var(MODULUS_VAR, defaults.modulus)?,
            probe: _read_var(PROBE_VAR, defaults.probe)?,
        })
    }

    pub fn with_overrides(self, args: &BenchArgs) -> Result<BenchConfig, String> {
        //! Apply the command line flags on top of this config, then
        //! validate the merged result.

        let config = BenchConfig {
            records: args.records.unwrap_or(self.records),
            deletes: args.deletes.unwrap_or(self.deletes),
            modulus: args.modulus.unwrap_or(self.modulus),
            probe: args.probe.unwrap_or(self.probe),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.modulus == 0 {
            return Err(format!("invalid setting {}: must be at least 1", MODULUS_VAR));
        }

        Ok(())
    }
}
