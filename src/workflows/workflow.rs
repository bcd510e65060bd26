use crate::utils::error::Error;
use crate::utils::logger::Logger;

/// One step of the platform startup sequence.
pub trait Stage {
    fn name(&self) -> &str;

    fn execute(&self, logger: &Logger) -> Result<(), Error>;
}
