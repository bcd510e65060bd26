use crate::utils::error::Error;
use crate::utils::logger::Logger;
use crate::workflows::workflow::Stage;

/// Environment validation stage. No requirements are checked yet, so it always succeeds.
pub struct EnvironmentValidator;

impl Stage for EnvironmentValidator {
    fn name(&self) -> &str {
        "validate_environment"
    }

    fn execute(&self, logger: &Logger) -> Result<(), Error> {
        logger.info(format_args!("Environment validation completed"));
        Ok(())
    }
}
