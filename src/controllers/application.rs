use serde_json::{Map, Value};

use crate::utils::error::Error;
use crate::utils::logger::Logger;
use crate::workflows::environment::EnvironmentValidator;
use crate::workflows::template_loader::TemplateLoader;
use crate::workflows::workflow::Stage;

pub const VERSION: &str = "1.0.0";

/// Free-form configuration mapping handed to the application at construction.
pub type Config = Map<String, Value>;

/// Top-level run orchestration for the vSAN 8 learning platform.
pub struct Application {
    config: Config,
    version: &'static str,
    logger: Logger,
    stages: Vec<Box<dyn Stage>>,
}

impl Application {
    /// Constructs the application with the default stages: template loading from the well-known
    /// path followed by environment validation.
    ///
    /// # Arguments:
    /// - `config` - Optional configuration. `None` is the same as an empty mapping.
    /// - `logger` - Handle every stage logs through.
    pub fn new(config: Option<Config>, logger: Logger) -> Self {
        Application::with_stages(
            config,
            logger,
            vec![
                Box::new(TemplateLoader::default()),
                Box::new(EnvironmentValidator),
            ],
        )
    }

    /// Constructs the application with an explicit, ordered list of stages.
    pub fn with_stages(config: Option<Config>, logger: Logger, stages: Vec<Box<dyn Stage>>) -> Self {
        let application = Application {
            config: config.unwrap_or_default(),
            version: VERSION,
            logger,
            stages,
        };

        application.logger.info(format_args!(
            "Initializing vSAN 8 Learning Platform v{}",
            application.version
        ));

        application
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[allow(dead_code)]
    pub fn version(&self) -> &str {
        self.version
    }

    /// Runs every stage in order. Returns `true` if all of them succeeded; the first failure is
    /// logged at error level and turns the whole run into `false`.
    pub fn run(&self) -> bool {
        self.logger.info(format_args!("Starting vSAN 8 Learning Platform"));

        match self.run_stages() {
            Ok(()) => {
                self.logger.info(format_args!("Application started successfully"));
                true
            }
            Err(err) => {
                self.logger.error(format_args!("Application failed to start: {}", err));
                false
            }
        }
    }

    fn run_stages(&self) -> Result<(), Error> {
        for stage in &self.stages {
            self.logger.debug(format_args!("running stage {}", stage.name()));
            stage.execute(&self.logger)?;
        }

        Ok(())
    }
}
