use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::models::cluster_template::ClusterTemplate;
use crate::utils::error::Error;
use crate::utils::logger::Logger;
use crate::workflows::workflow::Stage;

/// Location of the cluster template, relative to the working directory.
pub const TEMPLATE_PATH: &str = "templates/vsan-cluster-template.json";

pub struct TemplateLoader {
    path: PathBuf,
}

impl Default for TemplateLoader {
    fn default() -> Self {
        TemplateLoader::new(TEMPLATE_PATH)
    }
}

impl TemplateLoader {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        TemplateLoader { path: path.into() }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the cluster template if present.
    ///
    /// A missing file is not an error: a warning is logged and `None` returned. A file that
    /// exists but can't be read, parsed, or lacks `clusterConfiguration.name` is an `Error`.
    pub fn load(&self, logger: &Logger) -> Result<Option<ClusterTemplate>, Error> {
        if !self.path.exists() {
            logger.warn(format_args!("Template file not found"));
            return Ok(None);
        }

        logger.debug(format_args!("reading template {:?}", self.path));
        let file = File::open(&self.path)?;
        let template = ClusterTemplate::from_reader(BufReader::new(file))?;

        let name = template.name()?;
        logger.info(format_args!("Loaded template: {}", name));

        Ok(Some(template))
    }
}

impl Stage for TemplateLoader {
    fn name(&self) -> &str {
        "load_templates"
    }

    fn execute(&self, logger: &Logger) -> Result<(), Error> {
        self.load(logger).map(|_| ())
    }
}
