pub mod environment;
pub mod template_loader;
pub mod workflow;
