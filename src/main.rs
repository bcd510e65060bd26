use std::process;

mod controllers;
mod models;
mod utils;
mod workflows;

use controllers::application::Application;
use utils::logger::{Logger, LOGGER_NAME};

fn main() {
    // The logger lives for the whole process and is handed to the application explicitly.
    let logger = Logger::from_env(LOGGER_NAME);

    let application = Application::new(None, logger);
    let success = application.run();

    process::exit(exit_code(success));
}

/// Maps the outcome of a run to the process exit status.
fn exit_code(success: bool) -> i32 {
    if success {
        0
    } else {
        1
    }
}
