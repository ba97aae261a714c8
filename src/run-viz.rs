mod viz;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use viz::options::Options;

fn main() -> ExitCode {
    env_logger::init();
    let options = Options::parse();

    match viz::run(&options) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
