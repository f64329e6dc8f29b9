use base58_numeric::{cli, configuration::Configuration};
use std::{
    env,
    io::{self, Write},
    process,
};

fn main() {
    let configuration = match Configuration::new() {
        Ok(configuration) => configuration,
        Err(error) => {
            eprintln!("base58: {}", error);
            process::exit(cli::EXIT_ERR);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut stdout = stdout.lock();
    let status = cli::run(env::args_os(), &configuration, &mut stdin.lock(), &mut stdout, &mut stderr.lock());
    let _ = stdout.flush();
    process::exit(status);
}
