use clap::Parser;

use whittle::{create_app, CliArgs};

fn main() {
    whittle::logger::init_custom_logger();
    let args = CliArgs::parse();
    match create_app(args) {
        Ok(mut app) => {
            app.run();
        }
        Err(err) => {
            eprintln!("failed to start whittle: {err:#}");
            std::process::exit(1);
        }
    }
}
