use log::error;

use workout_cli::workout_cli_opts::WorkoutCliOpts;

fn main() {
    env_logger::init();

    match WorkoutCliOpts::process_args() {
        Ok(()) => (),
        Err(e) => {
            if !e.to_string().contains("Broken pipe") {
                error!("{e}");
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
