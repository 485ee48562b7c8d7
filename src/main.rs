use sightless_chess::session::config::SessionConfig;
use sightless_chess::session::console::run_stdio_loop;

fn main() -> std::io::Result<()> {
    let config = match SessionConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            println!("info string config error: {err}; using defaults");
            SessionConfig::default()
        }
    };

    run_stdio_loop(config)
}
