use winbind::{Config, cli, logger};

fn main() {
    // Installed first so problems with the config file get reported.
    if let Err(e) = logger::init(logger::LOG_LEVEL_DEFAULT) {
        eprintln!("winbind: {e}");
    }
    let config = Config::load();
    logger::set_log_level(config.log_level_mask);
    if let Err(e) = winbind::init_loader(&config) {
        eprintln!("winbind: {e}");
    }

    let code = cli::run(
        std::env::args().skip(1),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    std::process::exit(code);
}
