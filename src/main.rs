use crossterm::tty::IsTty;

use mazerun::{app::App, config::Config, logging};

fn main() -> std::io::Result<()> {
    let mut config = Config::from_env();
    // Keep escape codes out of pipes and files
    config.colored &= std::io::stdout().is_tty();

    let _log_guard = logging::init(&config)?;
    tracing::info!("Starting with {:?}", config);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();
    let mut app = App::new(stdin, stdout, &config);
    app.run()
}
