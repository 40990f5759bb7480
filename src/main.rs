use textan::app::App;
use textan::engine::config::Config;
use textan::engine::error::AppError;
use textan::input;
use textan::ui::{Theme, TuiManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    let theme = Theme::from_config(&config.theme);
    let mut app = App::with_config(config);

    // Optional report file to start the wizard with
    if let Some(path) = std::env::args().nth(1) {
        let report = input::load_report(&path).map_err(AppError::from)?;
        app.set_report(report);
    }

    let mut tui = TuiManager::new(theme).map_err(AppError::from)?;
    tui.run_event_loop(&mut app).map_err(AppError::from)?;

    Ok(())
}
