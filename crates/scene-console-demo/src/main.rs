use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use scene_console::TimerEvent;
use scene_console_config::ConsoleOptions;
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

mod app;
mod keymap;
mod logger;
mod scheduler;
mod view;

use app::App;
use scheduler::ThreadScheduler;

const FRAME_POLL: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting scene-console-demo, logging to {}", log_file.display());

    let options = ConsoleOptions::load();
    let (scheduler, timer_rx) = ThreadScheduler::new();
    let mut app = App::new(options, scheduler).context("Failed to create console")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &timer_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }

    log::info!("Exiting scene-console-demo");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    timer_rx: &Receiver<TimerEvent>,
) -> Result<()> {
    while app.running {
        // Timers fired since the last frame
        while let Ok(event) = timer_rx.try_recv() {
            app.on_timer(event);
        }

        app.on_frame();
        terminal.draw(|frame| view::render(app, frame))?;

        if event::poll(FRAME_POLL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    if let Some(input) = keymap::translate(key) {
                        app.handle(input);
                    }
                }
            }
        }
    }

    Ok(())
}
