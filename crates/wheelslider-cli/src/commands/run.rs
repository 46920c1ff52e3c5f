use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use wheelslider_core::AppConfig;
use wheelslider_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event, Action},
    keymap::Keymap,
    scroll::ScrollConfigExt,
    ui,
};

type TerminalBackend = CrosstermBackend<io::Stdout>;

pub fn run(config: AppConfig) -> Result<()> {
    // Validate the slider before touching the terminal
    let mut app = App::new(config)?;
    let keymap = Keymap::from_config(&app.config.keymap);
    let event_handler = EventHandler::with_animation_tick(
        app.config.ui.tick_rate_ms,
        app.config.ui.scroll.animation_tick_duration(),
    );
    info!(value = app.value, steps = app.slider.model().step_count(), "starting wheel");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("WheelSlider"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    info!(value = app.value, settles = app.feedback.count(), "wheel closed");
    println!("{}", app.value);
    Ok(())
}

fn main_loop(
    terminal: &mut Terminal<TerminalBackend>,
    app: &mut App,
    keymap: &Keymap,
    event_handler: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll rate
    let mut needs_fast_update = false;

    loop {
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.handle_action(action);
                }
                AppEvent::Mouse(mouse) => {
                    let action = handle_mouse_event(mouse);
                    if action != Action::None {
                        app.handle_action(action);
                    }
                }
                // The next draw recomputes the track layout
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            return Ok(());
        }
    }
}
