use velt::app::{App, AppMessage, NavIntent};
use velt::config::Config;
use velt::nav::View;
use velt::{logging, terminal, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;
    terminal::setup_panic_hook();

    let config = Config::from_env();
    let mut app = App::new(config)?;

    let mut term = terminal::setup()?;
    app.start_load();

    let result = run_app(&mut term, &mut app).await;

    terminal::restore(&mut term)?;
    result
}

async fn run_app(terminal: &mut terminal::Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // First staleness check fires one interval from now, not at startup;
    // the initial load already ran
    let period = app.config.update_interval;
    let mut staleness = tokio::time::interval_at(tokio::time::Instant::now() + period, period);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                let view = app.view_state();
                ui::render(f, &view);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => app.mark_dirty(),
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            handle_key(app, key.code, key.modifiers);
                        }
                        _ => {}
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }

            _ = staleness.tick() => {
                app.tick_staleness();
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.activate_selection(),
        KeyCode::Left | KeyCode::Char('h') => app.handle_intent(NavIntent::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => app.handle_intent(NavIntent::NextPage),
        KeyCode::Char('g') => {
            if app.nav.view != View::Forums {
                app.handle_intent(NavIntent::Home);
            }
        }
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Char('r') => app.handle_intent(NavIntent::Retry),
        KeyCode::Char('s') => app.share_selected_post(),
        KeyCode::Char('Q') => app.quote_selected_post(),
        KeyCode::Char(c @ '1'..='9') => {
            let page = c as usize - '0' as usize;
            app.handle_intent(NavIntent::SetPage(page));
        }
        _ => {}
    }
}
