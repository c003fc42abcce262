use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use quickreply::app::App;
use quickreply::cli::Args;
use quickreply::config::{self, Config};
use quickreply::inbox::SentMessage;
use quickreply::suggestions::match_templates;
use quickreply::templates::{Template, template_storage};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    quickreply::logging::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::load_config()?,
    };
    if args.no_mentions {
        config.composer.mentions = false;
    }

    let templates = match &args.templates {
        Some(path) => template_storage::load_templates_from_path(path)?,
        None => template_storage::load_templates()?,
    };
    log::debug!("Loaded {} template(s)", templates.len());

    if args.list_templates {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    if let Some(query) = &args.match_query {
        print_matches(query, &templates);
        return Ok(());
    }

    let messages = run_interactive(templates, &config)?;
    if !messages.is_empty() {
        println!("{}", serde_json::to_string_pretty(&messages)?);
    }

    Ok(())
}

fn print_matches(query: &str, templates: &[Template]) {
    if let Some(suggestions) = match_templates(&query.to_lowercase(), templates) {
        for template in suggestions.candidates() {
            println!("{}", template.name);
        }
    }
}

fn run_interactive(templates: Vec<Template>, config: &Config) -> Result<Vec<SentMessage>> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(templates, config);
    let result = run(terminal, &mut app);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;
    Ok(app.conversation.messages().to_vec())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_event(event::read()?);

        // Suggestions are recomputed once the event is fully handled,
        // before the next frame
        app.run_deferred();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
