//! Command parsing and execution for the CLI shell.

use std::io::{self, Write};

use fig_core::catalog::Catalog;
use fig_core::events::{apply_event, ViewEvent};
use fig_core::state::ViewState;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A user interaction for the state machine
    Event(ViewEvent),
    List,
    State,
    Help,
    Quit,
    Empty,
}

/// Parse one input line. `Err` carries the message shown to the user.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Empty);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("Too many arguments for '{}'", verb));
    }

    match (verb.to_ascii_lowercase().as_str(), arg) {
        ("select" | "s", Some(id)) => Ok(Command::Event(ViewEvent::select(id))),
        ("select" | "s", None) => Err("Usage: select <option-id>".to_string()),
        ("sub" | "b", Some(index)) => index
            .parse()
            .map(|i| Command::Event(ViewEvent::select_sub(i)))
            .map_err(|_| format!("Not a sub-button index: '{}'", index)),
        ("sub" | "b", None) => Err("Usage: sub <index>".to_string()),
        ("toggle" | "t", None) => Ok(Command::Event(ViewEvent::TogglePanel)),
        ("list" | "ls", None) => Ok(Command::List),
        ("state", None) => Ok(Command::State),
        ("help" | "?", None) => Ok(Command::Help),
        ("quit" | "exit" | "q", None) => Ok(Command::Quit),
        (_, Some(_)) if is_known_verb(verb) => Err(format!("'{}' takes no argument", verb)),
        _ => Err(format!("Unknown command '{}'. Type 'help' for commands.", verb)),
    }
}

fn is_known_verb(verb: &str) -> bool {
    matches!(
        verb.to_ascii_lowercase().as_str(),
        "toggle" | "t" | "list" | "ls" | "state" | "help" | "?" | "quit" | "exit" | "q"
    )
}

const HELP: &str = "\
Commands:
  list             show options and sub-buttons
  select <id>      choose a figure (alias: s)
  sub <index>      click a sub-button, 0 = first (alias: b)
  toggle           expand/collapse the panel (alias: t)
  state            print the current view
  help             this text
  quit             leave";

/// Holds the catalog and view state between commands
pub struct Shell {
    catalog: Catalog,
    view: ViewState,
    json: bool,
    /// Commands that failed to parse or whose event was rejected
    failures: usize,
}

impl Shell {
    pub fn new(catalog: Catalog, json: bool) -> Self {
        Shell {
            catalog,
            view: ViewState::default(),
            json,
            failures: 0,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[allow(dead_code)]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Execute one line. Returns `false` when the shell should stop.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                self.failures += 1;
                writeln!(out, "{}", message)?;
                return Ok(true);
            }
        };

        match command {
            Command::Empty => {}
            Command::Quit => return Ok(false),
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::List => self.print_catalog(out)?,
            Command::State => self.print_state(out)?,
            Command::Event(event) => match apply_event(&self.view, &self.catalog, &event) {
                Ok(next) => {
                    self.view = next;
                    self.print_state(out)?;
                }
                Err(e) => {
                    self.failures += 1;
                    let kind = if e.is_rejected_event() { "Rejected" } else { "Error" };
                    writeln!(out, "{} [{}]: {}", kind, e.error_code(), e)?;
                }
            },
        }
        Ok(true)
    }

    /// Execute every line of a script; `#` starts a comment line
    pub fn run_script(&mut self, script: &str, out: &mut impl Write) -> io::Result<()> {
        for line in script.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            if !line.is_empty() {
                writeln!(out, "> {}", line)?;
            }
            if !self.execute(line, out)? {
                break;
            }
        }
        Ok(())
    }

    fn print_catalog(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Options:")?;
        for option in &self.catalog.options {
            let marker = if self.view.selected_option_id.as_deref() == Some(option.id.as_str()) {
                "*"
            } else {
                " "
            };
            let subs = if option.has_sub_buttons { " (+sub-buttons)" } else { "" };
            writeln!(out, " {} {:<12} {}  {}{}", marker, option.id, option.label, option.resource, subs)?;
        }
        if !self.catalog.sub_buttons.is_empty() {
            writeln!(out, "Sub-buttons:")?;
            for (index, button) in self.catalog.sub_buttons.iter().enumerate() {
                writeln!(out, "   {:<12} {}  {}", index, button.label, button.resource)?;
            }
        }
        Ok(())
    }

    fn print_state(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Display:  {}", self.view.display_source.as_deref().unwrap_or("(nothing)"))?;

        if self.view.button_group_visible {
            let buttons: Vec<String> = self
                .catalog
                .sub_buttons
                .iter()
                .enumerate()
                .map(|(index, button)| {
                    if self.view.is_sub_button_active(index) {
                        format!("[{}]*", button.label)
                    } else {
                        format!("[{}]", button.label)
                    }
                })
                .collect();
            writeln!(out, "Buttons:  {}", buttons.join(" "))?;
        } else {
            writeln!(out, "Buttons:  hidden")?;
        }

        if self.view.panel_expanded {
            writeln!(out, "Panel:    expanded - {}", self.catalog.panel.title)?;
            writeln!(out, "          {}", self.catalog.panel.body)?;
        } else {
            writeln!(out, "Panel:    collapsed")?;
        }

        if self.json {
            let json = serde_json::to_string(&self.view)
                .map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        Ok(())
    }
}
