//! The interactive editor.
//!
//! A single prompt loop: read one command line, apply it to the gradient
//! document or the saved-gradient library, reprint the panel. Parsing is
//! split from execution so commands can be tested without a terminal.

use std::fmt;
use std::io::{self, BufRead, Write};

use iris_core::{Gradient, Preset, StopUpdate, direction_from_angle};
use iris_store::{GradientLibrary, KeyValueStore, SessionPrefs};

use crate::render;
use crate::theme::{self, Theme};
use crate::tour;

const HELP: &str = "\
  show                 reprint the panel
  add                  add a color stop
  rm <id>              remove a stop (two always remain)
  color <id> <color>   set a stop's color
  move <id> <pos>      set a stop's position (0..100)
  alpha <id> <a>       set a stop's opacity (0..1)
  dir <direction>      set the direction verbatim, e.g. `dir to top left`
  angle <degrees>      set the direction from an angle, e.g. `angle 135`
  presets              list the compass presets
  css | tw             print the derived output
  copy css|tw          copy derived output to the clipboard
  save <name>          save the current gradient
  list                 list saved gradients
  load <id>            load a saved gradient
  delete <id>          delete a saved gradient
  theme [id]           show or switch the theme
  tour                 replay the tour
  reset                back to the default gradient
  quit                 leave
";

/// A parsed editor command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Add,
    Remove { id: String },
    Color { id: String, value: String },
    Move { id: String, position: f64 },
    Alpha { id: String, opacity: f64 },
    Direction { value: String },
    Angle { degrees: i32 },
    Presets,
    Css,
    Tailwind,
    Copy { target: CopyTarget },
    Save { name: String },
    List,
    Load { id: String },
    Delete { id: String },
    Theme { id: Option<String> },
    Tour,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Css,
    Tailwind,
}

/// A rejected command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandError {
    pub message: String,
}

impl CommandError {
    fn new(msg: impl Into<String>) -> Self {
        Self { message: msg.into() }
    }

    fn usage(usage: &str) -> Self {
        Self::new(format!("usage: {usage}"))
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandError {}

impl Command {
    /// Parses one command line.
    ///
    /// The keyword is case-insensitive. `dir` and `save` swallow the rest
    /// of the line (directions and names contain spaces); everything else
    /// takes whitespace-separated tokens.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let trimmed = line.trim();
        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };
        match keyword.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::new("empty command")),
            "show" => Ok(Command::Show),
            "add" => Ok(Command::Add),
            "rm" | "remove" => Ok(Command::Remove { id: one_token("rm <id>", rest)? }),
            "color" => {
                let (id, value) = id_and_rest("color <id> <color>", rest)?;
                Ok(Command::Color { id, value })
            }
            "move" => {
                let (id, value) = id_and_rest("move <id> <position>", rest)?;
                Ok(Command::Move { id, position: number(&value)? })
            }
            "alpha" => {
                let (id, value) = id_and_rest("alpha <id> <opacity>", rest)?;
                Ok(Command::Alpha { id, opacity: number(&value)? })
            }
            "dir" => {
                if rest.is_empty() {
                    return Err(CommandError::usage("dir <direction>"));
                }
                Ok(Command::Direction { value: rest.to_string() })
            }
            "angle" => {
                let token = one_token("angle <degrees>", rest)?;
                let degrees = token
                    .parse()
                    .map_err(|_| CommandError::new(format!("`{token}` is not a whole number")))?;
                Ok(Command::Angle { degrees })
            }
            "presets" => Ok(Command::Presets),
            "css" => Ok(Command::Css),
            "tw" | "tailwind" => Ok(Command::Tailwind),
            "copy" => match one_token("copy css|tw", rest)?.as_str() {
                "css" => Ok(Command::Copy { target: CopyTarget::Css }),
                "tw" | "tailwind" => Ok(Command::Copy { target: CopyTarget::Tailwind }),
                _ => Err(CommandError::usage("copy css|tw")),
            },
            "save" => {
                if rest.is_empty() {
                    return Err(CommandError::usage("save <name>"));
                }
                Ok(Command::Save { name: rest.to_string() })
            }
            "list" => Ok(Command::List),
            "load" => Ok(Command::Load { id: one_token("load <id>", rest)? }),
            "delete" => Ok(Command::Delete { id: one_token("delete <id>", rest)? }),
            "theme" => {
                if rest.is_empty() {
                    Ok(Command::Theme { id: None })
                } else {
                    Ok(Command::Theme { id: Some(one_token("theme [id]", rest)?) })
                }
            }
            "tour" => Ok(Command::Tour),
            "reset" => Ok(Command::Reset),
            "help" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::new(format!("unknown command `{other}`"))),
        }
    }
}

fn one_token(usage: &str, rest: &str) -> Result<String, CommandError> {
    let mut tokens = rest.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Ok(token.to_string()),
        _ => Err(CommandError::usage(usage)),
    }
}

fn id_and_rest(usage: &str, rest: &str) -> Result<(String, String), CommandError> {
    let Some((id, value)) = rest.split_once(char::is_whitespace) else {
        return Err(CommandError::usage(usage));
    };
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::usage(usage));
    }
    Ok((id.to_string(), value.to_string()))
}

fn number(token: &str) -> Result<f64, CommandError> {
    token.parse().map_err(|_| CommandError::new(format!("`{token}` is not a number")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Editor session state: the live document plus everything around it.
pub struct Editor<S> {
    gradient: Gradient,
    library: GradientLibrary<S>,
    prefs: SessionPrefs<S>,
    theme: &'static Theme,
    color: bool,
}

impl<S: KeyValueStore> Editor<S> {
    pub fn new(
        library: GradientLibrary<S>,
        prefs: SessionPrefs<S>,
        theme: &'static Theme,
        color: bool,
    ) -> Self {
        Self { gradient: Gradient::default(), library, prefs, theme, color }
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// The first session ever (no tour flag stored) starts with the tour.
    pub fn run(&mut self, input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
        if !self.prefs.tour_seen() {
            tour::run(input, output)?;
            self.prefs.mark_tour_seen();
        }
        self.print_panel(output)?;
        loop {
            write!(output, "iris> ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(command) => {
                    if self.execute(command, input, output)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(output, "  {err} (try `help`)")?,
            }
        }
        Ok(())
    }

    fn execute(
        &mut self,
        command: Command,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> io::Result<Flow> {
        match command {
            Command::Show => self.print_panel(output)?,
            Command::Add => {
                let id = self.gradient.add_stop();
                writeln!(output, "  added stop {id}")?;
                self.print_panel(output)?;
            }
            Command::Remove { id } => {
                if self.gradient.remove_stop(&id) {
                    self.print_panel(output)?;
                } else if self.gradient.stops().len() <= 2 {
                    writeln!(output, "  a gradient keeps at least two stops")?;
                } else {
                    writeln!(output, "  no stop {id}")?;
                }
            }
            Command::Color { id, value } => {
                self.update(&id, StopUpdate::color(value), output)?;
            }
            Command::Move { id, position } => {
                self.update(&id, StopUpdate::position(position), output)?;
            }
            Command::Alpha { id, opacity } => {
                self.update(&id, StopUpdate::opacity(opacity), output)?;
            }
            Command::Direction { value } => {
                self.gradient.set_direction(value);
                self.print_panel(output)?;
            }
            Command::Angle { degrees } => {
                self.gradient.set_direction(direction_from_angle(degrees));
                self.print_panel(output)?;
            }
            Command::Presets => {
                for preset in Preset::ALL {
                    writeln!(
                        output,
                        "  {:<16} {:>4}°   {}",
                        preset.css(),
                        preset.angle(),
                        preset.utility_class()
                    )?;
                }
            }
            Command::Css => writeln!(output, "  {}", self.gradient.to_css())?,
            Command::Tailwind => writeln!(output, "  {}", self.gradient.to_tailwind())?,
            Command::Copy { target } => {
                let text = match target {
                    CopyTarget::Css => self.gradient.to_css(),
                    CopyTarget::Tailwind => self.gradient.to_tailwind(),
                };
                if copy_to_clipboard(&text) {
                    writeln!(output, "  copied to clipboard")?;
                } else {
                    writeln!(output, "  clipboard unavailable; copy it from here:")?;
                    writeln!(output, "  {text}")?;
                }
            }
            Command::Save { name } => {
                let config = self.library.save(&name, &self.gradient);
                writeln!(output, "  saved {:?} as {}", config.name, config.id)?;
            }
            Command::List => {
                let collection = self.library.all();
                if collection.is_empty() {
                    writeln!(output, "  no saved gradients yet; `save <name>` adds one")?;
                }
                for config in collection.configs() {
                    writeln!(
                        output,
                        "  {}  {}  {:<20} {}",
                        config.id,
                        config.created_at.format("%Y-%m-%d %H:%M"),
                        config.name,
                        config.direction
                    )?;
                }
            }
            Command::Load { id } => match self.library.get(&id) {
                Some(config) => {
                    config.apply_to(&mut self.gradient);
                    writeln!(output, "  loaded {:?}", config.name)?;
                    self.print_panel(output)?;
                }
                None => writeln!(output, "  no saved gradient {id}")?,
            },
            Command::Delete { id } => {
                if self.library.delete(&id) {
                    writeln!(output, "  deleted {id}")?;
                } else {
                    writeln!(output, "  no saved gradient {id}")?;
                }
            }
            Command::Theme { id: None } => {
                for entry in &theme::THEMES {
                    let marker = if entry.id == self.theme.id { "*" } else { " " };
                    let tone = if entry.is_dark() { "dark" } else { "light" };
                    writeln!(output, "  {marker} {:<12} {:<14} {tone}", entry.id, entry.name)?;
                }
                write!(output, "{}", render::theme_card(self.theme, self.color))?;
            }
            Command::Theme { id: Some(id) } => match theme::find(&id) {
                Some(theme) => {
                    self.theme = theme;
                    self.prefs.set_theme(theme.id);
                    writeln!(output, "  theme set to {}", theme.name)?;
                    self.print_panel(output)?;
                }
                None => writeln!(output, "  no theme {id}; `theme` lists them")?,
            },
            Command::Tour => {
                tour::run(input, output)?;
                self.prefs.mark_tour_seen();
            }
            Command::Reset => {
                self.gradient.reset();
                self.print_panel(output)?;
            }
            Command::Help => write!(output, "{HELP}")?,
            Command::Quit => {
                writeln!(output, "  bye")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self, id: &str, update: StopUpdate, output: &mut dyn Write) -> io::Result<()> {
        if self.gradient.update_stop(id, update) {
            self.print_panel(output)
        } else {
            writeln!(output, "  no stop {id}")
        }
    }

    fn print_panel(&self, output: &mut dyn Write) -> io::Result<()> {
        write!(output, "{}", render::panel(&self.gradient, self.theme, self.color))
    }
}

fn copy_to_clipboard(text: &str) -> bool {
    if let Ok(mut cb) = arboard::Clipboard::new() {
        return cb.set_text(text.to_string()).is_ok();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use iris_store::MemoryStore;

    fn editor() -> Editor<MemoryStore> {
        let library = GradientLibrary::new(MemoryStore::new());
        let mut prefs = SessionPrefs::new(MemoryStore::new());
        prefs.mark_tour_seen();
        Editor::new(library, prefs, theme::default_theme(), false)
    }

    fn run_session(editor: &mut Editor<MemoryStore>, script: &str) -> String {
        let mut input = io::Cursor::new(script.to_string());
        let mut output = Vec::new();
        editor.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn keywords_parse_case_insensitively() {
        assert_eq!(Command::parse("ADD").unwrap(), Command::Add);
        assert_eq!(Command::parse("  show  ").unwrap(), Command::Show);
    }

    #[test]
    fn dir_takes_the_rest_of_the_line() {
        assert_eq!(
            Command::parse("dir to bottom left").unwrap(),
            Command::Direction { value: "to bottom left".to_string() }
        );
    }

    #[test]
    fn save_keeps_spaces_in_the_name() {
        assert_eq!(
            Command::parse("save my warm sunset").unwrap(),
            Command::Save { name: "my warm sunset".to_string() }
        );
    }

    #[test]
    fn move_wants_an_id_and_a_number() {
        assert_eq!(
            Command::parse("move 17 42.5").unwrap(),
            Command::Move { id: "17".to_string(), position: 42.5 }
        );
        assert!(Command::parse("move 17").is_err());
        assert!(Command::parse("move 17 up").is_err());
    }

    #[test]
    fn copy_accepts_both_targets() {
        assert_eq!(Command::parse("copy css").unwrap(), Command::Copy { target: CopyTarget::Css });
        assert_eq!(
            Command::parse("copy tw").unwrap(),
            Command::Copy { target: CopyTarget::Tailwind }
        );
        assert!(Command::parse("copy svg").is_err());
    }

    #[test]
    fn unknown_commands_are_rejected_by_name() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn rm_requires_exactly_one_id() {
        assert!(Command::parse("rm").is_err());
        assert!(Command::parse("rm a b").is_err());
    }

    // ── sessions ──────────────────────────────────────────────────────────

    #[test]
    fn a_scripted_session_edits_and_quits() {
        let mut editor = editor();
        let out = run_session(&mut editor, "angle 135\ncolor 1 #8b5cf6\ncss\nquit\n");
        assert!(out.contains("Preview · 135deg · 135°"));
        assert!(out.contains("linear-gradient(135deg, rgba(139,92,246,1) 0%"));
        assert!(out.contains("  bye\n"));
    }

    #[test]
    fn bad_input_reports_and_continues() {
        let mut editor = editor();
        let out = run_session(&mut editor, "move one two\nnope\nquit\n");
        assert!(out.contains("`two` is not a number"));
        assert!(out.contains("unknown command `nope`"));
        assert!(out.contains("  bye\n"));
    }

    #[test]
    fn remove_at_the_floor_explains_itself() {
        let mut editor = editor();
        let out = run_session(&mut editor, "rm 1\nquit\n");
        assert!(out.contains("at least two stops"));
    }

    #[test]
    fn save_list_load_round_trip() {
        let mut editor = editor();
        let out = run_session(&mut editor, "dir to top\nsave skyline\nlist\nquit\n");
        assert!(out.contains("saved \"skyline\""));
        assert!(out.contains("skyline"));
        assert!(out.contains("to top"));

        // The id printed by `list` can drive `load` in a later session.
        // Minted ids are the only long all-digit tokens in the output.
        let listing = run_session(&mut editor, "list\nquit\n");
        let id = listing
            .split_whitespace()
            .find(|t| t.len() >= 12 && t.chars().all(|c| c.is_ascii_digit()))
            .unwrap()
            .to_string();
        let out = run_session(&mut editor, &format!("reset\nload {id}\nquit\n"));
        assert!(out.contains("loaded \"skyline\""));
        assert!(out.contains("Preview · to top"));
    }

    #[test]
    fn theme_switch_announces_and_lists_mark_current() {
        let mut editor = editor();
        let out = run_session(&mut editor, "theme ocean\ntheme\nquit\n");
        assert!(out.contains("theme set to Ocean Breeze"));
        assert!(out.contains("* ocean"));
    }

    #[test]
    fn first_session_runs_the_tour_exactly_once() {
        let library = GradientLibrary::new(MemoryStore::new());
        let prefs = SessionPrefs::new(MemoryStore::new());
        let mut editor = Editor::new(library, prefs, theme::default_theme(), false);
        let out = run_session(&mut editor, "s\nquit\n");
        assert!(out.contains("[1/6]"));
        let out = run_session(&mut editor, "quit\n");
        assert!(!out.contains("[1/6]"));
    }

    #[test]
    fn copy_always_mentions_the_clipboard() {
        // Headless environments have no clipboard; both branches name it.
        let mut editor = editor();
        let out = run_session(&mut editor, "copy css\nquit\n");
        assert!(out.contains("clipboard"));
    }

    #[test]
    fn eof_ends_the_session_cleanly() {
        let mut editor = editor();
        let out = run_session(&mut editor, "add\n");
        assert!(out.contains("added stop"));
    }
}
