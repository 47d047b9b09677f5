//! The UI loop.
//!
//! `App` owns the three screens and the current tab. `run` multiplexes user input and
//! fetch outcomes with crossbeam `select!`; all screen state is touched only from this
//! loop, never from the fetch workers.
use std::io::Write;

use crossbeam_channel::{Receiver, select};
use log::{debug, info};
use quote_common::{QuoteError, Result};

use crate::input::{HELP, UiEvent, UserCommand};
use crate::media::PERMISSION_DENIED_ALERT;
use crate::navigation::Tab;
use crate::provider::FetchOutcome;
use crate::screen::Screen;
use crate::screen::diary::DiaryScreen;
use crate::screen::home::HomeScreen;
use crate::screen::profile::ProfileScreen;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    tab: Tab,
    home: HomeScreen,
    diary: DiaryScreen,
    profile: ProfileScreen,
}

impl App {
    pub fn new(home: HomeScreen, diary: DiaryScreen, profile: ProfileScreen) -> Self {
        Self {
            tab: Tab::default(),
            home,
            diary,
            profile,
        }
    }

    /// Mounts the initial tab and draws it.
    pub fn start<W: Write>(&mut self, out: &mut W) -> Result<()> {
        self.navigate(Tab::default(), out)
    }

    /// Runs until the user quits, stdin closes or Ctrl+C arrives.
    pub fn run<W: Write>(
        &mut self,
        events: Receiver<UiEvent>,
        outcomes: Receiver<FetchOutcome>,
        out: &mut W,
    ) -> Result<()> {
        self.start(out)?;
        loop {
            select! {
                recv(events) -> event => match event {
                    Ok(UiEvent::Input(line)) => match line.parse::<UserCommand>() {
                        Ok(command) => {
                            if self.handle_command(command, out)? == Flow::Quit {
                                break;
                            }
                        }
                        Err(e) => {
                            writeln!(out, "{}", e)?;
                            writeln!(out, "{}", HELP)?;
                        }
                    },
                    Ok(UiEvent::InputClosed) => {
                        info!("Input closed, exiting");
                        break;
                    }
                    Ok(UiEvent::Shutdown) => {
                        info!("Shutting down client...");
                        break;
                    }
                    Err(e) => return Err(QuoteError::ChannelRecv(e.to_string())),
                },
                recv(outcomes) -> outcome => match outcome {
                    Ok(outcome) => self.handle_outcome(outcome, out)?,
                    Err(e) => return Err(QuoteError::ChannelRecv(e.to_string())),
                },
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Applies one user command and redraws what changed.
    pub fn handle_command<W: Write>(&mut self, command: UserCommand, out: &mut W) -> Result<Flow> {
        match command {
            UserCommand::Quit => return Ok(Flow::Quit),
            UserCommand::Help => writeln!(out, "{}", HELP)?,
            UserCommand::Navigate(tab) => self.navigate(tab, out)?,
            UserCommand::NextQuote => {
                if self.tab == Tab::Home && self.home.has_control() {
                    self.home.request_another();
                } else {
                    debug!("No quote control on screen, ignoring request");
                }
            }
            UserCommand::Today(text) => {
                self.diary.set_today(&text);
                self.redraw_if(Tab::Diary, out)?;
            }
            UserCommand::Happiness(rating) => {
                self.diary.set_happiness(rating);
                self.redraw_if(Tab::Diary, out)?;
            }
            UserCommand::Productivity(rating) => {
                self.diary.set_productivity(rating);
                self.redraw_if(Tab::Diary, out)?;
            }
            UserCommand::SetProfile(field, value) => {
                self.profile.set(field, &value);
                self.redraw_if(Tab::Profile, out)?;
            }
            UserCommand::Pick(request) => match self.profile.pick_image(&request) {
                Ok(true) => self.redraw_if(Tab::Profile, out)?,
                Ok(false) => {}
                Err(QuoteError::PermissionDenied) => show_alert(out, PERMISSION_DENIED_ALERT)?,
                Err(e) => return Err(e),
            },
        }
        Ok(Flow::Continue)
    }

    /// Applies a fetch outcome; redraws Home when it is visible and the quote changed.
    pub fn handle_outcome<W: Write>(&mut self, outcome: FetchOutcome, out: &mut W) -> Result<()> {
        if self.home.apply(outcome) {
            self.redraw_if(Tab::Home, out)?;
        }
        Ok(())
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    fn navigate<W: Write>(&mut self, tab: Tab, out: &mut W) -> Result<()> {
        self.tab = tab;
        match tab {
            Tab::Home => self.home.mount(),
            Tab::Profile => {
                if let Some(alert) = self.profile.mount() {
                    show_alert(out, alert)?;
                }
            }
            Tab::Diary => {}
        }
        self.render(out)
    }

    fn redraw_if<W: Write>(&self, tab: Tab, out: &mut W) -> Result<()> {
        if self.tab == tab {
            self.render(out)?;
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        let screen: &dyn Screen = match self.tab {
            Tab::Home => &self.home,
            Tab::Diary => &self.diary,
            Tab::Profile => &self.profile,
        };
        screen.render(out)?;
        Ok(())
    }
}

fn show_alert<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "!! {} !!", message)?;
    Ok(())
}
