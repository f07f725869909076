use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::fmt;

pub const TRACK_COUNT: usize = 12;

/// Every state reacts to the four buttons and may swap itself out.
pub trait PlayerState {
    fn name(&self) -> &'static str;
    fn on_lock(&self, player: &mut Player) -> String;
    fn on_play(&self, player: &mut Player) -> String;
    fn on_next(&self, player: &mut Player) -> String;
    fn on_previous(&self, player: &mut Player) -> String;
}

pub struct LockedState;
pub struct ReadyState;
pub struct PlayingState;

static LOCKED: LockedState = LockedState;
static READY: ReadyState = ReadyState;
static PLAYING: PlayingState = PlayingState;

impl PlayerState for LockedState {
    fn name(&self) -> &'static str {
        "locked"
    }

    fn on_lock(&self, player: &mut Player) -> String {
        if player.is_playing() {
            player.change_state(&READY);
            "Stop playing".to_string()
        } else {
            "Locked...".to_string()
        }
    }

    fn on_play(&self, player: &mut Player) -> String {
        player.change_state(&READY);
        "Ready".to_string()
    }

    fn on_next(&self, _: &mut Player) -> String {
        "Locked...".to_string()
    }

    fn on_previous(&self, _: &mut Player) -> String {
        "Locked...".to_string()
    }
}

impl PlayerState for ReadyState {
    fn name(&self) -> &'static str {
        "ready"
    }

    fn on_lock(&self, player: &mut Player) -> String {
        player.change_state(&LOCKED);
        "Locked...".to_string()
    }

    fn on_play(&self, player: &mut Player) -> String {
        let action = player.start_playback();
        player.change_state(&PLAYING);
        action
    }

    fn on_next(&self, _: &mut Player) -> String {
        "Locked...".to_string()
    }

    fn on_previous(&self, _: &mut Player) -> String {
        "Locked...".to_string()
    }
}

impl PlayerState for PlayingState {
    fn name(&self) -> &'static str {
        "playing"
    }

    fn on_lock(&self, player: &mut Player) -> String {
        player.change_state(&LOCKED);
        player.set_current_track_after_stop();
        "Stop playing".to_string()
    }

    fn on_play(&self, player: &mut Player) -> String {
        player.change_state(&READY);
        "Paused...".to_string()
    }

    fn on_next(&self, player: &mut Player) -> String {
        player.next_track()
    }

    fn on_previous(&self, player: &mut Player) -> String {
        player.previous_track()
    }
}

pub struct Player {
    state: &'static dyn PlayerState,
    playing: bool,
    playlist: Vec<String>,
    current_track: usize,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            state: &READY,
            playing: true,
            playlist: (1..=TRACK_COUNT).map(|i| format!("Track {}", i)).collect(),
            current_track: 0,
        }
    }
}

impl Player {
    pub fn change_state(&mut self, state: &'static dyn PlayerState) {
        tracing::debug!("🎵 Player: {} -> {}", self.state.name(), state.name());
        // 進入鎖定狀態時停止播放
        if state.name() == LOCKED.name() {
            self.playing = false;
        }
        self.state = state;
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current_track(&self) -> &str {
        &self.playlist[self.current_track]
    }

    pub fn start_playback(&self) -> String {
        format!("Playing {}", self.current_track())
    }

    pub fn next_track(&mut self) -> String {
        self.current_track = (self.current_track + 1) % self.playlist.len();
        self.start_playback()
    }

    pub fn previous_track(&mut self) -> String {
        self.current_track = self
            .current_track
            .checked_sub(1)
            .unwrap_or(self.playlist.len() - 1);
        self.start_playback()
    }

    pub fn set_current_track_after_stop(&mut self) {
        self.current_track = 0;
    }

    pub fn lock(&mut self) -> String {
        let state = self.state;
        state.on_lock(self)
    }

    pub fn play(&mut self) -> String {
        let state = self.state;
        state.on_play(self)
    }

    pub fn next(&mut self) -> String {
        let state = self.state;
        state.on_next(self)
    }

    pub fn previous(&mut self) -> String {
        let state = self.state;
        state.on_previous(self)
    }
}

pub struct MediaPlayerDemo;

impl Demo for MediaPlayerDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "state-player",
            pattern: "State",
            category: Category::Behavioral,
            summary: "Player buttons behave differently in locked, ready and playing states",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut player = Player::default();

        ctx.say(player.play());
        for _ in 0..TRACK_COUNT - 1 {
            ctx.say(player.next());
        }

        ctx.say(player.play());
        ctx.say(player.next());
        ctx.say(player.previous());

        ctx.say(player.play());
        for _ in 0..TRACK_COUNT - 1 {
            ctx.say(player.previous());
        }

        ctx.say(player.lock());
        ctx.say(player.next());
        ctx.say(player.previous());
        ctx.say(player.lock());

        ctx.say(player.play());
        ctx.say(player.play());
        ctx.say(player.lock());
        Ok(())
    }
}

// 電腦電源狀態

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerState {
    Off,
    On,
    Suspend,
    Hibernate,
}

impl ComputerState {
    pub fn allowed(&self) -> &'static [ComputerState] {
        match self {
            ComputerState::Off => &[ComputerState::On],
            ComputerState::On => &[
                ComputerState::Off,
                ComputerState::Suspend,
                ComputerState::Hibernate,
            ],
            ComputerState::Suspend | ComputerState::Hibernate => &[ComputerState::On],
        }
    }
}

impl fmt::Display for ComputerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComputerState::Off => "off",
            ComputerState::On => "on",
            ComputerState::Suspend => "suspend",
            ComputerState::Hibernate => "hibernate",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct Computer {
    current: ComputerState,
}

impl Default for Computer {
    fn default() -> Self {
        Self {
            current: ComputerState::Off,
        }
    }
}

impl Computer {
    pub fn current(&self) -> ComputerState {
        self.current
    }

    /// Returns whether the switch happened.
    pub fn change(&mut self, ctx: &mut DemoContext<'_>, new_state: ComputerState) -> bool {
        if self.current.allowed().contains(&new_state) {
            ctx.say(format!(
                "Current: {} -> switching to new state: {}.",
                self.current, new_state
            ));
            self.current = new_state;
            true
        } else {
            ctx.say(format!(
                "Current: {} -> switching to: {}, not possible.",
                self.current, new_state
            ));
            false
        }
    }
}

pub struct ComputerStateDemo;

impl Demo for ComputerStateDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "state-computer",
            pattern: "State",
            category: Category::Behavioral,
            summary: "A transition table decides which power states a computer may enter",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let mut computer = Computer::default();
        ctx.say(computer.current().to_string());

        for next in [
            ComputerState::On,
            ComputerState::Suspend,
            ComputerState::Hibernate,
            ComputerState::On,
            ComputerState::Off,
        ] {
            computer.change(ctx, next);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_tracks_wrap_both_ways() {
        let mut player = Player::default();
        assert_eq!(player.play(), "Playing Track 1");
        assert_eq!(player.previous(), "Playing Track 12");
        assert_eq!(player.next(), "Playing Track 1");
    }

    #[test]
    fn test_lock_stops_and_rewinds() {
        let mut player = Player::default();
        player.play();
        player.next();
        assert_eq!(player.lock(), "Stop playing");
        assert_eq!(player.state_name(), "locked");
        assert!(!player.is_playing());
        assert_eq!(player.next(), "Locked...");
        assert_eq!(player.play(), "Ready");
        assert_eq!(player.play(), "Playing Track 1");
    }

    #[test]
    fn test_computer_rejects_suspend_to_hibernate() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let mut computer = Computer::default();

        assert!(!computer.change(&mut ctx, ComputerState::Suspend));
        assert!(computer.change(&mut ctx, ComputerState::On));
        assert!(computer.change(&mut ctx, ComputerState::Suspend));
        assert!(!computer.change(&mut ctx, ComputerState::Hibernate));
        assert_eq!(computer.current(), ComputerState::Suspend);
        drop(ctx);

        assert_eq!(
            console.lines().last().map(String::as_str),
            Some("Current: suspend -> switching to: hibernate, not possible.")
        );
    }
}
