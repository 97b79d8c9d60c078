//! Typing playback for non-interactive code previews
//!
//! Cycles through a list of snippets, revealing the current one a character at
//! a time, holding it once complete, then moving on to the next (wrapping).
//! Playback only advances while the preview is in view; coming back into view
//! restarts the current snippet from empty.

use crate::config::PlaybackConfig;
use crate::file_tree::FileTree;
use crate::services::time_source::SharedTimeSource;
use std::time::{Duration, Instant};

/// A named piece of code to type out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub code: String,
}

impl Snippet {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    /// One snippet per file of the tree, in depth-first order
    pub fn from_tree(tree: &FileTree) -> Vec<Snippet> {
        tree.files()
            .filter_map(|file| {
                let node = tree.get_node(file.node_id())?;
                let entry = node.file_entry()?;
                Some(Snippet::new(node.name.clone(), entry.content.clone()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Typing the current snippet, started at the given instant
    Typing { started: Instant },
    /// Current snippet complete, next one starts at `until`
    Holding { until: Instant },
    /// Out of view
    Paused,
}

#[derive(Debug)]
pub struct TypingPlayback {
    snippets: Vec<Snippet>,
    index: usize,
    /// Characters of the current snippet shown
    typed: usize,
    phase: Phase,
    char_interval: Duration,
    hold: Duration,
    time: SharedTimeSource,
}

impl TypingPlayback {
    /// Start playing `snippets` in view, or None if there is nothing to play
    pub fn new(
        snippets: Vec<Snippet>,
        config: &PlaybackConfig,
        time: SharedTimeSource,
    ) -> Option<Self> {
        if snippets.is_empty() {
            return None;
        }

        let started = time.now();
        Some(Self {
            snippets,
            index: 0,
            typed: 0,
            phase: Phase::Typing { started },
            char_interval: Duration::from_millis(config.char_interval_ms.max(1)),
            hold: Duration::from_millis(config.hold_ms),
            time,
        })
    }

    /// Catch up with the clock
    pub fn update(&mut self) {
        let now = self.time.now();
        // Snippets that take no time at all could otherwise spin forever
        let mut instant_steps = 0;

        loop {
            match self.phase {
                Phase::Paused => return,
                Phase::Typing { started } => {
                    let total = self.current().code.chars().count();
                    let steps = self.time.elapsed_since(started).as_nanos()
                        / self.char_interval.as_nanos();
                    if steps < total as u128 {
                        self.typed = steps as usize;
                        return;
                    }

                    self.typed = total;
                    let typing_time = self
                        .char_interval
                        .saturating_mul(u32::try_from(total).unwrap_or(u32::MAX));
                    let until = started + typing_time + self.hold;
                    if until == started {
                        instant_steps += 1;
                        if instant_steps > self.snippets.len() {
                            return;
                        }
                    }
                    self.phase = Phase::Holding { until };
                }
                Phase::Holding { until } => {
                    if now < until {
                        return;
                    }
                    self.index = (self.index + 1) % self.snippets.len();
                    self.typed = 0;
                    self.phase = Phase::Typing { started: until };
                    tracing::trace!("Playback moved to snippet {}", self.index);
                }
            }
        }
    }

    /// Tell the playback whether its preview is on screen
    pub fn set_in_view(&mut self, in_view: bool) {
        match (in_view, self.phase) {
            (false, Phase::Paused) | (true, Phase::Typing { .. } | Phase::Holding { .. }) => {}
            (false, _) => {
                self.update();
                self.phase = Phase::Paused;
            }
            (true, Phase::Paused) => {
                self.typed = 0;
                self.phase = Phase::Typing {
                    started: self.time.now(),
                };
            }
        }
    }

    pub fn is_in_view(&self) -> bool {
        self.phase != Phase::Paused
    }

    /// The snippet being typed
    pub fn current(&self) -> &Snippet {
        &self.snippets[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Whether the current snippet is fully typed
    pub fn is_complete(&self) -> bool {
        self.typed >= self.current().code.chars().count()
    }

    /// The typed prefix of the current snippet, as of the last `update`
    pub fn displayed(&self) -> &str {
        let code = &self.current().code;
        code.char_indices()
            .nth(self.typed)
            .map_or(code.as_str(), |(end, _)| &code[..end])
    }
}
