//! # Stdin Event Source
//!
//! Console implementation of `EventSource` for the standalone host
//! binary. A background reader thread turns stdin lines into panel input
//! events:
//!
//! ```text
//! arm            arm the current destination
//! disarm         disarm the current destination
//! topic [NAME]   commit a destination topic (no NAME unbinds)
//! quit           end the session
//! ```
//!
//! Reading stdin blocks, so the thread is the host-surface glue, not part
//! of the panel component itself. End-of-input (Ctrl+D, closed pipe) ends
//! the session like `quit`.

use anyhow::Result;
use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::mpsc;
use std::time::Duration;

use super::event_source::EventSource;
use super::input_events::InputEvent;

/// Event source that reads operator commands from stdin lines
pub struct StdinEventSource {
    receiver: mpsc::Receiver<InputEvent>,
    buffered: VecDeque<InputEvent>,
    disconnected: bool,
}

impl StdinEventSource {
    /// Spawn the reader thread and return the source
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("stdin read failed: {e}");
                        break;
                    }
                };
                if let Some(event) = parse_command_line(&line) {
                    if sender.send(event).is_err() {
                        // Receiver dropped, session is over.
                        return;
                    }
                }
            }
            let _ = sender.send(InputEvent::CloseRequested);
        });

        Self {
            receiver,
            buffered: VecDeque::new(),
            disconnected: false,
        }
    }
}

impl Default for StdinEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for StdinEventSource {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        if !self.buffered.is_empty() {
            return Ok(true);
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.buffered.push_back(event);
                Ok(true)
            }
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(false),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                self.disconnected = true;
                Ok(false)
            }
        }
    }

    fn read(&mut self) -> Result<InputEvent> {
        self.buffered
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available; call poll() first"))
    }

    fn is_exhausted(&self) -> bool {
        self.disconnected && self.buffered.is_empty()
    }
}

/// Parse one console line into a panel input event
///
/// Unknown commands are reported and dropped; the operator just types
/// again.
fn parse_command_line(line: &str) -> Option<InputEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "arm" => Some(InputEvent::ArmRequested),
        "disarm" => Some(InputEvent::DisarmRequested),
        "topic" => Some(InputEvent::TopicCommitted {
            topic: rest.to_string(),
        }),
        "quit" | "exit" => Some(InputEvent::CloseRequested),
        _ => {
            tracing::warn!("unknown command: {line}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_should_map_trigger_commands() {
        assert_eq!(parse_command_line("arm"), Some(InputEvent::ArmRequested));
        assert_eq!(
            parse_command_line("disarm"),
            Some(InputEvent::DisarmRequested)
        );
        assert_eq!(
            parse_command_line("quit"),
            Some(InputEvent::CloseRequested)
        );
    }

    #[test]
    fn parse_should_carry_topic_name() {
        assert_eq!(
            parse_command_line("topic robot1/cmd"),
            Some(InputEvent::TopicCommitted {
                topic: "robot1/cmd".to_string()
            })
        );
    }

    #[test]
    fn parse_bare_topic_should_unbind() {
        assert_eq!(
            parse_command_line("topic"),
            Some(InputEvent::TopicCommitted {
                topic: String::new()
            })
        );
    }

    #[test]
    fn parse_should_ignore_blank_and_unknown_lines() {
        assert_eq!(parse_command_line(""), None);
        assert_eq!(parse_command_line("   "), None);
        assert_eq!(parse_command_line("launch"), None);
    }

    #[test]
    fn parse_should_trim_surrounding_whitespace() {
        assert_eq!(
            parse_command_line("  topic   robot2  "),
            Some(InputEvent::TopicCommitted {
                topic: "robot2".to_string()
            })
        );
    }
}
