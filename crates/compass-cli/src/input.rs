//! Interruptible stdin for the interactive session.
//!
//! Stdin is read line by line on its own thread and handed over a channel.
//! Ctrl+C raises the shared interrupt flag and closes the feed, so a prompt
//! blocked on input returns end-of-input instead of waiting for Enter.

use std::io::{self, BufRead, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};

/// `BufRead` over lines received from a channel. `None` or a closed channel
/// is end of input.
pub struct LineFeed {
    rx: Receiver<Option<String>>,
    buf: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl LineFeed {
    pub fn new(rx: Receiver<Option<String>>) -> Self {
        Self {
            rx,
            buf: Vec::new(),
            pos: 0,
            closed: false,
        }
    }
}

impl Read for LineFeed {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for LineFeed {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.buf.len() && !self.closed {
            self.buf.clear();
            self.pos = 0;
            match self.rx.recv() {
                Ok(Some(line)) => {
                    self.buf.extend_from_slice(line.as_bytes());
                    self.buf.push(b'\n');
                }
                Ok(None) | Err(_) => self.closed = true,
            }
        }
        Ok(&self.buf[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.buf.len());
    }
}

/// Start the stdin reader thread and install the Ctrl+C handler.
pub fn interruptible_stdin(interrupt: Arc<AtomicBool>) -> Result<LineFeed> {
    let (tx, rx) = mpsc::channel();
    spawn_stdin_reader(tx.clone())?;

    ctrlc::set_handler(move || {
        interrupt.store(true, Ordering::SeqCst);
        let _ = tx.send(None);
    })
    .context("failed to install Ctrl+C handler")?;

    Ok(LineFeed::new(rx))
}

fn spawn_stdin_reader(tx: Sender<Option<String>>) -> Result<()> {
    thread::Builder::new()
        .name("compass-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Some(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(None);
        })
        .context("failed to start stdin reader")?;
    Ok(())
}
