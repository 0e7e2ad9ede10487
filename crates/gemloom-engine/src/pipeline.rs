//! Threaded pipeline stages joined by rendezvous channels.
//!
//! Every stage owns one worker thread. A handoff blocks until the peer
//! is ready, which is the only backpressure mechanism. Closing the
//! upstream end finishes a stage; dropping a receiver unwinds the
//! producing side of the chain at its next handoff.

use std::sync::mpsc::{Receiver, sync_channel};
use std::thread;

use crate::assemble::Reassembler;
use crate::stream::{BlockItem, LineItem};

/// Feeds owned line items into the pipeline from a worker thread.
pub fn send_lines(lines: Vec<LineItem>) -> Receiver<LineItem> {
    let (tx, rx) = sync_channel(0);
    thread::spawn(move || {
        for line in lines {
            if tx.send(line).is_err() {
                return;
            }
        }
    });
    rx
}

/// The reassembly stage: consumes lines, emits blocks.
///
/// One worker thread owns the machine end-to-end, so all state stays
/// thread-local. Upstream closure triggers the final flush, then the
/// block channel closes. Per-line work is synchronous; the stage only
/// suspends on the two channel ends.
pub fn reassemble(lines: Receiver<LineItem>) -> Receiver<BlockItem> {
    let (tx, rx) = sync_channel(0);
    thread::spawn(move || {
        let mut machine = Reassembler::new(tx);
        while let Ok(line) = lines.recv() {
            if !machine.push_line(&line.text) {
                return;
            }
        }
        machine.finish();
    });
    rx
}
