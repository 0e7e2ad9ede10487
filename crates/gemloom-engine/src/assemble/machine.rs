use super::classify::{LineClass, classify};
use super::kinds::Fence;
use crate::stream::{BlockItem, BlockSink};

/// Dispatch states of the reassembly machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between blocks; the next line decides what opens.
    Normal,
    /// Accumulating a run of collapsed list entries.
    List,
    /// Inside an explicit fence; lines pass through verbatim.
    Fence,
    /// Inside a four-space indented region being rewritten to a fence.
    Indented,
    /// Accumulating wrapped sentence lines into one paragraph.
    Paragraph,
}

/// Reassembles a stream of source lines into self-contained blocks.
///
/// Lines are pushed one at a time; completed blocks reach the sink in
/// emission order with contiguous indices starting at 0. The machine
/// has no failure mode: every state accepts every line, and whatever a
/// truncated input leaves behind is resolved by [`finish`](Self::finish).
pub struct Reassembler<S> {
    state: State,
    /// Block under construction.
    block: String,
    /// Appended at the next flush: the synthesized closing fence of an
    /// indented region.
    pending: String,
    /// At most one finalized block awaiting handoff.
    ready: Option<String>,
    /// Inside `<!-- ... -->`. Handoffs are held back so the whole span
    /// travels in one block.
    in_comment: bool,
    next_index: usize,
    disconnected: bool,
    out: S,
}

impl<S: BlockSink> Reassembler<S> {
    pub fn new(out: S) -> Self {
        Self {
            state: State::Normal,
            block: String::new(),
            pending: String::new(),
            ready: None,
            in_comment: false,
            next_index: 0,
            disconnected: false,
            out,
        }
    }

    /// Feeds one line through the machine.
    ///
    /// Comment-span markers are applied first, open before close, so a
    /// single-line comment toggles the flag on and off again. Then the
    /// current state's transition runs and any finalized block is
    /// handed off. Returns `false` once the sink has disconnected.
    pub fn push_line(&mut self, line: &str) -> bool {
        let class = classify(line);
        if class.opens_comment {
            self.in_comment = true;
        }
        if class.closes_comment {
            self.in_comment = false;
        }
        self.state = match self.state {
            State::Normal => self.on_normal(line, &class),
            State::List => self.on_list(line, &class),
            State::Fence => self.on_fence(line, &class),
            State::Indented => self.on_indented(line, &class),
            State::Paragraph => self.on_paragraph(line, &class),
        };
        self.sync();
        !self.disconnected
    }

    /// Ends the stream: flushes whatever is still buffered, including
    /// unterminated fences and open comment spans, and returns the sink.
    pub fn finish(mut self) -> S {
        self.block_flush();
        self.sync();
        self.out
    }

    fn on_normal(&mut self, line: &str, class: &LineClass) -> State {
        if class.blank {
            // The only transition that drops a line.
            return State::Normal;
        }
        if let Some(entry) = &class.list_entry {
            // The group flushes when it ends, so consecutive entries
            // collapse into one block.
            self.push_block_line(entry);
            return State::List;
        }
        if class.fence_marker {
            self.push_block_line(line);
            return State::Fence;
        }
        if let Some(code) = &class.code {
            self.push_block_line(Fence::MARKER);
            self.push_block_line(code);
            self.pending.clear();
            self.pending.push_str(Fence::MARKER);
            self.pending.push('\n');
            return State::Indented;
        }
        if class.unterminated {
            self.block.push_str(line);
            self.block.push(' ');
            return State::Paragraph;
        }
        self.push_block_line(line);
        self.soft_flush();
        State::Normal
    }

    fn on_list(&mut self, line: &str, class: &LineClass) -> State {
        if let Some(entry) = &class.list_entry {
            self.push_block_line(entry);
            return State::List;
        }
        self.soft_flush();
        self.on_normal(line, class)
    }

    fn on_fence(&mut self, line: &str, class: &LineClass) -> State {
        self.push_block_line(line);
        if class.fence_marker {
            self.soft_flush();
            return State::Normal;
        }
        State::Fence
    }

    fn on_indented(&mut self, line: &str, class: &LineClass) -> State {
        if let Some(code) = &class.code {
            self.push_block_line(code);
            return State::Indented;
        }
        self.soft_flush();
        self.on_normal(line, class)
    }

    fn on_paragraph(&mut self, line: &str, class: &LineClass) -> State {
        if class.sentence_break {
            self.block.push_str(line);
            self.block = format!("{}\n", self.block.trim());
            self.soft_flush();
            return State::Normal;
        }
        self.block.push_str(line);
        self.block.push(' ');
        State::Paragraph
    }

    fn push_block_line(&mut self, text: &str) {
        self.block.push_str(text);
        self.block.push('\n');
    }

    /// Held back inside a comment span; a real flush otherwise.
    fn soft_flush(&mut self) {
        if self.in_comment {
            return;
        }
        self.block_flush();
    }

    fn block_flush(&mut self) {
        if self.block.is_empty() && self.pending.is_empty() {
            return;
        }
        // One line can finish two blocks: the region it closes and the
        // block it opens. Hand the first over before staging the second.
        if self.ready.is_some() {
            self.sync();
        }
        let mut finished = std::mem::take(&mut self.block);
        finished.push_str(&self.pending);
        self.pending.clear();
        self.ready = Some(finished);
    }

    fn sync(&mut self) {
        let Some(mut text) = self.ready.take() else {
            return;
        };
        if !text.ends_with('\n') {
            text.push('\n');
        }
        let block = BlockItem::new(self.next_index, text);
        self.next_index += 1;
        if !self.out.accept(block) {
            self.disconnected = true;
        }
    }
}
