// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL session state.

use typeline::Kind;

/// State carried between REPL lines.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Number of lines classified so far.
    pub classified: usize,
    /// Primary kind of the last classified line.
    pub last_kind: Option<Kind>,
}

impl SessionState {
    /// Record a classification.
    pub fn record(&mut self, kind: Kind) {
        self.classified += 1;
        self.last_kind = Some(kind);
    }
}
