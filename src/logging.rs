use crate::chain::ErrorChain;

impl ErrorChain {
    /// Emit the trace-back as `error` events, one per frame
    ///
    /// Each event carries the frame's `position` and payload `kind` as
    /// fields, and the formatted line as its message.
    pub fn log(&self) {
        let depth = self.depth();
        for frame in self.frames() {
            tracing::error!(
                position = frame.position(),
                depth,
                kind = frame.kind().as_str(),
                "{frame}"
            );
        }
    }
}
