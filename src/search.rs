use std::time::Duration;

use tokio::sync::{mpsc, watch};

/// Collapses a burst of search keystrokes into a single query.
///
/// A query is emitted once no new input has arrived for `delay`. Queries are
/// trimmed and an unchanged query is not emitted twice in a row. The
/// background task ends when the debouncer is dropped.
#[derive(Debug)]
pub struct SearchDebouncer {
    input: watch::Sender<String>,
}

impl SearchDebouncer {
    pub fn spawn(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (input, mut changes) = watch::channel(String::new());
        let (output, queries) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut last_emitted: Option<String> = None;
            while changes.changed().await.is_ok() {
                // restart the quiet period on every new keystroke
                loop {
                    tokio::select! {
                        changed = changes.changed() => {
                            if changed.is_err() {
                                return;
                            }
                        }
                        _ = tokio::time::sleep(delay) => break,
                    }
                }

                let query = changes.borrow_and_update().trim().to_string();
                if last_emitted.as_deref() == Some(query.as_str()) {
                    continue;
                }
                tracing::debug!(query = %query, "search query settled");
                if output.send(query.clone()).is_err() {
                    return;
                }
                last_emitted = Some(query);
            }
        });

        (Self { input }, queries)
    }

    pub fn push(&self, raw: impl Into<String>) {
        self.input.send_replace(raw.into());
    }
}
