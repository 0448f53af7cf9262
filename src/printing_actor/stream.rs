//! # Shirt Stream
//!
//! The lazy, single-pass sequence of shirts a print request produces.
//!
//! The printing service replies to a print request as soon as the work is accepted; shirts
//! arrive on the stream while a background producer prints them. The stream is not `Clone`
//! and [`drain`](ShirtStream::drain) takes it by value, so it can be consumed exactly once.

use super::error::PrintingError;
use crate::model::Shirt;
use tokio::sync::mpsc;

/// One element of a shirt stream.
pub type ShirtItem = Result<Shirt, PrintingError>;

pub struct ShirtStream {
    receiver: mpsc::Receiver<ShirtItem>,
    expected: u32,
}

impl ShirtStream {
    /// Wraps the receiving half of a producer channel that promises `expected` shirts.
    pub fn new(receiver: mpsc::Receiver<ShirtItem>, expected: u32) -> Self {
        Self { receiver, expected }
    }

    /// A finished stream that yields `shirts` and then ends.
    pub fn from_shirts(shirts: Vec<Shirt>) -> Self {
        let expected = shirts.len() as u32;
        Self::prefilled(shirts.into_iter().map(Ok).collect(), expected)
    }

    /// A finished stream that yields `shirts` and then fails with `error`.
    ///
    /// `expected` is what the producer promised, normally more than `shirts.len()`.
    pub fn failing_after(shirts: Vec<Shirt>, expected: u32, error: PrintingError) -> Self {
        let mut items: Vec<ShirtItem> = shirts.into_iter().map(Ok).collect();
        items.push(Err(error));
        Self::prefilled(items, expected)
    }

    fn prefilled(items: Vec<ShirtItem>, expected: u32) -> Self {
        let (sender, receiver) = mpsc::channel(items.len().max(1));
        for item in items {
            // Capacity matches the item count, so this never fails.
            let _ = sender.try_send(item);
        }
        Self::new(receiver, expected)
    }

    /// Number of shirts the producer promised.
    pub fn expected(&self) -> u32 {
        self.expected
    }

    /// Waits for the next shirt. `None` once the producer has finished.
    pub async fn next(&mut self) -> Option<ShirtItem> {
        self.receiver.recv().await
    }

    /// Consumes the whole stream, returning how many shirts it yielded.
    ///
    /// Stops at the first production error.
    pub async fn drain(mut self) -> Result<u32, PrintingError> {
        let mut count = 0;
        while let Some(item) = self.next().await {
            item?;
            count += 1;
        }
        Ok(count)
    }
}

impl std::fmt::Debug for ShirtStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShirtStream")
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleDescriptor;

    fn shirts(n: usize) -> Vec<Shirt> {
        vec![Shirt::new(StyleDescriptor::from_style_id("style1")); n]
    }

    #[tokio::test]
    async fn test_from_shirts_yields_each_then_ends() {
        let mut stream = ShirtStream::from_shirts(shirts(2));
        assert_eq!(stream.expected(), 2);
        assert!(stream.next().await.unwrap().is_ok());
        assert!(stream.next().await.unwrap().is_ok());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_drain_counts_shirts() {
        assert_eq!(ShirtStream::from_shirts(shirts(7)).drain().await, Ok(7));
        assert_eq!(ShirtStream::from_shirts(Vec::new()).drain().await, Ok(0));
    }

    #[tokio::test]
    async fn test_drain_stops_at_production_error() {
        let error = PrintingError::OutOfInk { requested: 5, printed: 2 };
        let stream = ShirtStream::failing_after(shirts(2), 5, error.clone());
        assert_eq!(stream.expected(), 5);
        assert_eq!(stream.drain().await, Err(error));
    }
}
