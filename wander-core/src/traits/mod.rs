pub mod classifier;

pub use classifier::{KeywordClass, SignalClassifier, TextSignals};
