pub mod elements;
pub mod harmonics;
pub mod synthesizer;
