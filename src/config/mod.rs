pub mod synthesis;

pub use synthesis::SynthesisOptions;
