mod polly_synthesizer;

pub use polly_synthesizer::PollySynthesizer;
