mod frequency_summarizer;

pub use frequency_summarizer::FrequencySummarizer;
