use murmur::application::ports::Summarizer;
use murmur::infrastructure::summarization::FrequencySummarizer;

#[tokio::test]
async fn given_short_text_when_summarizing_then_returns_all_sentences() {
    let summarizer = FrequencySummarizer::new(3);

    let summary = summarizer
        .summarize("The meeting started late. Everyone agreed.")
        .await
        .unwrap();

    assert_eq!(summary, "The meeting started late. Everyone agreed.");
}

#[tokio::test]
async fn given_repeated_topic_when_summarizing_then_keeps_topical_sentences_in_order() {
    let summarizer = FrequencySummarizer::new(2);
    let text = "The budget was discussed. Lunch was served. \
                The budget needs review. Budget cuts are coming. Someone sneezed.";

    let summary = summarizer.summarize(text).await.unwrap();

    assert_eq!(
        summary,
        "The budget was discussed. The budget needs review."
    );
}

#[tokio::test]
async fn given_empty_text_when_summarizing_then_returns_empty_summary() {
    let summarizer = FrequencySummarizer::new(2);

    assert_eq!(summarizer.summarize("   ").await.unwrap(), "");
}
