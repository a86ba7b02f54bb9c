use std::path::PathBuf;
use std::sync::Arc;

use callqa::{
    classify_heuristically, load_transcript_dir, AnalysisSource, Analyzer, Improvements,
    Outcome, ReasoningError, ScriptedClient, ServiceHandle,
};

fn sample_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sample_transcripts")
}

fn scripted(client: &Arc<ScriptedClient>) -> Analyzer {
    Analyzer::new(ServiceHandle::Available(Box::new(client.clone())))
}

#[tokio::test]
async fn sample_transcripts_without_service() {
    let analyzer = Analyzer::heuristic_only();
    let transcripts = load_transcript_dir(&sample_dir()).unwrap();
    assert_eq!(transcripts.len(), 3);

    let mut outcomes = Vec::new();
    for t in &transcripts {
        let analysis = analyzer.analyze(&t.text, Some(&t.call_id), None).await;
        assert_eq!(analysis.source, AnalysisSource::Heuristic);
        assert_eq!(analysis.call_id.as_deref(), Some(t.call_id.as_str()));
        outcomes.push(analysis.outcome().unwrap());
    }

    assert_eq!(
        outcomes,
        vec![
            Outcome::AutomatedSuccessful,
            Outcome::EscalatedUnsuccessful,
            Outcome::AutomatedPartiallySuccessful,
        ]
    );
}

#[tokio::test]
async fn external_result_passes_through_unvalidated() {
    let client = Arc::new(ScriptedClient::with_replies([
        "Customer asked about shoe sizes.",
        "Pretty good overall",
        "- Offer a size chart link\n- Confirm stock",
    ]));
    let analyzer = scripted(&client);

    let analysis = analyzer.analyze("what size?", Some("call3"), Some("gpt-4o")).await;

    assert_eq!(analysis.source, AnalysisSource::External);
    assert_eq!(analysis.classification, "Pretty good overall");
    assert_eq!(analysis.outcome(), None);
    assert_eq!(
        analysis.improvements,
        Improvements::Text("- Offer a size chart link\n- Confirm stock".to_string())
    );
    assert_eq!(client.remaining_replies(), 0);
}

#[tokio::test]
async fn failure_in_any_stage_matches_direct_heuristics() {
    let transcript = "Let me transfer you. Thank you for your patience.";

    for call_id in [None, Some(""), Some("call9")] {
        let expected = classify_heuristically(transcript, call_id);

        for completed in 0..3 {
            let client = Arc::new(ScriptedClient::new());
            for _ in 0..completed {
                client.push_reply("ok");
            }
            client.push_error(ReasoningError::ServiceError("503 Service Unavailable".into()));

            let analysis = scripted(&client).analyze(transcript, call_id, None).await;
            assert_eq!(analysis, expected);
            assert_eq!(client.calls().len(), completed + 1);
        }
    }
}

#[tokio::test]
async fn heuristic_decision_table() {
    let analyzer = Analyzer::heuristic_only();
    let cases = [
        ("Thank you, issue resolved.", "Automated - Successful"),
        ("I need help with my order.", "Automated - Partially Successful"),
        (
            "Let me transfer you. Thank you for your patience.",
            "Escalated - Unsuccessful",
        ),
        ("I will connect you to a specialist.", "Escalated - Unsuccessful"),
    ];

    for (text, expected) in cases {
        let analysis = analyzer.analyze(text, None, None).await;
        assert_eq!(analysis.classification, expected, "{text}");
    }
}
