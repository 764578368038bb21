//! Integration tests for the study-service client against a mock server.

use pdfstudy::error::{FAILURE_MESSAGE, MISSING_INPUT_MESSAGE};
use pdfstudy::{ClientOptions, Endpoint, Error, McqItem, StudyClient, UploadFile};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PDF: &[u8] = b"%PDF-1.4\n1 0 obj\n<< >>\nendobj\n%%EOF\n";

fn upload() -> UploadFile {
    UploadFile::from_bytes("lecture.pdf", PDF.to_vec()).unwrap()
}

fn client(server: &MockServer) -> StudyClient {
    StudyClient::new(ClientOptions::new().with_base_url(server.uri())).unwrap()
}

async fn mount_ok(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(route))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"file\"; filename=\"lecture.pdf\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_all(server: &MockServer) {
    mount_ok(
        server,
        "/upload-pdf/",
        json!({
            "summary": "* Plants make sugar.\n* Light drives it.",
            "text_snippet": "Plants are green.  Light is energy."
        }),
    )
    .await;
    mount_ok(
        server,
        "/generate-mindmap/",
        json!({ "mind_map": "- Photosynthesis\n  - Light\n  - Calvin cycle" }),
    )
    .await;
    mount_ok(
        server,
        "/generate-mcqs/",
        json!({
            "mcqs": [
                {
                    "question": "Where does photosynthesis happen?",
                    "options": { "A": "Chloroplast", "B": "Nucleus", "C": "Ribosome", "D": "Vacuole" },
                    "answer": "A",
                    "explanation": "Chloroplasts hold chlorophyll."
                },
                { "error": "Failed to generate question 2" }
            ]
        }),
    )
    .await;
    mount_ok(
        server,
        "/generate-study-plan/",
        json!({ "study_plan": "**Day 1:** Read chapter 1." }),
    )
    .await;
}

#[tokio::test]
async fn test_process_success() {
    let server = MockServer::start().await;
    mount_all(&server).await;

    let materials = client(&server).process(&upload()).await.unwrap();

    assert_eq!(
        materials.summary.key_points(),
        vec!["Plants make sugar.", "Light drives it."]
    );
    assert_eq!(
        materials.summary.snippet_sentences(),
        vec!["Plants are green.", "Light is energy."]
    );
    assert_eq!(materials.mind_map.graph.node_count(), 3);
    assert_eq!(materials.mind_map.graph.edge_count(), 2);
    assert_eq!(materials.mcqs.len(), 2);
    assert!(materials.mcqs[1].is_error());

    let question = materials.mcqs[0].as_question().unwrap();
    let keys: Vec<&str> = question.options.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["A", "B", "C", "D"]);
    assert!(question.grade("a").is_correct());

    assert_eq!(materials.study_plan.plain_text(), "Day 1: Read chapter 1.");
    assert_eq!(materials.metadata.file_name, "lecture.pdf");
    assert_eq!(materials.metadata.pdf_version.as_deref(), Some("1.4"));
    assert_eq!(materials.metadata.server, server.uri());
}

#[tokio::test]
async fn test_one_failing_endpoint_fails_the_batch() {
    let server = MockServer::start().await;

    mount_ok(&server, "/upload-pdf/", json!({ "summary": "* a", "text_snippet": "b" })).await;
    mount_ok(&server, "/generate-mindmap/", json!({ "mind_map": "- a" })).await;
    mount_ok(&server, "/generate-study-plan/", json!({ "study_plan": "c" })).await;
    Mock::given(method("POST"))
        .and(path("/generate-mcqs/"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "MCQ generation failed" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).process(&upload()).await.unwrap_err();

    match &err {
        Error::Upstream {
            endpoint,
            status,
            message,
        } => {
            assert_eq!(*endpoint, Endpoint::Mcqs);
            assert_eq!(*status, 500);
            assert_eq!(message, "MCQ generation failed");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
    assert!(err.is_upstream_failure());
    assert_eq!(err.user_message(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-mindmap/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "outline": "- a" })))
        .mount(&server)
        .await;

    let err = client(&server).mind_map(&upload()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Decode {
            endpoint: Endpoint::MindMap,
            ..
        }
    ));
    assert_eq!(err.user_message(), FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_single_endpoint_calls() {
    let server = MockServer::start().await;
    mount_all(&server).await;

    let client = client(&server);
    let file = upload();

    let summary = client.summary(&file).await.unwrap();
    assert_eq!(summary.key_points().len(), 2);

    let mind_map = client.mind_map(&file).await.unwrap();
    assert_eq!(mind_map.text, "- Photosynthesis\n  - Light\n  - Calvin cycle");

    let mcqs = client.mcqs(&file).await.unwrap();
    assert!(matches!(mcqs[0], McqItem::Question(_)));

    let plan = client.study_plan(&file).await.unwrap();
    assert_eq!(plan.as_str(), "**Day 1:** Read chapter 1.");
}

#[tokio::test]
async fn test_connection_refused_is_upstream_failure() {
    // Nothing listens on the discard port.
    let client = StudyClient::new(ClientOptions::new().with_base_url("http://127.0.0.1:9")).unwrap();
    let err = client.process(&upload()).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_upstream_failure());
}

#[test]
fn test_missing_input_never_reaches_the_network() {
    let err = UploadFile::select(None, true).unwrap_err();
    assert!(err.is_missing_input());
    assert_eq!(err.user_message(), MISSING_INPUT_MESSAGE);
}

#[test]
fn test_endpoint_urls() {
    let options = ClientOptions::new().with_base_url("http://study.local:8000/");
    let urls: Vec<String> = Endpoint::ALL
        .iter()
        .map(|e| options.endpoint_url(*e))
        .collect();
    assert_eq!(
        urls,
        vec![
            "http://study.local:8000/upload-pdf/",
            "http://study.local:8000/generate-mindmap/",
            "http://study.local:8000/generate-mcqs/",
            "http://study.local:8000/generate-study-plan/",
        ]
    );
}
