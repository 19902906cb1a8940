//! Full-session flow: candidate lookup, job listing, concurrent submissions

use std::sync::{Arc, Mutex};

use mockito::{Matcher, Server, ServerGuard};
use job_portal::views::{BoardState, CandidateState, Notice, NoticeMode, Notifier};
use job_portal::{PortalConfig, PortalError, PortalSession};

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

const CANDIDATE_BODY: &str =
    r#"{"firstName":"Ana","lastName":"Lopez","email":"ana@x.com","uuid":"u1","candidateId":"c1"}"#;
const JOBS_BODY: &str = r#"[{"id":1,"title":"Backend"},{"id":2,"title":"Frontend"}]"#;

async fn mock_candidate(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/api/candidate/get-by-email")
        .match_query(Matcher::UrlEncoded("email".into(), "ana@x.com".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CANDIDATE_BODY)
        .create_async()
        .await
}

async fn mock_jobs(server: &mut ServerGuard, body: &str) -> mockito::Mock {
    server
        .mock("GET", "/api/jobs/get-list")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

fn session_for(server: &ServerGuard) -> (PortalSession, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let session = PortalSession::new(
        PortalConfig::new(server.url(), "ana@x.com"),
        notifier.clone(),
    );
    (session, notifier)
}

#[tokio::test]
async fn open_loads_candidate_then_listing() {
    let mut server = Server::new_async().await;
    mock_candidate(&mut server).await;
    mock_jobs(&mut server, JOBS_BODY).await;

    let (mut session, notifier) = session_for(&server);
    session.open().await;

    let candidate = session.loader().candidate().expect("candidate loaded");
    assert_eq!(candidate.uuid, "u1");
    assert_eq!(candidate.candidate_id, "c1");

    let board = session.board().expect("board mounted");
    assert_eq!(board.jobs().len(), 2);
    assert_eq!(board.jobs()[0].title, "Backend");

    let rendered = session.render();
    assert!(rendered.contains("Welcome, Ana Lopez"));
    assert!(rendered.contains("Email: ana@x.com"));
    assert!(notifier.notices().is_empty());
}

#[tokio::test]
async fn missing_email_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let untouched = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let config = PortalConfig {
        base_url: Some(server.url()),
        candidate_email: None,
    };
    let mut session = PortalSession::new(config, notifier.clone());
    session.open().await;

    assert!(matches!(
        session.loader().state(),
        CandidateState::Failed(PortalError::MissingConfig(_))
    ));
    assert!(session.board().is_none());
    assert_eq!(notifier.notices()[0].mode, NoticeMode::Persistent);
    untouched.assert_async().await;
}

#[tokio::test]
async fn empty_listing_renders_the_empty_state() {
    let mut server = Server::new_async().await;
    mock_candidate(&mut server).await;
    mock_jobs(&mut server, "[]").await;

    let (mut session, _) = session_for(&server);
    session.open().await;

    let board = session.board().expect("board mounted");
    assert!(matches!(board.state(), BoardState::Empty));
    assert!(session.render().contains("No open positions"));
}

#[tokio::test]
async fn invalid_url_never_posts() {
    let mut server = Server::new_async().await;
    mock_candidate(&mut server).await;
    mock_jobs(&mut server, JOBS_BODY).await;
    let apply = server
        .mock("POST", "/api/candidate/apply-to-job")
        .expect(0)
        .create_async()
        .await;

    let (mut session, notifier) = session_for(&server);
    session.open().await;

    session
        .board_mut()
        .unwrap()
        .edit_repo_url(1, "not-a-url");
    session.submit(1);
    session.settle().await;

    assert_eq!(session.pending_submissions(), 0);
    assert!(!session.board().unwrap().draft(1).in_flight);
    let validation: Vec<_> = notifier
        .notices()
        .into_iter()
        .filter(|notice| notice.mode == NoticeMode::Transient)
        .collect();
    assert_eq!(validation.len(), 1);
    apply.assert_async().await;
}

#[tokio::test]
async fn valid_submission_posts_exactly_once() {
    let mut server = Server::new_async().await;
    mock_candidate(&mut server).await;
    mock_jobs(&mut server, JOBS_BODY).await;
    let apply = server
        .mock("POST", "/api/candidate/apply-to-job")
        .match_body(Matcher::Json(serde_json::json!({
            "uuid": "u1",
            "jobId": 1,
            "candidateId": "c1",
            "repoUrl": "https://github.com/me/repo"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    let (mut session, _) = session_for(&server);
    session.open().await;

    session
        .board_mut()
        .unwrap()
        .edit_repo_url(1, "https://github.com/me/repo");
    session.submit(1);
    session.settle().await;

    let draft = session.board().unwrap().draft(1);
    assert_eq!(draft.repo_url, "");
    assert!(draft.success.is_some());
    assert!(!draft.in_flight);
    apply.assert_async().await;
}

#[tokio::test]
async fn concurrent_submissions_settle_independently() {
    let mut server = Server::new_async().await;
    mock_candidate(&mut server).await;
    mock_jobs(&mut server, JOBS_BODY).await;
    server
        .mock("POST", "/api/candidate/apply-to-job")
        .match_body(Matcher::PartialJson(serde_json::json!({"jobId": 1})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/api/candidate/apply-to-job")
        .match_body(Matcher::PartialJson(serde_json::json!({"jobId": 2})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":false}"#)
        .create_async()
        .await;

    let (mut session, notifier) = session_for(&server);
    session.open().await;

    {
        let board = session.board_mut().unwrap();
        board.edit_repo_url(1, "https://github.com/me/repo");
        board.edit_repo_url(2, "https://github.com/me/other");
    }
    session.submit(1);
    session.submit(2);
    assert_eq!(session.pending_submissions(), 2);
    session.settle().await;

    let board = session.board().unwrap();

    // job 1 acknowledged: message set, URL reset
    let first = board.draft(1);
    assert!(first.success.is_some());
    assert_eq!(first.repo_url, "");

    // job 2 rejected: no message, draft kept, transient failure notice
    let second = board.draft(2);
    assert!(second.success.is_none());
    assert!(!second.in_flight);
    assert_eq!(second.repo_url, "https://github.com/me/other");

    let failures: Vec<_> = notifier
        .notices()
        .into_iter()
        .filter(|notice| notice.mode == NoticeMode::Transient)
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].message.contains("acknowledge"));
}

#[tokio::test]
async fn repeated_open_renders_identically() {
    let mut server = Server::new_async().await;
    mock_candidate(&mut server).await;
    mock_jobs(&mut server, JOBS_BODY).await;

    let (mut session, _) = session_for(&server);
    session.open().await;
    let first = session.render();
    session.open().await;

    assert_eq!(session.render(), first);
    assert_eq!(session.board().unwrap().jobs().len(), 2);
}
