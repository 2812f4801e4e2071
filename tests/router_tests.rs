mod common;

use std::sync::Arc;

use common::{RecordingSender, ScriptedCounts, request, test_config};
use space_control::alexa::response::{GOODBYE_SPEECH, HELP_SPEECH, MISUNDERSTOOD_SPEECH};
use space_control::core::models::RequestKind;
use space_control::router::Skill;

fn skill() -> (Skill, Arc<RecordingSender>, Arc<ScriptedCounts>) {
    let sender = Arc::new(RecordingSender::ok());
    let counts = Arc::new(ScriptedCounts::fast(6));
    let skill = Skill::new(&test_config(), sender.clone(), counts.clone());
    (skill, sender, counts)
}

#[tokio::test(start_paused = true)]
async fn test_launch_and_get_count_run_progressive_flow() {
    for kind in [RequestKind::Launch, RequestKind::GetCount] {
        let (skill, sender, counts) = skill();
        let reply = skill.handle(&request(kind)).await;

        assert_eq!(reply.speech_text, "There are currently 6 astronauts in space.");
        assert_eq!(sender.attempts(), 1);
        assert_eq!(counts.calls(), 1);
    }
}

#[tokio::test]
async fn test_help_is_static_with_reprompt() {
    let (skill, sender, counts) = skill();
    let reply = skill.handle(&request(RequestKind::Help)).await;

    assert_eq!(reply.speech_text, HELP_SPEECH);
    assert_eq!(reply.reprompt_text.as_deref(), Some(HELP_SPEECH));
    assert!(!reply.should_end_session);
    assert_eq!(sender.attempts(), 0);
    assert_eq!(counts.calls(), 0);
}

#[tokio::test]
async fn test_cancel_stop_says_goodbye_without_network() {
    let (skill, sender, counts) = skill();
    let reply = skill.handle(&request(RequestKind::CancelStop)).await;

    assert_eq!(reply.speech_text, GOODBYE_SPEECH);
    assert!(reply.should_end_session);
    assert!(reply.reprompt_text.is_none());
    assert_eq!(sender.attempts(), 0);
    assert_eq!(counts.calls(), 0);
}

#[tokio::test]
async fn test_session_ended_is_silent() {
    let (skill, sender, _) = skill();
    let kind = RequestKind::SessionEnded {
        reason: Some("USER_INITIATED".to_string()),
        error: None,
    };
    let reply = skill.handle(&request(kind)).await;

    assert!(reply.is_silent());
    assert_eq!(sender.attempts(), 0);
}

#[tokio::test]
async fn test_unrecognized_apologizes_and_reprompts() {
    let (skill, _, counts) = skill();
    let reply = skill.handle(&request(RequestKind::Unrecognized)).await;

    assert_eq!(reply.speech_text, MISUNDERSTOOD_SPEECH);
    assert_eq!(reply.reprompt_text.as_deref(), Some(MISUNDERSTOOD_SPEECH));
    assert!(!reply.should_end_session);
    assert_eq!(counts.calls(), 0);
}
