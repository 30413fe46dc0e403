//! Multi-turn conversations against the in-memory store.

use super::helpers::{Assistant, assistant, conversation, end_of};
use chrono::TimeDelta;
use rstest::rstest;
use tasktalk::{
    config::{AssistantConfig, CompletionPolicy},
    conversation::{
        adapters::Delivery,
        domain::{ConversationId, InboundEvent, Reply},
        services::ConversationState,
    },
    task::{domain::TaskStatus, ports::TaskRepository},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_list_and_complete(assistant: Assistant, conversation: ConversationId) {
    let added = assistant
        .say(
            conversation.as_str(),
            "I need to finish the report by next friday, difficulty 4",
        )
        .await;
    assert_eq!(
        added.body(),
        "Task added: Finish the report (due 2026-10-23 23:59, Hard)"
    );

    let listing = assistant.say(conversation.as_str(), "what's due this week").await;
    assert!(listing.body().contains("• Finish the report"), "{listing:?}");
    assert!(listing.body().contains("This one's a bit challenging"), "{listing:?}");

    let done = assistant
        .say(conversation.as_str(), "I've finished the report")
        .await;
    assert!(done.body().contains("'Finish the report'"), "{done:?}");
    assert!(assistant.names().await.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn math_scenario_deletes_only_the_chosen_task(
    assistant: Assistant,
    conversation: ConversationId,
) {
    assistant.seed("Math homework", end_of(10, 22)).await;
    assistant.seed("Math project", end_of(10, 30)).await;

    let question = assistant.say(conversation.as_str(), "I finished math").await;
    let Reply::SelectableList { options, .. } = &question else {
        panic!("expected a selectable list, got {question:?}");
    };
    let labels: Vec<&str> = options.iter().map(|option| option.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Math homework (due 2026-10-22 23:59)",
            "Math project (due 2026-10-30 23:59)"
        ]
    );

    assistant.say(conversation.as_str(), "2").await;

    assert_eq!(assistant.names().await, vec!["Math homework"]);
    assert_eq!(
        assistant.service.state(&conversation),
        ConversationState::Idle
    );
    assert_eq!(assistant.front_end.deliveries().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pressing_an_option_resolves_the_question(
    assistant: Assistant,
    conversation: ConversationId,
) {
    assistant.seed("Math homework", end_of(10, 22)).await;
    assistant.seed("Math project", end_of(10, 30)).await;
    let question = assistant.say(conversation.as_str(), "delete math").await;
    let Reply::SelectableList { options, .. } = question else {
        panic!("expected a selectable list");
    };
    let first = options.first().expect("two options offered");

    let event = InboundEvent::selection(conversation.clone(), first.action(), first.task_id());
    let reply = assistant
        .service
        .deliver(&assistant.front_end, &event)
        .await
        .expect("delivery succeeds");

    assert_eq!(reply.body(), "Task 'Math homework' deleted.");
    assert_eq!(assistant.names().await, vec!["Math project"]);
    assert!(matches!(
        assistant.front_end.deliveries().last(),
        Some(Delivery::Text { text, .. }) if text == "Task 'Math homework' deleted."
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_question_is_forgotten(assistant: Assistant, conversation: ConversationId) {
    assistant.seed("Math homework", end_of(10, 22)).await;
    assistant.seed("Math project", end_of(10, 30)).await;
    assistant.say(conversation.as_str(), "I finished math").await;

    assistant.clock.advance(TimeDelta::minutes(30));

    assert_eq!(
        assistant.service.state(&conversation),
        ConversationState::Idle
    );
    assistant.say(conversation.as_str(), "1").await;
    assert_eq!(assistant.names().await.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn conversations_proceed_independently(assistant: Assistant) {
    assistant.seed("Math homework", end_of(10, 22)).await;
    assistant.seed("Math project", end_of(10, 30)).await;
    assistant.seed("Call the bank", end_of(10, 23)).await;

    let (question, completion) = tokio::join!(
        assistant.say("chat-1", "I finished math"),
        assistant.say("chat-2", "I finished the bank"),
    );

    assert!(matches!(question, Reply::SelectableList { .. }));
    assert!(completion.body().contains("'Call the bank'"), "{completion:?}");
    assert_eq!(
        assistant.service.state(&ConversationId::new("chat-2")),
        ConversationState::Idle
    );
    assert_eq!(
        assistant.service.state(&ConversationId::new("chat-1")),
        ConversationState::AwaitingDisambiguation
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_offset_decides_what_tomorrow_means(conversation: ConversationId) {
    // 09:30 UTC on Wednesday is 23:30 on Tuesday at UTC-10.
    let assistant =
        Assistant::with_config(AssistantConfig::default().with_utc_offset_minutes(-600));

    let added = assistant
        .say(conversation.as_str(), "I need to call mom tomorrow")
        .await;

    assert_eq!(
        added.body(),
        "Task added: Call mom (due 2026-10-21 23:59, Medium)"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_completed_policy_keeps_the_record(conversation: ConversationId) {
    let assistant = Assistant::with_config(
        AssistantConfig::default().with_completion_policy(CompletionPolicy::MarkCompleted),
    );
    let bank = assistant.seed("Call the bank", end_of(10, 23)).await;

    assistant
        .say(conversation.as_str(), "I finished the bank")
        .await;

    let stored = assistant
        .repository
        .find_by_id(bank.id())
        .await
        .expect("lookup succeeds")
        .expect("task kept");
    assert_eq!(stored.status(), TaskStatus::Completed);
}
